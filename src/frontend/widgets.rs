//! Custom widgets for the LiftLog UI
//!
//! This module provides reusable UI widgets for the application.
//!
//! # Widgets
//!
//! - [`ValueStepper`] - Numeric value with -/+ buttons for weights and reps
//! - [`RestRing`] - Circular countdown ring for the rest timer
//! - [`PhaseBadge`] - Colored label showing the current workout phase
//! - [`SetDots`] - Row of dots showing completed sets out of a target

use egui::{Color32, Response, Ui, Widget};

use crate::session::WorkoutPhase;

/// Format a second count as `m:ss`
pub fn format_seconds(total: u32) -> String {
    format!("{}:{:02}", total / 60, total % 60)
}

/// A numeric stepper with decrement and increment buttons
pub struct ValueStepper {
    label: String,
    step: f64,
    min: f64,
    precision: usize,
    suffix: Option<String>,
}

impl ValueStepper {
    /// Create a new stepper
    pub fn new(label: impl Into<String>, step: f64) -> Self {
        Self {
            label: label.into(),
            step,
            min: 0.0,
            precision: 1,
            suffix: None,
        }
    }

    /// Set the minimum allowed value
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Set the number of decimal places shown
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Append a unit suffix to the displayed value
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Show the stepper; returns true if the value changed
    pub fn show(&self, ui: &mut Ui, value: &mut f64) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label(format!("{}:", self.label));
            if ui.button("−").clicked() {
                *value = (*value - self.step).max(self.min);
                changed = true;
            }
            let text = if let Some(ref suffix) = self.suffix {
                format!("{:.*} {}", self.precision, *value, suffix)
            } else {
                format!("{:.*}", self.precision, *value)
            };
            ui.strong(text);
            if ui.button("+").clicked() {
                *value += self.step;
                changed = true;
            }
        });
        changed
    }
}

/// A circular countdown ring for the rest timer
pub struct RestRing {
    /// Remaining fraction, 0.0 (done) to 1.0 (full)
    fraction: f32,
    remaining_seconds: u32,
    diameter: f32,
    paused: bool,
}

impl RestRing {
    /// Create a ring from the remaining fraction (1.0 full, 0.0 done)
    /// and the remaining seconds shown in the center
    pub fn new(remaining_fraction: f32, remaining_seconds: u32) -> Self {
        Self {
            fraction: remaining_fraction.clamp(0.0, 1.0),
            remaining_seconds,
            diameter: 160.0,
            paused: false,
        }
    }

    /// Set the ring diameter in points
    pub fn with_diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Render the ring in the paused style
    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }
}

impl Widget for RestRing {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(self.diameter, self.diameter),
            egui::Sense::hover(),
        );

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            let radius = self.diameter / 2.0 - 6.0;
            let stroke_width = 8.0;

            painter.circle_stroke(
                center,
                radius,
                egui::Stroke::new(stroke_width, ui.visuals().faint_bg_color),
            );

            let color = if self.paused {
                Color32::GRAY
            } else {
                ui.visuals().selection.bg_fill
            };

            // Arc from 12 o'clock, clockwise, proportional to remaining time.
            let steps = 64;
            let sweep = self.fraction * std::f32::consts::TAU;
            let points: Vec<egui::Pos2> = (0..=steps)
                .map(|i| {
                    let angle = -std::f32::consts::FRAC_PI_2 + sweep * (i as f32 / steps as f32);
                    center + egui::vec2(angle.cos(), angle.sin()) * radius
                })
                .collect();
            if self.fraction > 0.0 {
                painter.add(egui::Shape::line(
                    points,
                    egui::Stroke::new(stroke_width, color),
                ));
            }

            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                format_seconds(self.remaining_seconds),
                egui::FontId::proportional(self.diameter / 5.0),
                ui.visuals().strong_text_color(),
            );
        }

        response
    }
}

/// A colored label for the current workout phase
pub struct PhaseBadge {
    phase: WorkoutPhase,
}

impl PhaseBadge {
    /// Create a badge for a phase
    pub fn new(phase: WorkoutPhase) -> Self {
        Self { phase }
    }

    fn color(&self) -> Color32 {
        match self.phase {
            WorkoutPhase::Idle => Color32::GRAY,
            WorkoutPhase::Working => Color32::from_rgb(80, 180, 80),
            WorkoutPhase::Resting => Color32::from_rgb(80, 140, 220),
            WorkoutPhase::Hydrating => Color32::from_rgb(90, 200, 220),
            WorkoutPhase::Summary => Color32::from_rgb(200, 170, 80),
        }
    }
}

impl Widget for PhaseBadge {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            ui.colored_label(self.color(), "●");
            ui.label(self.phase.display_name());
        })
        .response
    }
}

/// A row of dots showing completed sets out of a target
pub struct SetDots {
    completed: u32,
    target: u32,
}

impl SetDots {
    /// Create a dot row
    pub fn new(completed: u32, target: u32) -> Self {
        Self { completed, target }
    }
}

impl Widget for SetDots {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            for i in 0..self.target {
                if i < self.completed {
                    ui.colored_label(ui.visuals().selection.bg_fill, "●");
                } else {
                    ui.colored_label(ui.visuals().weak_text_color(), "○");
                }
            }
        })
        .response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0), "0:00");
        assert_eq!(format_seconds(59), "0:59");
        assert_eq!(format_seconds(60), "1:00");
        assert_eq!(format_seconds(125), "2:05");
    }

    #[test]
    fn test_rest_ring_fraction_clamped() {
        let ring = RestRing::new(1.5, 60);
        assert_eq!(ring.fraction, 1.0);

        let ring = RestRing::new(-0.5, 0);
        assert_eq!(ring.fraction, 0.0);

        let ring = RestRing::new(0.75, 45);
        assert!((ring.fraction - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn test_phase_badge_colors_differ() {
        let working = PhaseBadge::new(WorkoutPhase::Working).color();
        let resting = PhaseBadge::new(WorkoutPhase::Resting).color();
        assert_ne!(working, resting);
    }
}
