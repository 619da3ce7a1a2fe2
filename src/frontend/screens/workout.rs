//! Workout player screen
//!
//! Renders one sub-screen per player phase: the working set card, the
//! rest countdown, the hydration reminder, and the terminal summary.
//! Timer and weight adjustments act on the player directly; anything
//! that must be persisted first (completing a set, finishing the
//! session) is returned as an action for the app to run against the
//! store.

use chrono::Utc;
use egui::Ui;

use crate::config::PlayerSettings;
use crate::frontend::widgets::{format_seconds, RestRing, SetDots, ValueStepper};
use crate::frontend::AppAction;
use crate::session::{SessionPlayer, WorkoutPhase};

/// Screen-local state for the workout player
#[derive(Default)]
pub struct WorkoutScreenState {
    /// Actual reps logged for the set being confirmed, if tracked
    pub actual_reps: Option<u32>,
}

/// Render the workout screen for the active session
pub fn show_workout(
    ui: &mut Ui,
    player: &mut SessionPlayer,
    routine_name: &str,
    started_at: chrono::DateTime<Utc>,
    settings: &PlayerSettings,
    state: &mut WorkoutScreenState,
) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.heading(routine_name);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if !player.phase().is_summary() && ui.button("End workout").clicked() {
                actions.push(AppAction::AbandonWorkout);
            }
        });
    });
    ui.add_space(8.0);

    match player.phase() {
        WorkoutPhase::Idle => {
            ui.label("No workout loaded.");
        }
        WorkoutPhase::Working => {
            show_working(ui, player, settings, state, &mut actions);
        }
        WorkoutPhase::Resting => {
            show_resting(ui, player, settings);
        }
        WorkoutPhase::Hydrating => {
            show_hydrating(ui, player);
        }
        WorkoutPhase::Summary => {
            show_summary(ui, player, started_at, &mut actions);
        }
    }

    actions
}

fn show_working(
    ui: &mut Ui,
    player: &mut SessionPlayer,
    settings: &PlayerSettings,
    state: &mut WorkoutScreenState,
    actions: &mut Vec<AppAction>,
) {
    let Some(slot) = player.current_slot().cloned() else {
        ui.label("No exercise in progress.");
        return;
    };

    let exercise_number = player.current_item_index() + 1;
    ui.label(format!(
        "Exercise {} of {}",
        exercise_number,
        player.slots().len()
    ));
    ui.heading(&slot.machine_name);
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label(format!(
            "Set {} of {}",
            player.current_set_number(),
            slot.target_sets
        ));
        ui.add(SetDots::new(player.sets_for_slot(slot.id), slot.target_sets));
    });
    ui.label(format!("Target: {} reps", slot.target_reps));
    ui.add_space(8.0);

    let mut weight = player.current_weight();
    let stepper = ValueStepper::new("Weight", settings.weight_increment).with_suffix("kg");
    if stepper.show(ui, &mut weight) {
        player.set_current_weight(weight);
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let mut track = state.actual_reps.is_some();
        if ui.checkbox(&mut track, "Log actual reps").changed() {
            state.actual_reps = track.then_some(slot.target_reps);
        }
        if let Some(ref mut reps) = state.actual_reps {
            if ui.button("−").clicked() {
                *reps = reps.saturating_sub(1);
            }
            ui.strong(reps.to_string());
            if ui.button("+").clicked() {
                *reps += 1;
            }
        }
    });

    ui.add_space(12.0);
    if ui
        .add_sized([200.0, 40.0], egui::Button::new("Complete set"))
        .clicked()
    {
        actions.push(AppAction::CompleteSet {
            actual_reps: state.actual_reps.take(),
        });
    }
}

fn show_resting(ui: &mut Ui, player: &mut SessionPlayer, settings: &PlayerSettings) {
    ui.label("Rest");

    // While resting the index still points at the exercise just worked,
    // so the upcoming exercise depends on whether that slot is done.
    let up_next = if player.current_slot_complete() {
        player.next_slot()
    } else {
        player.current_slot()
    };
    if let Some(slot) = up_next {
        ui.label(format!("Up next: {}", slot.machine_name));
    }

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.add(
            RestRing::new(player.rest_progress(), player.rest_remaining())
                .paused(player.is_paused()),
        );
    });
    ui.add_space(8.0);

    let step = settings.rest_adjust_step_seconds;
    ui.horizontal(|ui| {
        if ui.button(format!("−{}", format_seconds(step))).clicked() {
            player.adjust_rest_time(-(step as i32));
        }
        if ui
            .button(if player.is_paused() { "Resume" } else { "Pause" })
            .clicked()
        {
            player.toggle_pause();
        }
        if ui.button(format!("+{}", format_seconds(step))).clicked() {
            player.adjust_rest_time(step as i32);
        }
        if ui.button("Skip").clicked() {
            player.skip_rest();
        }
    });
}

fn show_hydrating(ui: &mut Ui, player: &mut SessionPlayer) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading("Hydration break");
        ui.label("Take a moment to drink some water.");
        if let Some(slot) = player.next_slot() {
            ui.label(format!("Up next: {}", slot.machine_name));
        }
        ui.add_space(12.0);
        if ui
            .add_sized([200.0, 40.0], egui::Button::new("Continue"))
            .clicked()
        {
            player.dismiss_hydration();
        }
    });
}

fn show_summary(
    ui: &mut Ui,
    player: &SessionPlayer,
    started_at: chrono::DateTime<Utc>,
    actions: &mut Vec<AppAction>,
) {
    let summary = player.summary(started_at, Utc::now());

    ui.heading("Workout complete");
    ui.add_space(8.0);
    ui.label(format!(
        "{} sets, {:.1} kg total, {} min",
        summary.total_sets, summary.total_weight, summary.duration_minutes
    ));
    ui.add_space(8.0);

    egui::Grid::new("summary_grid").striped(true).show(ui, |ui| {
        ui.strong("Exercise");
        ui.strong("Sets");
        ui.strong("Weights");
        ui.end_row();

        for exercise in &summary.exercises {
            ui.label(&exercise.machine_name);
            ui.label(format!(
                "{} / {}",
                exercise.sets_completed, exercise.target_sets
            ));
            let weights = exercise
                .weights
                .iter()
                .map(|w| format!("{:.1}", w))
                .collect::<Vec<_>>()
                .join(", ");
            ui.label(weights);
            ui.end_row();
        }
    });

    ui.add_space(12.0);
    if ui
        .add_sized([200.0, 40.0], egui::Button::new("Finish"))
        .clicked()
    {
        actions.push(AppAction::FinishWorkout);
    }
}
