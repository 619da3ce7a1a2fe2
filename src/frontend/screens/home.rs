//! Home screen with quick start and the latest workout card

use egui::Ui;

use crate::frontend::{AppAction, Screen};
use crate::store::WorkoutStore;

/// Render the home screen
pub fn show_home(ui: &mut Ui, store: &dyn WorkoutStore) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.heading("LiftLog");
    ui.add_space(8.0);

    // An interrupted session takes priority over starting a new one.
    if let Ok(Some(session)) = store.in_progress_session() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label("You have a workout in progress.");
            ui.label(
                egui::RichText::new(format!(
                    "Started {}",
                    session.started_at.format("%Y-%m-%d %H:%M")
                ))
                .weak(),
            );
            ui.horizontal(|ui| {
                if ui.button("Resume workout").clicked() {
                    actions.push(AppAction::ResumeWorkout {
                        session_id: session.id,
                    });
                }
                if ui.button("Discard").clicked() {
                    actions.push(AppAction::DiscardSession {
                        session_id: session.id,
                    });
                }
            });
        });
        ui.add_space(8.0);
    }

    let routines = store.list_routines().unwrap_or_default();
    match routines.iter().find(|r| r.is_default) {
        Some(default) => {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label("Default routine");
                ui.strong(&default.name);
                if ui.button("Start workout").clicked() {
                    actions.push(AppAction::StartWorkout {
                        routine_id: default.id,
                    });
                }
            });
        }
        None => {
            ui.label("No default routine set.");
            if ui.button("Manage routines").clicked() {
                actions.push(AppAction::Navigate(Screen::Routines));
            }
        }
    }

    ui.add_space(8.0);

    if let Ok(Some(latest)) = store.latest_completed_session() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label("Last workout");
            ui.strong(&latest.routine_name);
            ui.label(format!(
                "{} sets, {:.1} kg total, {} min",
                latest.total_sets, latest.total_weight, latest.duration_minutes
            ));
            ui.label(
                egui::RichText::new(
                    latest.session.started_at.format("%Y-%m-%d %H:%M").to_string(),
                )
                .weak(),
            );
        });
    }

    actions
}
