//! Routine list screen

use egui::Ui;

use crate::frontend::{AppAction, Screen};
use crate::store::WorkoutStore;

/// Screen-local state for the routine list
#[derive(Default)]
pub struct RoutinesState {
    /// Name for a routine being created
    pub new_name: String,
    /// Routine pending delete confirmation
    pub confirm_delete: Option<u64>,
}

/// Render the routine list screen
pub fn show_routines(
    ui: &mut Ui,
    store: &dyn WorkoutStore,
    state: &mut RoutinesState,
) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.heading("Routines");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.text_edit_singleline(&mut state.new_name);
        let can_create = !state.new_name.trim().is_empty();
        if ui
            .add_enabled(can_create, egui::Button::new("New routine"))
            .clicked()
        {
            actions.push(AppAction::CreateRoutine {
                name: state.new_name.trim().to_string(),
            });
            state.new_name.clear();
        }
    });

    ui.add_space(8.0);

    let routines = store.list_routines().unwrap_or_default();
    if routines.is_empty() {
        ui.label("No routines yet. Create one to get started.");
        return actions;
    }

    for routine in &routines {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.strong(&routine.name);
                if routine.is_default {
                    ui.label(egui::RichText::new("default").weak().italics());
                }
            });
            if let Some(ref notes) = routine.notes {
                ui.label(egui::RichText::new(notes).weak());
            }
            ui.horizontal(|ui| {
                if ui.button("Start").clicked() {
                    actions.push(AppAction::StartWorkout {
                        routine_id: routine.id,
                    });
                }
                if ui.button("Edit").clicked() {
                    actions.push(AppAction::Navigate(Screen::RoutineEditor(routine.id)));
                }
                if ui.button("Duplicate").clicked() {
                    actions.push(AppAction::DuplicateRoutine(routine.id));
                }
                if !routine.is_default && ui.button("Set default").clicked() {
                    actions.push(AppAction::SetDefaultRoutine(routine.id));
                }

                if state.confirm_delete == Some(routine.id) {
                    if ui.button("Confirm delete").clicked() {
                        actions.push(AppAction::DeleteRoutine(routine.id));
                        state.confirm_delete = None;
                    }
                    if ui.button("Cancel").clicked() {
                        state.confirm_delete = None;
                    }
                } else if ui.button("Delete").clicked() {
                    state.confirm_delete = Some(routine.id);
                }
            });
        });
        ui.add_space(4.0);
    }

    actions
}
