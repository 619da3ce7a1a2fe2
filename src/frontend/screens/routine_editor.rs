//! Routine editor screen
//!
//! Edits flow straight through to the store: every stepper press or
//! reorder emits an action that persists immediately, so there is no
//! separate save step.

use egui::Ui;

use crate::frontend::{AppAction, Screen};
use crate::store::{RoutineItemDetail, RoutineItemSpec, WorkoutStore};
use crate::types::MachineCategory;

/// Screen-local state for the routine editor
pub struct RoutineEditorState {
    /// Machine chosen for the next added item
    pub selected_machine_id: Option<u64>,
    /// Name buffer while renaming the routine
    pub name_edit: Option<String>,
    /// Name for a machine being added to the catalog
    pub new_machine_name: String,
    /// Category for a machine being added to the catalog
    pub new_machine_category: MachineCategory,
}

impl Default for RoutineEditorState {
    fn default() -> Self {
        Self {
            selected_machine_id: None,
            name_edit: None,
            new_machine_name: String::new(),
            new_machine_category: MachineCategory::Upper,
        }
    }
}

/// Render the routine editor for one routine
pub fn show_routine_editor(
    ui: &mut Ui,
    store: &dyn WorkoutStore,
    routine_id: u64,
    state: &mut RoutineEditorState,
) -> Vec<AppAction> {
    let mut actions = Vec::new();

    let detail = match store.get_routine(routine_id) {
        Ok(detail) => detail,
        Err(e) => {
            ui.label(format!("Routine unavailable: {}", e));
            if ui.button("Back to routines").clicked() {
                actions.push(AppAction::Navigate(Screen::Routines));
            }
            return actions;
        }
    };

    ui.horizontal(|ui| {
        if ui.button("< Routines").clicked() {
            actions.push(AppAction::Navigate(Screen::Routines));
        }
        match state.name_edit {
            Some(ref mut name) => {
                ui.text_edit_singleline(name);
                if ui.button("Save").clicked() {
                    actions.push(AppAction::RenameRoutine {
                        routine_id,
                        name: name.trim().to_string(),
                        notes: detail.routine.notes.clone(),
                    });
                    state.name_edit = None;
                }
            }
            None => {
                ui.heading(&detail.routine.name);
                if ui.small_button("Rename").clicked() {
                    state.name_edit = Some(detail.routine.name.clone());
                }
            }
        }
    });

    ui.add_space(8.0);
    ui.separator();

    if detail.items.is_empty() {
        ui.label("No exercises yet. Add one below.");
    }

    let item_count = detail.items.len();
    for (index, entry) in detail.items.iter().enumerate() {
        show_item_row(ui, routine_id, entry, index, item_count, &detail.items, &mut actions);
        ui.add_space(4.0);
    }

    ui.separator();
    ui.add_space(4.0);
    show_add_item(ui, store, routine_id, state, &mut actions);

    actions
}

fn show_item_row(
    ui: &mut Ui,
    routine_id: u64,
    entry: &RoutineItemDetail,
    index: usize,
    item_count: usize,
    items: &[RoutineItemDetail],
    actions: &mut Vec<AppAction>,
) {
    let item = &entry.item;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong(&entry.machine.name);
            ui.label(
                egui::RichText::new(entry.machine.category.display_name()).weak(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✕").clicked() {
                    actions.push(AppAction::RemoveRoutineItem { item_id: item.id });
                }
                if index + 1 < item_count && ui.button("▼").clicked() {
                    actions.push(AppAction::MoveRoutineItem {
                        routine_id,
                        ordered_ids: swapped_ids(items, index, index + 1),
                    });
                }
                if index > 0 && ui.button("▲").clicked() {
                    actions.push(AppAction::MoveRoutineItem {
                        routine_id,
                        ordered_ids: swapped_ids(items, index, index - 1),
                    });
                }
            });
        });

        ui.horizontal(|ui| {
            let mut spec = RoutineItemSpec {
                machine_id: item.machine_id,
                sets: item.sets,
                reps: item.reps,
                rest_seconds: item.rest_seconds,
                default_weight: item.default_weight,
            };
            let mut changed = false;

            changed |= count_stepper(ui, "Sets", &mut spec.sets, 1, 1);
            changed |= count_stepper(ui, "Reps", &mut spec.reps, 1, 1);
            changed |= count_stepper(ui, "Rest", &mut spec.rest_seconds, 15, 0);

            let mut weight = spec.default_weight.unwrap_or(0.0);
            ui.label("Weight:");
            if ui.button("−").clicked() {
                weight = (weight - 2.5).max(0.0);
                changed = true;
            }
            ui.strong(format!("{:.1} kg", weight));
            if ui.button("+").clicked() {
                weight += 2.5;
                changed = true;
            }
            spec.default_weight = Some(weight);

            if changed {
                actions.push(AppAction::UpdateRoutineItem {
                    item_id: item.id,
                    spec,
                });
            }
        });
    });
}

/// A -/+ stepper for integer targets
fn count_stepper(ui: &mut Ui, label: &str, value: &mut u32, step: u32, min: u32) -> bool {
    let mut changed = false;
    ui.label(format!("{}:", label));
    if ui.button("−").clicked() {
        let lowered = value.saturating_sub(step).max(min);
        if lowered != *value {
            *value = lowered;
            changed = true;
        }
    }
    ui.strong(value.to_string());
    if ui.button("+").clicked() {
        *value += step;
        changed = true;
    }
    changed
}

fn swapped_ids(items: &[RoutineItemDetail], a: usize, b: usize) -> Vec<u64> {
    let mut ids: Vec<u64> = items.iter().map(|e| e.item.id).collect();
    ids.swap(a, b);
    ids
}

fn show_add_item(
    ui: &mut Ui,
    store: &dyn WorkoutStore,
    routine_id: u64,
    state: &mut RoutineEditorState,
    actions: &mut Vec<AppAction>,
) {
    let machines = store.list_machines().unwrap_or_default();

    ui.horizontal(|ui| {
        let selected_name = state
            .selected_machine_id
            .and_then(|id| machines.iter().find(|m| m.id == id))
            .map(|m| m.name.clone())
            .unwrap_or_else(|| "Pick a machine".to_string());

        egui::ComboBox::from_id_salt("add_item_machine")
            .selected_text(selected_name)
            .show_ui(ui, |ui| {
                for machine in &machines {
                    ui.selectable_value(
                        &mut state.selected_machine_id,
                        Some(machine.id),
                        format!("{} ({})", machine.name, machine.category.display_name()),
                    );
                }
            });

        if let Some(machine_id) = state.selected_machine_id {
            if ui.button("Add exercise").clicked() {
                actions.push(AppAction::AddRoutineItem {
                    routine_id,
                    spec: RoutineItemSpec {
                        machine_id,
                        sets: 3,
                        reps: 10,
                        rest_seconds: 60,
                        default_weight: None,
                    },
                });
            }
        }
    });

    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("New machine:");
        ui.text_edit_singleline(&mut state.new_machine_name);
        egui::ComboBox::from_id_salt("new_machine_category")
            .selected_text(state.new_machine_category.display_name())
            .show_ui(ui, |ui| {
                for &category in MachineCategory::all() {
                    ui.selectable_value(
                        &mut state.new_machine_category,
                        category,
                        category.display_name(),
                    );
                }
            });
        let can_add = !state.new_machine_name.trim().is_empty();
        if ui.add_enabled(can_add, egui::Button::new("Add")).clicked() {
            actions.push(AppAction::AddMachine {
                name: state.new_machine_name.trim().to_string(),
                category: state.new_machine_category,
            });
            state.new_machine_name.clear();
        }
    });
}
