//! Workout history screen

use egui::Ui;

use crate::frontend::AppAction;
use crate::store::WorkoutStore;

/// Render the history screen
pub fn show_history(ui: &mut Ui, store: &dyn WorkoutStore, limit: usize) -> Vec<AppAction> {
    let actions = Vec::new();

    ui.heading("History");
    ui.add_space(8.0);

    let entries = store.history(limit).unwrap_or_default();
    if entries.is_empty() {
        ui.label("No completed workouts yet.");
        return actions;
    }

    egui::Grid::new("history_grid").striped(true).show(ui, |ui| {
        ui.strong("Date");
        ui.strong("Routine");
        ui.strong("Sets");
        ui.strong("Total weight");
        ui.strong("Duration");
        ui.end_row();

        for entry in &entries {
            ui.label(entry.session.started_at.format("%Y-%m-%d %H:%M").to_string());
            ui.label(&entry.routine_name);
            ui.label(entry.total_sets.to_string());
            ui.label(format!("{:.1} kg", entry.total_weight));
            ui.label(format!("{} min", entry.duration_minutes));
            ui.end_row();
        }
    });

    actions
}
