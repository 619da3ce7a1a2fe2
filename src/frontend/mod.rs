//! Frontend module for the egui UI
//!
//! This module provides the main UI using eframe/egui.
//!
//! # Architecture
//!
//! The app owns the store, the session player, and the current screen.
//! Screens are plain render functions that return [`AppAction`]s; the
//! app applies them, so every store mutation and player transition that
//! needs persistence runs through [`LiftLogApp::handle_action`]. Pure
//! player operations (timer adjustments, weight changes, dismissing the
//! hydration reminder) act on the player inside the screen.
//!
//! # Main Types
//!
//! - [`LiftLogApp`] - Main application state implementing [`eframe::App`]
//! - [`Screen`] - Which screen is visible
//! - [`AppAction`] - Deferred UI actions applied after rendering

pub mod screens;
pub mod widgets;

pub use screens::*;
pub use widgets::*;

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::config::AppState;
use crate::error::LiftLogError;
use crate::session::SessionPlayer;
use crate::store::{NewSet, RoutineItemSpec, WorkoutStore};
use crate::types::{MachineCategory, SessionStatus, WorkoutSession};

/// Which screen is currently visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Routines,
    RoutineEditor(u64),
    Workout,
    History,
}

/// Actions emitted by screens and applied by the app
#[derive(Debug)]
pub enum AppAction {
    Navigate(Screen),
    StartWorkout { routine_id: u64 },
    ResumeWorkout { session_id: u64 },
    DiscardSession { session_id: u64 },
    CompleteSet { actual_reps: Option<u32> },
    FinishWorkout,
    AbandonWorkout,
    CreateRoutine { name: String },
    RenameRoutine {
        routine_id: u64,
        name: String,
        notes: Option<String>,
    },
    DeleteRoutine(u64),
    DuplicateRoutine(u64),
    SetDefaultRoutine(u64),
    AddMachine {
        name: String,
        category: MachineCategory,
    },
    AddRoutineItem {
        routine_id: u64,
        spec: RoutineItemSpec,
    },
    UpdateRoutineItem { item_id: u64, spec: RoutineItemSpec },
    RemoveRoutineItem { item_id: u64 },
    MoveRoutineItem {
        routine_id: u64,
        ordered_ids: Vec<u64>,
    },
}

/// Metadata for the session currently loaded in the player
#[derive(Debug, Clone)]
pub struct ActiveWorkout {
    pub session_id: u64,
    pub routine_name: String,
    pub started_at: DateTime<Utc>,
}

/// Main application state
pub struct LiftLogApp {
    store: Box<dyn WorkoutStore>,
    app_state: AppState,
    screen: Screen,
    player: SessionPlayer,
    active: Option<ActiveWorkout>,
    last_error: Option<String>,
    /// Anchor for the once-per-second rest ticks
    last_tick: Instant,

    routines_state: RoutinesState,
    editor_state: RoutineEditorState,
    workout_state: WorkoutScreenState,
}

impl LiftLogApp {
    /// Create a new application instance
    pub fn new(store: Box<dyn WorkoutStore>, app_state: AppState) -> Self {
        Self {
            store,
            app_state,
            screen: Screen::Home,
            player: SessionPlayer::new(),
            active: None,
            last_error: None,
            last_tick: Instant::now(),
            routines_state: RoutinesState::default(),
            editor_state: RoutineEditorState::default(),
            workout_state: WorkoutScreenState::default(),
        }
    }

    /// Currently visible screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The session player
    pub fn player(&self) -> &SessionPlayer {
        &self.player
    }

    /// Metadata for the active session, if a workout is loaded
    pub fn active_workout(&self) -> Option<&ActiveWorkout> {
        self.active.as_ref()
    }

    /// Most recent error shown in the banner
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn report_error(&mut self, context: &str, e: LiftLogError) {
        tracing::error!("{}: {}", context, e);
        self.last_error = Some(format!("{}: {}", context, e));
    }

    /// Load a session into the player and switch to the workout screen
    fn begin_session(&mut self, session: WorkoutSession) {
        let bundle = match self.store.fetch_session_bundle(session.id) {
            Ok(bundle) => bundle,
            Err(e) => {
                self.report_error("Failed to load session", e);
                return;
            }
        };

        self.player
            .set_hydration_interval(self.app_state.player.hydration_interval);
        let outcome = self
            .player
            .init_workout(session.id, bundle.slots, bundle.sets);
        if outcome.is_fallback() {
            tracing::warn!(
                session_id = session.id,
                "Recorded sets reference an unknown exercise; restarting from the first"
            );
        }
        tracing::info!(
            session_id = session.id,
            routine = %bundle.routine_name,
            ?outcome,
            phase = self.player.phase().display_name(),
            "Workout loaded"
        );

        self.active = Some(ActiveWorkout {
            session_id: session.id,
            routine_name: bundle.routine_name,
            started_at: bundle.session.started_at,
        });
        self.workout_state = WorkoutScreenState::default();
        self.last_tick = Instant::now();
        self.screen = Screen::Workout;
    }

    /// Persist the current set, then advance the player.
    ///
    /// The player is only advanced once the record is durably stored, so
    /// a failed write leaves the set ready to confirm again.
    fn complete_current_set(&mut self, actual_reps: Option<u32>) {
        let Some(session_id) = self.active.as_ref().map(|a| a.session_id) else {
            return;
        };
        let Some(slot) = self.player.current_slot().cloned() else {
            return;
        };

        let new_set = NewSet {
            routine_item_id: slot.id,
            set_number: self.player.current_set_number(),
            target_reps: slot.target_reps,
            actual_reps,
            weight: self.player.current_weight(),
        };
        match self.store.record_set(session_id, new_set) {
            Ok(record) => {
                if !self.player.complete_set(record) {
                    tracing::warn!("Set recorded but the player rejected it");
                }
            }
            Err(e) => self.report_error("Failed to save set", e),
        }
    }

    /// Close out the active session and return to the home screen
    fn finish_active_session(&mut self, status: SessionStatus) {
        let Some(session_id) = self.active.as_ref().map(|a| a.session_id) else {
            return;
        };
        match self.store.finish_session(session_id, status) {
            Ok(session) => {
                tracing::info!(session_id, status = %session.status, "Workout finished");
                self.player.reset_workout();
                self.active = None;
                self.screen = Screen::Home;
            }
            Err(e) => self.report_error("Failed to finish workout", e),
        }
    }

    /// Apply an action emitted by a screen
    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Navigate(screen) => {
                self.screen = screen;
            }
            AppAction::StartWorkout { routine_id } => {
                if self.active.is_some() {
                    // One session at a time; jump back to the running one.
                    self.screen = Screen::Workout;
                    return;
                }
                match self.store.start_session(routine_id) {
                    Ok(session) => self.begin_session(session),
                    Err(e) => self.report_error("Failed to start workout", e),
                }
            }
            AppAction::ResumeWorkout { session_id } => {
                match self.store.fetch_session_bundle(session_id) {
                    Ok(bundle) => self.begin_session(bundle.session),
                    Err(e) => self.report_error("Failed to resume workout", e),
                }
            }
            AppAction::DiscardSession { session_id } => {
                if let Err(e) = self
                    .store
                    .finish_session(session_id, SessionStatus::Abandoned)
                {
                    self.report_error("Failed to discard session", e);
                }
            }
            AppAction::CompleteSet { actual_reps } => {
                self.complete_current_set(actual_reps);
            }
            AppAction::FinishWorkout => {
                self.finish_active_session(SessionStatus::Completed);
            }
            AppAction::AbandonWorkout => {
                self.finish_active_session(SessionStatus::Abandoned);
            }
            AppAction::CreateRoutine { name } => {
                match self.store.create_routine(&name, None) {
                    Ok(routine) => self.screen = Screen::RoutineEditor(routine.id),
                    Err(e) => self.report_error("Failed to create routine", e),
                }
            }
            AppAction::RenameRoutine {
                routine_id,
                name,
                notes,
            } => {
                if let Err(e) = self
                    .store
                    .update_routine(routine_id, &name, notes.as_deref())
                {
                    self.report_error("Failed to rename routine", e);
                }
            }
            AppAction::DeleteRoutine(routine_id) => {
                if let Err(e) = self.store.delete_routine(routine_id) {
                    self.report_error("Failed to delete routine", e);
                }
            }
            AppAction::DuplicateRoutine(routine_id) => {
                if let Err(e) = self.store.duplicate_routine(routine_id) {
                    self.report_error("Failed to duplicate routine", e);
                }
            }
            AppAction::SetDefaultRoutine(routine_id) => {
                if let Err(e) = self.store.set_default_routine(routine_id) {
                    self.report_error("Failed to set default routine", e);
                }
            }
            AppAction::AddMachine { name, category } => {
                if let Err(e) = self.store.add_machine(&name, category) {
                    self.report_error("Failed to add machine", e);
                }
            }
            AppAction::AddRoutineItem { routine_id, spec } => {
                if let Err(e) = self.store.add_routine_item(routine_id, spec) {
                    self.report_error("Failed to add exercise", e);
                }
            }
            AppAction::UpdateRoutineItem { item_id, spec } => {
                if let Err(e) = self.store.update_routine_item(item_id, spec) {
                    self.report_error("Failed to update exercise", e);
                }
            }
            AppAction::RemoveRoutineItem { item_id } => {
                if let Err(e) = self.store.remove_routine_item(item_id) {
                    self.report_error("Failed to remove exercise", e);
                }
            }
            AppAction::MoveRoutineItem {
                routine_id,
                ordered_ids,
            } => {
                if let Err(e) = self
                    .store
                    .reorder_routine_items(routine_id, &ordered_ids)
                {
                    self.report_error("Failed to reorder exercises", e);
                }
            }
        }
    }

    /// Fire rest ticks for every full second elapsed since the anchor.
    ///
    /// Outside an unpaused rest the anchor is pinned to now, so a rest
    /// that starts later begins with a full first second.
    fn advance_timer(&mut self) {
        if self.player.phase().is_resting() && !self.player.is_paused() {
            while self.last_tick.elapsed() >= Duration::from_secs(1) {
                self.player.tick_rest();
                self.last_tick += Duration::from_secs(1);
            }
        } else {
            self.last_tick = Instant::now();
        }
    }

    fn show_nav(&mut self, ctx: &egui::Context) {
        let mut target = None;
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (label, screen) in [
                    ("Home", Screen::Home),
                    ("Routines", Screen::Routines),
                    ("History", Screen::History),
                ] {
                    if ui
                        .selectable_label(self.screen == screen, label)
                        .clicked()
                    {
                        target = Some(screen);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.active.is_some() {
                        if ui
                            .selectable_label(self.screen == Screen::Workout, "Workout")
                            .clicked()
                        {
                            target = Some(Screen::Workout);
                        }
                        ui.add(PhaseBadge::new(self.player.phase()));
                    }
                });
            });
        });
        if let Some(screen) = target {
            self.screen = screen;
        }
    }

    fn show_error_banner(&mut self, ctx: &egui::Context) {
        if self.last_error.is_none() {
            return;
        }
        let mut dismiss = false;
        egui::TopBottomPanel::bottom("error_banner").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(ref error) = self.last_error {
                    ui.colored_label(egui::Color32::LIGHT_RED, error);
                }
                if ui.small_button("Dismiss").clicked() {
                    dismiss = true;
                }
            });
        });
        if dismiss {
            self.last_error = None;
        }
    }
}

impl eframe::App for LiftLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance_timer();
        if self.player.phase().is_resting() && !self.player.is_paused() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        self.show_nav(ctx);
        self.show_error_banner(ctx);

        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.screen {
                Screen::Home => {
                    actions = show_home(ui, self.store.as_ref());
                }
                Screen::Routines => {
                    actions = show_routines(ui, self.store.as_ref(), &mut self.routines_state);
                }
                Screen::RoutineEditor(routine_id) => {
                    actions = show_routine_editor(
                        ui,
                        self.store.as_ref(),
                        routine_id,
                        &mut self.editor_state,
                    );
                }
                Screen::History => {
                    actions = show_history(
                        ui,
                        self.store.as_ref(),
                        self.app_state.ui_preferences.history_limit,
                    );
                }
                Screen::Workout => match self.active.clone() {
                    Some(active) => {
                        actions = show_workout(
                            ui,
                            &mut self.player,
                            &active.routine_name,
                            active.started_at,
                            &self.app_state.player,
                            &mut self.workout_state,
                        );
                    }
                    None => {
                        ui.label("No workout in progress.");
                        if ui.button("Go home").clicked() {
                            actions.push(AppAction::Navigate(Screen::Home));
                        }
                    }
                },
            });
        });

        for action in actions {
            self.handle_action(action);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Sets are persisted as they are confirmed, so an in-progress
        // session survives exit and is offered for resume on the home
        // screen next launch.
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }
}
