//! # LiftLog: a desktop workout tracker
//!
//! A gym workout tracker for machine-based routines. The heart of the
//! crate is the session player, a state machine that walks a routine
//! exercise by exercise and set by set, with a tick-driven rest timer,
//! an optional hydration reminder, and resume-after-interruption
//! support.
//!
//! ## Architecture
//!
//! - **Session**: The [`session::SessionPlayer`] state machine, pure and
//!   clock-free; the UI feeds it one tick per second while resting
//! - **Store**: The [`store::WorkoutStore`] trait over machines,
//!   routines, sessions, and sets, backed by a JSON document
//! - **Frontend**: eframe/egui screens driving the player and the store
//!
//! ## Configuration
//!
//! Application data lives in the platform-appropriate data directory
//! under `dev.liftlog.liftlog-rs`:
//!
//! - **Linux**: `~/.local/share/dev.liftlog.liftlog-rs/`
//! - **macOS**: `~/Library/Application Support/dev.liftlog.liftlog-rs/`
//! - **Windows**: `%APPDATA%\dev.liftlog.liftlog-rs\`
//!
//! ## Example
//!
//! ```ignore
//! use liftlog_rs::{config::AppState, frontend::LiftLogApp, store};
//!
//! fn main() -> eframe::Result<()> {
//!     let app_state = AppState::load_or_default();
//!     let workout_store = store::open_default().expect("store");
//!
//!     eframe::run_native(
//!         "LiftLog",
//!         eframe::NativeOptions::default(),
//!         Box::new(|_cc| {
//!             Ok(Box::new(LiftLogApp::new(Box::new(workout_store), app_state)))
//!         }),
//!     )
//! }
//! ```

pub mod config;
pub mod error;
pub mod frontend;
pub mod session;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::{AppState, PlayerSettings};
pub use error::{LiftLogError, Result};
pub use frontend::LiftLogApp;
pub use session::{SessionPlayer, WorkoutPhase, WorkoutSummary};
pub use store::{JsonStore, WorkoutStore};
pub use types::{ExerciseSlot, Machine, Routine, WorkoutSession, WorkoutSet};
