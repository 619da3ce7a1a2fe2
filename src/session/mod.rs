//! Workout session execution
//!
//! This module contains the session player state machine that drives a
//! user through a routine in real time, plus the phase and summary types
//! it produces for the presentation layer.

pub mod player;
pub mod types;

pub use player::{SessionPlayer, DEFAULT_HYDRATION_INTERVAL};
pub use types::{ExerciseSummary, ResumeOutcome, WorkoutPhase, WorkoutSummary};
