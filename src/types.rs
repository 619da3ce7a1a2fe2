//! Core data types for LiftLog-RS
//!
//! This module contains the fundamental data structures used throughout
//! the application for representing machines, routines, and workouts.
//!
//! # Main Types
//!
//! - [`Machine`] - An exercise machine with a body-area category
//! - [`Routine`] - A saved, named ordered list of exercises
//! - [`RoutineItem`] - One entry in a routine (machine + targets + rest)
//! - [`ExerciseSlot`] - A routine item joined with its machine, as consumed
//!   by an active session; immutable for the session's duration
//! - [`WorkoutSet`] - Durable record of one performed set within a session
//! - [`WorkoutSession`] - One execution attempt of a routine
//!
//! # Ordering
//!
//! A routine's items carry an explicit `position`; the ordered slot sequence
//! handed to the session player defines traversal order and is never
//! re-sorted by the player.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body-area category for an exercise machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MachineCategory {
    /// Upper-body machines (chest press, lat pulldown, ...)
    #[default]
    Upper,
    /// Lower-body machines (leg press, leg curl, ...)
    Lower,
    /// Core machines (ab crunch, back extension, ...)
    Core,
    /// Cardio equipment (treadmill, rower, ...)
    Cardio,
}

impl MachineCategory {
    /// Get all categories in display order
    pub fn all() -> &'static [MachineCategory] {
        &[
            MachineCategory::Upper,
            MachineCategory::Lower,
            MachineCategory::Core,
            MachineCategory::Cardio,
        ]
    }

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            MachineCategory::Upper => "Upper Body",
            MachineCategory::Lower => "Lower Body",
            MachineCategory::Core => "Core",
            MachineCategory::Cardio => "Cardio",
        }
    }
}

impl std::fmt::Display for MachineCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An exercise machine available in the gym
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    /// Unique identifier
    pub id: u64,
    /// Human-readable name (e.g. "Chest Press")
    pub name: String,
    /// Body-area category
    pub category: MachineCategory,
}

impl Machine {
    /// Create a new machine (id 0 until assigned by the store)
    pub fn new(name: impl Into<String>, category: MachineCategory) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category,
        }
    }
}

/// A saved, named ordered list of exercises
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routine {
    /// Unique identifier
    pub id: u64,
    /// Routine name
    pub name: String,
    /// Optional free-form notes
    pub notes: Option<String>,
    /// Whether this is the quick-start default routine
    pub is_default: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Routine {
    /// Create a new routine (id 0 until assigned by the store)
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            notes: None,
            is_default: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// One entry in a routine's ordered exercise list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineItem {
    /// Unique identifier
    pub id: u64,
    /// Owning routine
    pub routine_id: u64,
    /// Machine to use
    pub machine_id: u64,
    /// Position within the routine (0-based, contiguous)
    pub position: u32,
    /// Target set count
    pub sets: u32,
    /// Target rep count per set
    pub reps: u32,
    /// Rest duration between sets, in seconds
    pub rest_seconds: u32,
    /// Default weight to stage when the exercise starts
    pub default_weight: Option<f64>,
}

/// A routine item joined with its machine, as consumed by an active session.
///
/// The ordered slot sequence defines traversal order for the session player
/// and is immutable for the duration of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSlot {
    /// Routine-item identifier (what completed sets reference)
    pub id: u64,
    /// Position within the routine
    pub position: u32,
    /// Display name of the machine
    pub machine_name: String,
    /// Target set count
    pub target_sets: u32,
    /// Target rep count per set
    pub target_reps: u32,
    /// Rest duration between sets, in seconds
    pub rest_seconds: u32,
    /// Default weight to stage when the exercise starts
    pub default_weight: Option<f64>,
}

impl ExerciseSlot {
    /// Build a slot from a routine item and its machine's display name
    pub fn from_item(item: &RoutineItem, machine_name: impl Into<String>) -> Self {
        Self {
            id: item.id,
            position: item.position,
            machine_name: machine_name.into(),
            target_sets: item.sets,
            target_reps: item.reps,
            rest_seconds: item.rest_seconds,
            default_weight: item.default_weight,
        }
    }
}

/// Status of a workout session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Session is being executed
    #[default]
    InProgress,
    /// Session finished normally
    Completed,
    /// User exited before finishing
    Abandoned,
}

impl SessionStatus {
    /// Check if the session is still active
    pub fn is_in_progress(&self) -> bool {
        matches!(self, SessionStatus::InProgress)
    }

    /// Check if the session reached a terminal status
    pub fn is_finished(&self) -> bool {
        !self.is_in_progress()
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::InProgress => write!(f, "In Progress"),
            SessionStatus::Completed => write!(f, "Completed"),
            SessionStatus::Abandoned => write!(f, "Abandoned"),
        }
    }
}

/// One execution attempt of a routine, from start to finish/abandon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Unique identifier
    pub id: u64,
    /// Routine being executed
    pub routine_id: u64,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// When the session finished (None while in progress)
    pub ended_at: Option<DateTime<Utc>>,
    /// Current status
    pub status: SessionStatus,
}

/// Durable record of one performed set within a session.
///
/// Created exactly once per successfully recorded set; append-only within a
/// session; the player never mutates or removes these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Unique identifier (assigned by the store)
    pub id: u64,
    /// Owning session
    pub session_id: u64,
    /// Exercise slot (routine item) this set belongs to
    pub routine_item_id: u64,
    /// Set number within that exercise (1-based)
    pub set_number: u32,
    /// Target reps for this set
    pub target_reps: u32,
    /// Reps actually performed, if tracked
    pub actual_reps: Option<u32>,
    /// Weight used, in kg
    pub weight: f64,
    /// Completion timestamp (assigned by the store)
    pub completed_at: DateTime<Utc>,
}
