//! Session phase and summary types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ExerciseSlot, WorkoutSet};

/// Macro-state of the workout session player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutPhase {
    /// No active session
    #[default]
    Idle,
    /// Performing a set
    Working,
    /// Rest countdown between sets or exercises
    Resting,
    /// Hydration break between exercises
    Hydrating,
    /// Workout finished, showing the terminal summary
    Summary,
}

impl WorkoutPhase {
    /// Check if a session is active (anything but idle)
    pub fn is_active(&self) -> bool {
        !matches!(self, WorkoutPhase::Idle)
    }

    /// Check if the player is in the working phase
    pub fn is_working(&self) -> bool {
        matches!(self, WorkoutPhase::Working)
    }

    /// Check if the player is in the resting phase
    pub fn is_resting(&self) -> bool {
        matches!(self, WorkoutPhase::Resting)
    }

    /// Check if the workout reached its terminal summary
    pub fn is_summary(&self) -> bool {
        matches!(self, WorkoutPhase::Summary)
    }

    /// Display name for the phase
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutPhase::Idle => "Idle",
            WorkoutPhase::Working => "Working",
            WorkoutPhase::Resting => "Resting",
            WorkoutPhase::Hydrating => "Hydrating",
            WorkoutPhase::Summary => "Summary",
        }
    }
}

/// How `init_workout` positioned the player within the routine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeOutcome {
    /// No prior sets; started at exercise 0, set 1
    Fresh,
    /// Resumed mid-exercise at the recorded count + 1
    Resumed,
    /// The last touched exercise was complete; rolled over to the next one
    RolledOver,
    /// Every exercise was already complete; went straight to the summary
    AlreadyComplete,
    /// The most recent set referenced an unknown exercise slot; recovered
    /// by restarting at exercise 0, set 1. The caller should log this.
    FallbackToStart,
}

impl ResumeOutcome {
    /// Check if this outcome indicates inconsistent resume data
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResumeOutcome::FallbackToStart)
    }
}

/// Per-exercise breakdown line in the terminal summary
#[derive(Debug, Clone)]
pub struct ExerciseSummary {
    /// Machine display name
    pub machine_name: String,
    /// Sets completed for this exercise
    pub sets_completed: u32,
    /// Target set count
    pub target_sets: u32,
    /// Weight used per completed set, in recording order
    pub weights: Vec<f64>,
}

/// Terminal summary of a finished workout
#[derive(Debug, Clone)]
pub struct WorkoutSummary {
    /// Total sets completed across all exercises
    pub total_sets: u32,
    /// Sum of weight across all completed sets, in kg
    pub total_weight: f64,
    /// Wall-clock duration in whole minutes
    pub duration_minutes: i64,
    /// One line per exercise slot, in traversal order
    pub exercises: Vec<ExerciseSummary>,
}

impl WorkoutSummary {
    /// Build a summary from the slot sequence and the completed sets.
    ///
    /// Slots with no completed sets still get a line (shown as 0 of N),
    /// matching the traversal order of the routine.
    pub fn build(
        slots: &[ExerciseSlot],
        sets: &[WorkoutSet],
        started_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        let exercises = slots
            .iter()
            .map(|slot| {
                let weights: Vec<f64> = sets
                    .iter()
                    .filter(|s| s.routine_item_id == slot.id)
                    .map(|s| s.weight)
                    .collect();
                ExerciseSummary {
                    machine_name: slot.machine_name.clone(),
                    sets_completed: weights.len() as u32,
                    target_sets: slot.target_sets,
                    weights,
                }
            })
            .collect();

        let duration_minutes = (now - started_at).num_minutes().max(0);

        Self {
            total_sets: sets.len() as u32,
            total_weight: sets.iter().map(|s| s.weight).sum(),
            duration_minutes,
            exercises,
        }
    }
}
