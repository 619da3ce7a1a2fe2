//! WorkoutStore trait for unified persistence access
//!
//! This module provides a common trait for all store implementations,
//! enabling both the file-backed JSON store and an in-memory mock store
//! for testing.

use crate::error::Result;
use crate::types::{
    ExerciseSlot, Machine, MachineCategory, Routine, RoutineItem, SessionStatus, WorkoutSession,
    WorkoutSet,
};

/// A routine item joined with its machine, for the routine editor
#[derive(Debug, Clone)]
pub struct RoutineItemDetail {
    /// The routine item
    pub item: RoutineItem,
    /// The machine it references
    pub machine: Machine,
}

/// A routine with its ordered items and machines
#[derive(Debug, Clone)]
pub struct RoutineDetail {
    /// The routine
    pub routine: Routine,
    /// Items ordered by position
    pub items: Vec<RoutineItemDetail>,
}

/// Everything the session player's caller needs to initialize a session:
/// the session record, its routine's display name, the ordered exercise
/// slots, and all completed sets already persisted for it.
#[derive(Debug, Clone)]
pub struct SessionBundle {
    /// The session record
    pub session: WorkoutSession,
    /// Display name of the routine being executed
    pub routine_name: String,
    /// Ordered exercise slots for the routine
    pub slots: Vec<ExerciseSlot>,
    /// Completed sets already persisted for this session
    pub sets: Vec<WorkoutSet>,
}

/// Parameters for creating or updating a routine item
#[derive(Debug, Clone)]
pub struct RoutineItemSpec {
    /// Machine to use
    pub machine_id: u64,
    /// Target set count
    pub sets: u32,
    /// Target rep count per set
    pub reps: u32,
    /// Rest duration between sets, in seconds
    pub rest_seconds: u32,
    /// Default weight to stage when the exercise starts
    pub default_weight: Option<f64>,
}

/// A new completed set to be durably recorded
#[derive(Debug, Clone)]
pub struct NewSet {
    /// Exercise slot (routine item) the set belongs to
    pub routine_item_id: u64,
    /// Set number within that exercise (1-based)
    pub set_number: u32,
    /// Target reps for this set
    pub target_reps: u32,
    /// Reps actually performed, if tracked
    pub actual_reps: Option<u32>,
    /// Weight used, in kg
    pub weight: f64,
}

/// One entry in the completed-workout history
#[derive(Debug, Clone)]
pub struct SessionHistoryEntry {
    /// The finished session
    pub session: WorkoutSession,
    /// Display name of the routine that was executed
    pub routine_name: String,
    /// Number of sets recorded in the session
    pub total_sets: u32,
    /// Sum of weight across all recorded sets, in kg
    pub total_weight: f64,
    /// Wall-clock duration in whole minutes
    pub duration_minutes: i64,
}

/// Persistence service for machines, routines, and workout sessions.
///
/// The session player never talks to the store directly; its caller fetches
/// the [`SessionBundle`], records sets through [`WorkoutStore::record_set`]
/// *before* forwarding them into the player, and finishes the session
/// exactly once when the player reaches its summary or the user exits.
pub trait WorkoutStore {
    // --- Machines ---

    /// List all machines, ordered by category then name
    fn list_machines(&self) -> Result<Vec<Machine>>;

    /// Add a machine to the catalog
    fn add_machine(&mut self, name: &str, category: MachineCategory) -> Result<Machine>;

    // --- Routines ---

    /// List all routines, default first, then by name
    fn list_routines(&self) -> Result<Vec<Routine>>;

    /// Get a routine with its items ordered by position
    fn get_routine(&self, routine_id: u64) -> Result<RoutineDetail>;

    /// Create a new, empty routine
    fn create_routine(&mut self, name: &str, notes: Option<&str>) -> Result<Routine>;

    /// Update a routine's name and notes
    fn update_routine(&mut self, routine_id: u64, name: &str, notes: Option<&str>) -> Result<()>;

    /// Delete a routine and its items
    fn delete_routine(&mut self, routine_id: u64) -> Result<()>;

    /// Duplicate a routine and its items; the copy is never the default
    fn duplicate_routine(&mut self, routine_id: u64) -> Result<Routine>;

    /// Mark a routine as the quick-start default, clearing any previous one
    fn set_default_routine(&mut self, routine_id: u64) -> Result<()>;

    // --- Routine items ---

    /// Append an item to a routine at the next position
    fn add_routine_item(&mut self, routine_id: u64, spec: RoutineItemSpec) -> Result<RoutineItem>;

    /// Update an existing item's targets
    fn update_routine_item(&mut self, item_id: u64, spec: RoutineItemSpec) -> Result<()>;

    /// Remove an item, compacting the remaining positions
    fn remove_routine_item(&mut self, item_id: u64) -> Result<()>;

    /// Reorder a routine's items to the given id order
    fn reorder_routine_items(&mut self, routine_id: u64, ordered_ids: &[u64]) -> Result<()>;

    // --- Sessions ---

    /// Start a new session for a routine; refuses routines with no items
    fn start_session(&mut self, routine_id: u64) -> Result<WorkoutSession>;

    /// Fetch the initialization bundle for a session
    fn fetch_session_bundle(&self, session_id: u64) -> Result<SessionBundle>;

    /// Durably record a completed set, assigning its id and timestamp.
    /// Refuses sessions that are not in progress.
    fn record_set(&mut self, session_id: u64, new_set: NewSet) -> Result<WorkoutSet>;

    /// Mark a session completed or abandoned, stamping its end time.
    /// Refuses sessions that already reached a terminal status.
    fn finish_session(&mut self, session_id: u64, status: SessionStatus)
        -> Result<WorkoutSession>;

    /// Get the most recently finished completed session, if any
    fn latest_completed_session(&self) -> Result<Option<SessionHistoryEntry>>;

    /// Get the most recent session still in progress, if any
    fn in_progress_session(&self) -> Result<Option<WorkoutSession>>;

    /// List completed sessions, newest first, up to `limit`
    fn history(&self, limit: usize) -> Result<Vec<SessionHistoryEntry>>;
}
