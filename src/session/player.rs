//! Workout session player state machine
//!
//! [`SessionPlayer`] drives a user through a routine in real time:
//! sequencing exercises and sets, running the countdown rest timer,
//! inserting hydration breaks, resuming after interruption, and producing
//! the terminal summary.
//!
//! The player is single-threaded and purely reactive: every operation is an
//! atomic, synchronous state transition triggered by a discrete external
//! event (user action or a once-per-second timer tick). It performs no I/O,
//! holds no clock, and raises no errors of its own. Persistence failures
//! are the caller's responsibility, and a set must be durably recorded
//! before [`SessionPlayer::complete_set`] is called.

use chrono::{DateTime, Utc};

use crate::session::types::{ResumeOutcome, WorkoutPhase, WorkoutSummary};
use crate::types::{ExerciseSlot, WorkoutSet};

/// Default number of completed exercises between hydration breaks
pub const DEFAULT_HYDRATION_INTERVAL: u32 = 2;

/// Workout session player
///
/// Owns all session-execution state. Exactly one active session per player
/// instance; [`SessionPlayer::reset_workout`] returns it to the idle
/// baseline so a stale session can never bleed into the next one.
#[derive(Debug, Clone)]
pub struct SessionPlayer {
    /// Session identifier (None while idle)
    session_id: Option<u64>,
    /// Current phase
    phase: WorkoutPhase,
    /// Index of the exercise slot in progress. Valid while the phase is
    /// working/resting/hydrating; equals the sequence length in summary.
    current_item_index: usize,
    /// Ordinal of the set in progress within the current exercise (1-based)
    current_set_number: u32,
    /// Ordered exercise slots, immutable for the session
    slots: Vec<ExerciseSlot>,
    /// Accumulated completed-set records (append-only)
    completed_sets: Vec<WorkoutSet>,
    /// Remaining rest time in seconds
    rest_remaining: u32,
    /// Total rest time for the current rest period in seconds
    rest_total: u32,
    /// Whether the rest countdown is paused
    paused: bool,
    /// Weight staged for the next set attempt, in kg
    current_weight: f64,
    /// Completed exercises between hydration breaks (0 = disabled)
    hydration_interval: u32,
}

impl Default for SessionPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionPlayer {
    /// Create a new idle player
    pub fn new() -> Self {
        Self {
            session_id: None,
            phase: WorkoutPhase::Idle,
            current_item_index: 0,
            current_set_number: 1,
            slots: Vec::new(),
            completed_sets: Vec::new(),
            rest_remaining: 0,
            rest_total: 0,
            paused: false,
            current_weight: 0.0,
            hydration_interval: DEFAULT_HYDRATION_INTERVAL,
        }
    }

    // ==================== Accessors ====================

    /// Get the current phase
    pub fn phase(&self) -> WorkoutPhase {
        self.phase
    }

    /// Get the active session id
    pub fn session_id(&self) -> Option<u64> {
        self.session_id
    }

    /// Get the index of the exercise slot in progress
    pub fn current_item_index(&self) -> usize {
        self.current_item_index
    }

    /// Get the ordinal of the set in progress (1-based)
    pub fn current_set_number(&self) -> u32 {
        self.current_set_number
    }

    /// Get the ordered exercise slots
    pub fn slots(&self) -> &[ExerciseSlot] {
        &self.slots
    }

    /// Get the accumulated completed-set records
    pub fn completed_sets(&self) -> &[WorkoutSet] {
        &self.completed_sets
    }

    /// Get the remaining rest time in seconds
    pub fn rest_remaining(&self) -> u32 {
        self.rest_remaining
    }

    /// Get the total rest time for the current rest period
    pub fn rest_total(&self) -> u32 {
        self.rest_total
    }

    /// Check if the rest countdown is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get the weight staged for the next set attempt
    pub fn current_weight(&self) -> f64 {
        self.current_weight
    }

    /// Get the slot in progress, if any
    pub fn current_slot(&self) -> Option<&ExerciseSlot> {
        self.slots.get(self.current_item_index)
    }

    /// Get the slot after the one in progress, if any
    pub fn next_slot(&self) -> Option<&ExerciseSlot> {
        self.slots.get(self.current_item_index + 1)
    }

    /// Count completed sets recorded for a given exercise slot
    pub fn sets_for_slot(&self, slot_id: u64) -> u32 {
        self.completed_sets
            .iter()
            .filter(|s| s.routine_item_id == slot_id)
            .count() as u32
    }

    /// Check if the exercise in progress has reached its target set count
    pub fn current_slot_complete(&self) -> bool {
        self.current_slot()
            .map(|slot| self.sets_for_slot(slot.id) >= slot.target_sets)
            .unwrap_or(false)
    }

    /// Rest progress as a fraction remaining, clamped to 0.0..=1.0.
    ///
    /// `adjust_rest_time` extends the total whenever the remaining time
    /// would exceed it, so this never reads above 1.0.
    pub fn rest_progress(&self) -> f32 {
        if self.rest_total == 0 {
            return 0.0;
        }
        (self.rest_remaining as f32 / self.rest_total as f32).clamp(0.0, 1.0)
    }

    /// Configure the hydration cadence (completed exercises between breaks,
    /// 0 disables hydration entirely)
    pub fn set_hydration_interval(&mut self, interval: u32) {
        self.hydration_interval = interval;
    }

    /// Build the terminal summary from the current state
    pub fn summary(&self, started_at: DateTime<Utc>, now: DateTime<Utc>) -> WorkoutSummary {
        WorkoutSummary::build(&self.slots, &self.completed_sets, started_at, now)
    }

    // ==================== Transitions ====================

    /// Initialize a session, computing the resume point from prior sets.
    ///
    /// With no prior sets the player starts at exercise 0, set 1. Otherwise
    /// the set with the most recent completion timestamp locates the
    /// exercise in progress: if that slot already has its target set count
    /// recorded, the player resumes at the next exercise (set 1), else at
    /// the same exercise with set number `recorded + 1`. A resume index at
    /// or past the end of the sequence lands directly in the summary.
    ///
    /// If the most recent set references a slot that is not in the
    /// sequence, the player recovers by starting at exercise 0, set 1 and
    /// reports [`ResumeOutcome::FallbackToStart`] so the caller can log it.
    pub fn init_workout(
        &mut self,
        session_id: u64,
        slots: Vec<ExerciseSlot>,
        existing_sets: Vec<WorkoutSet>,
    ) -> ResumeOutcome {
        let mut start_index = 0usize;
        let mut start_set_number = 1u32;

        let mut outcome = ResumeOutcome::Fresh;

        if !existing_sets.is_empty() {
            let last_set = existing_sets
                .iter()
                .max_by_key(|s| s.completed_at)
                .cloned();

            match last_set.and_then(|last| {
                slots
                    .iter()
                    .position(|slot| slot.id == last.routine_item_id)
            }) {
                Some(item_index) => {
                    let slot = &slots[item_index];
                    let recorded = existing_sets
                        .iter()
                        .filter(|s| s.routine_item_id == slot.id)
                        .count() as u32;

                    if recorded >= slot.target_sets {
                        start_index = item_index + 1;
                        start_set_number = 1;
                        outcome = ResumeOutcome::RolledOver;
                    } else {
                        start_index = item_index;
                        start_set_number = recorded + 1;
                        outcome = ResumeOutcome::Resumed;
                    }
                }
                None => {
                    // Data inconsistency; recover at the start rather than
                    // failing the whole session.
                    outcome = ResumeOutcome::FallbackToStart;
                }
            }
        }

        let phase = if start_index >= slots.len() {
            if outcome == ResumeOutcome::RolledOver {
                outcome = ResumeOutcome::AlreadyComplete;
            }
            start_index = slots.len();
            WorkoutPhase::Summary
        } else {
            WorkoutPhase::Working
        };

        self.current_weight = slots
            .get(start_index)
            .and_then(|slot| slot.default_weight)
            .unwrap_or(0.0);
        self.session_id = Some(session_id);
        self.slots = slots;
        self.completed_sets = existing_sets;
        self.current_item_index = start_index;
        self.current_set_number = start_set_number;
        self.phase = phase;
        self.paused = false;
        self.rest_remaining = 0;
        self.rest_total = 0;

        outcome
    }

    /// Record a confirmed completed set and advance the state machine.
    ///
    /// The caller must have durably persisted the record first; a failed
    /// persistence request must leave the player untouched. Exactly one
    /// phase transition occurs per accepted call. Returns `false` (leaving
    /// the state unchanged) if the player is not working or the record does
    /// not reference the exercise in progress.
    pub fn complete_set(&mut self, record: WorkoutSet) -> bool {
        if self.phase != WorkoutPhase::Working {
            return false;
        }
        let Some(slot) = self.current_slot().cloned() else {
            return false;
        };
        if record.routine_item_id != slot.id {
            return false;
        }

        self.completed_sets.push(record);

        if self.sets_for_slot(slot.id) >= slot.target_sets {
            if self.current_item_index + 1 >= self.slots.len() {
                // Workout complete; skip the final rest entirely.
                self.current_item_index = self.slots.len();
                self.phase = WorkoutPhase::Summary;
            } else {
                // Rest before the next exercise. The rest is keyed to the
                // exercise just finished; the index advances when rest ends.
                self.start_rest(slot.rest_seconds);
            }
        } else {
            self.current_set_number += 1;
            self.start_rest(slot.rest_seconds);
        }

        true
    }

    /// Advance the rest countdown by one second, floored at zero.
    ///
    /// Driven by an external once-per-second trigger; a no-op while paused
    /// or already at zero.
    pub fn tick_rest(&mut self) {
        if self.paused {
            return;
        }
        self.rest_remaining = self.rest_remaining.saturating_sub(1);
    }

    /// Add `delta_seconds` (signed) to the remaining rest time, floored at
    /// zero. The total is extended to match whenever the new remaining time
    /// exceeds it, so the progress ring never exceeds 100%.
    pub fn adjust_rest_time(&mut self, delta_seconds: i32) {
        let new_remaining = (self.rest_remaining as i64 + delta_seconds as i64).max(0) as u32;
        self.rest_remaining = new_remaining;
        self.rest_total = self.rest_total.max(new_remaining);
    }

    /// Flip the pause flag; while paused, `tick_rest` is inert
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// End the rest period, whether it expired naturally or was skipped.
    ///
    /// Defers to the same exercise-complete check either way: a complete
    /// exercise advances (possibly through a hydration break), an
    /// incomplete one returns to working for its next set.
    pub fn skip_rest(&mut self) {
        if self.phase != WorkoutPhase::Resting {
            return;
        }

        if self.current_slot_complete() {
            if self.hydration_due() {
                // Keep the index on the finished exercise; dismissing the
                // break performs the deferred advance.
                self.phase = WorkoutPhase::Hydrating;
                self.rest_remaining = 0;
                self.rest_total = 0;
                self.paused = false;
            } else {
                self.next_exercise();
            }
        } else {
            self.phase = WorkoutPhase::Working;
            self.rest_remaining = 0;
            self.rest_total = 0;
            self.paused = false;
        }
    }

    /// Dismiss the hydration break and advance to the next exercise
    pub fn dismiss_hydration(&mut self) {
        if self.phase != WorkoutPhase::Hydrating {
            return;
        }
        self.next_exercise();
    }

    /// Advance to the next exercise slot, or to the summary past the end.
    ///
    /// The staged weight follows the new slot's default, falling back to
    /// the previously staged weight when the slot defines none.
    pub fn next_exercise(&mut self) {
        let next_index = self.current_item_index + 1;

        if next_index >= self.slots.len() {
            self.current_item_index = self.slots.len();
            self.phase = WorkoutPhase::Summary;
        } else {
            let default_weight = self.slots[next_index].default_weight;
            self.current_item_index = next_index;
            self.current_set_number = 1;
            self.current_weight = default_weight.unwrap_or(self.current_weight);
            self.phase = WorkoutPhase::Working;
            self.rest_remaining = 0;
            self.rest_total = 0;
            self.paused = false;
        }
    }

    /// Overwrite the staged weight; pure state update, no transition
    pub fn set_current_weight(&mut self, weight: f64) {
        self.current_weight = weight;
    }

    /// Clear all state back to the idle baseline.
    ///
    /// Used on finish/abandon and teardown; unconditional and idempotent.
    pub fn reset_workout(&mut self) {
        *self = Self::new();
    }

    // ==================== Internals ====================

    /// Seed the rest countdown and enter the resting phase
    fn start_rest(&mut self, seconds: u32) {
        self.rest_remaining = seconds;
        self.rest_total = seconds;
        self.phase = WorkoutPhase::Resting;
    }

    /// Check whether a hydration break is due after the exercise in
    /// progress: cadence enabled, exercise complete, another exercise
    /// follows, and the finished exercise's 1-based ordinal is a multiple
    /// of the cadence.
    fn hydration_due(&self) -> bool {
        if self.hydration_interval == 0 {
            return false;
        }
        if self.current_item_index + 1 >= self.slots.len() {
            return false;
        }
        let finished_ordinal = self.current_item_index as u32 + 1;
        finished_ordinal % self.hydration_interval == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn slot(id: u64, target_sets: u32, rest_seconds: u32, weight: Option<f64>) -> ExerciseSlot {
        ExerciseSlot {
            id,
            position: id as u32,
            machine_name: format!("Machine {id}"),
            target_sets,
            target_reps: 10,
            rest_seconds,
            default_weight: weight,
        }
    }

    fn recorded_set(item_id: u64, set_number: u32, age_secs: i64) -> WorkoutSet {
        WorkoutSet {
            id: item_id * 100 + set_number as u64,
            session_id: 1,
            routine_item_id: item_id,
            set_number,
            target_reps: 10,
            actual_reps: None,
            weight: 50.0,
            completed_at: Utc::now() - Duration::seconds(age_secs),
        }
    }

    fn three_slot_player() -> SessionPlayer {
        let mut player = SessionPlayer::new();
        player.init_workout(
            1,
            vec![
                slot(10, 3, 60, Some(40.0)),
                slot(20, 2, 90, None),
                slot(30, 3, 45, Some(80.0)),
            ],
            Vec::new(),
        );
        player
    }

    #[test]
    fn test_fresh_start() {
        let mut player = SessionPlayer::new();
        let outcome = player.init_workout(1, vec![slot(10, 3, 60, Some(40.0))], Vec::new());

        assert_eq!(outcome, ResumeOutcome::Fresh);
        assert_eq!(player.phase(), WorkoutPhase::Working);
        assert_eq!(player.current_item_index(), 0);
        assert_eq!(player.current_set_number(), 1);
        assert_eq!(player.current_weight(), 40.0);
        assert_eq!(player.session_id(), Some(1));
    }

    #[test]
    fn test_resume_mid_exercise() {
        // Slot 10 has 2 of 3 sets recorded; resume there at set 3.
        let mut player = SessionPlayer::new();
        let outcome = player.init_workout(
            1,
            vec![slot(10, 3, 60, None), slot(20, 2, 90, None)],
            vec![recorded_set(10, 1, 120), recorded_set(10, 2, 60)],
        );

        assert_eq!(outcome, ResumeOutcome::Resumed);
        assert_eq!(player.phase(), WorkoutPhase::Working);
        assert_eq!(player.current_item_index(), 0);
        assert_eq!(player.current_set_number(), 3);
    }

    #[test]
    fn test_resume_rolls_over_to_next_exercise() {
        let mut player = SessionPlayer::new();
        let outcome = player.init_workout(
            1,
            vec![slot(10, 2, 60, None), slot(20, 2, 90, Some(25.0))],
            vec![recorded_set(10, 1, 120), recorded_set(10, 2, 60)],
        );

        assert_eq!(outcome, ResumeOutcome::RolledOver);
        assert_eq!(player.phase(), WorkoutPhase::Working);
        assert_eq!(player.current_item_index(), 1);
        assert_eq!(player.current_set_number(), 1);
        assert_eq!(player.current_weight(), 25.0);
    }

    #[test]
    fn test_resume_targets_most_recent_set() {
        // Sets exist for both slots; the newest belongs to slot 20.
        let mut player = SessionPlayer::new();
        let outcome = player.init_workout(
            1,
            vec![slot(10, 3, 60, None), slot(20, 2, 90, None)],
            vec![
                recorded_set(10, 1, 300),
                recorded_set(10, 2, 240),
                recorded_set(10, 3, 180),
                recorded_set(20, 1, 30),
            ],
        );

        assert_eq!(outcome, ResumeOutcome::Resumed);
        assert_eq!(player.current_item_index(), 1);
        assert_eq!(player.current_set_number(), 2);
    }

    #[test]
    fn test_resume_past_end_lands_in_summary() {
        let mut player = SessionPlayer::new();
        let outcome = player.init_workout(
            1,
            vec![slot(10, 1, 60, None)],
            vec![recorded_set(10, 1, 10)],
        );

        assert_eq!(outcome, ResumeOutcome::AlreadyComplete);
        assert_eq!(player.phase(), WorkoutPhase::Summary);
        assert_eq!(player.current_item_index(), player.slots().len());
    }

    #[test]
    fn test_resume_unknown_slot_falls_back_to_start() {
        let mut player = SessionPlayer::new();
        let outcome = player.init_workout(
            1,
            vec![slot(10, 3, 60, Some(40.0))],
            vec![recorded_set(99, 1, 10)],
        );

        assert_eq!(outcome, ResumeOutcome::FallbackToStart);
        assert!(outcome.is_fallback());
        assert_eq!(player.phase(), WorkoutPhase::Working);
        assert_eq!(player.current_item_index(), 0);
        assert_eq!(player.current_set_number(), 1);
    }

    #[test]
    fn test_complete_set_starts_rest_for_same_exercise() {
        let mut player = three_slot_player();

        assert!(player.complete_set(recorded_set(10, 1, 0)));
        assert_eq!(player.phase(), WorkoutPhase::Resting);
        assert_eq!(player.current_item_index(), 0);
        assert_eq!(player.current_set_number(), 2);
        assert_eq!(player.rest_remaining(), 60);
        assert_eq!(player.rest_total(), 60);
    }

    #[test]
    fn test_complete_final_set_rests_with_index_unchanged() {
        let mut player = three_slot_player();
        // Hydration off so the rest ends in a plain advance.
        player.set_hydration_interval(0);

        for n in 1..=3 {
            assert!(player.complete_set(recorded_set(10, n, 0)));
        }
        // Exercise complete, another follows: resting on the finished
        // exercise's rest duration, index not yet advanced.
        assert_eq!(player.phase(), WorkoutPhase::Resting);
        assert_eq!(player.current_item_index(), 0);
        assert_eq!(player.rest_remaining(), 60);

        player.skip_rest();
        assert_eq!(player.phase(), WorkoutPhase::Working);
        assert_eq!(player.current_item_index(), 1);
        assert_eq!(player.current_set_number(), 1);
    }

    #[test]
    fn test_complete_last_exercise_goes_straight_to_summary() {
        let mut player = SessionPlayer::new();
        player.init_workout(1, vec![slot(10, 1, 60, None)], Vec::new());

        assert!(player.complete_set(recorded_set(10, 1, 0)));
        assert_eq!(player.phase(), WorkoutPhase::Summary);
        assert_eq!(player.current_item_index(), player.slots().len());
        // No rest before the summary.
        assert_eq!(player.rest_remaining(), 0);
    }

    #[test]
    fn test_complete_set_rejected_outside_working_phase() {
        let mut player = three_slot_player();
        player.complete_set(recorded_set(10, 1, 0));
        assert_eq!(player.phase(), WorkoutPhase::Resting);

        // A second completion while resting must not double-advance.
        assert!(!player.complete_set(recorded_set(10, 2, 0)));
        assert_eq!(player.completed_sets().len(), 1);
        assert_eq!(player.current_set_number(), 2);
    }

    #[test]
    fn test_complete_set_rejected_for_wrong_slot() {
        let mut player = three_slot_player();
        assert!(!player.complete_set(recorded_set(20, 1, 0)));
        assert_eq!(player.completed_sets().len(), 0);
        assert_eq!(player.phase(), WorkoutPhase::Working);
    }

    #[test]
    fn test_complete_set_on_idle_player_is_noop() {
        let mut player = SessionPlayer::new();
        assert!(!player.complete_set(recorded_set(10, 1, 0)));
        assert_eq!(player.phase(), WorkoutPhase::Idle);
    }

    #[test]
    fn test_tick_rest_counts_down_and_floors_at_zero() {
        let mut player = three_slot_player();
        player.complete_set(recorded_set(10, 1, 0));
        assert_eq!(player.rest_remaining(), 60);

        for _ in 0..60 {
            player.tick_rest();
        }
        assert_eq!(player.rest_remaining(), 0);

        // Repeated ticks at zero remain at zero.
        player.tick_rest();
        player.tick_rest();
        assert_eq!(player.rest_remaining(), 0);
    }

    #[test]
    fn test_pause_gates_ticks() {
        let mut player = three_slot_player();
        player.complete_set(recorded_set(10, 1, 0));

        player.toggle_pause();
        assert!(player.is_paused());
        player.tick_rest();
        player.tick_rest();
        assert_eq!(player.rest_remaining(), 60);

        player.toggle_pause();
        assert!(!player.is_paused());
        player.tick_rest();
        assert_eq!(player.rest_remaining(), 59);
    }

    #[test]
    fn test_adjust_rest_extends_total() {
        let mut player = three_slot_player();
        player.complete_set(recorded_set(10, 1, 0));
        assert_eq!(player.rest_total(), 60);

        player.adjust_rest_time(15);
        assert_eq!(player.rest_remaining(), 75);
        assert_eq!(player.rest_total(), 75);
        assert!(player.rest_progress() <= 1.0);

        player.adjust_rest_time(-15);
        assert_eq!(player.rest_remaining(), 60);
        // Total stays extended once grown.
        assert_eq!(player.rest_total(), 75);
    }

    #[test]
    fn test_adjust_rest_floors_at_zero() {
        let mut player = three_slot_player();
        player.complete_set(recorded_set(10, 1, 0));

        player.adjust_rest_time(-1000);
        assert_eq!(player.rest_remaining(), 0);
    }

    #[test]
    fn test_skip_rest_mid_exercise_returns_to_working() {
        let mut player = three_slot_player();
        player.complete_set(recorded_set(10, 1, 0));
        player.toggle_pause();

        player.skip_rest();
        assert_eq!(player.phase(), WorkoutPhase::Working);
        assert_eq!(player.current_item_index(), 0);
        assert_eq!(player.current_set_number(), 2);
        assert_eq!(player.rest_remaining(), 0);
        assert!(!player.is_paused());
    }

    #[test]
    fn test_skip_symmetry_with_natural_expiry() {
        // Skipping early and letting the timer expire then continuing must
        // land in the same phase and index.
        let setup = || {
            let mut p = three_slot_player();
            p.set_hydration_interval(0);
            for n in 1..=3 {
                p.complete_set(recorded_set(10, n, 0));
            }
            p
        };

        let mut skipped = setup();
        skipped.skip_rest();

        let mut expired = setup();
        for _ in 0..expired.rest_total() {
            expired.tick_rest();
        }
        expired.skip_rest();

        assert_eq!(skipped.phase(), expired.phase());
        assert_eq!(skipped.current_item_index(), expired.current_item_index());
        assert_eq!(skipped.current_set_number(), expired.current_set_number());
    }

    #[test]
    fn test_skip_rest_outside_resting_is_noop() {
        let mut player = three_slot_player();
        player.skip_rest();
        assert_eq!(player.phase(), WorkoutPhase::Working);
        assert_eq!(player.current_item_index(), 0);
    }

    #[test]
    fn test_hydration_break_every_second_exercise() {
        let mut player = three_slot_player();
        player.set_hydration_interval(2);

        // Finish exercise 1 (ordinal 1, not a multiple of 2): plain advance.
        for n in 1..=3 {
            player.complete_set(recorded_set(10, n, 0));
        }
        player.skip_rest();
        assert_eq!(player.phase(), WorkoutPhase::Working);
        assert_eq!(player.current_item_index(), 1);

        // Finish exercise 2 (ordinal 2): hydration break before exercise 3,
        // index still on the finished exercise.
        for n in 1..=2 {
            player.complete_set(recorded_set(20, n, 0));
        }
        player.skip_rest();
        assert_eq!(player.phase(), WorkoutPhase::Hydrating);
        assert_eq!(player.current_item_index(), 1);
        assert_eq!(player.next_slot().map(|s| s.id), Some(30));

        player.dismiss_hydration();
        assert_eq!(player.phase(), WorkoutPhase::Working);
        assert_eq!(player.current_item_index(), 2);
        assert_eq!(player.current_set_number(), 1);
        assert_eq!(player.current_weight(), 80.0);
    }

    #[test]
    fn test_hydration_never_precedes_summary() {
        let mut player = SessionPlayer::new();
        player.init_workout(
            1,
            vec![slot(10, 1, 60, None), slot(20, 1, 60, None)],
            Vec::new(),
        );
        player.set_hydration_interval(2);

        player.complete_set(recorded_set(10, 1, 0));
        player.skip_rest();
        assert_eq!(player.phase(), WorkoutPhase::Working);

        // The final exercise completes straight into the summary; the
        // cadence (ordinal 2) must not interpose a break.
        player.complete_set(recorded_set(20, 1, 0));
        assert_eq!(player.phase(), WorkoutPhase::Summary);
    }

    #[test]
    fn test_hydration_disabled() {
        let mut player = three_slot_player();
        player.set_hydration_interval(0);

        for n in 1..=3 {
            player.complete_set(recorded_set(10, n, 0));
        }
        player.skip_rest();
        for n in 1..=2 {
            player.complete_set(recorded_set(20, n, 0));
        }
        player.skip_rest();
        assert_eq!(player.phase(), WorkoutPhase::Working);
        assert_eq!(player.current_item_index(), 2);
    }

    #[test]
    fn test_dismiss_hydration_outside_phase_is_noop() {
        let mut player = three_slot_player();
        player.dismiss_hydration();
        assert_eq!(player.phase(), WorkoutPhase::Working);
        assert_eq!(player.current_item_index(), 0);
    }

    #[test]
    fn test_weight_sticky_across_slots_without_default() {
        let mut player = three_slot_player();
        player.set_hydration_interval(0);
        player.set_current_weight(45.0);

        for n in 1..=3 {
            player.complete_set(recorded_set(10, n, 0));
        }
        player.skip_rest();
        // Slot 20 has no default weight; the staged weight carries over.
        assert_eq!(player.current_item_index(), 1);
        assert_eq!(player.current_weight(), 45.0);
    }

    #[test]
    fn test_reset_is_idempotent_from_any_phase() {
        let baseline = SessionPlayer::new();

        let mut from_working = three_slot_player();
        from_working.reset_workout();

        let mut from_resting = three_slot_player();
        from_resting.complete_set(recorded_set(10, 1, 0));
        from_resting.toggle_pause();
        from_resting.reset_workout();

        for player in [&from_working, &from_resting] {
            assert_eq!(player.phase(), baseline.phase());
            assert_eq!(player.session_id(), None);
            assert_eq!(player.current_item_index(), 0);
            assert_eq!(player.current_set_number(), 1);
            assert!(player.slots().is_empty());
            assert!(player.completed_sets().is_empty());
            assert_eq!(player.rest_remaining(), 0);
            assert_eq!(player.rest_total(), 0);
            assert!(!player.is_paused());
            assert_eq!(player.current_weight(), 0.0);
        }

        // Resetting twice yields the same baseline again.
        from_resting.reset_workout();
        assert_eq!(from_resting.phase(), WorkoutPhase::Idle);
    }

    #[test]
    fn test_rest_progress_bounds() {
        let mut player = three_slot_player();
        assert_eq!(player.rest_progress(), 0.0);

        player.complete_set(recorded_set(10, 1, 0));
        assert_eq!(player.rest_progress(), 1.0);

        for _ in 0..30 {
            player.tick_rest();
        }
        let progress = player.rest_progress();
        assert!(progress > 0.0 && progress < 1.0);
    }

    proptest! {
        /// Remaining time never goes negative and exactly `total` unpaused
        /// ticks drive it to zero.
        #[test]
        fn prop_tick_monotonic(total in 1u32..600, extra in 0u32..100) {
            let mut player = SessionPlayer::new();
            player.init_workout(1, vec![slot(10, 2, total, None)], Vec::new());
            player.complete_set(recorded_set(10, 1, 0));

            for _ in 0..total {
                player.tick_rest();
            }
            prop_assert_eq!(player.rest_remaining(), 0);

            for _ in 0..extra {
                player.tick_rest();
            }
            prop_assert_eq!(player.rest_remaining(), 0);
        }

        /// Adjustments keep remaining within 0..=total in both directions.
        #[test]
        fn prop_adjust_keeps_invariants(
            total in 1u32..600,
            deltas in proptest::collection::vec(-120i32..120, 0..20),
        ) {
            let mut player = SessionPlayer::new();
            player.init_workout(1, vec![slot(10, 2, total, None)], Vec::new());
            player.complete_set(recorded_set(10, 1, 0));

            for delta in deltas {
                player.adjust_rest_time(delta);
                prop_assert!(player.rest_remaining() <= player.rest_total());
                prop_assert!(player.rest_progress() <= 1.0);
            }
        }
    }
}
