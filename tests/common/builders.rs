//! Test data builders for creating test objects

use chrono::{DateTime, TimeZone, Utc};
use liftlog_rs::types::{ExerciseSlot, WorkoutSet};

/// Builder for creating test exercise slots
pub struct SlotBuilder {
    id: u64,
    position: u32,
    machine_name: String,
    target_sets: u32,
    target_reps: u32,
    rest_seconds: u32,
    default_weight: Option<f64>,
}

impl SlotBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            position: 0,
            machine_name: format!("Machine {}", id),
            target_sets: 3,
            target_reps: 10,
            rest_seconds: 60,
            default_weight: None,
        }
    }

    pub fn position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }

    pub fn machine_name(mut self, name: &str) -> Self {
        self.machine_name = name.to_string();
        self
    }

    pub fn target_sets(mut self, target_sets: u32) -> Self {
        self.target_sets = target_sets;
        self
    }

    pub fn rest_seconds(mut self, rest_seconds: u32) -> Self {
        self.rest_seconds = rest_seconds;
        self
    }

    pub fn default_weight(mut self, weight: f64) -> Self {
        self.default_weight = Some(weight);
        self
    }

    pub fn build(self) -> ExerciseSlot {
        ExerciseSlot {
            id: self.id,
            position: self.position,
            machine_name: self.machine_name,
            target_sets: self.target_sets,
            target_reps: self.target_reps,
            rest_seconds: self.rest_seconds,
            default_weight: self.default_weight,
        }
    }
}

/// A deterministic timestamp `offset_seconds` past a fixed base
pub fn test_time(offset_seconds: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap() + chrono::Duration::seconds(offset_seconds)
}

/// Builder for creating recorded sets
pub struct SetBuilder {
    id: u64,
    session_id: u64,
    routine_item_id: u64,
    set_number: u32,
    weight: f64,
    completed_offset: i64,
}

impl SetBuilder {
    pub fn new(id: u64, routine_item_id: u64, set_number: u32) -> Self {
        Self {
            id,
            session_id: 1,
            routine_item_id,
            set_number,
            weight: 40.0,
            completed_offset: id as i64 * 60,
        }
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn completed_offset(mut self, seconds: i64) -> Self {
        self.completed_offset = seconds;
        self
    }

    pub fn build(self) -> WorkoutSet {
        WorkoutSet {
            id: self.id,
            session_id: self.session_id,
            routine_item_id: self.routine_item_id,
            set_number: self.set_number,
            target_reps: 10,
            actual_reps: None,
            weight: self.weight,
            completed_at: test_time(self.completed_offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_builder() {
        let slot = SlotBuilder::new(7)
            .machine_name("Leg Press")
            .target_sets(4)
            .default_weight(80.0)
            .build();

        assert_eq!(slot.id, 7);
        assert_eq!(slot.machine_name, "Leg Press");
        assert_eq!(slot.target_sets, 4);
        assert_eq!(slot.default_weight, Some(80.0));
    }

    #[test]
    fn test_set_builder_orders_by_offset() {
        let early = SetBuilder::new(1, 10, 1).completed_offset(0).build();
        let late = SetBuilder::new(2, 10, 2).completed_offset(90).build();
        assert!(late.completed_at > early.completed_at);
    }
}
