//! In-memory workout store for tests
//!
//! Wraps the same [`StoreData`] core as the file-backed store, so the
//! operation semantics are identical, just without the file.

use crate::error::Result;
use crate::store::json_store::StoreData;
use crate::store::traits::{
    NewSet, RoutineDetail, RoutineItemSpec, SessionBundle, SessionHistoryEntry, WorkoutStore,
};
use crate::types::{
    Machine, MachineCategory, Routine, RoutineItem, SessionStatus, WorkoutSession, WorkoutSet,
};

/// In-memory store with the seeded machine catalog
#[derive(Debug, Default)]
pub struct MockStore {
    data: StoreData,
}

impl MockStore {
    /// Create an empty store with the default machine catalog
    pub fn new() -> Self {
        let mut data = StoreData::default();
        data.seed_machines();
        Self { data }
    }

    /// Create a store with a single routine of `item_count` identical items,
    /// returning the store and the routine id
    pub fn with_routine(item_count: usize) -> Result<(Self, u64)> {
        let mut store = Self::new();
        let machines = store.data.list_machines();
        let routine = store.data.create_routine("Test Routine", None)?;
        for i in 0..item_count {
            let machine_id = machines[i % machines.len()].id;
            store.data.add_routine_item(
                routine.id,
                RoutineItemSpec {
                    machine_id,
                    sets: 3,
                    reps: 10,
                    rest_seconds: 60,
                    default_weight: Some(40.0),
                },
            )?;
        }
        Ok((store, routine.id))
    }
}

impl WorkoutStore for MockStore {
    fn list_machines(&self) -> Result<Vec<Machine>> {
        Ok(self.data.list_machines())
    }

    fn add_machine(&mut self, name: &str, category: MachineCategory) -> Result<Machine> {
        self.data.add_machine(name, category)
    }

    fn list_routines(&self) -> Result<Vec<Routine>> {
        Ok(self.data.list_routines())
    }

    fn get_routine(&self, routine_id: u64) -> Result<RoutineDetail> {
        self.data.get_routine(routine_id)
    }

    fn create_routine(&mut self, name: &str, notes: Option<&str>) -> Result<Routine> {
        self.data.create_routine(name, notes)
    }

    fn update_routine(&mut self, routine_id: u64, name: &str, notes: Option<&str>) -> Result<()> {
        self.data.update_routine(routine_id, name, notes)
    }

    fn delete_routine(&mut self, routine_id: u64) -> Result<()> {
        self.data.delete_routine(routine_id)
    }

    fn duplicate_routine(&mut self, routine_id: u64) -> Result<Routine> {
        self.data.duplicate_routine(routine_id)
    }

    fn set_default_routine(&mut self, routine_id: u64) -> Result<()> {
        self.data.set_default_routine(routine_id)
    }

    fn add_routine_item(&mut self, routine_id: u64, spec: RoutineItemSpec) -> Result<RoutineItem> {
        self.data.add_routine_item(routine_id, spec)
    }

    fn update_routine_item(&mut self, item_id: u64, spec: RoutineItemSpec) -> Result<()> {
        self.data.update_routine_item(item_id, spec)
    }

    fn remove_routine_item(&mut self, item_id: u64) -> Result<()> {
        self.data.remove_routine_item(item_id)
    }

    fn reorder_routine_items(&mut self, routine_id: u64, ordered_ids: &[u64]) -> Result<()> {
        self.data.reorder_routine_items(routine_id, ordered_ids)
    }

    fn start_session(&mut self, routine_id: u64) -> Result<WorkoutSession> {
        self.data.start_session(routine_id)
    }

    fn fetch_session_bundle(&self, session_id: u64) -> Result<SessionBundle> {
        self.data.fetch_session_bundle(session_id)
    }

    fn record_set(&mut self, session_id: u64, new_set: NewSet) -> Result<WorkoutSet> {
        self.data.record_set(session_id, new_set)
    }

    fn finish_session(
        &mut self,
        session_id: u64,
        status: SessionStatus,
    ) -> Result<WorkoutSession> {
        self.data.finish_session(session_id, status)
    }

    fn latest_completed_session(&self) -> Result<Option<SessionHistoryEntry>> {
        Ok(self.data.latest_completed_session())
    }

    fn in_progress_session(&self) -> Result<Option<WorkoutSession>> {
        Ok(self.data.in_progress_session())
    }

    fn history(&self, limit: usize) -> Result<Vec<SessionHistoryEntry>> {
        Ok(self.data.history(limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_routine_builds_items() {
        let (store, routine_id) = MockStore::with_routine(3).unwrap();
        let detail = store.get_routine(routine_id).unwrap();
        assert_eq!(detail.items.len(), 3);
    }
}
