//! File-backed workout store
//!
//! The entire store is a single JSON document loaded on open and rewritten
//! after every mutation. Identifiers are allocated from a monotonic counter
//! persisted inside the document, so reopening the store never reuses ids.
//!
//! The in-memory core ([`StoreData`]) carries all the operation logic; the
//! mock store used in tests delegates to the same core without the file.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{LiftLogError, Result, ResultExt};
use crate::store::traits::{
    NewSet, RoutineDetail, RoutineItemDetail, RoutineItemSpec, SessionBundle, SessionHistoryEntry,
    WorkoutStore,
};
use crate::types::{
    ExerciseSlot, Machine, MachineCategory, Routine, RoutineItem, SessionStatus, WorkoutSession,
    WorkoutSet,
};

/// Current store document version, for future migration support
const STORE_VERSION: u32 = 1;

/// Routine name shown for history entries whose routine was deleted
const DELETED_ROUTINE_NAME: &str = "(deleted routine)";

/// The persisted store document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreData {
    /// Document version
    #[serde(default = "default_store_version")]
    pub version: u32,
    /// Next identifier to allocate
    pub next_id: u64,
    /// Machine catalog
    #[serde(default)]
    pub machines: Vec<Machine>,
    /// Saved routines
    #[serde(default)]
    pub routines: Vec<Routine>,
    /// Routine items across all routines
    #[serde(default)]
    pub items: Vec<RoutineItem>,
    /// Workout sessions
    #[serde(default)]
    pub sessions: Vec<WorkoutSession>,
    /// Completed sets across all sessions
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

fn default_store_version() -> u32 {
    STORE_VERSION
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            next_id: 1,
            machines: Vec::new(),
            routines: Vec::new(),
            items: Vec::new(),
            sessions: Vec::new(),
            sets: Vec::new(),
        }
    }
}

impl StoreData {
    /// Allocate the next identifier
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Seed the machine catalog with a starter set of common machines
    pub fn seed_machines(&mut self) {
        let catalog = [
            ("Chest Press", MachineCategory::Upper),
            ("Lat Pulldown", MachineCategory::Upper),
            ("Shoulder Press", MachineCategory::Upper),
            ("Seated Row", MachineCategory::Upper),
            ("Leg Press", MachineCategory::Lower),
            ("Leg Curl", MachineCategory::Lower),
            ("Leg Extension", MachineCategory::Lower),
            ("Ab Crunch", MachineCategory::Core),
            ("Back Extension", MachineCategory::Core),
            ("Rowing Machine", MachineCategory::Cardio),
        ];
        for (name, category) in catalog {
            let id = self.alloc_id();
            self.machines.push(Machine {
                id,
                name: name.to_string(),
                category,
            });
        }
    }

    // --- Machines ---

    pub fn list_machines(&self) -> Vec<Machine> {
        let mut machines = self.machines.clone();
        machines.sort_by(|a, b| (a.category, &a.name).cmp(&(b.category, &b.name)));
        machines
    }

    pub fn add_machine(&mut self, name: &str, category: MachineCategory) -> Result<Machine> {
        if name.trim().is_empty() {
            return Err(LiftLogError::InvalidInput(
                "machine name must not be empty".to_string(),
            ));
        }
        let machine = Machine {
            id: self.alloc_id(),
            name: name.trim().to_string(),
            category,
        };
        self.machines.push(machine.clone());
        Ok(machine)
    }

    fn machine(&self, machine_id: u64) -> Result<&Machine> {
        self.machines
            .iter()
            .find(|m| m.id == machine_id)
            .ok_or_else(|| LiftLogError::not_found("machine", machine_id))
    }

    // --- Routines ---

    pub fn list_routines(&self) -> Vec<Routine> {
        let mut routines = self.routines.clone();
        routines.sort_by(|a, b| {
            b.is_default
                .cmp(&a.is_default)
                .then_with(|| a.name.cmp(&b.name))
        });
        routines
    }

    fn routine(&self, routine_id: u64) -> Result<&Routine> {
        self.routines
            .iter()
            .find(|r| r.id == routine_id)
            .ok_or_else(|| LiftLogError::not_found("routine", routine_id))
    }

    fn routine_mut(&mut self, routine_id: u64) -> Result<&mut Routine> {
        self.routines
            .iter_mut()
            .find(|r| r.id == routine_id)
            .ok_or_else(|| LiftLogError::not_found("routine", routine_id))
    }

    /// Items of a routine, ordered by position
    fn items_of(&self, routine_id: u64) -> Vec<RoutineItem> {
        let mut items: Vec<RoutineItem> = self
            .items
            .iter()
            .filter(|i| i.routine_id == routine_id)
            .cloned()
            .collect();
        items.sort_by_key(|i| i.position);
        items
    }

    pub fn get_routine(&self, routine_id: u64) -> Result<RoutineDetail> {
        let routine = self.routine(routine_id)?.clone();
        let items = self
            .items_of(routine_id)
            .into_iter()
            .map(|item| {
                let machine = self.machine(item.machine_id)?.clone();
                Ok(RoutineItemDetail { item, machine })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(RoutineDetail { routine, items })
    }

    pub fn create_routine(&mut self, name: &str, notes: Option<&str>) -> Result<Routine> {
        if name.trim().is_empty() {
            return Err(LiftLogError::InvalidInput(
                "routine name must not be empty".to_string(),
            ));
        }
        let now = Utc::now();
        let routine = Routine {
            id: self.alloc_id(),
            name: name.trim().to_string(),
            notes: notes.map(|n| n.to_string()),
            is_default: false,
            created_at: now,
            updated_at: now,
        };
        self.routines.push(routine.clone());
        Ok(routine)
    }

    pub fn update_routine(
        &mut self,
        routine_id: u64,
        name: &str,
        notes: Option<&str>,
    ) -> Result<()> {
        if name.trim().is_empty() {
            return Err(LiftLogError::InvalidInput(
                "routine name must not be empty".to_string(),
            ));
        }
        let routine = self.routine_mut(routine_id)?;
        routine.name = name.trim().to_string();
        routine.notes = notes.map(|n| n.to_string());
        routine.updated_at = Utc::now();
        Ok(())
    }

    pub fn delete_routine(&mut self, routine_id: u64) -> Result<()> {
        self.routine(routine_id)?;
        self.routines.retain(|r| r.id != routine_id);
        self.items.retain(|i| i.routine_id != routine_id);
        Ok(())
    }

    pub fn duplicate_routine(&mut self, routine_id: u64) -> Result<Routine> {
        let original = self.routine(routine_id)?.clone();
        let items = self.items_of(routine_id);

        let now = Utc::now();
        let copy = Routine {
            id: self.alloc_id(),
            name: format!("{} (Copy)", original.name),
            notes: original.notes.clone(),
            is_default: false,
            created_at: now,
            updated_at: now,
        };
        self.routines.push(copy.clone());

        for item in items {
            let id = self.alloc_id();
            self.items.push(RoutineItem {
                id,
                routine_id: copy.id,
                ..item
            });
        }
        Ok(copy)
    }

    pub fn set_default_routine(&mut self, routine_id: u64) -> Result<()> {
        self.routine(routine_id)?;
        for routine in &mut self.routines {
            routine.is_default = routine.id == routine_id;
        }
        Ok(())
    }

    // --- Routine items ---

    pub fn add_routine_item(
        &mut self,
        routine_id: u64,
        spec: RoutineItemSpec,
    ) -> Result<RoutineItem> {
        self.routine(routine_id)?;
        self.machine(spec.machine_id)?;
        validate_item_spec(&spec)?;

        let position = self.items_of(routine_id).len() as u32;
        let item = RoutineItem {
            id: self.alloc_id(),
            routine_id,
            machine_id: spec.machine_id,
            position,
            sets: spec.sets,
            reps: spec.reps,
            rest_seconds: spec.rest_seconds,
            default_weight: spec.default_weight,
        };
        self.items.push(item.clone());
        self.routine_mut(routine_id)?.updated_at = Utc::now();
        Ok(item)
    }

    pub fn update_routine_item(&mut self, item_id: u64, spec: RoutineItemSpec) -> Result<()> {
        self.machine(spec.machine_id)?;
        validate_item_spec(&spec)?;

        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| LiftLogError::not_found("routine item", item_id))?;
        item.machine_id = spec.machine_id;
        item.sets = spec.sets;
        item.reps = spec.reps;
        item.rest_seconds = spec.rest_seconds;
        item.default_weight = spec.default_weight;

        let routine_id = item.routine_id;
        self.routine_mut(routine_id)?.updated_at = Utc::now();
        Ok(())
    }

    pub fn remove_routine_item(&mut self, item_id: u64) -> Result<()> {
        let routine_id = self
            .items
            .iter()
            .find(|i| i.id == item_id)
            .map(|i| i.routine_id)
            .ok_or_else(|| LiftLogError::not_found("routine item", item_id))?;

        self.items.retain(|i| i.id != item_id);
        self.compact_positions(routine_id);
        self.routine_mut(routine_id)?.updated_at = Utc::now();
        Ok(())
    }

    pub fn reorder_routine_items(&mut self, routine_id: u64, ordered_ids: &[u64]) -> Result<()> {
        let current = self.items_of(routine_id);
        if current.len() != ordered_ids.len()
            || !current.iter().all(|i| ordered_ids.contains(&i.id))
        {
            return Err(LiftLogError::InvalidInput(
                "reorder must list every item of the routine exactly once".to_string(),
            ));
        }

        for (position, item_id) in ordered_ids.iter().enumerate() {
            if let Some(item) = self
                .items
                .iter_mut()
                .find(|i| i.id == *item_id && i.routine_id == routine_id)
            {
                item.position = position as u32;
            }
        }
        self.routine_mut(routine_id)?.updated_at = Utc::now();
        Ok(())
    }

    /// Reassign contiguous positions after a removal
    fn compact_positions(&mut self, routine_id: u64) {
        let ordered: Vec<u64> = self.items_of(routine_id).iter().map(|i| i.id).collect();
        for (position, item_id) in ordered.iter().enumerate() {
            if let Some(item) = self.items.iter_mut().find(|i| i.id == *item_id) {
                item.position = position as u32;
            }
        }
    }

    // --- Sessions ---

    fn session(&self, session_id: u64) -> Result<&WorkoutSession> {
        self.sessions
            .iter()
            .find(|s| s.id == session_id)
            .ok_or_else(|| LiftLogError::not_found("session", session_id))
    }

    pub fn start_session(&mut self, routine_id: u64) -> Result<WorkoutSession> {
        self.routine(routine_id)?;
        if self.items_of(routine_id).is_empty() {
            return Err(LiftLogError::InvalidInput(
                "routine has no items; add exercises before starting".to_string(),
            ));
        }

        let session = WorkoutSession {
            id: self.alloc_id(),
            routine_id,
            started_at: Utc::now(),
            ended_at: None,
            status: SessionStatus::InProgress,
        };
        self.sessions.push(session.clone());
        Ok(session)
    }

    pub fn fetch_session_bundle(&self, session_id: u64) -> Result<SessionBundle> {
        let session = self.session(session_id)?.clone();
        let routine = self.routine(session.routine_id)?;

        let slots = self
            .items_of(session.routine_id)
            .iter()
            .map(|item| {
                let machine = self.machine(item.machine_id)?;
                Ok(ExerciseSlot::from_item(item, machine.name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut sets: Vec<WorkoutSet> = self
            .sets
            .iter()
            .filter(|s| s.session_id == session_id)
            .cloned()
            .collect();
        sets.sort_by_key(|s| s.completed_at);

        Ok(SessionBundle {
            session,
            routine_name: routine.name.clone(),
            slots,
            sets,
        })
    }

    pub fn record_set(&mut self, session_id: u64, new_set: NewSet) -> Result<WorkoutSet> {
        let session = self.session(session_id)?;
        if !session.status.is_in_progress() {
            return Err(LiftLogError::InvalidInput(format!(
                "session {session_id} is not in progress"
            )));
        }

        let set = WorkoutSet {
            id: self.alloc_id(),
            session_id,
            routine_item_id: new_set.routine_item_id,
            set_number: new_set.set_number,
            target_reps: new_set.target_reps,
            actual_reps: new_set.actual_reps,
            weight: new_set.weight,
            completed_at: Utc::now(),
        };
        self.sets.push(set.clone());
        Ok(set)
    }

    pub fn finish_session(
        &mut self,
        session_id: u64,
        status: SessionStatus,
    ) -> Result<WorkoutSession> {
        if status.is_in_progress() {
            return Err(LiftLogError::InvalidInput(
                "finish status must be completed or abandoned".to_string(),
            ));
        }

        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| LiftLogError::not_found("session", session_id))?;
        if session.status.is_finished() {
            return Err(LiftLogError::InvalidInput(format!(
                "session {session_id} already finished as {}",
                session.status
            )));
        }

        session.status = status;
        session.ended_at = Some(Utc::now());
        Ok(session.clone())
    }

    fn history_entry(&self, session: &WorkoutSession) -> SessionHistoryEntry {
        let routine_name = self
            .routines
            .iter()
            .find(|r| r.id == session.routine_id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| DELETED_ROUTINE_NAME.to_string());

        let session_sets: Vec<&WorkoutSet> = self
            .sets
            .iter()
            .filter(|s| s.session_id == session.id)
            .collect();

        let ended = session.ended_at.unwrap_or_else(Utc::now);
        SessionHistoryEntry {
            session: session.clone(),
            routine_name,
            total_sets: session_sets.len() as u32,
            total_weight: session_sets.iter().map(|s| s.weight).sum(),
            duration_minutes: (ended - session.started_at).num_minutes().max(0),
        }
    }

    pub fn latest_completed_session(&self) -> Option<SessionHistoryEntry> {
        self.sessions
            .iter()
            .filter(|s| s.status == SessionStatus::Completed)
            .max_by_key(|s| (s.ended_at, s.id))
            .map(|s| self.history_entry(s))
    }

    pub fn in_progress_session(&self) -> Option<WorkoutSession> {
        self.sessions
            .iter()
            .filter(|s| s.status.is_in_progress())
            .max_by_key(|s| (s.started_at, s.id))
            .cloned()
    }

    pub fn history(&self, limit: usize) -> Vec<SessionHistoryEntry> {
        let mut completed: Vec<&WorkoutSession> = self
            .sessions
            .iter()
            .filter(|s| s.status == SessionStatus::Completed)
            .collect();
        completed.sort_by_key(|s| std::cmp::Reverse((s.ended_at, s.id)));
        completed
            .into_iter()
            .take(limit)
            .map(|s| self.history_entry(s))
            .collect()
    }
}

/// Validate the targets of a routine item spec
fn validate_item_spec(spec: &RoutineItemSpec) -> Result<()> {
    if spec.sets == 0 || spec.reps == 0 {
        return Err(LiftLogError::InvalidInput(
            "sets and reps must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// File-backed workout store
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    data: StoreData,
}

impl JsonStore {
    /// Open a store file, creating a freshly seeded store if it is missing
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let data = if path.exists() {
            let json = std::fs::read_to_string(&path)
                .map_err(LiftLogError::Io)
                .with_context(|| format!("Failed to read store file {}", path.display()))?;
            let data: StoreData = serde_json::from_str(&json)
                .map_err(LiftLogError::Serialization)
                .with_context(|| format!("Failed to parse store file {}", path.display()))?;
            tracing::info!(
                machines = data.machines.len(),
                routines = data.routines.len(),
                sessions = data.sessions.len(),
                "Opened workout store"
            );
            data
        } else {
            tracing::info!(path = %path.display(), "Creating new workout store");
            let mut data = StoreData::default();
            data.seed_machines();
            let store = Self {
                path: path.clone(),
                data,
            };
            store.save()?;
            return Ok(store);
        };

        Ok(Self { path, data })
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the backing file from the in-memory document
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, json)
            .map_err(LiftLogError::Io)
            .with_context(|| format!("Failed to write store file {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "Saved workout store");
        Ok(())
    }
}

impl WorkoutStore for JsonStore {
    fn list_machines(&self) -> Result<Vec<Machine>> {
        Ok(self.data.list_machines())
    }

    fn add_machine(&mut self, name: &str, category: MachineCategory) -> Result<Machine> {
        let machine = self.data.add_machine(name, category)?;
        self.save()?;
        Ok(machine)
    }

    fn list_routines(&self) -> Result<Vec<Routine>> {
        Ok(self.data.list_routines())
    }

    fn get_routine(&self, routine_id: u64) -> Result<RoutineDetail> {
        self.data.get_routine(routine_id)
    }

    fn create_routine(&mut self, name: &str, notes: Option<&str>) -> Result<Routine> {
        let routine = self.data.create_routine(name, notes)?;
        self.save()?;
        Ok(routine)
    }

    fn update_routine(&mut self, routine_id: u64, name: &str, notes: Option<&str>) -> Result<()> {
        self.data.update_routine(routine_id, name, notes)?;
        self.save()
    }

    fn delete_routine(&mut self, routine_id: u64) -> Result<()> {
        self.data.delete_routine(routine_id)?;
        self.save()
    }

    fn duplicate_routine(&mut self, routine_id: u64) -> Result<Routine> {
        let copy = self.data.duplicate_routine(routine_id)?;
        self.save()?;
        Ok(copy)
    }

    fn set_default_routine(&mut self, routine_id: u64) -> Result<()> {
        self.data.set_default_routine(routine_id)?;
        self.save()
    }

    fn add_routine_item(&mut self, routine_id: u64, spec: RoutineItemSpec) -> Result<RoutineItem> {
        let item = self.data.add_routine_item(routine_id, spec)?;
        self.save()?;
        Ok(item)
    }

    fn update_routine_item(&mut self, item_id: u64, spec: RoutineItemSpec) -> Result<()> {
        self.data.update_routine_item(item_id, spec)?;
        self.save()
    }

    fn remove_routine_item(&mut self, item_id: u64) -> Result<()> {
        self.data.remove_routine_item(item_id)?;
        self.save()
    }

    fn reorder_routine_items(&mut self, routine_id: u64, ordered_ids: &[u64]) -> Result<()> {
        self.data.reorder_routine_items(routine_id, ordered_ids)?;
        self.save()
    }

    fn start_session(&mut self, routine_id: u64) -> Result<WorkoutSession> {
        let session = self.data.start_session(routine_id)?;
        self.save()?;
        Ok(session)
    }

    fn fetch_session_bundle(&self, session_id: u64) -> Result<SessionBundle> {
        self.data.fetch_session_bundle(session_id)
    }

    fn record_set(&mut self, session_id: u64, new_set: NewSet) -> Result<WorkoutSet> {
        let set = self.data.record_set(session_id, new_set)?;
        self.save()?;
        Ok(set)
    }

    fn finish_session(
        &mut self,
        session_id: u64,
        status: SessionStatus,
    ) -> Result<WorkoutSession> {
        let session = self.data.finish_session(session_id, status)?;
        self.save()?;
        Ok(session)
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

    fn seeded_data() -> StoreData {
        let mut data = StoreData::default();
        data.seed_machines();
        data
    }

    fn item_spec(machine_id: u64) -> RoutineItemSpec {
        RoutineItemSpec {
            machine_id,
            sets: 3,
            reps: 10,
            rest_seconds: 60,
            default_weight: Some(40.0),
        }
    }

    #[test]
    fn test_seeded_machines_ordered() {
        let data = seeded_data();
        let machines = data.list_machines();
        assert!(!machines.is_empty());
        for pair in machines.windows(2) {
            assert!((pair[0].category, &pair[0].name) <= (pair[1].category, &pair[1].name));
        }
    }

    #[test]
    fn test_routine_crud() {
        let mut data = seeded_data();
        let machine_id = data.list_machines()[0].id;

        let routine = data.create_routine("Push Day", Some("notes")).unwrap();
        data.add_routine_item(routine.id, item_spec(machine_id)).unwrap();

        let detail = data.get_routine(routine.id).unwrap();
        assert_eq!(detail.items.len(), 1);
        assert_eq!(detail.items[0].item.position, 0);

        data.update_routine(routine.id, "Push Day B", None).unwrap();
        let detail = data.get_routine(routine.id).unwrap();
        assert_eq!(detail.routine.name, "Push Day B");
        assert_eq!(detail.routine.notes, None);

        data.delete_routine(routine.id).unwrap();
        assert!(data.get_routine(routine.id).is_err());
        assert!(data.items.is_empty());
    }

    #[test]
    fn test_empty_routine_name_rejected() {
        let mut data = seeded_data();
        assert!(data.create_routine("  ", None).is_err());
    }

    #[test]
    fn test_item_positions_compact_after_removal() {
        let mut data = seeded_data();
        let machines = data.list_machines();
        let routine = data.create_routine("Full Body", None).unwrap();

        let a = data.add_routine_item(routine.id, item_spec(machines[0].id)).unwrap();
        let b = data.add_routine_item(routine.id, item_spec(machines[1].id)).unwrap();
        let c = data.add_routine_item(routine.id, item_spec(machines[2].id)).unwrap();
        assert_eq!((a.position, b.position, c.position), (0, 1, 2));

        data.remove_routine_item(b.id).unwrap();
        let detail = data.get_routine(routine.id).unwrap();
        let positions: Vec<u32> = detail.items.iter().map(|i| i.item.position).collect();
        assert_eq!(positions, vec![0, 1]);
        assert_eq!(detail.items[1].item.id, c.id);
    }

    #[test]
    fn test_reorder_items() {
        let mut data = seeded_data();
        let machines = data.list_machines();
        let routine = data.create_routine("Full Body", None).unwrap();
        let a = data.add_routine_item(routine.id, item_spec(machines[0].id)).unwrap();
        let b = data.add_routine_item(routine.id, item_spec(machines[1].id)).unwrap();

        data.reorder_routine_items(routine.id, &[b.id, a.id]).unwrap();
        let detail = data.get_routine(routine.id).unwrap();
        assert_eq!(detail.items[0].item.id, b.id);
        assert_eq!(detail.items[1].item.id, a.id);

        // Partial id lists are rejected.
        assert!(data.reorder_routine_items(routine.id, &[a.id]).is_err());
    }

    #[test]
    fn test_duplicate_routine_copies_items() {
        let mut data = seeded_data();
        let machine_id = data.list_machines()[0].id;
        let routine = data.create_routine("Legs", None).unwrap();
        data.set_default_routine(routine.id).unwrap();
        data.add_routine_item(routine.id, item_spec(machine_id)).unwrap();

        let copy = data.duplicate_routine(routine.id).unwrap();
        assert_eq!(copy.name, "Legs (Copy)");
        assert!(!copy.is_default);

        let detail = data.get_routine(copy.id).unwrap();
        assert_eq!(detail.items.len(), 1);
        assert_ne!(detail.items[0].item.id, data.items_of(routine.id)[0].id);
    }

    #[test]
    fn test_default_routine_is_exclusive() {
        let mut data = seeded_data();
        let a = data.create_routine("A", None).unwrap();
        let b = data.create_routine("B", None).unwrap();

        data.set_default_routine(a.id).unwrap();
        data.set_default_routine(b.id).unwrap();

        let defaults: Vec<u64> = data
            .list_routines()
            .iter()
            .filter(|r| r.is_default)
            .map(|r| r.id)
            .collect();
        assert_eq!(defaults, vec![b.id]);
        // Default routine sorts first.
        assert_eq!(data.list_routines()[0].id, b.id);
    }

    #[test]
    fn test_start_session_refuses_empty_routine() {
        let mut data = seeded_data();
        let routine = data.create_routine("Empty", None).unwrap();
        assert!(data.start_session(routine.id).is_err());
    }

    #[test]
    fn test_session_lifecycle() {
        let mut data = seeded_data();
        let machine_id = data.list_machines()[0].id;
        let routine = data.create_routine("Push", None).unwrap();
        let item = data.add_routine_item(routine.id, item_spec(machine_id)).unwrap();

        let session = data.start_session(routine.id).unwrap();
        assert!(session.status.is_in_progress());
        assert_eq!(data.in_progress_session().unwrap().id, session.id);

        let set = data
            .record_set(
                session.id,
                NewSet {
                    routine_item_id: item.id,
                    set_number: 1,
                    target_reps: 10,
                    actual_reps: None,
                    weight: 40.0,
                },
            )
            .unwrap();
        assert!(set.id > 0);

        let bundle = data.fetch_session_bundle(session.id).unwrap();
        assert_eq!(bundle.routine_name, "Push");
        assert_eq!(bundle.slots.len(), 1);
        assert_eq!(bundle.sets.len(), 1);
        assert_eq!(bundle.slots[0].machine_name, data.machine(machine_id).unwrap().name);

        let finished = data
            .finish_session(session.id, SessionStatus::Completed)
            .unwrap();
        assert!(finished.ended_at.is_some());

        // Recording into or re-finishing a finished session is rejected.
        assert!(data
            .record_set(
                session.id,
                NewSet {
                    routine_item_id: item.id,
                    set_number: 2,
                    target_reps: 10,
                    actual_reps: None,
                    weight: 40.0,
                },
            )
            .is_err());
        assert!(data
            .finish_session(session.id, SessionStatus::Abandoned)
            .is_err());

        let latest = data.latest_completed_session().unwrap();
        assert_eq!(latest.session.id, session.id);
        assert_eq!(latest.total_sets, 1);
        assert!((latest.total_weight - 40.0).abs() < f64::EPSILON);

        assert_eq!(data.history(10).len(), 1);
        assert!(data.in_progress_session().is_none());
    }

    #[test]
    fn test_finish_with_in_progress_status_rejected() {
        let mut data = seeded_data();
        let machine_id = data.list_machines()[0].id;
        let routine = data.create_routine("Push", None).unwrap();
        data.add_routine_item(routine.id, item_spec(machine_id)).unwrap();
        let session = data.start_session(routine.id).unwrap();

        assert!(data
            .finish_session(session.id, SessionStatus::InProgress)
            .is_err());
    }

    #[test]
    fn test_json_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workout_store.json");

        let routine_id;
        {
            let mut store = JsonStore::open(&path).unwrap();
            let machine_id = store.list_machines().unwrap()[0].id;
            let routine = store.create_routine("Persisted", None).unwrap();
            routine_id = routine.id;
            store
                .add_routine_item(routine.id, item_spec(machine_id))
                .unwrap();
        }

        let store = JsonStore::open(&path).unwrap();
        let detail = store.get_routine(routine_id).unwrap();
        assert_eq!(detail.routine.name, "Persisted");
        assert_eq!(detail.items.len(), 1);
    }

    #[test]
    fn test_json_store_ids_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workout_store.json");

        let first_id;
        {
            let mut store = JsonStore::open(&path).unwrap();
            first_id = store.create_routine("A", None).unwrap().id;
        }
        let mut store = JsonStore::open(&path).unwrap();
        let second_id = store.create_routine("B", None).unwrap().id;
        assert!(second_id > first_id);
    }
}
