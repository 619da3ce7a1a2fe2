//! Persistence layer for machines, routines, and workout sessions
//!
//! The [`WorkoutStore`] trait is the seam between the UI and persistence.
//! [`JsonStore`] is the production implementation backed by a JSON file in
//! the application data directory; [`MockStore`] keeps everything in memory
//! for tests.

pub mod json_store;
pub mod mock_store;
pub mod traits;

use std::path::PathBuf;

pub use json_store::JsonStore;
pub use mock_store::MockStore;
pub use traits::{
    NewSet, RoutineDetail, RoutineItemDetail, RoutineItemSpec, SessionBundle, SessionHistoryEntry,
    WorkoutStore,
};

use crate::error::{LiftLogError, Result};

/// File name of the store document inside the app data directory
const STORE_FILE: &str = "workout_store.json";

/// Path of the store file in the platform app data directory
pub fn default_store_path() -> Result<PathBuf> {
    let dir = crate::config::app_data_dir()
        .ok_or_else(|| LiftLogError::Config("Could not determine app data directory".to_string()))?;
    Ok(dir.join(STORE_FILE))
}

/// Open the store at its default location
pub fn open_default() -> Result<JsonStore> {
    JsonStore::open(default_store_path()?)
}
