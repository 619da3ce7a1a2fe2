//! Configuration module for LiftLog
//!
//! This module handles application configuration including:
//! - Application state persistence (UI preferences, player settings)
//! - Paths inside the platform app data directory
//!
//! # App Data Location
//!
//! Application data is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.liftlog.liftlog-rs/`
//! - **macOS**: `~/Library/Application Support/dev.liftlog.liftlog-rs/`
//! - **Windows**: `%APPDATA%\dev.liftlog.liftlog-rs\`
//!
//! # Files
//!
//! - `app_state.json` - UI preferences and player settings
//! - `workout_store.json` - Machines, routines, and workout history

pub mod settings;

pub use settings::*;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{LiftLogError, Result};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.liftlog.liftlog-rs";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        LiftLogError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            LiftLogError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

/// Persistent application state
///
/// Stores preferences that persist across sessions, separate from the
/// workout store document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default = "default_app_state_version")]
    pub version: u32,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,

    /// Workout player settings
    #[serde(default)]
    pub player: PlayerSettings,
}

fn default_app_state_version() -> u32 {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            ui_preferences: UiPreferences::default(),
            player: PlayerSettings::default(),
        }
    }
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path()
            .ok_or_else(|| LiftLogError::Config("Could not determine app state path".to_string()))?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| LiftLogError::Config(format!("Failed to read app state: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| LiftLogError::Config(format!("Failed to parse app state: {}", e)))
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        let path = dir.join(APP_STATE_FILE);

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| LiftLogError::Config(format!("Failed to serialize app state: {}", e)))?;

        std::fs::write(&path, content)
            .map_err(|e| LiftLogError::Config(format!("Failed to write app state: {}", e)))
    }
}

/// UI preferences that persist across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Enable dark mode
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Font scale factor
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,

    /// Number of sessions shown on the history screen
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_true() -> bool {
    true
}

fn default_font_scale() -> f32 {
    1.0
}

fn default_history_limit() -> usize {
    20
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_scale: 1.0,
            history_limit: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();
        assert_eq!(state.version, 1);
        assert!(state.ui_preferences.dark_mode);
        assert_eq!(state.player.hydration_interval, 2);
    }

    #[test]
    fn test_app_state_serialization() {
        let mut state = AppState::default();
        state.ui_preferences.dark_mode = false;
        state.player.hydration_interval = 3;

        let json = serde_json::to_string_pretty(&state).unwrap();
        let parsed: AppState = serde_json::from_str(&json).unwrap();

        assert!(!parsed.ui_preferences.dark_mode);
        assert_eq!(parsed.player.hydration_interval, 3);
    }

    #[test]
    fn test_partial_app_state_parses() {
        let parsed: AppState = serde_json::from_str(r#"{"version": 1}"#).unwrap();
        assert!(parsed.ui_preferences.dark_mode);
        assert_eq!(parsed.ui_preferences.history_limit, 20);
    }
}
