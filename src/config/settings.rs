//! Player settings that shape how a workout session runs
//!
//! These persist across sessions as part of the app state and are
//! applied to the session player when a workout starts.

use serde::{Deserialize, Serialize};

use crate::session::DEFAULT_HYDRATION_INTERVAL;

/// Default rest adjustment step in seconds
pub const DEFAULT_REST_ADJUST_STEP: u32 = 15;

/// Default weight increment in kilograms
pub const DEFAULT_WEIGHT_INCREMENT: f64 = 2.5;

/// Settings applied to the session player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Show a hydration reminder after every N exercises (0 disables)
    #[serde(default = "default_hydration_interval")]
    pub hydration_interval: u32,

    /// Seconds added or removed per rest adjustment press
    #[serde(default = "default_rest_adjust_step")]
    pub rest_adjust_step_seconds: u32,

    /// Weight change per stepper press in kilograms
    #[serde(default = "default_weight_increment")]
    pub weight_increment: f64,
}

fn default_hydration_interval() -> u32 {
    DEFAULT_HYDRATION_INTERVAL
}

fn default_rest_adjust_step() -> u32 {
    DEFAULT_REST_ADJUST_STEP
}

fn default_weight_increment() -> f64 {
    DEFAULT_WEIGHT_INCREMENT
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            hydration_interval: DEFAULT_HYDRATION_INTERVAL,
            rest_adjust_step_seconds: DEFAULT_REST_ADJUST_STEP,
            weight_increment: DEFAULT_WEIGHT_INCREMENT,
        }
    }
}

impl PlayerSettings {
    /// Whether hydration reminders are enabled
    pub fn hydration_enabled(&self) -> bool {
        self.hydration_interval > 0
    }
}
