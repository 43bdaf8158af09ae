//! Demo-run configuration
//!
//! Controls the headless driver only: how the session is seeded and paced.
//! Gameplay balance stays in `consts` and is not configurable.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Session seed; `None` seeds from wall-clock time
    pub seed: Option<u64>,
    /// Simulation rate in ticks per second
    pub tick_hz: f32,
    /// Requested initial asteroid count
    pub initial_asteroids: usize,
    /// How long the demo runs before exiting (seconds)
    pub duration_secs: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_hz: 60.0,
            initial_asteroids: 3,
            duration_secs: 20.0,
        }
    }
}

impl RunConfig {
    /// Load from a JSON file, falling back to defaults if the file is absent
    /// or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("loaded run config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
