//! Configuration autosave settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the draft autosave debounce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutosaveConfig {
    /// Whether autosave is enabled at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Quiet period after the most recent edit before an autosave fires,
    /// in seconds. The timer restarts on every edit.
    #[serde(default = "default_debounce")]
    pub debounce_seconds: u64,
}

impl AutosaveConfig {
    /// The debounce quiet period as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_secs(self.debounce_seconds)
    }
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            debounce_seconds: default_debounce(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_debounce() -> u64 {
    30
}
