//! Fleet management settings.

use serde::{Deserialize, Serialize};

/// Settings for the bot fleet view and provisioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    /// Maximum number of bots a single installation may manage.
    #[serde(default = "default_max_bots")]
    pub max_bots: usize,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            max_bots: default_max_bots(),
        }
    }
}

fn default_max_bots() -> usize {
    100
}
