//! Bot runtime status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Runtime status of a managed bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotStatus {
    /// Bot is running and serving users.
    Active,
    /// Bot is stopped.
    Inactive,
    /// Bot crashed or is failing health checks.
    Error,
    /// Bot is deliberately taken down for maintenance.
    Maintenance,
}

impl BotStatus {
    /// Whether the bot is currently serving traffic.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Error => "error",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for BotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BotStatus {
    type Err = botdeck_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "error" => Ok(Self::Error),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(botdeck_core::AppError::validation(format!(
                "Invalid bot status: '{s}'. Expected one of: active, inactive, error, maintenance"
            ))),
        }
    }
}
