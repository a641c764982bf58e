//! Bot summary entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use botdeck_core::types::id::BotId;

use super::status::BotStatus;

/// The dashboard's in-memory record of one managed bot's identity and
/// health metrics.
///
/// `id` is immutable once created; every other field changes only through
/// bulk actions or provisioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotSummary {
    /// Unique bot identifier, stable across the session.
    pub id: BotId,
    /// Display name.
    pub name: String,
    /// Telegram handle, unique among active bots.
    pub username: String,
    /// Current runtime status.
    pub status: BotStatus,
    /// Number of distinct users the bot has served.
    pub user_count: u64,
    /// Total messages processed.
    pub message_count: u64,
    /// Health score as an integer percentage, 0-100.
    pub performance: u8,
    /// When the bot last handled an update. `None` means never; relative
    /// labels ("2 min ago") are derived at render time, not stored.
    pub last_activity: Option<DateTime<Utc>>,
    /// Deployed bot version.
    pub version: String,
    /// Short human-readable description.
    pub description: String,
    /// When the bot was provisioned.
    pub created_at: DateTime<Utc>,
}

impl BotSummary {
    /// How long ago the bot was last active, if ever.
    pub fn idle_for(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        self.last_activity.map(|at| now - at)
    }
}

/// Request to provision a new bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBot {
    /// Display name.
    pub name: String,
    /// Telegram handle.
    pub username: String,
    /// Bot API token issued by BotFather. Validated for shape only; the
    /// real Telegram API is an out-of-scope collaborator.
    pub token: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional webhook endpoint, must be HTTPS when present.
    pub webhook_url: Option<String>,
}
