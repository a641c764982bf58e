//! Basic bot settings section.

use serde::{Deserialize, Serialize};

use botdeck_core::AppResult;
use botdeck_core::error::AppError;

use super::rules;

/// Identity and presentation settings for a bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BasicSettings {
    /// Display name.
    pub name: String,
    /// Telegram handle.
    pub username: String,
    /// Bot API token.
    pub token: String,
    /// Description shown in the bot's profile.
    pub description: String,
    /// Optional profile image URL.
    pub profile_image_url: Option<String>,
}

impl BasicSettings {
    /// Check the section is well-formed before it is persisted.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Bot name must not be empty"));
        }
        rules::validate_username(&self.username)?;
        rules::validate_token(&self.token)?;
        Ok(())
    }
}
