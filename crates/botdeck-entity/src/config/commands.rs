//! Bot command definitions section.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use botdeck_core::AppResult;
use botdeck_core::error::AppError;
use botdeck_core::types::id::CommandId;

/// Telegram's limit on command name length.
const COMMAND_NAME_MAX_LEN: usize = 32;

/// One slash-command a bot responds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BotCommand {
    /// Unique command identifier.
    pub id: CommandId,
    /// Command name without the leading slash, e.g. `start`.
    pub name: String,
    /// Short description shown in the Telegram command menu.
    pub description: String,
    /// Canned response text.
    pub response: String,
    /// Whether the command is currently enabled.
    pub enabled: bool,
    /// When the command was added.
    pub created_at: DateTime<Utc>,
}

impl BotCommand {
    /// Check the command is well-formed before it is persisted.
    ///
    /// Telegram command names are 1-32 characters of `[a-z0-9_]`.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() || self.name.len() > COMMAND_NAME_MAX_LEN {
            return Err(AppError::validation(format!(
                "Command name must be 1-{COMMAND_NAME_MAX_LEN} characters"
            )));
        }
        if !self
            .name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(AppError::validation(format!(
                "Command name '{}' may only contain lowercase letters, digits, and underscores",
                self.name
            )));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::validation(format!(
                "Command '/{}' is missing a description",
                self.name
            )));
        }
        if self.response.trim().is_empty() {
            return Err(AppError::validation(format!(
                "Command '/{}' is missing a response",
                self.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(name: &str) -> BotCommand {
        BotCommand {
            id: CommandId::new(),
            name: name.to_string(),
            description: "A command".to_string(),
            response: "A response".to_string(),
            enabled: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_valid_names() {
        assert!(command("start").validate().is_ok());
        assert!(command("order_status").validate().is_ok());
        assert!(command("faq2").validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_names() {
        assert!(command("").validate().is_err());
        assert!(command("Start").validate().is_err());
        assert!(command("has space").validate().is_err());
        assert!(command(&"x".repeat(33)).validate().is_err());
    }

    #[test]
    fn test_rejects_empty_description_and_response() {
        let mut cmd = command("start");
        cmd.description = "  ".to_string();
        assert!(cmd.validate().is_err());

        let mut cmd = command("start");
        cmd.response = String::new();
        assert!(cmd.validate().is_err());
    }
}
