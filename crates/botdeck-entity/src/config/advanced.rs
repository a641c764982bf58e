//! Advanced bot settings section: AI assist, rate limiting, logging
//! preferences, and security toggles.

use serde::{Deserialize, Serialize};
use std::fmt;

use botdeck_core::AppResult;
use botdeck_core::error::AppError;

/// Log verbosity for a bot's own event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// Advanced configuration for a bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvancedSettings {
    /// Whether AI-assisted responses are enabled.
    pub ai_enabled: bool,
    /// API key for the AI provider collaborator. Required when enabled.
    pub ai_api_key: Option<String>,
    /// Whether the AI reviews command responses before they ship.
    pub auto_code_review: bool,
    /// Whether the AI suggests performance improvements.
    pub performance_suggestions: bool,

    /// Whether per-user rate limiting is enforced.
    pub rate_limit_enabled: bool,
    /// Sustained messages per second per user.
    pub messages_per_second: u32,
    /// Short-burst allowance above the sustained rate.
    pub burst_limit: u32,
    /// Cooldown after a user exceeds the burst limit, in seconds.
    pub cooldown_seconds: u32,

    /// Verbosity of the bot's event log.
    pub log_level: LogLevel,
    /// Whether inbound user messages are logged.
    pub log_user_messages: bool,
    /// Whether outbound bot responses are logged.
    pub log_bot_responses: bool,
    /// Whether webhook delivery events are logged.
    pub log_webhook_events: bool,
    /// Restrict logging to errors regardless of the toggles above.
    pub errors_only: bool,
    /// Days to retain log entries.
    pub retention_days: u16,

    /// Whether webhook payload signatures are verified.
    pub validate_webhook_signature: bool,
    /// Whether messages from unknown users are dropped.
    pub block_unknown_users: bool,
    /// Whether the IP allowlist is enforced.
    pub ip_allowlist_enabled: bool,
    /// Allowed source addresses/CIDRs when the allowlist is enforced.
    pub ip_allowlist: Vec<String>,
    /// Whether stored conversation data is encrypted at rest.
    pub encrypt_stored_data: bool,
}

impl AdvancedSettings {
    /// Check the section is well-formed before it is persisted.
    pub fn validate(&self) -> AppResult<()> {
        if self.ai_enabled && self.ai_api_key.as_deref().unwrap_or("").trim().is_empty() {
            return Err(AppError::validation(
                "AI assistance requires an API key",
            ));
        }
        if self.rate_limit_enabled {
            if self.messages_per_second == 0 {
                return Err(AppError::validation(
                    "Rate limit messages_per_second must be at least 1",
                ));
            }
            if self.burst_limit < self.messages_per_second {
                return Err(AppError::validation(
                    "Burst limit must be at least the sustained rate",
                ));
            }
        }
        if self.retention_days == 0 || self.retention_days > 365 {
            return Err(AppError::validation(
                "Log retention must be between 1 and 365 days",
            ));
        }
        if self.ip_allowlist_enabled && self.ip_allowlist.is_empty() {
            return Err(AppError::validation(
                "IP allowlist enforcement requires at least one entry",
            ));
        }
        Ok(())
    }
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self {
            ai_enabled: false,
            ai_api_key: None,
            auto_code_review: false,
            performance_suggestions: false,
            rate_limit_enabled: true,
            messages_per_second: 5,
            burst_limit: 10,
            cooldown_seconds: 60,
            log_level: LogLevel::Info,
            log_user_messages: false,
            log_bot_responses: true,
            log_webhook_events: true,
            errors_only: false,
            retention_days: 30,
            validate_webhook_signature: true,
            block_unknown_users: false,
            ip_allowlist_enabled: false,
            ip_allowlist: Vec::new(),
            encrypt_stored_data: true,
        }
    }
}
