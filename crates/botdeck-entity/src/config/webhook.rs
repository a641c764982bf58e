//! Webhook delivery settings section.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use botdeck_core::AppResult;
use botdeck_core::error::AppError;

use super::rules;

/// Telegram's bounds on concurrent webhook connections.
const MAX_CONNECTIONS_RANGE: std::ops::RangeInclusive<u16> = 1..=100;

/// How the webhook endpoint's TLS certificate is provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslMode {
    /// Auto-generated certificate (recommended).
    Auto,
    /// Custom uploaded certificate.
    Custom,
    /// No TLS, development only.
    None,
}

/// Update categories a webhook may subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    Message,
    EditedMessage,
    ChannelPost,
    CallbackQuery,
    InlineQuery,
    ShippingQuery,
    PreCheckoutQuery,
    Poll,
}

/// Webhook endpoint configuration for a bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSettings {
    /// HTTPS endpoint Telegram delivers updates to.
    pub url: String,
    /// TLS certificate provisioning mode.
    pub ssl_mode: SslMode,
    /// Maximum concurrent delivery connections, 1-100.
    pub max_connections: u16,
    /// Update categories to receive.
    pub allowed_updates: Vec<UpdateKind>,
    /// Whether delivery is currently active.
    pub is_active: bool,
    /// When the endpoint was last test-pinged.
    pub last_tested_at: Option<DateTime<Utc>>,
}

impl WebhookSettings {
    /// Check the section is well-formed before it is persisted.
    pub fn validate(&self) -> AppResult<()> {
        rules::validate_webhook_url(&self.url)?;
        if !MAX_CONNECTIONS_RANGE.contains(&self.max_connections) {
            return Err(AppError::validation(format!(
                "max_connections must be between {} and {}",
                MAX_CONNECTIONS_RANGE.start(),
                MAX_CONNECTIONS_RANGE.end()
            )));
        }
        if self.is_active && self.allowed_updates.is_empty() {
            return Err(AppError::validation(
                "An active webhook must subscribe to at least one update kind",
            ));
        }
        Ok(())
    }
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            ssl_mode: SslMode::Auto,
            max_connections: 40,
            allowed_updates: vec![UpdateKind::Message, UpdateKind::CallbackQuery],
            is_active: false,
            last_tested_at: None,
        }
    }
}
