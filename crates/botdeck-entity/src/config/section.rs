//! Configuration section identifiers and the tagged section payload.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use botdeck_core::AppResult;
use botdeck_core::error::AppError;

use super::advanced::AdvancedSettings;
use super::basic::BasicSettings;
use super::commands::BotCommand;
use super::webhook::WebhookSettings;

/// The four independently-edited configuration sections of a bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSection {
    Basic,
    Commands,
    Webhooks,
    Advanced,
}

impl ConfigSection {
    /// All sections, in tab order.
    pub const ALL: [ConfigSection; 4] = [
        Self::Basic,
        Self::Commands,
        Self::Webhooks,
        Self::Advanced,
    ];

    /// Return the section as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Commands => "commands",
            Self::Webhooks => "webhooks",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConfigSection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "commands" => Ok(Self::Commands),
            "webhooks" => Ok(Self::Webhooks),
            "advanced" => Ok(Self::Advanced),
            _ => Err(AppError::validation(format!(
                "Invalid config section: '{s}'. Expected one of: basic, commands, webhooks, advanced"
            ))),
        }
    }
}

/// The payload of one configuration section.
///
/// This is what the draft machinery snapshots and diffs: dirtiness is
/// structural inequality between the working copy and the last-saved
/// baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "data", rename_all = "lowercase")]
pub enum SectionData {
    Basic(BasicSettings),
    Commands(Vec<BotCommand>),
    Webhooks(WebhookSettings),
    Advanced(AdvancedSettings),
}

impl SectionData {
    /// The section this payload belongs to.
    pub fn section(&self) -> ConfigSection {
        match self {
            Self::Basic(_) => ConfigSection::Basic,
            Self::Commands(_) => ConfigSection::Commands,
            Self::Webhooks(_) => ConfigSection::Webhooks,
            Self::Advanced(_) => ConfigSection::Advanced,
        }
    }

    /// Check the payload is well-formed before it is persisted.
    pub fn validate(&self) -> AppResult<()> {
        match self {
            Self::Basic(settings) => settings.validate(),
            Self::Commands(commands) => {
                for command in commands {
                    command.validate()?;
                }
                Ok(())
            }
            Self::Webhooks(settings) => settings.validate(),
            Self::Advanced(settings) => settings.validate(),
        }
    }
}

/// A full configuration snapshot for one bot, as loaded from the
/// configuration store when an editing screen opens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotConfigSnapshot {
    /// Identity and presentation settings.
    pub basic: BasicSettings,
    /// Slash-command definitions.
    pub commands: Vec<BotCommand>,
    /// Webhook delivery settings.
    pub webhooks: WebhookSettings,
    /// Advanced settings.
    pub advanced: AdvancedSettings,
}

impl BotConfigSnapshot {
    /// Split the snapshot into per-section payloads, in tab order.
    pub fn into_sections(self) -> Vec<(ConfigSection, SectionData)> {
        vec![
            (ConfigSection::Basic, SectionData::Basic(self.basic)),
            (ConfigSection::Commands, SectionData::Commands(self.commands)),
            (ConfigSection::Webhooks, SectionData::Webhooks(self.webhooks)),
            (ConfigSection::Advanced, SectionData::Advanced(self.advanced)),
        ]
    }

    /// Merge a section payload back into the snapshot.
    pub fn apply(&mut self, data: SectionData) {
        match data {
            SectionData::Basic(settings) => self.basic = settings,
            SectionData::Commands(commands) => self.commands = commands,
            SectionData::Webhooks(settings) => self.webhooks = settings,
            SectionData::Advanced(settings) => self.advanced = settings,
        }
    }
}
