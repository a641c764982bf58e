//! Bot configuration section entities.
//!
//! One record type per configuration section, with fixed schemas. The
//! draft/autosave machinery treats section data opaquely through
//! [`SectionData`]; structural equality against the last-saved baseline
//! is what decides dirtiness.

pub mod advanced;
pub mod basic;
pub mod commands;
pub mod rules;
pub mod section;
pub mod webhook;

pub use advanced::{AdvancedSettings, LogLevel};
pub use basic::BasicSettings;
pub use commands::BotCommand;
pub use section::{BotConfigSnapshot, ConfigSection, SectionData};
pub use webhook::{SslMode, UpdateKind, WebhookSettings};
