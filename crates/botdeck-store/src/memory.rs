//! In-memory store implementations using dashmap.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::RwLock;
use tracing::debug;

use botdeck_core::error::AppError;
use botdeck_core::result::AppResult;
use botdeck_core::traits::{FleetStore, SectionStore};
use botdeck_core::types::id::BotId;
use botdeck_entity::bot::BotSummary;
use botdeck_entity::config::{BotConfigSnapshot, ConfigSection, SectionData};

/// In-memory per-bot configuration store.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    /// Section payloads keyed by bot and section.
    sections: DashMap<(BotId, ConfigSection), SectionData>,
}

impl InMemoryConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a full configuration snapshot for a bot.
    pub fn seed(&self, bot_id: BotId, snapshot: BotConfigSnapshot) {
        for (section, data) in snapshot.into_sections() {
            self.sections.insert((bot_id, section), data);
        }
    }

    /// Number of stored section payloads, across all bots.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the store holds no payloads at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[async_trait]
impl SectionStore<ConfigSection, SectionData> for InMemoryConfigStore {
    async fn load_all(&self, bot_id: BotId) -> AppResult<Vec<(ConfigSection, SectionData)>> {
        let sections: Vec<_> = ConfigSection::ALL
            .iter()
            .filter_map(|section| {
                self.sections
                    .get(&(bot_id, *section))
                    .map(|entry| (*section, entry.value().clone()))
            })
            .collect();

        if sections.is_empty() {
            return Err(AppError::not_found(format!(
                "No configuration stored for bot {bot_id}"
            )));
        }
        Ok(sections)
    }

    async fn save_section(
        &self,
        bot_id: BotId,
        section: ConfigSection,
        data: SectionData,
    ) -> AppResult<()> {
        debug!(bot_id = %bot_id, section = %section, "persisting section");
        self.sections.insert((bot_id, section), data);
        Ok(())
    }
}

/// In-memory fleet store.
#[derive(Debug, Default)]
pub struct InMemoryFleetStore {
    /// The fleet collection. Replaced wholesale; a single-writer model.
    bots: RwLock<Vec<BotSummary>>,
}

impl InMemoryFleetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a fleet.
    pub fn with_fleet(bots: Vec<BotSummary>) -> Self {
        Self {
            bots: RwLock::new(bots),
        }
    }
}

#[async_trait]
impl FleetStore<BotSummary> for InMemoryFleetStore {
    async fn load_fleet(&self) -> AppResult<Vec<BotSummary>> {
        let bots = self
            .bots
            .read()
            .map_err(|_| AppError::internal("Fleet store lock poisoned"))?;
        Ok(bots.clone())
    }

    async fn replace_fleet(&self, bots: Vec<BotSummary>) -> AppResult<()> {
        debug!(count = bots.len(), "replacing fleet");
        let mut guard = self
            .bots
            .write()
            .map_err(|_| AppError::internal("Fleet store lock poisoned"))?;
        *guard = bots;
        Ok(())
    }
}
