use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use botdeck_core::config::FleetConfig;
use botdeck_core::traits::FleetStore;
use botdeck_core::types::BotId;
use botdeck_core::{AppError, AppResult};
use botdeck_entity::bot::{BotStatus, BotSummary, NewBot};
use botdeck_entity::config::rules;

use super::bulk::{apply_bulk_action, BulkAction, BulkOutcome};
use super::query::{filter_and_sort, FleetQuery};
use super::selection::SelectionSet;
use super::stats::FleetStats;

const INITIAL_VERSION: &str = "1.0.0";

/// Store-backed facade over the fleet query engine.
///
/// Listing and stats are reads; bulk actions and provisioning load the
/// fleet, transform it in memory and write the whole collection back.
pub struct FleetService {
    store: Arc<dyn FleetStore<BotSummary>>,
    config: FleetConfig,
}

impl FleetService {
    pub fn new(store: Arc<dyn FleetStore<BotSummary>>, config: FleetConfig) -> Self {
        Self { store, config }
    }

    /// Returns the visible slice of the fleet for `query`.
    pub async fn list(&self, query: &FleetQuery) -> AppResult<Vec<BotSummary>> {
        let bots = self.store.load_fleet().await?;
        Ok(filter_and_sort(&bots, query))
    }

    /// Dashboard counters over the whole fleet, independent of any filter.
    pub async fn stats(&self) -> AppResult<FleetStats> {
        let bots = self.store.load_fleet().await?;
        Ok(FleetStats::summarize(&bots))
    }

    /// Applies a bulk action to the selected bots and persists the result.
    #[instrument(skip(self, selection), fields(action = %action, selected = selection.len()))]
    pub async fn bulk(&self, selection: &SelectionSet, action: BulkAction) -> AppResult<BulkOutcome> {
        let bots = self.store.load_fleet().await?;
        let outcome = apply_bulk_action(bots, selection, action, Utc::now());
        self.store.replace_fleet(outcome.bots.clone()).await?;

        info!(affected = outcome.affected, "bulk action applied");
        Ok(outcome)
    }

    /// Registers a new bot in the fleet.
    ///
    /// The bot starts inactive with zeroed counters and no recorded
    /// activity. Usernames are unique across the fleet, compared without
    /// the leading `@` and ignoring case.
    pub async fn provision(&self, request: NewBot) -> AppResult<BotSummary> {
        if request.name.trim().is_empty() {
            return Err(AppError::validation("bot name must not be empty"));
        }
        rules::validate_username(&request.username)?;
        rules::validate_token(&request.token)?;
        if let Some(url) = &request.webhook_url {
            rules::validate_webhook_url(url)?;
        }

        let mut bots = self.store.load_fleet().await?;
        if bots.len() >= self.config.max_bots {
            return Err(AppError::validation(format!(
                "fleet is at capacity ({} bots)",
                self.config.max_bots
            )));
        }

        let username = normalize_username(&request.username);
        if bots
            .iter()
            .any(|bot| normalize_username(&bot.username) == username)
        {
            return Err(AppError::conflict(format!(
                "username @{username} is already taken"
            )));
        }

        let bot = BotSummary {
            id: BotId::new(),
            name: request.name.trim().to_string(),
            username,
            status: BotStatus::Inactive,
            user_count: 0,
            message_count: 0,
            performance: 0,
            last_activity: None,
            version: INITIAL_VERSION.to_string(),
            description: request.description.unwrap_or_default(),
            created_at: Utc::now(),
        };

        bots.push(bot.clone());
        self.store.replace_fleet(bots).await?;

        info!(bot_id = %bot.id, username = %bot.username, "bot provisioned");
        Ok(bot)
    }
}

fn normalize_username(username: &str) -> String {
    username.trim().trim_start_matches('@').to_lowercase()
}
