//! Store traits for the out-of-scope persistence collaborators.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::BotId;

/// Per-section configuration store for one bot.
///
/// Defined with generic type parameters so the core stays free of domain
/// models; the entity crate supplies the concrete section and data types.
/// Failures are opaque persistence errors (network, validation on the far
/// side) and are always recoverable from the caller's point of view.
#[async_trait]
pub trait SectionStore<Section, Data>: Send + Sync + 'static
where
    Section: Send + 'static,
    Data: Send + 'static,
{
    /// Load every configuration section for a bot.
    async fn load_all(&self, bot_id: BotId) -> AppResult<Vec<(Section, Data)>>;

    /// Persist one configuration section for a bot.
    async fn save_section(&self, bot_id: BotId, section: Section, data: Data) -> AppResult<()>;
}

/// Store supplying and persisting the bot fleet collection.
///
/// The query engine never writes through this trait itself; bulk actions
/// produce a new in-memory collection which the owning service persists.
#[async_trait]
pub trait FleetStore<Bot>: Send + Sync + 'static
where
    Bot: Send + 'static,
{
    /// Load the full fleet.
    async fn load_fleet(&self) -> AppResult<Vec<Bot>>;

    /// Replace the full fleet with a new collection.
    async fn replace_fleet(&self, bots: Vec<Bot>) -> AppResult<()>;
}
