use serde::{Deserialize, Serialize};

use botdeck_entity::bot::{BotStatus, BotSummary};

/// Aggregate counters for a fleet dashboard header.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FleetStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub error: usize,
    pub total_users: u64,
    pub total_messages: u64,
    /// Mean of the per-bot performance scores, 0.0 for an empty fleet.
    pub avg_performance: f64,
}

impl FleetStats {
    /// Computes dashboard counters over the whole fleet, not the
    /// filtered slice. Bots in maintenance count toward the total only.
    pub fn summarize(bots: &[BotSummary]) -> Self {
        let mut stats = FleetStats {
            total: bots.len(),
            ..FleetStats::default()
        };

        for bot in bots {
            match bot.status {
                BotStatus::Active => stats.active += 1,
                BotStatus::Inactive => stats.inactive += 1,
                BotStatus::Error => stats.error += 1,
                BotStatus::Maintenance => {}
            }
            stats.total_users += bot.user_count;
            stats.total_messages += bot.message_count;
        }

        if !bots.is_empty() {
            let sum: u64 = bots.iter().map(|bot| u64::from(bot.performance)).sum();
            stats.avg_performance = sum as f64 / bots.len() as f64;
        }
        stats
    }
}
