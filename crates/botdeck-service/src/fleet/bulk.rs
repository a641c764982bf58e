use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use botdeck_core::AppError;
use botdeck_entity::bot::{BotStatus, BotSummary};

use super::selection::SelectionSet;

/// Action applied to every selected bot at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    Start,
    Stop,
    Restart,
    Delete,
}

impl BulkAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkAction::Start => "start",
            BulkAction::Stop => "stop",
            BulkAction::Restart => "restart",
            BulkAction::Delete => "delete",
        }
    }
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BulkAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(BulkAction::Start),
            "stop" => Ok(BulkAction::Stop),
            "restart" => Ok(BulkAction::Restart),
            "delete" => Ok(BulkAction::Delete),
            other => Err(AppError::validation(format!("unknown bulk action: {other}"))),
        }
    }
}

/// Result of a bulk action: the updated fleet plus the selection that
/// should replace the caller's (empty after a delete, unchanged
/// otherwise).
#[derive(Debug, Clone, PartialEq)]
pub struct BulkOutcome {
    pub bots: Vec<BotSummary>,
    pub selection: SelectionSet,
    /// Number of bots the action touched.
    pub affected: usize,
}

/// Applies `action` to every selected bot. Unselected bots pass through
/// untouched and keep their position.
///
/// Start sets the bot active; restart sets it active and stamps
/// `last_activity` with `now`; stop sets it inactive. Delete removes the
/// selected bots and clears the selection. Ids in the selection that
/// match no bot are ignored.
pub fn apply_bulk_action(
    bots: Vec<BotSummary>,
    selection: &SelectionSet,
    action: BulkAction,
    now: DateTime<Utc>,
) -> BulkOutcome {
    let affected = bots.iter().filter(|bot| selection.contains(bot.id)).count();

    match action {
        BulkAction::Delete => {
            let bots: Vec<BotSummary> = bots
                .into_iter()
                .filter(|bot| !selection.contains(bot.id))
                .collect();
            BulkOutcome {
                bots,
                selection: SelectionSet::new(),
                affected,
            }
        }
        BulkAction::Start => {
            let bots = bots
                .into_iter()
                .map(|mut bot| {
                    if selection.contains(bot.id) {
                        bot.status = BotStatus::Active;
                    }
                    bot
                })
                .collect();
            BulkOutcome {
                bots,
                selection: selection.clone(),
                affected,
            }
        }
        // Only a restart counts as fresh activity.
        BulkAction::Restart => {
            let bots = bots
                .into_iter()
                .map(|mut bot| {
                    if selection.contains(bot.id) {
                        bot.status = BotStatus::Active;
                        bot.last_activity = Some(now);
                    }
                    bot
                })
                .collect();
            BulkOutcome {
                bots,
                selection: selection.clone(),
                affected,
            }
        }
        BulkAction::Stop => {
            let bots = bots
                .into_iter()
                .map(|mut bot| {
                    if selection.contains(bot.id) {
                        bot.status = BotStatus::Inactive;
                    }
                    bot
                })
                .collect();
            BulkOutcome {
                bots,
                selection: selection.clone(),
                affected,
            }
        }
    }
}
