use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use botdeck_core::types::{SortDirection, SortSpec};
use botdeck_core::AppError;
use botdeck_entity::bot::{BotStatus, BotSummary};

/// Key a fleet listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotSortKey {
    Name,
    Status,
    UserCount,
    MessageCount,
    Performance,
    LastActivity,
}

impl BotSortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            BotSortKey::Name => "name",
            BotSortKey::Status => "status",
            BotSortKey::UserCount => "user_count",
            BotSortKey::MessageCount => "message_count",
            BotSortKey::Performance => "performance",
            BotSortKey::LastActivity => "last_activity",
        }
    }
}

impl fmt::Display for BotSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BotSortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(BotSortKey::Name),
            "status" => Ok(BotSortKey::Status),
            "user_count" => Ok(BotSortKey::UserCount),
            "message_count" => Ok(BotSortKey::MessageCount),
            "performance" => Ok(BotSortKey::Performance),
            "last_activity" => Ok(BotSortKey::LastActivity),
            other => Err(AppError::validation(format!("unknown sort key: {other}"))),
        }
    }
}

/// Status dimension of a fleet query. `All` disables status filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Only(BotStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: BotStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(StatusFilter::All)
        } else {
            Ok(StatusFilter::Only(s.parse()?))
        }
    }
}

/// A fleet listing request: free-text search, status filter and sort spec.
///
/// The default query matches every bot and orders by name ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetQuery {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub sort: SortSpec<BotSortKey>,
}

impl Default for FleetQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            sort: SortSpec::asc(BotSortKey::Name),
        }
    }
}

impl FleetQuery {
    pub fn new(
        search_term: impl Into<String>,
        status_filter: StatusFilter,
        sort: SortSpec<BotSortKey>,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            status_filter,
            sort,
        }
    }

    /// Flips the sort direction when `key` is already active, otherwise
    /// switches to `key` ascending.
    pub fn toggle_sort(&mut self, key: BotSortKey) {
        self.sort = self.sort.toggle(key);
    }

    fn matches(&self, bot: &BotSummary) -> bool {
        if !self.status_filter.matches(bot.status) {
            return false;
        }
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        bot.name.to_lowercase().contains(&needle)
            || bot.username.to_lowercase().contains(&needle)
    }
}

/// Produces the visible slice of the fleet for `query`.
///
/// Filtering is case-insensitive over name and username; sorting is
/// stable, so bots equal under the active key keep their input order.
/// Bots with no recorded activity order before any timestamp ascending.
pub fn filter_and_sort(bots: &[BotSummary], query: &FleetQuery) -> Vec<BotSummary> {
    let mut visible: Vec<BotSummary> = bots
        .iter()
        .filter(|bot| query.matches(bot))
        .cloned()
        .collect();

    let key = query.sort.key;
    visible.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, key);
        match query.sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    visible
}

fn compare_by_key(a: &BotSummary, b: &BotSummary, key: BotSortKey) -> Ordering {
    match key {
        BotSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        BotSortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        BotSortKey::UserCount => a.user_count.cmp(&b.user_count),
        BotSortKey::MessageCount => a.message_count.cmp(&b.message_count),
        BotSortKey::Performance => a.performance.cmp(&b.performance),
        // Option::cmp puts None first, which keeps never-active bots at
        // the top of an ascending listing.
        BotSortKey::LastActivity => a.last_activity.cmp(&b.last_activity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botdeck_core::types::BotId;
    use chrono::{Duration, Utc};

    fn bot(name: &str, username: &str, status: BotStatus, users: u64) -> BotSummary {
        BotSummary {
            id: BotId::new(),
            name: name.to_string(),
            username: username.to_string(),
            status,
            user_count: users,
            message_count: users * 10,
            performance: 90,
            last_activity: Some(Utc::now()),
            version: "1.0.0".to_string(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    fn names(bots: &[BotSummary]) -> Vec<&str> {
        bots.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn search_matches_name_and_username_case_insensitively() {
        let fleet = vec![
            bot("Support Bot", "support_bot", BotStatus::Active, 10),
            bot("Sales", "ACME_sales", BotStatus::Active, 20),
            bot("Weather", "weather_bot", BotStatus::Inactive, 5),
        ];

        let mut query = FleetQuery::default();
        query.search_term = "SALES".to_string();
        let visible = filter_and_sort(&fleet, &query);
        assert_eq!(names(&visible), vec!["Sales"]);

        query.search_term = "bot".to_string();
        let visible = filter_and_sort(&fleet, &query);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn status_filter_narrows_the_listing() {
        let fleet = vec![
            bot("A", "a_bot", BotStatus::Active, 1),
            bot("B", "b_bot", BotStatus::Error, 2),
            bot("C", "c_bot", BotStatus::Active, 3),
        ];

        let query = FleetQuery::new(
            "",
            StatusFilter::Only(BotStatus::Error),
            SortSpec::asc(BotSortKey::Name),
        );
        let visible = filter_and_sort(&fleet, &query);
        assert_eq!(names(&visible), vec!["B"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let fleet = vec![
            bot("beta", "b", BotStatus::Active, 1),
            bot("Alpha", "a", BotStatus::Active, 1),
            bot("GAMMA", "g", BotStatus::Active, 1),
        ];

        let query = FleetQuery::default();
        assert_eq!(names(&filter_and_sort(&fleet, &query)), vec!["Alpha", "beta", "GAMMA"]);
    }

    #[test]
    fn toggle_flips_direction_on_same_key_and_resets_on_new_key() {
        let mut query = FleetQuery::default();
        assert_eq!(query.sort.direction, SortDirection::Asc);

        query.toggle_sort(BotSortKey::Name);
        assert_eq!(query.sort.direction, SortDirection::Desc);

        query.toggle_sort(BotSortKey::UserCount);
        assert_eq!(query.sort.key, BotSortKey::UserCount);
        assert_eq!(query.sort.direction, SortDirection::Asc);
    }

    #[test]
    fn numeric_sort_descending() {
        let fleet = vec![
            bot("low", "l", BotStatus::Active, 5),
            bot("high", "h", BotStatus::Active, 50),
            bot("mid", "m", BotStatus::Active, 25),
        ];

        let query = FleetQuery::new(
            "",
            StatusFilter::All,
            SortSpec::new(BotSortKey::UserCount, SortDirection::Desc),
        );
        assert_eq!(names(&filter_and_sort(&fleet, &query)), vec!["high", "mid", "low"]);
    }

    #[test]
    fn bots_without_activity_sort_before_timestamps_ascending() {
        let now = Utc::now();
        let mut idle = bot("idle", "i", BotStatus::Inactive, 1);
        idle.last_activity = None;
        let mut old = bot("old", "o", BotStatus::Active, 1);
        old.last_activity = Some(now - Duration::hours(2));
        let mut fresh = bot("fresh", "f", BotStatus::Active, 1);
        fresh.last_activity = Some(now);

        let fleet = vec![fresh, idle, old];
        let query = FleetQuery::new("", StatusFilter::All, SortSpec::asc(BotSortKey::LastActivity));
        assert_eq!(names(&filter_and_sort(&fleet, &query)), vec!["idle", "old", "fresh"]);
    }

    #[test]
    fn stable_sort_preserves_input_order_for_equal_keys() {
        let fleet = vec![
            bot("first", "f", BotStatus::Active, 7),
            bot("second", "s", BotStatus::Active, 7),
            bot("third", "t", BotStatus::Active, 7),
        ];

        let query = FleetQuery::new("", StatusFilter::All, SortSpec::asc(BotSortKey::UserCount));
        assert_eq!(names(&filter_and_sort(&fleet, &query)), vec!["first", "second", "third"]);
    }

    #[test]
    fn sort_key_round_trips_through_strings() {
        for key in [
            BotSortKey::Name,
            BotSortKey::Status,
            BotSortKey::UserCount,
            BotSortKey::MessageCount,
            BotSortKey::Performance,
            BotSortKey::LastActivity,
        ] {
            assert_eq!(key.as_str().parse::<BotSortKey>().unwrap(), key);
        }
        assert!("uptime".parse::<BotSortKey>().is_err());
    }

    #[test]
    fn status_filter_parses_all_and_specific_statuses() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "error".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(BotStatus::Error)
        );
        assert!("bogus".parse::<StatusFilter>().is_err());
    }
}
