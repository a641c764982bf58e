use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use botdeck_core::types::BotId;
use botdeck_entity::bot::BotSummary;

/// The set of bot ids currently selected in a fleet listing.
///
/// A selection is only meaningful relative to a visible slice of the
/// fleet: callers must [`retain_visible`](Self::retain_visible) after the
/// query changes so hidden bots cannot be acted on by a bulk action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: HashSet<BotId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = BotId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Marks a single bot selected or deselected.
    pub fn set(&mut self, id: BotId, selected: bool) {
        if selected {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    pub fn contains(&self, id: BotId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> impl Iterator<Item = BotId> + '_ {
        self.ids.iter().copied()
    }

    /// Replaces the selection with every bot in the visible slice.
    pub fn select_all(&mut self, visible: &[BotSummary]) {
        self.ids = visible.iter().map(|bot| bot.id).collect();
    }

    /// Drops ids that are no longer in the visible slice.
    pub fn retain_visible(&mut self, visible: &[BotSummary]) {
        let visible_ids: HashSet<BotId> = visible.iter().map(|bot| bot.id).collect();
        self.ids.retain(|id| visible_ids.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botdeck_entity::bot::BotStatus;
    use chrono::Utc;

    fn bot(name: &str) -> BotSummary {
        BotSummary {
            id: BotId::new(),
            name: name.to_string(),
            username: format!("{name}_bot"),
            status: BotStatus::Active,
            user_count: 0,
            message_count: 0,
            performance: 0,
            last_activity: None,
            version: "1.0.0".to_string(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn set_and_clear_track_membership() {
        let a = BotId::new();
        let mut selection = SelectionSet::new();
        selection.set(a, true);
        assert!(selection.contains(a));

        selection.set(a, false);
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_replaces_previous_selection() {
        let stale = BotId::new();
        let visible = vec![bot("a"), bot("b")];

        let mut selection = SelectionSet::from_ids([stale]);
        selection.select_all(&visible);

        assert_eq!(selection.len(), 2);
        assert!(!selection.contains(stale));
    }

    #[test]
    fn retain_visible_drops_hidden_bots() {
        let shown = bot("shown");
        let hidden = bot("hidden");
        let mut selection = SelectionSet::from_ids([shown.id, hidden.id]);

        selection.retain_visible(std::slice::from_ref(&shown));

        assert!(selection.contains(shown.id));
        assert!(!selection.contains(hidden.id));
    }
}
