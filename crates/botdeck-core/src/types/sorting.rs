//! Sorting types for sortable list views.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Asc
    }
}

impl SortDirection {
    /// Return the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// A sort specification consisting of a typed sort key and a direction.
///
/// The key is a domain enum rather than a free-form string so that an
/// unknown sort key is rejected when the specification is constructed,
/// never when a list is being sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec<K> {
    /// Field to sort by.
    pub key: K,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortSpec<K> {
    /// Create a new sort specification.
    pub fn new(key: K, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Create an ascending sort on the given key.
    pub fn asc(key: K) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    /// Apply a column-header click.
    ///
    /// Clicking the current sort column flips the direction; clicking any
    /// other column sorts it ascending. This is a user-visible contract
    /// for sortable tables and must not change.
    pub fn toggle(self, clicked: K) -> Self {
        if clicked == self.key {
            Self::new(self.key, self.direction.flipped())
        } else {
            Self::new(clicked, SortDirection::Asc)
        }
    }
}
