//! Fleet query engine: filtering, sorting, selection, bulk actions and
//! aggregate statistics over bot summary collections, plus the
//! store-backed [`FleetService`] facade.

mod bulk;
mod query;
mod selection;
mod service;
mod stats;

pub use bulk::{apply_bulk_action, BulkAction, BulkOutcome};
pub use query::{filter_and_sort, BotSortKey, FleetQuery, StatusFilter};
pub use selection::SelectionSet;
pub use service::FleetService;
pub use stats::FleetStats;
