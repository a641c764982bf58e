//! # botdeck-service
//!
//! Business logic layer for Botdeck. The fleet module is the pure
//! query/bulk-action engine over bot summary collections; the draft
//! module is the per-section unsaved-changes state machine with debounced
//! autosave. Services follow constructor injection: collaborators are
//! provided at construction time via `Arc` references.

pub mod certificate;
pub mod draft;
pub mod fleet;

pub use certificate::CertificateReport;
pub use draft::{DraftController, DraftStatus, NavigationDecision, SaveOutcome};
pub use fleet::{
    BotSortKey, BulkAction, BulkOutcome, FleetQuery, FleetService, FleetStats, SelectionSet,
    StatusFilter,
};
