//! Shared type definitions: typed identifiers and sorting types.

pub mod id;
pub mod sorting;

pub use id::{BotId, CertificateId, CommandId};
pub use sorting::{SortDirection, SortSpec};
