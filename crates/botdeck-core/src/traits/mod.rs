//! Collaborator traits at the boundary of the core.
//!
//! The real backends (Telegram Bot API, persistence) are out of scope;
//! these traits are the seams through which they would be reached.

pub mod store;

pub use store::{FleetStore, SectionStore};
