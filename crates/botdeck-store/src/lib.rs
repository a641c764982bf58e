//! # botdeck-store
//!
//! In-memory implementations of the core store traits. These stand in for
//! the out-of-scope persistence backend so the services and tests have a
//! concrete collaborator to talk to.

pub mod memory;

pub use memory::{InMemoryConfigStore, InMemoryFleetStore};
