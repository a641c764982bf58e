//! # botdeck-core
//!
//! Core crate for Botdeck. Contains collaborator traits, configuration
//! schemas, typed identifiers, sorting types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Botdeck crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
