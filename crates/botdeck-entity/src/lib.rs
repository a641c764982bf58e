//! # botdeck-entity
//!
//! Domain entity models for Botdeck. Every struct in this crate is a
//! domain value object with `Debug`, `Clone`, `Serialize`, `Deserialize`
//! derives. Configuration section records use fixed schemas with
//! `deny_unknown_fields`: unknown fields are rejected, never merged.

pub mod bot;
pub mod certificate;
pub mod config;
