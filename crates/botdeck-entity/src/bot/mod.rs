//! Bot summary domain entities.

pub mod model;
pub mod status;

pub use model::{BotSummary, NewBot};
pub use status::BotStatus;
