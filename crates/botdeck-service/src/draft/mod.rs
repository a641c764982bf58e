//! Draft state tracking for bot configuration editing.
//!
//! Each configuration section carries an independent draft: a saved
//! baseline plus the working copy being edited. The controller layers
//! debounced autosave, save coalescing and a navigation guard on top.

mod controller;
mod state;

pub use controller::{DraftController, NavigationDecision, SaveOutcome};
pub use state::{DraftStatus, SectionDraft};
