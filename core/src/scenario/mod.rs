//! Scenario model
//!
//! This module provides:
//! - **Records**: Immutable-shape dialog definitions with validated fields
//! - **List**: Ordered storage with stable ids and the playback run lock
//! - **Parsing**: Authoring-input helpers with the delay fallback

mod error;
mod list;
mod record;

#[cfg(test)]
mod list_tests;

pub use error::{ListError, ValidationError};
pub use list::{RunPermit, ScenarioId, ScenarioList};
pub use record::{DEFAULT_DELAY, ScenarioRecord, parse_buttons, parse_delay, parse_icon};
