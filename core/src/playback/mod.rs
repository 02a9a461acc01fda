//! Playback engine
//!
//! This module provides:
//! - **Engine**: The `Idle → Running → Completed` state machine that walks
//!   a scenario snapshot in order
//! - **Collaborators**: The presenter and stage-visibility trait seams
//! - **Run token**: Cancellable timed waits between records

mod engine;
mod error;
mod presenter;
mod token;

#[cfg(test)]
mod token_tests;

pub use engine::{PlaybackEngine, RunPhase, RunReport};
pub use error::{PlaybackError, PresenterError};
pub use presenter::{Presenter, StageVisibility};
pub use token::RunToken;
