//! Audio playback during scenario runs
//!
//! The controller tracks the configured source and the playing flag; the
//! [`AudioOutput`] backend does the actual device work, so playback
//! lifecycle is testable without a sound card.

mod controller;
mod error;
mod output;

#[cfg(test)]
mod controller_tests;

pub use controller::AudioController;
pub use error::AudioError;
pub use output::{AudioOutput, RodioOutput};
