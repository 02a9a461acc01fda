//! Error types for playback runs

use thiserror::Error;

/// Failure reported by a presenter collaborator.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PresenterError {
    message: String,
}

impl PresenterError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors from a playback run
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("scenario list is empty; nothing to play")]
    EmptyScenarioList,

    #[error("presenter failed while showing '{title}'")]
    Presenter {
        title: String,
        #[source]
        source: PresenterError,
    },
}
