//! Error types for audio playback

use std::path::PathBuf;
use thiserror::Error;

/// Errors starting the audio loop
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to open audio source {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
