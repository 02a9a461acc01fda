//! Error types for scenario authoring and storage

use thiserror::Error;

/// Errors rejecting bad record fields at creation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("dialog title must not be empty")]
    EmptyTitle,

    #[error("dialog message must not be empty")]
    EmptyMessage,

    #[error("unknown icon name '{value}'")]
    UnknownIcon { value: String },

    #[error("unknown button set '{value}'")]
    UnknownButtons { value: String },
}

/// Errors from scenario list operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("scenario list is locked by an active playback run")]
    Locked,

    #[error("scenario index {index} out of range (list has {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("no scenario with that id")]
    UnknownId,
}
