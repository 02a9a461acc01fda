//! Scenario records (authored dialog definitions)
//!
//! A `ScenarioRecord` describes one staged error dialog: caption, body,
//! severity icon, button set, and the delay before it is presented.
//!
//! # Lifecycle
//!
//! 1. Authoring surface collects the fields → `ScenarioRecord::new`
//! 2. Only the delay can change afterwards (`with_delay`); any other edit
//!    is delete-and-recreate
//! 3. Removed by an explicit delete, or dropped with the owning list

use std::time::Duration;

use feint_types::{DialogButtons, DialogIcon};

use super::error::ValidationError;

/// Delay applied when the authoring input omits one or fails to parse.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// One staged dialog definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioRecord {
    title: String,
    message: String,
    icon: DialogIcon,
    buttons: DialogButtons,
    delay: Duration,
}

impl ScenarioRecord {
    /// Create a record, rejecting blank captions and bodies.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        icon: DialogIcon,
        buttons: DialogButtons,
        delay: Duration,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let message = message.into();

        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }

        Ok(Self {
            title,
            message,
            icon,
            buttons,
            delay,
        })
    }

    /// Copy of this record with a different presentation delay.
    pub fn with_delay(&self, delay: Duration) -> Self {
        Self {
            delay,
            ..self.clone()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn icon(&self) -> DialogIcon {
        self.icon
    }

    pub fn buttons(&self) -> DialogButtons {
        self.buttons
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Parse an icon name from authoring input.
pub fn parse_icon(input: &str) -> Result<DialogIcon, ValidationError> {
    input.parse().map_err(|_| ValidationError::UnknownIcon {
        value: input.trim().to_string(),
    })
}

/// Parse a button set name from authoring input.
pub fn parse_buttons(input: &str) -> Result<DialogButtons, ValidationError> {
    input.parse().map_err(|_| ValidationError::UnknownButtons {
        value: input.trim().to_string(),
    })
}

/// Parse a delay in milliseconds from authoring input.
///
/// An omitted or unparsable field falls back to [`DEFAULT_DELAY`].
pub fn parse_delay(input: Option<&str>) -> Duration {
    input
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_DELAY)
}
