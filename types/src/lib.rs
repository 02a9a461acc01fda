//! Shared value types for feint
//!
//! This crate contains the serializable types shared between the core
//! (feint-core) and the authoring frontends: dialog enums, language
//! selection, and the settings structs persisted in the app configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────────────────────
// Dialog Enums
// ─────────────────────────────────────────────────────────────────────────────

/// Severity icon shown on a staged dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DialogIcon {
    #[default]
    Info,
    Warning,
    Error,
}

impl DialogIcon {
    /// Short marker a text frontend can render in place of a real icon
    pub fn marker(&self) -> &'static str {
        match self {
            DialogIcon::Info => "(i)",
            DialogIcon::Warning => "/!\\",
            DialogIcon::Error => "(x)",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DialogIcon::Info => "info",
            DialogIcon::Warning => "warning",
            DialogIcon::Error => "error",
        }
    }
}

impl fmt::Display for DialogIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DialogIcon {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(DialogIcon::Info),
            "warning" => Ok(DialogIcon::Warning),
            "error" => Ok(DialogIcon::Error),
            _ => Err(UnknownNameError::new("icon", s)),
        }
    }
}

/// Response affordances a staged dialog offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DialogButtons {
    #[default]
    Ok,
    OkCancel,
    YesNo,
}

impl DialogButtons {
    /// Responses a presenter may legally return for this button set
    pub fn allowed_responses(&self) -> &'static [DialogResponse] {
        match self {
            DialogButtons::Ok => &[DialogResponse::Ok],
            DialogButtons::OkCancel => &[DialogResponse::Ok, DialogResponse::Cancel],
            DialogButtons::YesNo => &[DialogResponse::Yes, DialogResponse::No],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DialogButtons::Ok => "ok",
            DialogButtons::OkCancel => "ok-cancel",
            DialogButtons::YesNo => "yes-no",
        }
    }
}

impl fmt::Display for DialogButtons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DialogButtons {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ok" => Ok(DialogButtons::Ok),
            "ok-cancel" | "okcancel" => Ok(DialogButtons::OkCancel),
            "yes-no" | "yesno" => Ok(DialogButtons::YesNo),
            _ => Err(UnknownNameError::new("button set", s)),
        }
    }
}

/// The user's answer to one staged dialog.
///
/// Collected by the playback engine for reporting; playback order never
/// depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogResponse {
    Ok,
    Cancel,
    Yes,
    No,
}

impl fmt::Display for DialogResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DialogResponse::Ok => "ok",
            DialogResponse::Cancel => "cancel",
            DialogResponse::Yes => "yes",
            DialogResponse::No => "no",
        };
        f.write_str(name)
    }
}

/// Error for enum names that match no variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNameError {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownNameError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.trim().to_string(),
        }
    }
}

impl fmt::Display for UnknownNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownNameError {}

// ─────────────────────────────────────────────────────────────────────────────
// Language
// ─────────────────────────────────────────────────────────────────────────────

/// UI language for the authoring surface and dialog prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    English,
    #[default]
    Russian,
}

impl Language {
    /// The other language (the authoring surface offers a two-way toggle)
    pub fn toggled(&self) -> Self {
        match self {
            Language::English => Language::Russian,
            Language::Russian => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "english",
            Language::Russian => "russian",
        };
        f.write_str(name)
    }
}

impl FromStr for Language {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "russian" | "ru" => Ok(Language::Russian),
            _ => Err(UnknownNameError::new("language", s)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Audio preferences for playback runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSettings {
    /// Master toggle for custom sound during playback
    #[serde(default)]
    pub enabled: bool,

    /// Selected sound file; `None` until the user picks one
    #[serde(default)]
    pub sound_file: Option<PathBuf>,

    /// Playback volume, 0-100
    #[serde(default = "default_volume")]
    pub volume: u8,
}

fn default_volume() -> u8 {
    100
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            sound_file: None,
            volume: default_volume(),
        }
    }
}

/// Options for one playback run, derived from current preferences.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaybackSettings {
    /// Hide the authoring surface for the duration of the run
    pub hide_window: bool,
    /// Start the configured audio loop on entry
    pub use_custom_sound: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_names_round_trip() {
        for icon in [DialogIcon::Info, DialogIcon::Warning, DialogIcon::Error] {
            assert_eq!(icon.name().parse::<DialogIcon>(), Ok(icon));
        }
    }

    #[test]
    fn icon_parse_is_case_insensitive() {
        assert_eq!("  WARNING ".parse::<DialogIcon>(), Ok(DialogIcon::Warning));
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let err = "fatal".parse::<DialogIcon>().unwrap_err();
        assert_eq!(err.value, "fatal");
        assert_eq!(err.kind, "icon");
    }

    #[test]
    fn button_set_aliases_parse() {
        assert_eq!("ok-cancel".parse::<DialogButtons>(), Ok(DialogButtons::OkCancel));
        assert_eq!("okcancel".parse::<DialogButtons>(), Ok(DialogButtons::OkCancel));
        assert_eq!("YesNo".parse::<DialogButtons>(), Ok(DialogButtons::YesNo));
        assert!("maybe".parse::<DialogButtons>().is_err());
    }

    #[test]
    fn allowed_responses_match_button_set() {
        assert_eq!(DialogButtons::Ok.allowed_responses(), &[DialogResponse::Ok]);
        assert!(DialogButtons::YesNo
            .allowed_responses()
            .contains(&DialogResponse::No));
        assert!(!DialogButtons::OkCancel
            .allowed_responses()
            .contains(&DialogResponse::Yes));
    }

    #[test]
    fn language_toggle_is_involutive() {
        assert_eq!(Language::English.toggled(), Language::Russian);
        assert_eq!(Language::Russian.toggled().toggled(), Language::Russian);
    }

    #[test]
    fn audio_settings_default_volume() {
        let settings = AudioSettings::default();
        assert!(!settings.enabled);
        assert_eq!(settings.volume, 100);
        assert!(settings.sound_file.is_none());
    }
}
