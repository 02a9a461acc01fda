//! Application configuration
//!
//! Persists ambient preferences (language, window hiding, sound selection)
//! as TOML in the user config directory. The scenario list itself is never
//! persisted; it lives only for the process lifetime.

use feint_types::{AudioSettings, Language, PlaybackSettings};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

const APP_NAME: &str = "feint";
const CONFIG_NAME: Option<&str> = Some("config");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub language: Language,

    /// Hide the authoring surface while a run is active
    #[serde(default)]
    pub hide_window: bool,

    #[serde(default)]
    pub audio: AudioSettings,
}

impl AppConfig {
    /// Load from the user config directory, falling back to defaults on a
    /// missing or unreadable file.
    pub fn load() -> Self {
        confy::load(APP_NAME, CONFIG_NAME).unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    /// Settings for one playback run derived from current preferences.
    pub fn playback_settings(&self) -> PlaybackSettings {
        PlaybackSettings {
            hide_window: self.hide_window,
            use_custom_sound: self.audio.enabled && self.audio.sound_file.is_some(),
        }
    }
}
