//! Shared state for the authoring shell

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use feint_core::{AppConfig, AudioController, PlaybackEngine, ScenarioList};
use feint_types::Language;

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the core types.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
    pub scenarios: Arc<RwLock<ScenarioList>>,
    /// Held across runs so the audio controller keeps its device backend
    pub engine: Arc<Mutex<PlaybackEngine>>,
}

impl CliContext {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::load())),
            scenarios: Arc::new(RwLock::new(ScenarioList::new())),
            engine: Arc::new(Mutex::new(PlaybackEngine::new(AudioController::new()))),
        }
    }

    pub async fn language(&self) -> Language {
        self.config.read().await.language
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
