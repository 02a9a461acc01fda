pub mod audio;
pub mod context;
pub mod playback;
pub mod scenario;

// Re-exports for convenience
pub use audio::{AudioController, AudioError, AudioOutput, RodioOutput};
pub use context::{AppConfig, ConfigError};
pub use playback::{
    PlaybackEngine, PlaybackError, Presenter, PresenterError, RunPhase, RunReport, RunToken,
    StageVisibility,
};
pub use scenario::{
    DEFAULT_DELAY, ListError, RunPermit, ScenarioId, ScenarioList, ScenarioRecord,
    ValidationError, parse_buttons, parse_delay, parse_icon,
};
