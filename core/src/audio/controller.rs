//! Looping audio playback for scenario runs
//!
//! `AudioController` owns the single background audio stream a playback run
//! may use. Start and stop are idempotent; an unconfigured controller
//! treats `start` as a no-op. One controller per process should drive the
//! audio device.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::AudioError;
use super::output::{AudioOutput, RodioOutput};

const DEFAULT_VOLUME: u8 = 100;

/// State machine around one optional looping audio stream.
pub struct AudioController {
    output: Box<dyn AudioOutput>,
    source: Option<PathBuf>,
    volume: u8,
    playing: bool,
}

impl AudioController {
    /// Controller backed by the process audio device.
    pub fn new() -> Self {
        Self::with_output(Box::new(RodioOutput::new()))
    }

    /// Controller with a custom output backend.
    pub fn with_output(output: Box<dyn AudioOutput>) -> Self {
        Self {
            output,
            source: None,
            volume: DEFAULT_VOLUME,
            playing: false,
        }
    }

    /// Record the source to play. Does not start playback.
    pub fn configure(&mut self, path: impl Into<PathBuf>) {
        self.source = Some(path.into());
    }

    /// Drop the configured source, stopping it first if it is playing.
    pub fn clear(&mut self) {
        self.stop();
        self.source = None;
    }

    /// Volume for the next `start`, 0-100.
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
    }

    /// Begin looping the configured source.
    ///
    /// No-op when nothing is configured or a loop is already active.
    pub fn start(&mut self) -> Result<(), AudioError> {
        if self.playing {
            return Ok(());
        }
        let Some(path) = self.source.clone() else {
            return Ok(());
        };

        self.output
            .begin_loop(&path, f32::from(self.volume) / 100.0)?;
        self.playing = true;
        debug!(source = %path.display(), "audio loop started");
        Ok(())
    }

    /// Stop the active loop. No-op when nothing is playing.
    pub fn stop(&mut self) {
        if !self.playing {
            return;
        }
        self.output.end();
        self.playing = false;
        debug!("audio loop stopped");
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_configured(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl Default for AudioController {
    fn default() -> Self {
        Self::new()
    }
}
