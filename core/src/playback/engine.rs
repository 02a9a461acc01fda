//! Sequential playback of authored scenarios
//!
//! The engine walks a frozen snapshot of the scenario list in order,
//! presenting each record through the [`Presenter`] collaborator. A run
//! moves `Idle → Running → Completed`; the entry actions hide the
//! authoring surface and start the audio loop, and the exit actions undo
//! both on every exit path, including presenter failures.

use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime};
use feint_types::{DialogResponse, PlaybackSettings};
use tracing::{debug, info, warn};

use crate::audio::AudioController;
use crate::scenario::ScenarioRecord;

use super::error::PlaybackError;
use super::presenter::{Presenter, StageVisibility};
use super::token::RunToken;

/// Phase of the engine's current or most recent run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Completed,
}

/// Outcome of one playback run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Wall-clock time the run entered `Running`
    pub started_at: NaiveDateTime,

    /// Number of records presented
    pub presented: usize,

    /// Responses in presentation order; collected, never branched on
    pub responses: Vec<DialogResponse>,

    /// Time from `Running` to `Completed`
    pub elapsed: Duration,

    /// True when the run token was cancelled before the last record
    pub interrupted: bool,
}

/// Drives sequential presentation of a scenario snapshot.
pub struct PlaybackEngine {
    audio: AudioController,
    phase: RunPhase,
}

impl PlaybackEngine {
    pub fn new(audio: AudioController) -> Self {
        Self {
            audio,
            phase: RunPhase::Idle,
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn audio(&self) -> &AudioController {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioController {
        &mut self.audio
    }

    /// Play every record in the snapshot, in order.
    ///
    /// An empty snapshot fails with [`PlaybackError::EmptyScenarioList`]
    /// before any collaborator is touched. On every other path — normal
    /// completion, presenter failure, cancellation — the exit actions run:
    /// the audio loop stops and the authoring surface is restored if it was
    /// hidden on entry.
    pub fn run(
        &mut self,
        snapshot: &[ScenarioRecord],
        settings: PlaybackSettings,
        presenter: &dyn Presenter,
        stage: &dyn StageVisibility,
        token: &RunToken,
    ) -> Result<RunReport, PlaybackError> {
        if snapshot.is_empty() {
            return Err(PlaybackError::EmptyScenarioList);
        }

        self.phase = RunPhase::Running;
        let started_at = Local::now().naive_local();
        let started = Instant::now();
        info!(scenarios = snapshot.len(), "playback run started");

        let hidden = settings.hide_window;
        if hidden {
            stage.hide();
        }
        if settings.use_custom_sound {
            if let Err(err) = self.audio.start() {
                warn!(error = %err, "audio loop failed to start; continuing without sound");
            }
        }

        let outcome = self.present_all(snapshot, presenter, token);

        // Exit actions run no matter how the loop ended
        self.audio.stop();
        if hidden {
            stage.show();
        }
        self.phase = RunPhase::Completed;

        let (responses, interrupted) = outcome?;
        let report = RunReport {
            started_at,
            presented: responses.len(),
            responses,
            elapsed: started.elapsed(),
            interrupted,
        };
        info!(
            presented = report.presented,
            interrupted = report.interrupted,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "playback run completed"
        );
        Ok(report)
    }

    /// The iteration body: delay, present, collect the response.
    fn present_all(
        &self,
        snapshot: &[ScenarioRecord],
        presenter: &dyn Presenter,
        token: &RunToken,
    ) -> Result<(Vec<DialogResponse>, bool), PlaybackError> {
        let mut responses = Vec::with_capacity(snapshot.len());

        for (index, record) in snapshot.iter().enumerate() {
            if !token.wait(record.delay()) {
                debug!(index, "run cancelled during delay wait");
                return Ok((responses, true));
            }

            debug!(index, title = record.title(), "presenting scenario");
            let response =
                presenter
                    .show(record)
                    .map_err(|source| PlaybackError::Presenter {
                        title: record.title().to_string(),
                        source,
                    })?;
            responses.push(response);
        }

        Ok((responses, false))
    }
}
