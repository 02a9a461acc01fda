//! Audio output backends

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use rodio::{Decoder, OutputStream, Sink, Source};
use tracing::warn;

use super::error::AudioError;

/// Sink for looped playback of a single audio source.
///
/// The controller guarantees `begin_loop` and `end` alternate; a backend
/// never sees two active loops.
pub trait AudioOutput: Send {
    /// Start looping the source until `end` is called.
    fn begin_loop(&mut self, path: &Path, volume: f32) -> Result<(), AudioError>;

    /// Stop and release the active loop, if any.
    fn end(&mut self);
}

/// rodio-backed output.
///
/// The device stream is not `Send`, so it lives on a dedicated thread;
/// closing the stop channel shuts the loop down.
#[derive(Debug, Default)]
pub struct RodioOutput {
    stop_tx: Option<mpsc::Sender<()>>,
}

impl RodioOutput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioOutput for RodioOutput {
    fn begin_loop(&mut self, path: &Path, volume: f32) -> Result<(), AudioError> {
        let file = File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let path = path.to_path_buf();

        thread::spawn(move || {
            let Ok((_stream, handle)) = OutputStream::try_default() else {
                warn!("no default audio output device");
                return;
            };
            let Ok(source) = Decoder::new(BufReader::new(file)) else {
                warn!(path = %path.display(), "could not decode audio source");
                return;
            };
            let Ok(sink) = Sink::try_new(&handle) else {
                return;
            };

            sink.set_volume(volume);
            sink.append(source.repeat_infinite());

            // recv returns once the controller drops the sender
            let _ = stop_rx.recv();
            sink.stop();
        });

        self.stop_tx = Some(stop_tx);
        Ok(())
    }

    fn end(&mut self) {
        self.stop_tx.take();
    }
}
