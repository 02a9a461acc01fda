//! Tests for audio controller idempotence
//!
//! Backend calls are counted through a mock output so start/stop lifecycle
//! can be asserted without touching the audio device.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::controller::AudioController;
use super::error::AudioError;
use super::output::AudioOutput;

#[derive(Default)]
struct Counters {
    starts: AtomicUsize,
    stops: AtomicUsize,
    last_volume: Mutex<Option<f32>>,
}

struct CountingOutput {
    counters: Arc<Counters>,
    fail_open: bool,
}

impl CountingOutput {
    fn new(counters: Arc<Counters>) -> Self {
        Self {
            counters,
            fail_open: false,
        }
    }

    fn failing(counters: Arc<Counters>) -> Self {
        Self {
            counters,
            fail_open: true,
        }
    }
}

impl AudioOutput for CountingOutput {
    fn begin_loop(&mut self, path: &Path, volume: f32) -> Result<(), AudioError> {
        if self.fail_open {
            return Err(AudioError::Open {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            });
        }
        self.counters.starts.fetch_add(1, Ordering::SeqCst);
        *self.counters.last_volume.lock().unwrap() = Some(volume);
        Ok(())
    }

    fn end(&mut self) {
        self.counters.stops.fetch_add(1, Ordering::SeqCst);
    }
}

fn counting_controller() -> (AudioController, Arc<Counters>) {
    let counters = Arc::new(Counters::default());
    let controller =
        AudioController::with_output(Box::new(CountingOutput::new(Arc::clone(&counters))));
    (controller, counters)
}

#[test]
fn start_without_source_is_a_noop() {
    let (mut controller, counters) = counting_controller();

    controller.start().unwrap();

    assert!(!controller.is_playing());
    assert_eq!(counters.starts.load(Ordering::SeqCst), 0);
}

#[test]
fn double_start_opens_a_single_loop() {
    let (mut controller, counters) = counting_controller();
    controller.configure("alarm.mp3");

    controller.start().unwrap();
    controller.start().unwrap();

    assert!(controller.is_playing());
    assert_eq!(counters.starts.load(Ordering::SeqCst), 1);
}

#[test]
fn stop_is_idempotent() {
    let (mut controller, counters) = counting_controller();
    controller.configure("alarm.mp3");

    controller.stop();
    assert_eq!(counters.stops.load(Ordering::SeqCst), 0);

    controller.start().unwrap();
    controller.start().unwrap();
    controller.stop();
    controller.stop();

    assert!(!controller.is_playing());
    assert_eq!(counters.stops.load(Ordering::SeqCst), 1);
}

#[test]
fn restart_after_stop_opens_a_new_loop() {
    let (mut controller, counters) = counting_controller();
    controller.configure("alarm.mp3");

    controller.start().unwrap();
    controller.stop();
    controller.start().unwrap();

    assert!(controller.is_playing());
    assert_eq!(counters.starts.load(Ordering::SeqCst), 2);
    assert_eq!(counters.stops.load(Ordering::SeqCst), 1);
}

#[test]
fn clear_stops_the_active_loop() {
    let (mut controller, counters) = counting_controller();
    controller.configure("alarm.mp3");
    controller.start().unwrap();

    controller.clear();

    assert!(!controller.is_playing());
    assert!(!controller.is_configured());
    assert_eq!(counters.stops.load(Ordering::SeqCst), 1);
}

#[test]
fn volume_is_scaled_to_unit_range() {
    let (mut controller, counters) = counting_controller();
    controller.configure("alarm.mp3");
    controller.set_volume(50);

    controller.start().unwrap();

    let volume = counters.last_volume.lock().unwrap().unwrap();
    assert!((volume - 0.5).abs() < f32::EPSILON);
}

#[test]
fn failed_open_leaves_controller_stopped() {
    let counters = Arc::new(Counters::default());
    let mut controller =
        AudioController::with_output(Box::new(CountingOutput::failing(Arc::clone(&counters))));
    controller.configure("missing.mp3");

    let err = controller.start().unwrap_err();
    assert!(matches!(err, AudioError::Open { .. }));
    assert!(!controller.is_playing());

    controller.stop();
    assert_eq!(counters.stops.load(Ordering::SeqCst), 0);
}
