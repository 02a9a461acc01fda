//! Tests for run token waits

use std::thread;
use std::time::{Duration, Instant};

use super::token::RunToken;

#[test]
fn zero_wait_returns_immediately() {
    let token = RunToken::new();
    assert!(token.wait(Duration::ZERO));
}

#[test]
fn uncancelled_wait_lasts_the_full_duration() {
    let token = RunToken::new();
    let started = Instant::now();

    assert!(token.wait(Duration::from_millis(80)));
    assert!(started.elapsed() >= Duration::from_millis(80));
}

#[test]
fn cancel_wakes_a_waiting_thread_early() {
    let token = RunToken::new();
    let waiter = token.clone();

    let handle = thread::spawn(move || {
        let started = Instant::now();
        let completed = waiter.wait(Duration::from_secs(5));
        (completed, started.elapsed())
    });

    thread::sleep(Duration::from_millis(30));
    token.cancel();

    let (completed, elapsed) = handle.join().unwrap();
    assert!(!completed);
    assert!(elapsed < Duration::from_secs(5));
    assert!(token.is_cancelled());
}

#[test]
fn cancelled_token_never_waits() {
    let token = RunToken::new();
    token.cancel();

    let started = Instant::now();
    assert!(!token.wait(Duration::from_millis(200)));
    assert!(started.elapsed() < Duration::from_millis(200));
}
