//! Run tokens and cancellable waits

use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Cancellation token for one playback run.
///
/// The engine sleeps between records by waiting on its token, so a
/// `cancel` from another thread wakes the worker immediately instead of
/// leaving it parked in a fixed sleep.
#[derive(Debug, Clone, Default)]
pub struct RunToken {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: Mutex<bool>,
    signal: Condvar,
}

impl RunToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the run to stop before its next presentation.
    pub fn cancel(&self) {
        *self.lock() = true;
        self.inner.signal.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.lock()
    }

    /// Wait up to `duration`, returning early when the token is cancelled.
    ///
    /// Returns `true` when the full duration elapsed uncancelled.
    pub fn wait(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        let mut cancelled = self.lock();

        loop {
            if *cancelled {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }

            let (guard, _timeout) = self
                .inner
                .signal
                .wait_timeout(cancelled, deadline - now)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            cancelled = guard;
        }
    }

    fn lock(&self) -> MutexGuard<'_, bool> {
        self.inner
            .cancelled
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
