//! Guards for the two interaction hazards of a live filter UI: stale
//! responses overwriting fresher state, and keystroke-driven request storms.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::config;

// ---------------------------------------------------------------------------
// GenerationGuard
// ---------------------------------------------------------------------------

/// Discards stale asynchronous responses.
///
/// Each dispatched request captures a generation from [`begin`](Self::begin);
/// when its response arrives, [`accept`](Self::accept) hands the value back
/// only if no newer request has been dispatched since. Without this, rapid
/// filter changes can let an older in-flight fetch resolve after a newer one
/// and overwrite it.
#[derive(Debug, Default)]
pub struct GenerationGuard {
    latest: AtomicU64,
}

impl GenerationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a new dispatch and return its generation.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `generation` is still the latest dispatched one.
    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == generation
    }

    /// Accept a response tagged with `generation`, or discard it as stale.
    pub fn accept<T>(&self, generation: u64, value: T) -> Option<T> {
        if self.is_current(generation) {
            Some(value)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Debouncer
// ---------------------------------------------------------------------------

/// Quiet-period debouncer for free-text search input.
///
/// Each keystroke [`submit`](Self::submit)s the current text; the text is
/// only released by [`poll`](Self::poll) once the configured delay has
/// elapsed with no further submissions. Time is passed in by the caller so
/// tests stay deterministic.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(config::DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record the latest text, restarting the quiet period.
    pub fn submit(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some((text.into(), now));
    }

    /// Release the pending text if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, submitted)) if now.duration_since(*submitted) >= self.delay => {
                self.pending.take().map(|(text, _)| text)
            }
            _ => None,
        }
    }

    /// Release the pending text immediately, e.g. on an explicit submit.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(text, _)| text)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
