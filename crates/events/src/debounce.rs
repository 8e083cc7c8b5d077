//! Trailing-edge debounce gate.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
    due: Instant,
    payload: T,
}

/// Coalesces bursts of triggers into a single delivery.
///
/// Each `trigger` supersedes whatever was pending and restarts the wait; the
/// payload is released by `poll` once `wait` has elapsed since the *last*
/// trigger. Only the most recent payload survives.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Record a trigger at `now`.
    ///
    /// Returns `true` when a pending payload was superseded.
    pub fn trigger(&mut self, now: Instant, payload: T) -> bool {
        let superseded = self.pending.is_some();
        if superseded {
            tracing::trace!(wait_ms = self.wait.as_millis() as u64, "debounce: superseding pending trigger");
        }
        self.pending = Some(Pending {
            due: now + self.wait,
            payload,
        });
        superseded
    }

    /// Release the pending payload if its wait has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.due => self.pending.take().map(|p| p.payload),
            _ => None,
        }
    }

    /// When the pending payload becomes due, if any.
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending payload without delivering it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }
}
