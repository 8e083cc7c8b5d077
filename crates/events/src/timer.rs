//! One-shot timer.

use std::time::{Duration, Instant};

/// A one-shot deadline, armed with `start` and consumed by `fire`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    due: Option<Instant>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timer to fire `delay` after `now`.
    pub fn start(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    /// Returns `true` exactly once, the first time it is called at or after
    /// the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    pub fn due_at(&self) -> Option<Instant> {
        self.due
    }
}
