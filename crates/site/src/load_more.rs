//! "Load more vehicles" button.

use std::time::{Duration, Instant};

use autolot_events::Timer;

/// Simulated paging button: a click disables it for `delay`, then it comes
/// back. Fetching more cards is up to the host.
#[derive(Debug)]
pub struct LoadMoreButton {
    timer: Timer,
    delay: Duration,
    requests: u32,
}

impl LoadMoreButton {
    pub fn new(delay: Duration) -> Self {
        Self {
            timer: Timer::new(),
            delay,
            requests: 0,
        }
    }

    /// Returns `false` if a load is already running.
    pub fn click(&mut self, now: Instant) -> bool {
        if self.is_loading() {
            return false;
        }
        self.timer.start(now, self.delay);
        true
    }

    /// Returns `true` when a load finished at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.timer.fire(now) {
            return false;
        }
        self.requests += 1;
        tracing::info!(requests = self.requests, "loading more vehicles");
        true
    }

    pub fn is_loading(&self) -> bool {
        self.timer.is_armed()
    }

    /// Completed load requests this page view.
    pub fn requests(&self) -> u32 {
        self.requests
    }

    pub fn label(&self) -> &'static str {
        if self.is_loading() {
            "Loading..."
        } else {
            "Load More Vehicles"
        }
    }

    pub fn disabled(&self) -> bool {
        self.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_disables_until_delay_passes() {
        let t0 = Instant::now();
        let mut button = LoadMoreButton::new(Duration::from_millis(1500));
        assert_eq!(button.label(), "Load More Vehicles");

        assert!(button.click(t0));
        assert!(button.disabled());
        assert_eq!(button.label(), "Loading...");
        assert!(!button.click(t0 + Duration::from_millis(10)));

        assert!(!button.tick(t0 + Duration::from_millis(1499)));
        assert!(button.tick(t0 + Duration::from_millis(1500)));
        assert!(!button.disabled());
        assert_eq!(button.requests(), 1);
        assert!(!button.tick(t0 + Duration::from_millis(3000)));
    }
}
