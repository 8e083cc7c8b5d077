//! Animation-frame throttle.

/// Allows at most one outstanding frame callback.
///
/// A scroll listener calls [`FrameThrottle::request`] on every event and
/// only schedules a frame callback when it returns `true`; the callback
/// calls [`FrameThrottle::on_frame`] to reopen the gate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameThrottle {
    ticking: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn on_frame(&mut self) {
        self.ticking = false;
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_callback_per_frame() {
        let mut throttle = FrameThrottle::new();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());

        throttle.on_frame();
        assert!(!throttle.is_ticking());
        assert!(throttle.request());
    }
}
