//! In-page anchor scrolling and scroll-event throttling.

use autolot_events::FrameThrottle;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    Start,
}

/// A request for the host to scroll an element into view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrollRequest {
    pub target_id: String,
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

/// Resolve a clicked in-page link.
///
/// `Some` means the default navigation should be prevented and the request
/// carried out; `None` leaves the click alone (not an anchor, or no such
/// target on the page).
pub fn resolve_anchor(href: &str, target_exists: impl Fn(&str) -> bool) -> Option<ScrollRequest> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || !target_exists(id) {
        return None;
    }
    Some(ScrollRequest {
        target_id: id.to_string(),
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::Start,
    })
}

/// Scroll listener state: scroll events collapse into at most one pending
/// animation-frame callback.
#[derive(Debug, Default)]
pub struct ScrollWatcher {
    throttle: FrameThrottle,
    frames: u64,
}

impl ScrollWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the host should request an animation frame.
    pub fn on_scroll(&mut self) -> bool {
        self.throttle.request()
    }

    pub fn on_frame(&mut self) {
        if self.throttle.is_ticking() {
            self.frames += 1;
        }
        self.throttle.on_frame();
    }

    /// Frame callbacks that ran for a scroll.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_has(id: &str) -> bool {
        matches!(id, "inventory" | "contact")
    }

    #[test]
    fn resolves_existing_anchor() {
        let req = resolve_anchor("#inventory", page_has).unwrap();
        assert_eq!(req.target_id, "inventory");
        assert_eq!(req.behavior, ScrollBehavior::Smooth);
        assert_eq!(req.block, ScrollBlock::Start);
    }

    #[test]
    fn leaves_other_links_alone() {
        assert_eq!(resolve_anchor("#", page_has), None);
        assert_eq!(resolve_anchor("#missing", page_has), None);
        assert_eq!(resolve_anchor("/about#contact", page_has), None);
    }

    #[test]
    fn scroll_bursts_share_one_frame() {
        let mut watcher = ScrollWatcher::new();
        assert!(watcher.on_scroll());
        assert!(!watcher.on_scroll());
        watcher.on_frame();
        assert!(watcher.on_scroll());
        watcher.on_frame();
        watcher.on_frame();
        assert_eq!(watcher.frames(), 2);
    }
}
