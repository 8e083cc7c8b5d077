//! Mobile navigation menu.

use std::time::{Duration, Instant};

use autolot_events::Debouncer;

/// Where a document-level click landed, relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the `.nav-links` list.
    NavLinks,
    /// On (or inside) the `.menu` icon.
    MenuIcon,
    Elsewhere,
}

/// Open/closed state of the mobile menu, plus the derived attributes the
/// page mirrors onto the DOM.
#[derive(Debug)]
pub struct MobileNav {
    open: bool,
    breakpoint_px: u32,
    resize: Debouncer<u32>,
}

impl MobileNav {
    pub fn new(breakpoint_px: u32, resize_debounce: Duration) -> Self {
        Self {
            open: false,
            breakpoint_px,
            resize: Debouncer::new(resize_debounce),
        }
    }

    /// Click or touch on the menu icon.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        tracing::debug!(open = self.open, "mobile menu toggled");
        self.open
    }

    /// Key press on the focused menu icon. Returns `true` when handled, in
    /// which case the default action should be prevented.
    pub fn on_menu_key(&mut self, key: &str) -> bool {
        match key {
            "Enter" | " " => {
                self.toggle();
                true
            }
            _ => false,
        }
    }

    /// A navigation link was clicked or tapped.
    pub fn on_link_activated(&mut self) {
        self.close();
    }

    pub fn on_document_click(&mut self, target: ClickTarget) {
        if self.open && target == ClickTarget::Elsewhere {
            self.close();
        }
    }

    /// Document-level key press.
    pub fn on_key(&mut self, key: &str) {
        if key == "Escape" && self.open {
            self.close();
        }
    }

    pub fn on_resize(&mut self, now: Instant, width_px: u32) {
        self.resize.trigger(now, width_px);
    }

    /// Apply a settled resize. Widening past the breakpoint closes the menu.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.resize.poll(now) {
            Some(width) if width > self.breakpoint_px => {
                self.close();
                true
            }
            _ => false,
        }
    }

    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("mobile menu closed");
        }
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// `aria-expanded` on the menu icon.
    pub fn aria_expanded(&self) -> bool {
        self.open
    }

    /// `aria-hidden` on the link list.
    pub fn aria_hidden(&self) -> bool {
        !self.open
    }

    /// Whether the body carries `menu-open` (page scrolling disabled).
    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }
}
