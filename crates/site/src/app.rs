//! The whole interaction layer for one page view.

use std::collections::BTreeSet;
use std::time::Instant;

use serde::Deserialize;

use autolot_events::UiEvent;
use autolot_observability::{ErrorReport, RejectionReport, report_script_error, report_unhandled_rejection};

use crate::adapter::{CardAttributes, FilterControls};
use crate::config::SiteConfig;
use crate::contact::{ContactError, ContactForm, ContactSubmission, FieldErrors};
use crate::inventory_page::InventoryPage;
use crate::lazy_images::{ImageId, LazyImage, LazyImageLoader, Span};
use crate::load_more::LoadMoreButton;
use crate::nav::{ClickTarget, MobileNav};
use crate::render::InventoryRenderer;
use crate::scroll::{ScrollRequest, ScrollWatcher, resolve_anchor};

/// What the page looked like at DOM-ready.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DomSnapshot {
    /// `.vehicle-grid .card` data attributes, in page order. `None` when the
    /// page has no `.vehicle-grid`; an empty grid is `Some(vec![])`.
    pub cards: Option<Vec<CardAttributes>>,
    /// `img` elements in page order.
    pub images: Vec<LazyImage>,
    /// Element ids that in-page links may target.
    pub anchor_ids: Vec<String>,
}

/// Events a host forwards from its DOM listeners.
#[derive(Debug, Clone)]
pub enum SiteEvent {
    DomReady(DomSnapshot),
    FilterChanged(FilterControls),
    ClearFilters,
    MenuToggle,
    MenuKey(String),
    NavLinkActivated,
    DocumentClick(ClickTarget),
    KeyDown(String),
    Resize { width_px: u32 },
    Scroll,
    AnimationFrame,
    AnchorClick { href: String },
    ContactSubmit(ContactForm),
    LoadMore,
    ViewportChanged { viewport: Span, bounds: Vec<(ImageId, Span)> },
    ScriptError(ErrorReport),
    UnhandledRejection(RejectionReport),
}

impl UiEvent for SiteEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SiteEvent::DomReady(_) => "page.dom_ready",
            SiteEvent::FilterChanged(_) => "inventory.filter_changed",
            SiteEvent::ClearFilters => "inventory.filters_cleared",
            SiteEvent::MenuToggle => "nav.toggle",
            SiteEvent::MenuKey(_) => "nav.menu_key",
            SiteEvent::NavLinkActivated => "nav.link_activated",
            SiteEvent::DocumentClick(_) => "document.click",
            SiteEvent::KeyDown(_) => "document.keydown",
            SiteEvent::Resize { .. } => "window.resize",
            SiteEvent::Scroll => "window.scroll",
            SiteEvent::AnimationFrame => "window.animation_frame",
            SiteEvent::AnchorClick { .. } => "link.anchor_click",
            SiteEvent::ContactSubmit(_) => "contact.submit",
            SiteEvent::LoadMore => "inventory.load_more",
            SiteEvent::ViewportChanged { .. } => "images.viewport_changed",
            SiteEvent::ScriptError(_) => "window.error",
            SiteEvent::UnhandledRejection(_) => "window.unhandled_rejection",
        }
    }
}

/// How the host should follow up on a dispatched event.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Nothing for the host to do.
    Done,
    /// Cancel the DOM event's default action.
    PreventDefault,
    /// Schedule one animation-frame callback.
    RequestFrame,
    /// Cancel the default navigation and scroll.
    ScrollTo(ScrollRequest),
    /// Contact form rejected; show these messages.
    Invalid(FieldErrors),
    ImagesLoaded(Vec<ImageId>),
}

/// Owns every piece of page state; the host only forwards events and timer
/// ticks.
#[derive(Debug)]
pub struct Site<R: InventoryRenderer> {
    config: SiteConfig,
    inventory: Option<InventoryPage<R>>,
    renderer: Option<R>,
    nav: MobileNav,
    contact: ContactSubmission,
    load_more: LoadMoreButton,
    images: LazyImageLoader,
    scroll: ScrollWatcher,
    anchors: BTreeSet<String>,
}

impl<R: InventoryRenderer> Site<R> {
    pub fn new(config: SiteConfig, renderer: R) -> Self {
        let site = Self {
            nav: MobileNav::new(config.nav_breakpoint_px, config.resize_debounce()),
            contact: ContactSubmission::new(config.submit_delay(), config.success_reset()),
            load_more: LoadMoreButton::new(config.load_more_delay()),
            images: LazyImageLoader::new(Vec::new(), config.lazy_threshold, config.lazy_root_margin_px),
            scroll: ScrollWatcher::new(),
            anchors: BTreeSet::new(),
            inventory: None,
            renderer: Some(renderer),
            config,
        };
        tracing::info!("site interaction layer loaded");
        site
    }

    pub fn dispatch(&mut self, now: Instant, event: SiteEvent) -> Response {
        tracing::trace!(event = event.event_type(), "dispatch");
        match event {
            SiteEvent::DomReady(snapshot) => {
                self.on_dom_ready(snapshot);
                Response::Done
            }
            SiteEvent::FilterChanged(controls) => {
                if let Some(page) = &mut self.inventory {
                    page.on_control_change(now, controls);
                }
                Response::Done
            }
            SiteEvent::ClearFilters => {
                if let Some(page) = &mut self.inventory {
                    page.clear_filters();
                }
                Response::Done
            }
            SiteEvent::MenuToggle => {
                self.nav.toggle();
                Response::Done
            }
            SiteEvent::MenuKey(key) => {
                if self.nav.on_menu_key(&key) {
                    Response::PreventDefault
                } else {
                    Response::Done
                }
            }
            SiteEvent::NavLinkActivated => {
                self.nav.on_link_activated();
                Response::Done
            }
            SiteEvent::DocumentClick(target) => {
                self.nav.on_document_click(target);
                Response::Done
            }
            SiteEvent::KeyDown(key) => {
                self.nav.on_key(&key);
                Response::Done
            }
            SiteEvent::Resize { width_px } => {
                self.nav.on_resize(now, width_px);
                Response::Done
            }
            SiteEvent::Scroll => {
                if self.scroll.on_scroll() {
                    Response::RequestFrame
                } else {
                    Response::Done
                }
            }
            SiteEvent::AnimationFrame => {
                self.scroll.on_frame();
                Response::Done
            }
            SiteEvent::AnchorClick { href } => {
                match resolve_anchor(&href, |id| self.anchors.contains(id)) {
                    Some(request) => Response::ScrollTo(request),
                    None => Response::Done,
                }
            }
            SiteEvent::ContactSubmit(form) => match self.contact.submit(now, form) {
                Ok(_) => Response::PreventDefault,
                Err(ContactError::Invalid(errors)) => Response::Invalid(errors),
                Err(ContactError::Busy) => Response::PreventDefault,
            },
            SiteEvent::LoadMore => {
                self.load_more.click(now);
                Response::Done
            }
            SiteEvent::ViewportChanged { viewport, bounds } => {
                let loaded = self.images.on_viewport(viewport, &bounds);
                if loaded.is_empty() {
                    Response::Done
                } else {
                    Response::ImagesLoaded(loaded)
                }
            }
            SiteEvent::ScriptError(report) => {
                report_script_error(&report);
                Response::Done
            }
            SiteEvent::UnhandledRejection(report) => {
                if report_unhandled_rejection(&report) {
                    Response::PreventDefault
                } else {
                    Response::Done
                }
            }
        }
    }

    /// Run every timer that is due at `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(page) = &mut self.inventory {
            page.tick(now);
        }
        self.nav.tick(now);
        self.contact.tick(now);
        self.load_more.tick(now);
    }

    fn on_dom_ready(&mut self, snapshot: DomSnapshot) {
        self.anchors = snapshot.anchor_ids.into_iter().collect();
        self.images = LazyImageLoader::new(
            snapshot.images,
            self.config.lazy_threshold,
            self.config.lazy_root_margin_px,
        );

        let Some(cards) = snapshot.cards else {
            // No grid on this page. A grid already bound keeps its renderer
            // but loses its cards.
            if let Some(page) = &mut self.inventory {
                page.on_dom_ready(&[]);
            }
            return;
        };
        if let Some(page) = &mut self.inventory {
            page.on_dom_ready(&cards);
            return;
        }
        let Some(renderer) = self.renderer.take() else {
            return;
        };
        let mut page = InventoryPage::new(renderer, self.config.filter_debounce());
        page.on_dom_ready(&cards);
        self.inventory = Some(page);
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The inventory grid, if the page has one.
    pub fn inventory(&self) -> Option<&InventoryPage<R>> {
        self.inventory.as_ref()
    }

    pub fn nav(&self) -> &MobileNav {
        &self.nav
    }

    pub fn contact(&self) -> &ContactSubmission {
        &self.contact
    }

    pub fn load_more(&self) -> &LoadMoreButton {
        &self.load_more
    }

    pub fn images(&self) -> &LazyImageLoader {
        &self.images
    }
}
