//! Binds the filter engine to the grid page: card snapshots in, debounced
//! control changes in, rendered grid out.

use std::time::{Duration, Instant};

use autolot_events::Debouncer;
use autolot_inventory::{InventoryFilterEngine, RecordIndex, VisibleView};

use crate::adapter::{CardAttributes, FilterControls, record_from_card};
use crate::render::{InventoryRenderer, render_view};

/// The inventory grid of one page view.
#[derive(Debug)]
pub struct InventoryPage<R: InventoryRenderer> {
    engine: InventoryFilterEngine,
    controls: FilterControls,
    pending: Debouncer<FilterControls>,
    renderer: R,
}

impl<R: InventoryRenderer> InventoryPage<R> {
    pub fn new(renderer: R, filter_debounce: Duration) -> Self {
        Self {
            engine: InventoryFilterEngine::new(),
            controls: FilterControls::cleared(),
            pending: Debouncer::new(filter_debounce),
            renderer,
        }
    }

    /// Snapshot the rendered cards and show all of them.
    ///
    /// Calling this again replaces the snapshot; cards from the previous one
    /// past the new end are hidden.
    pub fn on_dom_ready(&mut self, cards: &[CardAttributes]) -> usize {
        let previous = self.engine.total_count();
        self.engine.initialize(cards.iter().map(record_from_card));
        self.pending.cancel();
        self.controls = FilterControls::cleared();

        let total = self.engine.total_count();
        for stale in total..previous {
            self.renderer.hide_card(RecordIndex(stale));
        }
        render_view(&mut self.renderer, total, self.engine.visible());
        tracing::info!(cards = cards.len(), "inventory grid ready");
        self.engine.total_count()
    }

    /// A filter or sort control changed. The grid is recomputed once the
    /// debounce window passes without another change.
    pub fn on_control_change(&mut self, now: Instant, controls: FilterControls) {
        self.pending.trigger(now, controls);
    }

    /// Run any due recomputation. Returns `true` if the grid was re-rendered.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending.poll(now) {
            Some(controls) => {
                self.controls = controls;
                self.refresh();
                true
            }
            None => false,
        }
    }

    /// Reset every control and re-render immediately.
    ///
    /// A change still waiting in the debounce window is dropped, since it
    /// was read from controls that no longer hold those values.
    pub fn clear_filters(&mut self) -> VisibleView<'_> {
        self.pending.cancel();
        self.controls = FilterControls::cleared();
        self.refresh()
    }

    /// Re-read the current controls and re-render.
    pub fn refresh(&mut self) -> VisibleView<'_> {
        let criteria = self.controls.to_criteria();
        let total = self.engine.total_count();
        let view = self.engine.apply_filters(&criteria);
        render_view(&mut self.renderer, total, view);
        view
    }

    pub fn has_pending_change(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn pending_due_at(&self) -> Option<Instant> {
        self.pending.due_at()
    }

    pub fn visible_count(&self) -> usize {
        self.engine.visible_count()
    }

    pub fn visible(&self) -> VisibleView<'_> {
        self.engine.visible()
    }

    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    pub fn engine(&self) -> &InventoryFilterEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
