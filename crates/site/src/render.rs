//! Render collaborator for the inventory grid.

use serde::Serialize;

use autolot_inventory::{RecordIndex, VisibleView};

/// What the grid page can do with a recomputed view.
pub trait InventoryRenderer {
    fn hide_card(&mut self, index: RecordIndex);

    /// Show a card. Called in display order.
    fn show_card(&mut self, index: RecordIndex);

    /// Update the `#vehicleCount` text.
    fn set_count(&mut self, count: usize);

    /// Show or hide the `#noResults` message.
    fn set_no_results(&mut self, shown: bool);
}

/// Push a view to a renderer: hide every card, show the visible ones in
/// order, then update the no-results flag and the count.
pub fn render_view<R: InventoryRenderer + ?Sized>(renderer: &mut R, total: usize, view: VisibleView<'_>) {
    for i in 0..total {
        renderer.hide_card(RecordIndex(i));
    }
    for &index in view.indices() {
        renderer.show_card(index);
    }
    renderer.set_no_results(view.is_empty());
    renderer.set_count(view.len());
}

/// In-memory grid state; what a page would look like after rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GridState {
    displayed: Vec<bool>,
    order: Vec<RecordIndex>,
    count: usize,
    no_results: bool,
}

impl GridState {
    /// A grid of `cards` cards, all displayed.
    pub fn with_cards(cards: usize) -> Self {
        Self {
            displayed: vec![true; cards],
            order: (0..cards).map(RecordIndex).collect(),
            count: cards,
            no_results: false,
        }
    }

    pub fn is_displayed(&self, index: RecordIndex) -> bool {
        self.displayed.get(index.0).copied().unwrap_or(false)
    }

    /// Displayed cards in the order they were shown.
    pub fn order(&self) -> &[RecordIndex] {
        &self.order
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn no_results(&self) -> bool {
        self.no_results
    }
}

impl InventoryRenderer for GridState {
    fn hide_card(&mut self, index: RecordIndex) {
        if index.0 >= self.displayed.len() {
            self.displayed.resize(index.0 + 1, false);
        }
        self.displayed[index.0] = false;
        self.order.retain(|&i| i != index);
    }

    fn show_card(&mut self, index: RecordIndex) {
        if index.0 >= self.displayed.len() {
            self.displayed.resize(index.0 + 1, false);
        }
        self.displayed[index.0] = true;
        self.order.retain(|&i| i != index);
        self.order.push(index);
    }

    fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    fn set_no_results(&mut self, shown: bool) {
        self.no_results = shown;
    }
}
