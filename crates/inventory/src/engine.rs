//! The inventory filter engine: full candidate set in, ordered visible
//! subset out.

use crate::criteria::FilterCriteria;
use crate::record::{RecordIndex, VehicleRecord};

/// Holds the full candidate set and the most recently derived visible subset.
///
/// Every `apply_filters` re-evaluates the criteria against every record and
/// replaces the visible subset wholesale; nothing is carried over between
/// calls except the (immutable) full set.
#[derive(Debug, Clone, Default)]
pub struct InventoryFilterEngine {
    records: Vec<VehicleRecord>,
    visible: Vec<RecordIndex>,
}

impl InventoryFilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = VehicleRecord>) -> Self {
        let mut engine = Self::new();
        engine.initialize(records);
        engine
    }

    /// Capture the full candidate set; every record starts visible.
    ///
    /// Replaces any prior state.
    pub fn initialize(&mut self, records: impl IntoIterator<Item = VehicleRecord>) {
        self.records = records.into_iter().collect();
        self.visible = (0..self.records.len()).map(RecordIndex).collect();
        tracing::debug!(total = self.records.len(), "inventory initialized");
    }

    /// Derive the visible subset for `criteria`.
    pub fn apply_filters(&mut self, criteria: &FilterCriteria) -> VisibleView<'_> {
        let records = &self.records;

        let mut visible: Vec<RecordIndex> = records
            .iter()
            .enumerate()
            .filter(|(_, rec)| criteria.matches(rec))
            .map(|(i, _)| RecordIndex(i))
            .collect();

        // `sort_by` is stable: equal keys keep page order.
        if !criteria.sort.is_noop() {
            visible.sort_by(|a, b| criteria.sort.compare(&records[a.0], &records[b.0]));
        }

        self.visible = visible;
        tracing::debug!(
            total = self.records.len(),
            visible = self.visible.len(),
            sort = %criteria.sort,
            "inventory filters applied"
        );
        self.visible()
    }

    /// Reset to "no filters, featured order": the full set in page order.
    pub fn clear_filters(&mut self) -> VisibleView<'_> {
        self.apply_filters(&FilterCriteria::default())
    }

    /// The most recently derived visible subset.
    pub fn visible(&self) -> VisibleView<'_> {
        VisibleView {
            records: &self.records,
            order: &self.visible,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Whether the "no results" indicator should show.
    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn get(&self, index: RecordIndex) -> Option<&VehicleRecord> {
        self.records.get(index.0)
    }
}

/// Borrowed, ordered view of the visible subset.
#[derive(Debug, Clone, Copy)]
pub struct VisibleView<'a> {
    records: &'a [VehicleRecord],
    order: &'a [RecordIndex],
}

impl<'a> VisibleView<'a> {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Identities of the visible records, in display order.
    pub fn indices(&self) -> &'a [RecordIndex] {
        self.order
    }

    pub fn iter(self) -> impl Iterator<Item = (RecordIndex, &'a VehicleRecord)> + 'a {
        let records = self.records;
        self.order.iter().map(move |&i| (i, &records[i.0]))
    }

    pub fn records(&self) -> Vec<&'a VehicleRecord> {
        self.iter().map(|(_, rec)| rec).collect()
    }

    pub fn contains(&self, index: RecordIndex) -> bool {
        self.order.contains(&index)
    }
}
