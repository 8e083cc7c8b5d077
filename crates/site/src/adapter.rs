//! Maps DOM-shaped strings (card data attributes, control values) onto the
//! plain inventory types.
//!
//! Nothing here fails: malformed input is logged and replaced with the
//! fail-open value (`None` for a record field, "no filter" for a control).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use autolot_inventory::{FilterCriteria, PriceRange, SortKey, VehicleRecord, parse_int};

/// The `data-*` attributes of one vehicle card, keyed by dataset name
/// (`price`, `type`, `fuel`, `year`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardAttributes(BTreeMap<String, String>);

impl CardAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from attribute pairs; a leading `data-` is stripped from names.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut attrs = Self::new();
        for (k, v) in pairs {
            attrs.set(k.as_ref(), v);
        }
        attrs
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let key = name.strip_prefix("data-").unwrap_or(name);
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let key = name.strip_prefix("data-").unwrap_or(name);
        self.0.get(key).map(String::as_str)
    }
}

/// Snapshot a card into a [`VehicleRecord`].
pub fn record_from_card(card: &CardAttributes) -> VehicleRecord {
    VehicleRecord {
        price: numeric_attr(card, "price"),
        body_type: card.get("type").unwrap_or_default().to_string(),
        fuel: card.get("fuel").unwrap_or_default().to_string(),
        year: numeric_attr(card, "year").and_then(|year| i32::try_from(year).ok()),
    }
}

fn numeric_attr(card: &CardAttributes, field: &'static str) -> Option<i64> {
    let raw = card.get(field).unwrap_or_default();
    match parse_int(field, raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(%err, "card attribute is not numeric; it will not be filtered on");
            None
        }
    }
}

/// Raw values of the four filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterControls {
    /// `#priceFilter`, e.g. `"0-25000"` or `"50000-"`.
    pub price: String,
    /// `#typeFilter`
    #[serde(rename = "type")]
    pub body_type: String,
    /// `#fuelFilter`
    pub fuel: String,
    /// `#sortBy`
    pub sort: String,
}

impl Default for FilterControls {
    fn default() -> Self {
        Self::cleared()
    }
}

impl FilterControls {
    /// Control values after "clear filters".
    pub fn cleared() -> Self {
        Self {
            price: String::new(),
            body_type: String::new(),
            fuel: String::new(),
            sort: SortKey::Featured.as_str().to_string(),
        }
    }

    /// Read the controls into criteria.
    pub fn to_criteria(&self) -> FilterCriteria {
        let price_range = PriceRange::parse(&self.price).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring price filter");
            None
        });
        let sort = self.sort.parse().unwrap_or_else(|err| {
            tracing::warn!(%err, "unknown sort option; keeping page order");
            SortKey::Featured
        });

        FilterCriteria {
            price_range,
            body_type: non_empty(&self.body_type),
            fuel: non_empty(&self.fuel),
            sort,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
