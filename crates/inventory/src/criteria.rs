//! Filter criteria: price range, type/fuel tags and sort key.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use autolot_core::{DomainError, DomainResult, ValueObject};

use crate::numeric::parse_int;
use crate::record::VehicleRecord;

/// Inclusive price range. `max = None` means unbounded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: Option<i64>,
}

impl ValueObject for PriceRange {}

impl PriceRange {
    pub fn between(min: i64, max: i64) -> Self {
        Self { min, max: Some(max) }
    }

    pub fn at_least(min: i64) -> Self {
        Self { min, max: None }
    }

    /// Parse a price control value of the form `"min-max"`.
    ///
    /// - `""` is no filter (`Ok(None)`).
    /// - An empty `min` token is 0; an empty `max` token is unbounded.
    /// - A single token without `-` is a minimum with no upper bound.
    /// - `min > max` is a valid range that admits no price.
    /// - Extra or non-numeric tokens are `MalformedInput`; callers treat
    ///   that as no filter.
    pub fn parse(raw: &str) -> DomainResult<Option<Self>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let tokens: Vec<&str> = raw.split('-').map(str::trim).collect();
        let (min_tok, max_tok) = match tokens.as_slice() {
            [min] => (*min, ""),
            [min, max] => (*min, *max),
            _ => return Err(DomainError::malformed("price range", raw)),
        };

        let min = if min_tok.is_empty() {
            0
        } else {
            parse_int("price range", min_tok).map_err(|_| DomainError::malformed("price range", raw))?
        };
        let max = if max_tok.is_empty() {
            None
        } else {
            Some(parse_int("price range", max_tok).map_err(|_| DomainError::malformed("price range", raw))?)
        };

        Ok(Some(Self { min, max }))
    }

    /// Whether `price` falls inside the range.
    ///
    /// An unparsed price (`None`) is never excluded by the range.
    pub fn admits(&self, price: Option<i64>) -> bool {
        let Some(price) = price else {
            return true;
        };
        match self.max {
            Some(max) => self.min <= price && price <= max,
            None => price >= self.min,
        }
    }
}

/// Ordering applied to the filtered subset.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep page order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    YearNew,
    YearOld,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::YearNew => "year-new",
            SortKey::YearOld => "year-old",
        }
    }

    pub fn is_noop(&self) -> bool {
        *self == SortKey::Featured
    }

    /// Compare two records under this key.
    ///
    /// Records missing the key's numeric field order after all records that
    /// have it, so the comparison stays a total order.
    pub fn compare(&self, a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
        match self {
            SortKey::Featured => Ordering::Equal,
            SortKey::PriceLow => compare_present(a.price, b.price, false),
            SortKey::PriceHigh => compare_present(a.price, b.price, true),
            SortKey::YearNew => compare_present(a.year, b.year, true),
            SortKey::YearOld => compare_present(a.year, b.year, false),
        }
    }
}

fn compare_present<K: Ord>(a: Option<K>, b: Option<K>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "featured" => Ok(SortKey::Featured),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "year-new" => Ok(SortKey::YearNew),
            "year-old" => Ok(SortKey::YearOld),
            other => Err(DomainError::malformed("sort key", other)),
        }
    }
}

/// One snapshot of the filter controls.
///
/// Empty or absent tags are wildcards. The default value is "no filters,
/// featured order".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub price_range: Option<PriceRange>,
    #[serde(rename = "type")]
    pub body_type: Option<String>,
    pub fuel: Option<String>,
    pub sort: SortKey,
}

impl ValueObject for FilterCriteria {}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn with_body_type(mut self, body_type: impl Into<String>) -> Self {
        self.body_type = Some(body_type.into());
        self
    }

    pub fn with_fuel(mut self, fuel: impl Into<String>) -> Self {
        self.fuel = Some(fuel.into());
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// True when no predicate is active and the sort is a no-op.
    pub fn is_cleared(&self) -> bool {
        self.price_range.is_none()
            && is_wildcard(&self.body_type)
            && is_wildcard(&self.fuel)
            && self.sort.is_noop()
    }

    /// AND of the price, type and fuel predicates.
    pub fn matches(&self, record: &VehicleRecord) -> bool {
        if let Some(range) = &self.price_range {
            if !range.admits(record.price) {
                return false;
            }
        }
        tag_matches(&self.body_type, &record.body_type) && tag_matches(&self.fuel, &record.fuel)
    }
}

fn is_wildcard(tag: &Option<String>) -> bool {
    tag.as_deref().is_none_or(str::is_empty)
}

fn tag_matches(wanted: &Option<String>, actual: &str) -> bool {
    match wanted.as_deref() {
        None | Some("") => true,
        Some(wanted) => wanted == actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bounded_range() {
        assert_eq!(PriceRange::parse("0-25000"), Ok(Some(PriceRange::between(0, 25000))));
        assert_eq!(PriceRange::parse(" 25000 - 50000 "), Ok(Some(PriceRange::between(25000, 50000))));
    }

    #[test]
    fn empty_tokens_default_to_zero_and_unbounded() {
        assert_eq!(PriceRange::parse("50000-"), Ok(Some(PriceRange::at_least(50000))));
        assert_eq!(PriceRange::parse("-25000"), Ok(Some(PriceRange::between(0, 25000))));
        assert_eq!(PriceRange::parse("75000"), Ok(Some(PriceRange::at_least(75000))));
        assert_eq!(PriceRange::parse(""), Ok(None));
        assert_eq!(PriceRange::parse("   "), Ok(None));
    }

    #[test]
    fn malformed_ranges_are_errors() {
        for raw in ["abc", "1-2-3", "cheap-50000", "10-lots"] {
            let err = PriceRange::parse(raw).unwrap_err();
            assert!(err.is_malformed_input(), "{raw} should be malformed");
        }
    }

    #[test]
    fn inverted_range_admits_nothing() {
        let range = PriceRange::parse("50000-100").unwrap().unwrap();
        assert_eq!(range, PriceRange::between(50000, 100));
        for price in [0, 100, 20000, 50000, 75000] {
            assert!(!range.admits(Some(price)), "{price} should be excluded");
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = PriceRange::between(15000, 25000);
        assert!(range.admits(Some(15000)));
        assert!(range.admits(Some(25000)));
        assert!(!range.admits(Some(14999)));
        assert!(!range.admits(Some(25001)));

        let open = PriceRange::at_least(100000);
        assert!(open.admits(Some(i64::MAX)));
        assert!(!open.admits(Some(99999)));
    }

    #[test]
    fn unparsed_price_is_admitted() {
        assert!(PriceRange::between(0, 1).admits(None));
        assert!(PriceRange::at_least(i64::MAX).admits(None));
    }

    #[test]
    fn empty_tags_are_wildcards() {
        let rec = VehicleRecord::new(20000, "suv", "gas", 2021);
        assert!(FilterCriteria::new().with_body_type("").with_fuel("").matches(&rec));
        assert!(FilterCriteria::new().with_body_type("suv").matches(&rec));
        assert!(!FilterCriteria::new().with_body_type("SUV").matches(&rec));
        assert!(!FilterCriteria::new().with_fuel("electric").matches(&rec));
    }

    #[test]
    fn cleared_criteria() {
        assert!(FilterCriteria::default().is_cleared());
        assert!(FilterCriteria::new().with_body_type("").is_cleared());
        assert!(!FilterCriteria::new().sorted_by(SortKey::YearOld).is_cleared());
        assert!(!FilterCriteria::new().with_price_range(PriceRange::at_least(0)).is_cleared());
    }

    #[test]
    fn sort_key_round_trips_control_values() {
        for key in [
            SortKey::Featured,
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::YearNew,
            SortKey::YearOld,
        ] {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
            assert_eq!(serde_json::to_value(key).unwrap(), key.as_str());
        }
        assert_eq!("".parse::<SortKey>(), Ok(SortKey::Featured));
        assert!("mileage".parse::<SortKey>().is_err());
    }

    #[test]
    fn missing_sort_field_orders_last() {
        let good = VehicleRecord::new(30000, "suv", "gas", 2020);
        let bad = VehicleRecord { price: None, year: None, ..good.clone() };

        for key in [SortKey::PriceLow, SortKey::PriceHigh, SortKey::YearNew, SortKey::YearOld] {
            assert_eq!(key.compare(&good, &bad), Ordering::Less);
            assert_eq!(key.compare(&bad, &good), Ordering::Greater);
            assert_eq!(key.compare(&bad, &bad), Ordering::Equal);
        }
    }

    #[test]
    fn criteria_deserialize_with_defaults() {
        let c: FilterCriteria = serde_json::from_str(r#"{"type":"suv","sort":"price-low"}"#).unwrap();
        assert_eq!(c, FilterCriteria::new().with_body_type("suv").sorted_by(SortKey::PriceLow));
    }
}
