use serde::{Deserialize, Serialize};

use autolot_core::ValueObject;

/// Position of a record in the full candidate list.
///
/// This is the record's identity: the engine never reorders or mutates the
/// full list, so an index stays valid for the lifetime of a page view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordIndex(pub usize);

impl core::fmt::Display for RecordIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only snapshot of one rendered vehicle card.
///
/// `price` and `year` are `None` when the card attribute could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub price: Option<i64>,
    #[serde(rename = "type")]
    pub body_type: String,
    pub fuel: String,
    pub year: Option<i32>,
}

impl ValueObject for VehicleRecord {}

impl VehicleRecord {
    pub fn new(price: i64, body_type: impl Into<String>, fuel: impl Into<String>, year: i32) -> Self {
        Self {
            price: Some(price),
            body_type: body_type.into(),
            fuel: fuel.into(),
            year: Some(year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_body_type_as_type() {
        let rec = VehicleRecord::new(20000, "suv", "gas", 2021);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "suv");
        assert_eq!(json["price"], 20000);

        let back: VehicleRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn missing_price_serializes_as_null() {
        let rec = VehicleRecord {
            price: None,
            ..VehicleRecord::new(0, "sedan", "gas", 2019)
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json["price"].is_null());
        assert_eq!(RecordIndex(3).to_string(), "#3");
    }
}
