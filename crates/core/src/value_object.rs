//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. In this
/// workspace, filter criteria, price ranges and parsed form input are value
/// objects: a host re-reads them from controls on every event and never
/// mutates one in place.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct PriceRange { min: i64, max: Option<i64> }
///
/// impl ValueObject for PriceRange {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
