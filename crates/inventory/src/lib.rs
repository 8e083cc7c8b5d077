//! Inventory filter/sort/count subsystem.
//!
//! Pure, deterministic logic over plain values (no DOM, no timers). A host
//! adapter turns card attributes and control values into [`VehicleRecord`]s
//! and [`FilterCriteria`]; the [`InventoryFilterEngine`] derives the visible
//! subset from them.

pub mod criteria;
pub mod engine;
pub mod numeric;
pub mod record;

pub use criteria::{FilterCriteria, PriceRange, SortKey};
pub use engine::{InventoryFilterEngine, VisibleView};
pub use numeric::parse_int;
pub use record::{RecordIndex, VehicleRecord};
