//! `autolot-core`: shared building blocks for the dealership site layer.
//!
//! This crate contains **pure** primitives (no DOM, no timers, no IO).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::InquiryId;
pub use value_object::ValueObject;
