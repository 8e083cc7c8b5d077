//! `autolot-site`
//!
//! **Responsibility:** the browser-side interaction layer of the dealership
//! site, expressed as host-independent state.
//!
//! A host page forwards DOM events as [`SiteEvent`]s and timer callbacks as
//! `tick`s; the crate answers with [`Response`]s and renders the inventory
//! grid through an [`InventoryRenderer`].

pub mod adapter;
pub mod app;
pub mod config;
pub mod contact;
pub mod inventory_page;
pub mod lazy_images;
pub mod load_more;
pub mod nav;
pub mod render;
pub mod scroll;

pub use adapter::{CardAttributes, FilterControls, record_from_card};
pub use app::{DomSnapshot, Response, Site, SiteEvent};
pub use config::{ConfigError, SiteConfig};
pub use contact::{ContactError, ContactForm, ContactSubmission, Field, FieldErrors, SubmissionState};
pub use inventory_page::InventoryPage;
pub use lazy_images::{ImageId, LazyImage, LazyImageLoader, Span};
pub use load_more::LoadMoreButton;
pub use nav::{ClickTarget, MobileNav};
pub use render::{GridState, InventoryRenderer, render_view};
pub use scroll::{ScrollRequest, ScrollWatcher, resolve_anchor};
