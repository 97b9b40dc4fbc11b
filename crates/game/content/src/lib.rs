//! Data-driven content definitions and loaders.
//!
//! This crate reads static hero content from data files:
//! - Item catalogs with per-item attribute bonuses (RON)
//! - Per-class formula constants (RON)
//! - Shared stats configuration (TOML)
//!
//! Content is consumed by runtime oracles and never appears in hero records.
//!
//! All loaders use hero-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ClassCatalog, ClassLoader, ConfigLoader, ContentFactory, ItemCatalog, ItemLoader,
};
