//! Traits describing read-only content.
//!
//! Oracles expose static item definitions and per-class formula constants.
//! They are injected into the runtime services so the stat pipeline never
//! couples to a concrete content source.
mod classes;
mod items;

pub use classes::ClassOracle;
pub use items::{ItemCategory, ItemDefinition, ItemOracle};
