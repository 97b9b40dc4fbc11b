//! Deterministic hero attribute types and formulas.
//!
//! `hero-core` defines the canonical data model (heroes, equipment, items,
//! class constants) and the pure pipeline that turns them into a
//! [`DerivedAttributes`] snapshot. Nothing here performs I/O, takes locks, or
//! logs; caching and session state live in the runtime crate, which depends on
//! the types re-exported here.
pub mod config;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use config::StatsConfig;
pub use env::{ClassOracle, ItemCategory, ItemDefinition, ItemOracle};
pub use error::{ErrorSeverity, GameError, ResolutionIssue};
pub use state::{ClassId, EquipmentSlot, HeroEquipment, HeroId, HeroRecord, ItemId};
pub use stats::{
    AttributeBonuses, AttributeDelta, AttributeFormula, BaseStats, ClassFormulaConstants,
    DerivedAttributes, EquipmentBonusResolver, EquipmentResolution, PrimaryAttributes, calculate,
};
