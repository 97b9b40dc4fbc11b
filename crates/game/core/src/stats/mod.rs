//! Stat System - single-pass attribute derivation.
//!
//! # Pipeline
//!
//! ```text
//! [ BaseStats ] + [ Equipment bonuses ] + [ Temporary overlay ]
//!                        ↓
//!              [ Final primary attributes ]
//!                        ↓  × ClassFormulaConstants
//!                [ DerivedAttributes ]
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: Only base stats and equipment are persisted; everything else is derived
//! 2. **Additive bonuses**: Equipment and overlays are plain sums, order-independent
//! 3. **Linear formulas**: Every derived value is one linear combination, no iteration
//! 4. **Fail closed**: Unknown class constants produce [`DerivedAttributes::EMPTY`]
//! 5. **Immutable snapshots**: A change always produces a new snapshot

pub mod bonus;
pub mod core;
pub mod derived;
pub mod equipment;
pub mod formula;

pub use self::core::{BaseStats, PrimaryAttributes};
pub use bonus::AttributeBonuses;
pub use derived::{AttributeDelta, DerivedAttributes};
pub use equipment::{EquipmentBonusResolver, EquipmentResolution};
pub use formula::{AttributeFormula, ClassFormulaConstants, calculate};
