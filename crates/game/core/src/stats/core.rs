//! Core Stats - the persisted primary attributes.
//!
//! Base stats (STR, DEX, ARM, VIT) are the Single Source of Truth (SSOT)
//! and the only attributes that are permanently stored. Leveling and
//! attribute-point systems outside this crate are their only writers.
//!
//! Final = Base + Equipment + Temporary

use super::bonus::AttributeBonuses;

/// The four primary attributes that define a hero.
///
/// - **STR** (Strength): Blunt/slashing damage, penetration, block power
/// - **DEX** (Dexterity): Stamina, slashing/piercing damage, movement speed
/// - **ARM** (Armor): All three defenses
/// - **VIT** (Vitality): Maximum health
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub strength: u32,
    pub dexterity: u32,
    pub armor: u32,
    pub vitality: u32,
}

impl BaseStats {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create new base stats with specified values
    pub const fn new(strength: u32, dexterity: u32, armor: u32, vitality: u32) -> Self {
        Self {
            strength,
            dexterity,
            armor,
            vitality,
        }
    }
}

/// Primary attributes after every additive bonus has been applied.
///
/// NEVER stored - always recomputed from base stats and bonuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimaryAttributes {
    pub strength: i32,
    pub dexterity: i32,
    pub armor: i32,
    pub vitality: i32,
}

impl PrimaryAttributes {
    pub const ZERO: Self = Self {
        strength: 0,
        dexterity: 0,
        armor: 0,
        vitality: 0,
    };

    /// Compute final primaries from base stats and any number of bonus layers.
    ///
    /// Arithmetic saturates at the `i32` bounds instead of wrapping.
    pub fn compute<'a>(
        base: &BaseStats,
        layers: impl IntoIterator<Item = &'a AttributeBonuses>,
    ) -> Self {
        let mut total = Self {
            strength: widen(base.strength),
            dexterity: widen(base.dexterity),
            armor: widen(base.armor),
            vitality: widen(base.vitality),
        };
        for bonus in layers {
            total.strength = total.strength.saturating_add(bonus.strength_bonus);
            total.dexterity = total.dexterity.saturating_add(bonus.dexterity_bonus);
            total.armor = total.armor.saturating_add(bonus.armor_bonus);
            total.vitality = total.vitality.saturating_add(bonus.vitality_bonus);
        }
        total
    }

    /// Compute with no bonuses (base stats only)
    pub fn from_base(base: &BaseStats) -> Self {
        Self::compute(base, std::iter::empty())
    }
}

fn widen(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
