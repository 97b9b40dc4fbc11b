//! Derived Attributes - the resolved combat snapshot.
//!
//! Combat and UI values derived from final primaries and class constants.
//! A snapshot is immutable: any change to its inputs produces a new one.

use super::bonus::AttributeBonuses;
use super::core::{BaseStats, PrimaryAttributes};

/// Complete attribute snapshot for one hero.
///
/// Besides the resolved values it records the three inputs it was built from
/// (`base`, `equipment`, `temporary`) so inspectors can trace any number back
/// to its sources.
///
/// Values are real-valued and unrounded; presentation code rounds at display
/// time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedAttributes {
    /// Primary attributes after equipment and temporary bonuses
    pub primaries: PrimaryAttributes,

    pub max_health: f32,
    pub stamina: f32,

    pub blunt_damage: f32,
    pub slashing_damage: f32,
    pub piercing_damage: f32,

    pub blunt_defense: f32,
    pub slashing_defense: f32,
    pub piercing_defense: f32,

    pub blunt_penetration: f32,
    pub slashing_penetration: f32,
    pub piercing_penetration: f32,

    pub block_power: f32,
    pub movement_speed: f32,
    pub leadership: f32,

    /// Persisted base stats this snapshot was computed from
    pub base: BaseStats,
    /// Summed equipment bonuses this snapshot was computed from
    pub equipment: AttributeBonuses,
    /// Temporary overlay this snapshot was computed from
    pub temporary: AttributeBonuses,
}

impl DerivedAttributes {
    /// All-zero sentinel returned when inputs cannot be resolved.
    pub const EMPTY: Self = Self {
        primaries: PrimaryAttributes::ZERO,
        max_health: 0.0,
        stamina: 0.0,
        blunt_damage: 0.0,
        slashing_damage: 0.0,
        piercing_damage: 0.0,
        blunt_defense: 0.0,
        slashing_defense: 0.0,
        piercing_defense: 0.0,
        blunt_penetration: 0.0,
        slashing_penetration: 0.0,
        piercing_penetration: 0.0,
        block_power: 0.0,
        movement_speed: 0.0,
        leadership: 0.0,
        base: BaseStats::ZERO,
        equipment: AttributeBonuses::ZERO,
        temporary: AttributeBonuses::ZERO,
    };

    /// Returns true if this is the [`Self::EMPTY`] sentinel.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    pub fn strength(&self) -> i32 {
        self.primaries.strength
    }

    pub fn dexterity(&self) -> i32 {
        self.primaries.dexterity
    }

    pub fn armor(&self) -> i32 {
        self.primaries.armor
    }

    pub fn vitality(&self) -> i32 {
        self.primaries.vitality
    }

    /// Per-field difference `other - self`.
    ///
    /// Used by preview screens to show what a pending change would do.
    pub fn delta(&self, other: &Self) -> AttributeDelta {
        let (before, after) = (&self.primaries, &other.primaries);
        AttributeDelta {
            strength: after.strength.saturating_sub(before.strength),
            dexterity: after.dexterity.saturating_sub(before.dexterity),
            armor: after.armor.saturating_sub(before.armor),
            vitality: after.vitality.saturating_sub(before.vitality),
            max_health: other.max_health - self.max_health,
            stamina: other.stamina - self.stamina,
            blunt_damage: other.blunt_damage - self.blunt_damage,
            slashing_damage: other.slashing_damage - self.slashing_damage,
            piercing_damage: other.piercing_damage - self.piercing_damage,
            blunt_defense: other.blunt_defense - self.blunt_defense,
            slashing_defense: other.slashing_defense - self.slashing_defense,
            piercing_defense: other.piercing_defense - self.piercing_defense,
            blunt_penetration: other.blunt_penetration - self.blunt_penetration,
            slashing_penetration: other.slashing_penetration - self.slashing_penetration,
            piercing_penetration: other.piercing_penetration - self.piercing_penetration,
            block_power: other.block_power - self.block_power,
            movement_speed: other.movement_speed - self.movement_speed,
            leadership: other.leadership - self.leadership,
        }
    }
}

impl Default for DerivedAttributes {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Field-by-field difference between two snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeDelta {
    pub strength: i32,
    pub dexterity: i32,
    pub armor: i32,
    pub vitality: i32,
    pub max_health: f32,
    pub stamina: f32,
    pub blunt_damage: f32,
    pub slashing_damage: f32,
    pub piercing_damage: f32,
    pub blunt_defense: f32,
    pub slashing_defense: f32,
    pub piercing_defense: f32,
    pub blunt_penetration: f32,
    pub slashing_penetration: f32,
    pub piercing_penetration: f32,
    pub block_power: f32,
    pub movement_speed: f32,
    pub leadership: f32,
}

impl AttributeDelta {
    /// Returns true if no field changed.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
