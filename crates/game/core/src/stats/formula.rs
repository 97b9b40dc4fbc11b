//! Attribute formula engine.
//!
//! Combines base stats, equipment bonuses and a temporary overlay with
//! per-class constants. Every derived value is a single linear combination of
//! final primaries; there is no iteration and no rounding.

use super::bonus::AttributeBonuses;
use super::core::{BaseStats, PrimaryAttributes};
use super::derived::DerivedAttributes;
use crate::config::StatsConfig;

/// Per-class tuning constants.
///
/// Supplied by content, looked up by class id, never mutated here.
///
/// Formulas (F = final primary):
/// - Max health: `base_health + F.vit × health_per_vitality`
/// - Stamina: `base_stamina + F.dex × stamina_per_dexterity`
/// - Blunt damage: `base_damage + F.str × blunt_damage_by_strength`
/// - Slashing damage: `base_damage + F.str × slashing_damage_by_strength`
///   `+ F.dex × slashing_damage_by_dexterity`
/// - Piercing damage: `base_damage + F.dex × piercing_damage_by_dexterity`
/// - Defenses: `base_armor + F.arm × <type>_defense_by_armor`
/// - Penetrations: weighted STR/DEX sums, no base offset
/// - Block power: `F.str × block_power_by_strength`
/// - Movement speed: `movement_speed_base + F.dex × movement_speed_by_dexterity`
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassFormulaConstants {
    pub base_health: f32,
    pub health_per_vitality: f32,

    pub base_stamina: f32,
    pub stamina_per_dexterity: f32,

    pub base_damage: f32,
    pub blunt_damage_by_strength: f32,
    pub slashing_damage_by_strength: f32,
    pub slashing_damage_by_dexterity: f32,
    pub piercing_damage_by_dexterity: f32,

    pub base_armor: f32,
    pub blunt_defense_by_armor: f32,
    pub slashing_defense_by_armor: f32,
    pub piercing_defense_by_armor: f32,

    pub blunt_penetration_by_strength: f32,
    pub slashing_penetration_by_strength: f32,
    pub slashing_penetration_by_dexterity: f32,
    pub piercing_penetration_by_dexterity: f32,

    pub block_power_by_strength: f32,

    pub movement_speed_base: f32,
    pub movement_speed_by_dexterity: f32,
}

/// Formula engine bound to a [`StatsConfig`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeFormula {
    config: StatsConfig,
}

impl AttributeFormula {
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    /// Compute a full snapshot.
    ///
    /// Fails closed: `constants == None` (unknown class) returns
    /// [`DerivedAttributes::EMPTY`] regardless of the other inputs.
    pub fn calculate(
        &self,
        base: &BaseStats,
        equipment: &AttributeBonuses,
        temporary: &AttributeBonuses,
        constants: Option<&ClassFormulaConstants>,
    ) -> DerivedAttributes {
        let Some(c) = constants else {
            return DerivedAttributes::EMPTY;
        };

        let primaries = PrimaryAttributes::compute(base, [equipment, temporary]);
        let strength = primaries.strength as f32;
        let dexterity = primaries.dexterity as f32;
        let armor = primaries.armor as f32;
        let vitality = primaries.vitality as f32;

        DerivedAttributes {
            primaries,
            max_health: c.base_health + vitality * c.health_per_vitality,
            stamina: c.base_stamina + dexterity * c.stamina_per_dexterity,
            blunt_damage: c.base_damage + strength * c.blunt_damage_by_strength,
            slashing_damage: c.base_damage
                + strength * c.slashing_damage_by_strength
                + dexterity * c.slashing_damage_by_dexterity,
            piercing_damage: c.base_damage + dexterity * c.piercing_damage_by_dexterity,
            blunt_defense: c.base_armor + armor * c.blunt_defense_by_armor,
            slashing_defense: c.base_armor + armor * c.slashing_defense_by_armor,
            piercing_defense: c.base_armor + armor * c.piercing_defense_by_armor,
            blunt_penetration: strength * c.blunt_penetration_by_strength,
            slashing_penetration: strength * c.slashing_penetration_by_strength
                + dexterity * c.slashing_penetration_by_dexterity,
            piercing_penetration: dexterity * c.piercing_penetration_by_dexterity,
            block_power: strength * c.block_power_by_strength,
            movement_speed: c.movement_speed_base + dexterity * c.movement_speed_by_dexterity,
            leadership: self.config.leadership,
            base: *base,
            equipment: *equipment,
            temporary: *temporary,
        }
    }
}

/// Compute a snapshot with the default [`StatsConfig`].
pub fn calculate(
    base: &BaseStats,
    equipment: &AttributeBonuses,
    temporary: &AttributeBonuses,
    constants: Option<&ClassFormulaConstants>,
) -> DerivedAttributes {
    AttributeFormula::default().calculate(base, equipment, temporary, constants)
}
