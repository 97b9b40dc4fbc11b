//! Additive attribute bonuses.
//!
//! Equipment contributions and temporary UI overlays share this shape. Bonuses
//! only ever add, so summing a set of them is order-independent.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub};

/// Signed additive bonus to each primary attribute.
///
/// The all-zero value is the valid "no bonus" state.
///
/// # Example
/// ```
/// # use hero_core::stats::AttributeBonuses;
/// let helmet = AttributeBonuses::new(0, 0, 5, 0);
/// let chest = AttributeBonuses::new(0, 0, 5, 2);
/// let total: AttributeBonuses = [helmet, chest].into_iter().sum();
/// assert_eq!(total.armor_bonus, 10);
/// assert!(total.has_bonuses());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttributeBonuses {
    pub strength_bonus: i32,
    pub dexterity_bonus: i32,
    pub armor_bonus: i32,
    pub vitality_bonus: i32,
}

impl AttributeBonuses {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(
        strength_bonus: i32,
        dexterity_bonus: i32,
        armor_bonus: i32,
        vitality_bonus: i32,
    ) -> Self {
        Self {
            strength_bonus,
            dexterity_bonus,
            armor_bonus,
            vitality_bonus,
        }
    }

    pub const fn strength(value: i32) -> Self {
        Self::new(value, 0, 0, 0)
    }

    pub const fn dexterity(value: i32) -> Self {
        Self::new(0, value, 0, 0)
    }

    pub const fn armor(value: i32) -> Self {
        Self::new(0, 0, value, 0)
    }

    pub const fn vitality(value: i32) -> Self {
        Self::new(0, 0, 0, value)
    }

    /// Returns true if any attribute receives a non-zero bonus.
    pub const fn has_bonuses(&self) -> bool {
        self.strength_bonus != 0
            || self.dexterity_bonus != 0
            || self.armor_bonus != 0
            || self.vitality_bonus != 0
    }
}

impl Add for AttributeBonuses {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            strength_bonus: self.strength_bonus.saturating_add(rhs.strength_bonus),
            dexterity_bonus: self.dexterity_bonus.saturating_add(rhs.dexterity_bonus),
            armor_bonus: self.armor_bonus.saturating_add(rhs.armor_bonus),
            vitality_bonus: self.vitality_bonus.saturating_add(rhs.vitality_bonus),
        }
    }
}

impl AddAssign for AttributeBonuses {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Neg for AttributeBonuses {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            strength_bonus: self.strength_bonus.saturating_neg(),
            dexterity_bonus: self.dexterity_bonus.saturating_neg(),
            armor_bonus: self.armor_bonus.saturating_neg(),
            vitality_bonus: self.vitality_bonus.saturating_neg(),
        }
    }
}

impl Sub for AttributeBonuses {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Sum for AttributeBonuses {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a AttributeBonuses> for AttributeBonuses {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_has_no_bonuses() {
        assert!(!AttributeBonuses::ZERO.has_bonuses());
        assert!(!AttributeBonuses::default().has_bonuses());
        assert!(AttributeBonuses::vitality(-1).has_bonuses());
    }

    #[test]
    fn sum_is_order_independent() {
        let parts = [
            AttributeBonuses::strength(3),
            AttributeBonuses::new(1, 2, 3, 4),
            AttributeBonuses::armor(-2),
        ];
        let forward: AttributeBonuses = parts.iter().sum();
        let backward: AttributeBonuses = parts.iter().rev().sum();
        assert_eq!(forward, backward);
        assert_eq!(forward, AttributeBonuses::new(4, 2, 1, 4));
    }

    #[test]
    fn subtraction_undoes_addition() {
        let mut overlay = AttributeBonuses::new(2, 0, 0, 1);
        overlay += AttributeBonuses::dexterity(5);
        assert_eq!(
            overlay - AttributeBonuses::dexterity(5),
            AttributeBonuses::new(2, 0, 0, 1)
        );
    }
}
