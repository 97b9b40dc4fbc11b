//! Equipment bonus resolution.
//!
//! Sums the attribute contribution of every worn item. Unknown items and items
//! worn in a slot their category does not allow contribute zero; they never
//! abort the resolution of the remaining slots.

use super::bonus::AttributeBonuses;
use crate::env::ItemOracle;
use crate::error::ResolutionIssue;
use crate::state::HeroEquipment;

/// Outcome of resolving one hero's equipment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EquipmentResolution {
    /// Additive sum over every slot that resolved.
    pub bonuses: AttributeBonuses,
    /// Slots that contributed nothing, in slot order.
    pub issues: Vec<ResolutionIssue>,
}

impl EquipmentResolution {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Looks up worn items and sums their bonuses.
///
/// Pure: the same slot contents always yield the same bonuses.
#[derive(Clone, Copy)]
pub struct EquipmentBonusResolver<'a, I>
where
    I: ItemOracle + ?Sized,
{
    items: &'a I,
}

impl<'a, I> EquipmentBonusResolver<'a, I>
where
    I: ItemOracle + ?Sized,
{
    pub fn new(items: &'a I) -> Self {
        Self { items }
    }

    /// Sum of all resolvable slots.
    pub fn resolve(&self, equipment: &HeroEquipment) -> AttributeBonuses {
        self.resolve_detailed(equipment).bonuses
    }

    /// Sum of all resolvable slots plus a record of every slot that was skipped.
    pub fn resolve_detailed(&self, equipment: &HeroEquipment) -> EquipmentResolution {
        let mut resolution = EquipmentResolution::default();

        for (slot, item) in equipment.iter() {
            match self.items.definition(item) {
                Some(definition) if definition.fits(slot) => {
                    resolution.bonuses += definition.bonuses;
                }
                Some(_) => resolution
                    .issues
                    .push(ResolutionIssue::NotEquippable { slot, item }),
                None => resolution
                    .issues
                    .push(ResolutionIssue::UnknownItem { slot, item }),
            }
        }

        resolution
    }
}
