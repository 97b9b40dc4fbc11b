//! Equipment slots worn by a hero.
//!
//! Equipment references items by [`ItemId`]; the stat contribution of each
//! item is looked up through [`crate::ItemOracle`] when bonuses are resolved.

use std::collections::BTreeMap;

use strum::{Display, EnumIter, IntoEnumIterator};

use super::ItemId;

/// Body locations an item can occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentSlot {
    Head,
    Chest,
    Hands,
    Legs,
    Feet,
    MainHand,
    OffHand,
    Accessory,
}

impl EquipmentSlot {
    /// Iterates every slot in declaration order.
    pub fn all() -> impl Iterator<Item = EquipmentSlot> {
        Self::iter()
    }
}

/// Equipment state for a hero.
///
/// An absent slot is empty. Slots iterate in [`EquipmentSlot`] order so bonus
/// resolution visits them deterministically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroEquipment {
    slots: BTreeMap<EquipmentSlot, ItemId>,
}

impl HeroEquipment {
    /// Creates empty equipment (nothing worn).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing equipment.
    pub fn builder() -> HeroEquipmentBuilder {
        HeroEquipmentBuilder::default()
    }

    /// Equips an item, returning the previously equipped item in that slot if any.
    pub fn equip(&mut self, slot: EquipmentSlot, item: ItemId) -> Option<ItemId> {
        self.slots.insert(slot, item)
    }

    /// Empties a slot, returning the removed item if any was equipped.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<ItemId> {
        self.slots.remove(&slot)
    }

    /// Returns the item in `slot`, if any.
    pub fn get(&self, slot: EquipmentSlot) -> Option<ItemId> {
        self.slots.get(&slot).copied()
    }

    /// Iterates occupied slots.
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, ItemId)> + '_ {
        self.slots.iter().map(|(slot, item)| (*slot, *item))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

impl FromIterator<(EquipmentSlot, ItemId)> for HeroEquipment {
    fn from_iter<T: IntoIterator<Item = (EquipmentSlot, ItemId)>>(iter: T) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

/// Builder for constructing equipment.
#[derive(Default)]
pub struct HeroEquipmentBuilder {
    slots: BTreeMap<EquipmentSlot, ItemId>,
}

impl HeroEquipmentBuilder {
    /// Puts `item` into `slot`, replacing whatever the builder held there.
    pub fn slot(mut self, slot: EquipmentSlot, item: ItemId) -> Self {
        self.slots.insert(slot, item);
        self
    }

    /// Builds the equipment.
    pub fn build(self) -> HeroEquipment {
        HeroEquipment { slots: self.slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equip_returns_previous_item() {
        let mut equipment = HeroEquipment::empty();
        assert_eq!(equipment.equip(EquipmentSlot::Head, ItemId(1)), None);
        assert_eq!(
            equipment.equip(EquipmentSlot::Head, ItemId(2)),
            Some(ItemId(1))
        );
        assert_eq!(equipment.get(EquipmentSlot::Head), Some(ItemId(2)));
        assert_eq!(equipment.unequip(EquipmentSlot::Head), Some(ItemId(2)));
        assert!(equipment.is_empty());
    }

    #[test]
    fn iteration_follows_slot_order() {
        let equipment = HeroEquipment::builder()
            .slot(EquipmentSlot::Feet, ItemId(5))
            .slot(EquipmentSlot::Head, ItemId(1))
            .slot(EquipmentSlot::MainHand, ItemId(9))
            .build();

        let slots: Vec<_> = equipment.iter().map(|(slot, _)| slot).collect();
        assert_eq!(
            slots,
            vec![
                EquipmentSlot::Head,
                EquipmentSlot::Feet,
                EquipmentSlot::MainHand
            ]
        );
    }

    #[test]
    fn slot_names_are_snake_case() {
        assert_eq!(EquipmentSlot::MainHand.to_string(), "main_hand");
        assert_eq!(EquipmentSlot::all().count(), 8);
    }
}
