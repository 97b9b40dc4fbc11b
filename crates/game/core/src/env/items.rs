use crate::state::{EquipmentSlot, ItemId};
use crate::stats::AttributeBonuses;

pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition>;
}

/// Static item definition.
///
/// # Design: Category as Capability
///
/// Whether an item can be worn, and where, is answered by its
/// [`ItemCategory`] rather than by a lookup table elsewhere. Adding a slot
/// means adding a category arm in [`ItemCategory::slot`] and nothing else.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub category: ItemCategory,
    /// Attribute contribution while the item is worn.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: AttributeBonuses,
}

impl ItemDefinition {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        category: ItemCategory,
        bonuses: AttributeBonuses,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            bonuses,
        }
    }

    /// Returns true if this item may occupy `slot`.
    pub fn fits(&self, slot: EquipmentSlot) -> bool {
        self.category.slot() == Some(slot)
    }
}

/// Item category with its equip capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCategory {
    Weapon,
    Shield,
    Helmet,
    BodyArmor,
    Gloves,
    Greaves,
    Boots,
    Trinket,

    /// Potions, food, scrolls. Never worn.
    Consumable,

    /// Crafting inputs. Never worn.
    Material,
}

impl ItemCategory {
    /// Slot this category occupies when equipped, or `None` if it cannot be worn.
    pub const fn slot(self) -> Option<EquipmentSlot> {
        match self {
            ItemCategory::Weapon => Some(EquipmentSlot::MainHand),
            ItemCategory::Shield => Some(EquipmentSlot::OffHand),
            ItemCategory::Helmet => Some(EquipmentSlot::Head),
            ItemCategory::BodyArmor => Some(EquipmentSlot::Chest),
            ItemCategory::Gloves => Some(EquipmentSlot::Hands),
            ItemCategory::Greaves => Some(EquipmentSlot::Legs),
            ItemCategory::Boots => Some(EquipmentSlot::Feet),
            ItemCategory::Trinket => Some(EquipmentSlot::Accessory),
            ItemCategory::Consumable | ItemCategory::Material => None,
        }
    }

    pub const fn is_equippable(self) -> bool {
        self.slot().is_some()
    }
}
