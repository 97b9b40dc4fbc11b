use super::{ClassId, HeroEquipment, HeroId};
use crate::stats::BaseStats;

/// Persisted hero as supplied by the hero repository.
///
/// Holds exactly the inputs the attribute pipeline reads: base stats, class
/// and worn equipment. Derived values are never stored here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroRecord {
    pub id: HeroId,
    pub class: ClassId,
    pub base: BaseStats,
    pub equipment: HeroEquipment,
}

impl HeroRecord {
    pub fn new(id: HeroId, class: impl Into<ClassId>, base: BaseStats) -> Self {
        Self {
            id,
            class: class.into(),
            base,
            equipment: HeroEquipment::empty(),
        }
    }

    /// Replaces the equipment (builder pattern).
    #[must_use]
    pub fn with_equipment(mut self, equipment: HeroEquipment) -> Self {
        self.equipment = equipment;
        self
    }
}
