//! Event payloads published on the bus.

use std::sync::Arc;

use hero_core::{DerivedAttributes, EquipmentSlot, HeroId};

/// Change to a persisted hero record.
///
/// Every variant means the hero's cached attributes may be stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeroEvent {
    /// Record was created or overwritten wholesale.
    Saved { hero: HeroId },
    /// Leveling or attribute reallocation changed the base stats.
    BaseStatsChanged { hero: HeroId },
    /// An item was equipped into or removed from `slot`.
    EquipmentChanged { hero: HeroId, slot: EquipmentSlot },
    /// Record was deleted; the id will never be reused.
    Deleted { hero: HeroId },
}

impl HeroEvent {
    pub fn hero(&self) -> HeroId {
        match self {
            HeroEvent::Saved { hero }
            | HeroEvent::BaseStatsChanged { hero }
            | HeroEvent::EquipmentChanged { hero, .. }
            | HeroEvent::Deleted { hero } => *hero,
        }
    }
}

/// Notifications from the attribute cache.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributesEvent {
    /// A fresh authoritative snapshot was stored for `hero`.
    Recalculated {
        hero: HeroId,
        snapshot: Arc<DerivedAttributes>,
    },
}
