//! In-memory HeroRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use hero_core::{BaseStats, EquipmentSlot, HeroId, HeroRecord, ItemId};

use crate::events::{Event, EventBus, HeroEvent};
use crate::repository::{HeroRepository, RepositoryError, Result};

/// In-memory implementation of HeroRepository.
///
/// Stores hero records by id. When an [`EventBus`] is attached, every
/// mutation publishes a [`HeroEvent`] after the write lock is released.
pub struct InMemoryHeroRepo {
    heroes: RwLock<HashMap<HeroId, HeroRecord>>,
    events: Option<EventBus>,
}

impl InMemoryHeroRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            heroes: RwLock::new(HashMap::new()),
            events: None,
        }
    }

    /// Create an empty repository that announces mutations on `events`.
    pub fn with_events(events: EventBus) -> Self {
        Self {
            heroes: RwLock::new(HashMap::new()),
            events: Some(events),
        }
    }

    /// Create with initial records.
    pub fn with_heroes(records: impl IntoIterator<Item = HeroRecord>) -> Self {
        Self::seeded(records, None)
    }

    /// Create with initial records that announces later mutations on `events`.
    ///
    /// Seeding itself publishes nothing.
    pub fn with_heroes_and_events(
        records: impl IntoIterator<Item = HeroRecord>,
        events: EventBus,
    ) -> Self {
        Self::seeded(records, Some(events))
    }

    fn seeded(records: impl IntoIterator<Item = HeroRecord>, events: Option<EventBus>) -> Self {
        let heroes = records
            .into_iter()
            .map(|record| (record.id, record))
            .collect();
        Self {
            heroes: RwLock::new(heroes),
            events,
        }
    }

    /// Replace a hero's base stats (leveling, attribute-point allocation).
    pub fn set_base_stats(&self, hero: HeroId, base: BaseStats) -> Result<()> {
        self.modify(hero, |record| record.base = base)?;
        self.publish(HeroEvent::BaseStatsChanged { hero });
        Ok(())
    }

    /// Equip `item` into `slot`, returning the item previously in that slot.
    pub fn equip(
        &self,
        hero: HeroId,
        slot: EquipmentSlot,
        item: ItemId,
    ) -> Result<Option<ItemId>> {
        let equip = |record: &mut HeroRecord| record.equipment.equip(slot, item);
        let previous = self.modify(hero, equip)?;
        self.publish(HeroEvent::EquipmentChanged { hero, slot });
        Ok(previous)
    }

    /// Empty `slot`, returning the removed item.
    ///
    /// Nothing is published if the slot was already empty.
    pub fn unequip(&self, hero: HeroId, slot: EquipmentSlot) -> Result<Option<ItemId>> {
        let removed = self.modify(hero, |record| record.equipment.unequip(slot))?;
        if removed.is_some() {
            self.publish(HeroEvent::EquipmentChanged { hero, slot });
        }
        Ok(removed)
    }

    fn modify<T>(&self, hero: HeroId, f: impl FnOnce(&mut HeroRecord) -> T) -> Result<T> {
        let mut heroes = self
            .heroes
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let record = heroes
            .get_mut(&hero)
            .ok_or(RepositoryError::HeroNotFound(hero))?;
        Ok(f(record))
    }

    fn publish(&self, event: HeroEvent) {
        if let Some(events) = &self.events {
            events.publish(Event::Hero(event));
        }
    }
}

impl Default for InMemoryHeroRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroRepository for InMemoryHeroRepo {
    fn load(&self, hero: HeroId) -> Result<Option<HeroRecord>> {
        let heroes = self
            .heroes
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(heroes.get(&hero).cloned())
    }

    fn save(&self, record: &HeroRecord) -> Result<()> {
        {
            let mut heroes = self
                .heroes
                .write()
                .map_err(|_| RepositoryError::LockPoisoned)?;
            heroes.insert(record.id, record.clone());
        }
        self.publish(HeroEvent::Saved { hero: record.id });
        Ok(())
    }

    fn delete(&self, hero: HeroId) -> Result<()> {
        let removed = {
            let mut heroes = self
                .heroes
                .write()
                .map_err(|_| RepositoryError::LockPoisoned)?;
            heroes.remove(&hero)
        };
        if removed.is_some() {
            self.publish(HeroEvent::Deleted { hero });
        }
        Ok(())
    }

    fn exists(&self, hero: HeroId) -> bool {
        self.heroes
            .read()
            .map(|heroes| heroes.contains_key(&hero))
            .unwrap_or(false)
    }

    fn list_heroes(&self) -> Result<Vec<HeroId>> {
        let heroes = self
            .heroes
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<HeroId> = heroes.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }
}
