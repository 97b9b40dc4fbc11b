//! Unsaved attribute overlays owned by the UI.
//!
//! An overlay represents attribute points the player is allocating but has
//! not confirmed yet. It is never persisted and never touches hero records.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hero_core::{AttributeBonuses, HeroId};

/// Per-hero temporary overlays.
///
/// A hero with no entry has the zero overlay. Storing a zero overlay removes
/// the entry, so [`has_changes`](Self::has_changes) is a plain lookup.
#[derive(Debug, Default)]
pub struct TemporaryModifierStore {
    overlays: RwLock<HashMap<HeroId, AttributeBonuses>>,
}

impl TemporaryModifierStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current overlay for `hero`, zero when none is registered.
    pub fn get(&self, hero: HeroId) -> AttributeBonuses {
        let overlays = self.read();
        overlays.get(&hero).copied().unwrap_or_default()
    }

    /// Replace the overlay for `hero`.
    pub fn set(&self, hero: HeroId, overlay: AttributeBonuses) {
        let mut overlays = self.write();
        if overlay.has_bonuses() {
            overlays.insert(hero, overlay);
        } else {
            overlays.remove(&hero);
        }
    }

    /// Add `delta` to the overlay for `hero` and return the result.
    pub fn add(&self, hero: HeroId, delta: AttributeBonuses) -> AttributeBonuses {
        let mut overlays = self.write();
        let updated = overlays.get(&hero).copied().unwrap_or_default() + delta;
        if updated.has_bonuses() {
            overlays.insert(hero, updated);
        } else {
            overlays.remove(&hero);
        }
        updated
    }

    /// Drop the overlay for `hero`. Returns whether one was registered.
    pub fn clear(&self, hero: HeroId) -> bool {
        let mut overlays = self.write();
        overlays.remove(&hero).is_some()
    }

    pub fn clear_all(&self) {
        self.write().clear();
    }

    /// Whether a non-zero overlay is registered for `hero`.
    pub fn has_changes(&self, hero: HeroId) -> bool {
        let overlays = self.read();
        overlays.contains_key(&hero)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<HeroId, AttributeBonuses>> {
        self.overlays.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<HeroId, AttributeBonuses>> {
        self.overlays
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: HeroId = HeroId(7);

    #[test]
    fn missing_overlay_is_zero() {
        let store = TemporaryModifierStore::new();
        assert_eq!(store.get(HERO), AttributeBonuses::ZERO);
        assert!(!store.has_changes(HERO));
    }

    #[test]
    fn zero_overlay_removes_entry() {
        let store = TemporaryModifierStore::new();
        store.set(HERO, AttributeBonuses::vitality(3));
        assert!(store.has_changes(HERO));

        store.set(HERO, AttributeBonuses::ZERO);
        assert!(!store.has_changes(HERO));
    }

    #[test]
    fn add_accumulates_and_cancels() {
        let store = TemporaryModifierStore::new();
        store.add(HERO, AttributeBonuses::strength(2));
        let total = store.add(HERO, AttributeBonuses::new(1, 0, 0, 4));
        assert_eq!(total, AttributeBonuses::new(3, 0, 0, 4));
        assert_eq!(store.get(HERO), total);

        store.add(HERO, -total);
        assert!(!store.has_changes(HERO));
    }

    #[test]
    fn clear_is_per_hero() {
        let store = TemporaryModifierStore::new();
        store.set(HERO, AttributeBonuses::armor(1));
        store.set(HeroId(8), AttributeBonuses::armor(2));

        assert!(store.clear(HERO));
        assert!(!store.clear(HERO));
        assert!(store.has_changes(HeroId(8)));

        store.clear_all();
        assert!(!store.has_changes(HeroId(8)));
    }
}
