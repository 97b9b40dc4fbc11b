//! Authoritative per-hero attribute snapshots.
//!
//! The cache memoizes the pipeline result for each hero so hot game-loop and
//! UI reads never re-run the formulas. An entry is either fresh (safe to
//! return) or stale (recomputed on the next read). Only successful
//! computations are stored; a hero that cannot be resolved keeps whatever
//! entry it had.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hero_core::{DerivedAttributes, HeroId};

use crate::events::{AttributesEvent, Event, EventBus};
use crate::modifiers::TemporaryModifierStore;
use crate::pipeline::AttributePipeline;

#[derive(Clone, Debug)]
struct CacheEntry {
    snapshot: Arc<DerivedAttributes>,
    fresh: bool,
}

/// Per-hero memo of [`DerivedAttributes`].
///
/// Every stored snapshot equals the formula evaluated over the hero's base
/// stats, equipment bonuses, registered temporary overlay and class constants
/// as of the last write. Recomputation happens under the write lock after
/// freshness is re-checked, so concurrent readers of a stale entry trigger a
/// single replace.
pub struct AttributeCache {
    entries: RwLock<HashMap<HeroId, CacheEntry>>,
    pipeline: Arc<AttributePipeline>,
    modifiers: Arc<TemporaryModifierStore>,
    events: EventBus,
}

impl AttributeCache {
    pub(crate) fn new(
        pipeline: Arc<AttributePipeline>,
        modifiers: Arc<TemporaryModifierStore>,
        events: EventBus,
    ) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            pipeline,
            modifiers,
            events,
        }
    }

    /// Fresh snapshot for `hero`, recomputing if the entry is stale or absent.
    ///
    /// Unknown class or missing hero yields [`DerivedAttributes::EMPTY`]
    /// without storing or publishing anything.
    pub fn get_or_compute(&self, hero: HeroId) -> Arc<DerivedAttributes> {
        if let Some(snapshot) = fresh_snapshot(&self.read(), hero) {
            return snapshot;
        }

        let mut entries = self.write();
        // Another reader may have recomputed while we waited for the lock.
        if let Some(snapshot) = fresh_snapshot(&entries, hero) {
            return snapshot;
        }
        self.recompute(&mut entries, hero)
    }

    /// Mark the entry for `hero` stale. The next read recomputes.
    pub fn invalidate(&self, hero: HeroId) {
        let mut entries = self.write();
        if let Some(entry) = entries.get_mut(&hero) {
            entry.fresh = false;
            tracing::debug!(%hero, "invalidated cached attributes");
        }
    }

    /// Recompute and overwrite the entry for `hero` regardless of freshness.
    pub fn force_recalculate(&self, hero: HeroId) -> Arc<DerivedAttributes> {
        let mut entries = self.write();
        self.recompute(&mut entries, hero)
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut entries = self.write();
        let dropped = entries.len();
        entries.clear();
        tracing::debug!(dropped, "cleared attribute cache");
    }

    /// Drop the entry for `hero`, returning its last snapshot.
    pub fn remove(&self, hero: HeroId) -> Option<Arc<DerivedAttributes>> {
        self.write().remove(&hero).map(|entry| entry.snapshot)
    }

    /// Stored snapshot for `hero`, fresh or stale, without recomputing.
    pub fn peek(&self, hero: HeroId) -> Option<Arc<DerivedAttributes>> {
        self.read()
            .get(&hero)
            .map(|entry| Arc::clone(&entry.snapshot))
    }

    pub fn is_fresh(&self, hero: HeroId) -> bool {
        self.read().get(&hero).is_some_and(|entry| entry.fresh)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn recompute(
        &self,
        entries: &mut HashMap<HeroId, CacheEntry>,
        hero: HeroId,
    ) -> Arc<DerivedAttributes> {
        let temporary = self.modifiers.get(hero);
        let snapshot = match self.pipeline.compute(hero, &temporary) {
            Ok(snapshot) => Arc::new(snapshot),
            Err(_) => return Arc::new(DerivedAttributes::EMPTY),
        };

        entries.insert(
            hero,
            CacheEntry {
                snapshot: Arc::clone(&snapshot),
                fresh: true,
            },
        );
        tracing::debug!(%hero, max_health = snapshot.max_health, "recalculated attributes");

        self.events
            .publish(Event::Attributes(AttributesEvent::Recalculated {
                hero,
                snapshot: Arc::clone(&snapshot),
            }));
        snapshot
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<HeroId, CacheEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<HeroId, CacheEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn fresh_snapshot(
    entries: &HashMap<HeroId, CacheEntry>,
    hero: HeroId,
) -> Option<Arc<DerivedAttributes>> {
    entries
        .get(&hero)
        .filter(|entry| entry.fresh)
        .map(|entry| Arc::clone(&entry.snapshot))
}
