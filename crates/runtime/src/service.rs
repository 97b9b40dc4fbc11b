//! Session facade over the attribute cache, previews and overlays.
//!
//! One [`AttributeService`] is constructed per play session with explicit
//! collaborators; there is no global instance. Hero record changes reach the
//! cache through the event bus and are applied by
//! [`AttributeService::process_hero_events`].

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

use hero_content::ContentFactory;
use hero_core::{
    AttributeBonuses, AttributeDelta, AttributeFormula, ClassOracle, DerivedAttributes, HeroId,
    ItemOracle, StatsConfig,
};

use crate::cache::AttributeCache;
use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, HeroEvent, Topic};
use crate::modifiers::TemporaryModifierStore;
use crate::oracle::OracleManager;
use crate::pipeline::AttributePipeline;
use crate::preview::PreviewCalculator;
use crate::repository::HeroRepository;

/// Attribute engine for one play session.
pub struct AttributeService {
    config: RuntimeConfig,
    stats: StatsConfig,
    cache: AttributeCache,
    preview: PreviewCalculator,
    modifiers: Arc<TemporaryModifierStore>,
    events: EventBus,
    hero_events: Mutex<broadcast::Receiver<Event>>,
}

impl AttributeService {
    /// Create a new service builder
    pub fn builder() -> AttributeServiceBuilder {
        AttributeServiceBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Stats configuration in effect after applying overrides to content.
    pub fn stats(&self) -> &StatsConfig {
        &self.stats
    }

    pub fn cache(&self) -> &AttributeCache {
        &self.cache
    }

    pub fn preview(&self) -> &PreviewCalculator {
        &self.preview
    }

    /// Bus shared with the hero repository and UI observers.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    // ---- authoritative reads ----

    pub fn get_or_compute(&self, hero: HeroId) -> Arc<DerivedAttributes> {
        self.cache.get_or_compute(hero)
    }

    pub fn invalidate(&self, hero: HeroId) {
        self.cache.invalidate(hero);
    }

    pub fn force_recalculate(&self, hero: HeroId) -> Arc<DerivedAttributes> {
        self.cache.force_recalculate(hero)
    }

    pub fn clear(&self) {
        self.cache.clear();
    }

    /// Forget everything held for a deleted hero.
    pub fn remove_hero(&self, hero: HeroId) {
        self.cache.remove(hero);
        self.modifiers.clear(hero);
    }

    // ---- previews ----

    pub fn preview_with_temporary_mods(
        &self,
        hero: HeroId,
        overlay: &AttributeBonuses,
    ) -> DerivedAttributes {
        self.preview.preview_with_temporary_mods(hero, overlay)
    }

    pub fn preview_delta(&self, hero: HeroId, overlay: &AttributeBonuses) -> AttributeDelta {
        self.preview.preview_delta(hero, overlay)
    }

    pub fn has_temp_changes(&self, hero: HeroId) -> bool {
        self.preview.has_temp_changes(hero)
    }

    // ---- temporary overlays ----
    //
    // The registered overlay is an input of the authoritative snapshot, so
    // every change here invalidates the hero's entry.

    pub fn temporary_modifiers(&self, hero: HeroId) -> AttributeBonuses {
        self.modifiers.get(hero)
    }

    pub fn set_temporary_modifiers(&self, hero: HeroId, overlay: AttributeBonuses) {
        self.modifiers.set(hero, overlay);
        self.cache.invalidate(hero);
    }

    pub fn add_temporary_modifiers(
        &self,
        hero: HeroId,
        delta: AttributeBonuses,
    ) -> AttributeBonuses {
        let updated = self.modifiers.add(hero, delta);
        self.cache.invalidate(hero);
        updated
    }

    /// Discard the overlay for `hero`. Returns whether one was registered.
    pub fn clear_temporary_modifiers(&self, hero: HeroId) -> bool {
        let cleared = self.modifiers.clear(hero);
        if cleared {
            self.cache.invalidate(hero);
        }
        cleared
    }

    // ---- event handling ----

    /// Apply every pending hero event to the cache.
    ///
    /// Returns the number of events applied. If the receiver fell behind and
    /// events were dropped, the whole cache is cleared since the missed
    /// heroes are unknown.
    pub fn process_hero_events(&self) -> usize {
        let mut receiver = self
            .hero_events
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut applied = 0;

        loop {
            match receiver.try_recv() {
                Ok(Event::Hero(event)) => {
                    self.apply_hero_event(&event);
                    applied += 1;
                }
                Ok(Event::Attributes(_)) => {}
                Err(TryRecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "hero events dropped, clearing attribute cache");
                    self.cache.clear();
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        applied
    }

    fn apply_hero_event(&self, event: &HeroEvent) {
        let hero = event.hero();
        match event {
            HeroEvent::Deleted { .. } => self.remove_hero(hero),
            HeroEvent::Saved { .. }
            | HeroEvent::BaseStatsChanged { .. }
            | HeroEvent::EquipmentChanged { .. } => self.cache.invalidate(hero),
        }
    }

    /// End the session, dropping every cached snapshot and overlay.
    pub fn shutdown(self) {
        self.cache.clear();
        self.modifiers.clear_all();
        tracing::debug!("attribute service shut down");
    }
}

/// Builder for [`AttributeService`].
pub struct AttributeServiceBuilder {
    config: RuntimeConfig,
    content_stats: Option<StatsConfig>,
    items: Option<Arc<dyn ItemOracle>>,
    classes: Option<Arc<dyn ClassOracle>>,
    heroes: Option<Arc<dyn HeroRepository>>,
    events: Option<EventBus>,
}

impl AttributeServiceBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            content_stats: None,
            items: None,
            classes: None,
            heroes: None,
            events: None,
        }
    }

    /// Override runtime configuration
    ///
    /// Overrides set here take precedence over stats loaded by
    /// [`Self::content`], whichever is called first.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required item oracle
    pub fn items(mut self, items: Arc<dyn ItemOracle>) -> Self {
        self.items = Some(items);
        self
    }

    /// Set required class oracle
    pub fn classes(mut self, classes: Arc<dyn ClassOracle>) -> Self {
        self.classes = Some(classes);
        self
    }

    /// Set both oracles at once
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.items = Some(oracles.items);
        self.classes = Some(oracles.classes);
        self
    }

    /// Load oracles and stats configuration from a content directory.
    pub fn content(self, factory: &ContentFactory) -> Result<Self> {
        let oracles = OracleManager::from_content(factory)
            .map_err(RuntimeError::Content)?;
        let stats = factory.load_config().map_err(RuntimeError::Content)?;

        let mut builder = self.oracles(oracles);
        builder.content_stats = Some(stats);
        Ok(builder)
    }

    /// Set required hero repository
    pub fn heroes(mut self, heroes: Arc<dyn HeroRepository>) -> Self {
        self.heroes = Some(heroes);
        self
    }

    /// Share an existing event bus (typically the one the repository
    /// publishes on). A new bus is created otherwise.
    pub fn events(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    pub fn build(self) -> Result<AttributeService> {
        let items = self.items.ok_or(RuntimeError::MissingOracles("item"))?;
        let classes = self.classes.ok_or(RuntimeError::MissingOracles("class"))?;
        let heroes = self.heroes.ok_or(RuntimeError::MissingRepository)?;
        let events = self
            .events
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_capacity));

        let content_stats = self.content_stats.unwrap_or_default();
        let stats = self.config.resolve_stats(content_stats);
        tracing::debug!(leadership = stats.leadership, "resolved stats configuration");

        let pipeline = Arc::new(AttributePipeline::new(
            OracleManager::new(items, classes),
            heroes,
            AttributeFormula::new(stats.clone()),
        ));
        let modifiers = Arc::new(TemporaryModifierStore::new());
        let hero_events = Mutex::new(events.subscribe(Topic::Hero));

        Ok(AttributeService {
            cache: AttributeCache::new(
                Arc::clone(&pipeline),
                Arc::clone(&modifiers),
                events.clone(),
            ),
            preview: PreviewCalculator::new(pipeline, Arc::clone(&modifiers)),
            config: self.config,
            stats,
            modifiers,
            events,
            hero_events,
        })
    }
}

impl Default for AttributeServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
