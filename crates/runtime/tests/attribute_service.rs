//! End-to-end tests for the attribute service against the bundled content.
//!
//! Bundled `warrior` constants: health 100 + 5/vit, stamina 50 + 2/dex,
//! damage 10 + 1.5/str (blunt), defense 5 + 1.0/arm (slashing).

use std::fs;
use std::sync::Arc;

use hero_content::ContentFactory;
use hero_core::{
    AttributeBonuses, BaseStats, EquipmentSlot, HeroEquipment, HeroId, HeroRecord, ItemId,
};
use hero_runtime::{
    AttributeService, AttributesEvent, Event, EventBus, HeroRepository, InMemoryHeroRepo,
    OracleManager, RuntimeConfig, RuntimeError, Topic,
};
use tokio::sync::broadcast::error::TryRecvError;
use tracing_subscriber::EnvFilter;

const HERO: HeroId = HeroId(1);

const IRON_HELM: ItemId = ItemId(1);
const CHAINMAIL: ItemId = ItemId(2);
const FOOTMANS_MACE: ItemId = ItemId(6);
const HEALING_DRAUGHT: ItemId = ItemId(10);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn warrior(id: HeroId) -> HeroRecord {
    HeroRecord::new(id, "warrior", BaseStats::new(20, 15, 30, 25))
}

struct Session {
    service: AttributeService,
    heroes: Arc<InMemoryHeroRepo>,
}

fn session_with_capacity(capacity: usize) -> Session {
    init_tracing();

    let events = EventBus::with_capacity(capacity);
    let heroes = Arc::new(InMemoryHeroRepo::with_events(events.clone()));
    heroes.save(&warrior(HERO)).expect("hero should save");

    let service = AttributeService::builder()
        .content(&ContentFactory::bundled())
        .expect("bundled content should load")
        .heroes(heroes.clone())
        .events(events)
        .build()
        .expect("service should build");

    Session { service, heroes }
}

fn session() -> Session {
    session_with_capacity(64)
}

fn drain(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> Vec<Event> {
    std::iter::from_fn(|| rx.try_recv().ok()).collect()
}

// ============================================================================
// Formula scenarios
// ============================================================================

#[test]
fn base_stats_only_snapshot() {
    let Session { service, .. } = session();
    let snapshot = service.get_or_compute(HERO);

    assert_eq!(snapshot.max_health, 225.0);
    assert_eq!(snapshot.stamina, 80.0);
    assert_eq!(snapshot.leadership, 700.0);
    assert_eq!(snapshot.equipment, AttributeBonuses::ZERO);
}

#[test]
fn weapon_strength_feeds_blunt_damage() {
    let Session { service, heroes } = session();
    heroes
        .equip(HERO, EquipmentSlot::MainHand, FOOTMANS_MACE)
        .expect("equip should succeed");

    let snapshot = service.get_or_compute(HERO);
    assert_eq!(snapshot.strength(), 30);
    assert_eq!(snapshot.blunt_damage, 55.0);
}

#[test]
fn unknown_and_misplaced_items_contribute_nothing() {
    let Session { service, heroes } = session();
    let equipment = HeroEquipment::builder()
        .slot(EquipmentSlot::Head, ItemId(999))
        .slot(EquipmentSlot::Chest, CHAINMAIL)
        .slot(EquipmentSlot::Accessory, HEALING_DRAUGHT)
        .build();
    heroes
        .save(&warrior(HERO).with_equipment(equipment))
        .expect("hero should save");

    let snapshot = service.get_or_compute(HERO);
    assert_eq!(snapshot.equipment, AttributeBonuses::new(0, 0, 5, 2));
    assert_eq!(snapshot.armor(), 35);
    assert_eq!(snapshot.max_health, 235.0);
}

// ============================================================================
// Cache laws
// ============================================================================

#[test]
fn repeated_reads_are_idempotent() {
    let Session { service, .. } = session();
    let first = service.get_or_compute(HERO);
    let second = service.get_or_compute(HERO);

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
}

#[test]
fn invalidation_reflects_current_record() {
    let Session { service, heroes } = session();
    service.get_or_compute(HERO);

    heroes
        .set_base_stats(HERO, BaseStats::new(20, 15, 30, 30))
        .expect("level up should succeed");
    service.invalidate(HERO);

    assert_eq!(service.get_or_compute(HERO).max_health, 250.0);
}

#[test]
fn base_stat_events_invalidate_the_hero() {
    let Session { service, heroes } = session();
    assert_eq!(service.get_or_compute(HERO).max_health, 225.0);

    heroes
        .set_base_stats(HERO, BaseStats::new(20, 15, 30, 30))
        .expect("level up should succeed");
    assert_eq!(service.get_or_compute(HERO).max_health, 225.0);
    assert_eq!(service.process_hero_events(), 1);
    assert_eq!(service.get_or_compute(HERO).max_health, 250.0);

    let respec = HeroRecord::new(HERO, "warrior", BaseStats::new(20, 15, 30, 20));
    heroes.save(&respec).expect("hero should save");
    assert_eq!(service.process_hero_events(), 1);
    assert_eq!(service.get_or_compute(HERO).max_health, 200.0);
}

#[test]
fn seeded_repository_feeds_the_service() {
    init_tracing();
    let events = EventBus::new();
    let heroes = Arc::new(InMemoryHeroRepo::with_heroes_and_events(
        [warrior(HERO)],
        events.clone(),
    ));
    let service = AttributeService::builder()
        .content(&ContentFactory::bundled())
        .expect("bundled content should load")
        .heroes(heroes.clone())
        .events(events)
        .build()
        .expect("service should build");

    assert_eq!(service.get_or_compute(HERO).max_health, 225.0);
    heroes
        .set_base_stats(HERO, BaseStats::new(20, 15, 30, 30))
        .expect("level up should succeed");
    assert_eq!(service.process_hero_events(), 1);
    assert_eq!(service.get_or_compute(HERO).max_health, 250.0);
}

#[test]
fn stale_read_until_equipment_events_are_processed() {
    let Session { service, heroes } = session();
    let before = service.get_or_compute(HERO);
    assert_eq!(before.slashing_defense, 35.0);

    heroes
        .equip(HERO, EquipmentSlot::Head, IRON_HELM)
        .expect("equip helm");
    heroes
        .equip(HERO, EquipmentSlot::Chest, CHAINMAIL)
        .expect("equip chainmail");

    // Events are queued but not yet applied: the old snapshot is still served.
    let stale = service.get_or_compute(HERO);
    assert!(Arc::ptr_eq(&before, &stale));

    assert_eq!(service.process_hero_events(), 2);
    let after = service.get_or_compute(HERO);
    assert_eq!(after.armor(), 40);
    assert_eq!(after.slashing_defense, 45.0);
    assert_eq!(after.max_health, 235.0);
}

#[test]
fn unprocessed_change_is_served_stale_until_invalidated() {
    let Session { service, heroes } = session();
    assert_eq!(service.get_or_compute(HERO).armor(), 30);

    heroes
        .equip(HERO, EquipmentSlot::Head, IRON_HELM)
        .expect("equip helm");
    assert_eq!(service.process_hero_events(), 1);
    assert_eq!(service.get_or_compute(HERO).armor(), 35);

    heroes
        .equip(HERO, EquipmentSlot::Chest, CHAINMAIL)
        .expect("equip chainmail");
    assert_eq!(service.get_or_compute(HERO).armor(), 35);

    service.invalidate(HERO);
    let fresh = service.get_or_compute(HERO);
    assert_eq!(fresh.armor(), 40);
    assert_eq!(fresh.slashing_defense, 45.0);
}

#[test]
fn concurrent_readers_share_one_recompute() {
    let Session { service, .. } = session();
    service.get_or_compute(HERO);
    service.invalidate(HERO);
    let mut notifications = service.subscribe(Topic::Attributes);

    let snapshots: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| service.get_or_compute(HERO)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("reader thread panicked"))
            .collect()
    });

    let first = &snapshots[0];
    assert!(snapshots.iter().all(|other| Arc::ptr_eq(other, first)));
    assert_eq!(drain(&mut notifications).len(), 1);
}

#[test]
fn unresolvable_heroes_yield_empty_without_side_effects() {
    let Session { service, heroes } = session();
    let mut notifications = service.subscribe(Topic::Attributes);

    assert!(service.get_or_compute(HeroId(404)).is_empty());

    heroes
        .save(&HeroRecord::new(HeroId(2), "bard", BaseStats::new(5, 5, 5, 5)))
        .expect("hero should save");
    assert!(service.get_or_compute(HeroId(2)).is_empty());

    assert!(service.cache().is_empty());
    assert!(matches!(notifications.try_recv(), Err(TryRecvError::Empty)));
}

// ============================================================================
// Previews and overlays
// ============================================================================

#[test]
fn previews_never_touch_the_cache() {
    let Session { service, .. } = session();
    let authoritative = service.get_or_compute(HERO);
    let mut notifications = service.subscribe(Topic::Attributes);

    for points in 0..50 {
        let preview =
            service.preview_with_temporary_mods(HERO, &AttributeBonuses::vitality(points));
        assert_eq!(preview.max_health, 225.0 + 5.0 * points as f32);
    }

    assert!(Arc::ptr_eq(&authoritative, &service.get_or_compute(HERO)));
    assert!(service.cache().is_fresh(HERO));
    assert!(matches!(notifications.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn preview_delta_compares_against_current_values() {
    let Session { service, .. } = session();
    let overlay = AttributeBonuses::new(2, 0, 0, 4);
    let delta = service.preview_delta(HERO, &overlay);

    assert_eq!(delta.strength, 2);
    assert_eq!(delta.vitality, 4);
    assert_eq!(delta.max_health, 20.0);
    assert_eq!(delta.blunt_damage, 3.0);
    assert_eq!(delta.stamina, 0.0);
}

#[test]
fn overlay_changes_invalidate_the_hero() {
    let Session { service, .. } = session();
    service.get_or_compute(HERO);
    assert!(!service.has_temp_changes(HERO));

    service.set_temporary_modifiers(HERO, AttributeBonuses::vitality(2));
    assert!(service.has_temp_changes(HERO));
    assert!(!service.cache().is_fresh(HERO));
    assert_eq!(service.get_or_compute(HERO).max_health, 235.0);

    service.add_temporary_modifiers(HERO, AttributeBonuses::vitality(1));
    let snapshot = service.get_or_compute(HERO);
    assert_eq!(snapshot.temporary, AttributeBonuses::vitality(3));

    assert!(service.clear_temporary_modifiers(HERO));
    assert!(!service.has_temp_changes(HERO));
    assert_eq!(service.get_or_compute(HERO).max_health, 225.0);
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn recompute_is_announced() {
    let Session { service, .. } = session();
    let mut notifications = service.subscribe(Topic::Attributes);

    let stored = service.get_or_compute(HERO);
    service.get_or_compute(HERO);

    let events = drain(&mut notifications);
    assert_eq!(events.len(), 1);
    let Event::Attributes(AttributesEvent::Recalculated { hero, snapshot }) = &events[0] else {
        panic!("unexpected event {:?}", events[0]);
    };
    assert_eq!(*hero, HERO);
    assert!(Arc::ptr_eq(snapshot, &stored));
}

#[test]
fn deleted_hero_is_forgotten() {
    let Session { service, heroes } = session();
    service.get_or_compute(HERO);
    service.set_temporary_modifiers(HERO, AttributeBonuses::armor(1));

    heroes.delete(HERO).expect("delete should succeed");
    assert_eq!(service.process_hero_events(), 1);

    assert!(service.cache().peek(HERO).is_none());
    assert!(!service.has_temp_changes(HERO));
    assert!(service.get_or_compute(HERO).is_empty());
}

#[test]
fn lagged_event_receiver_clears_cache() {
    let Session { service, heroes } = session_with_capacity(1);
    heroes.save(&warrior(HeroId(2))).expect("hero should save");
    service.get_or_compute(HERO);
    service.get_or_compute(HeroId(2));
    assert_eq!(service.cache().len(), 2);

    for slot in [EquipmentSlot::Head, EquipmentSlot::Feet] {
        heroes
            .equip(HeroId(2), slot, IRON_HELM)
            .expect("equip should succeed");
    }

    // Only the newest event survives; everything before it was dropped.
    assert_eq!(service.process_hero_events(), 1);
    assert!(service.cache().is_empty());
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn build_requires_collaborators() {
    let content = ContentFactory::bundled();
    let oracles = OracleManager::from_content(&content).expect("content should load");

    let missing_items = AttributeService::builder()
        .heroes(Arc::new(InMemoryHeroRepo::new()))
        .build();
    assert!(matches!(
        missing_items,
        Err(RuntimeError::MissingOracles("item"))
    ));

    let missing_heroes = AttributeService::builder().oracles(oracles).build();
    assert!(matches!(
        missing_heroes,
        Err(RuntimeError::MissingRepository)
    ));
}

#[test]
fn bad_content_directory_is_reported() {
    let missing = ContentFactory::new("/nonexistent/content");
    let result = AttributeService::builder().content(&missing);
    assert!(matches!(result, Err(RuntimeError::Content(_))));
}

#[test]
fn leadership_override_wins_when_configured_first() {
    init_tracing();
    let lookup = |key: &str| (key == "HERO_LEADERSHIP").then(|| "950".to_string());
    let config = RuntimeConfig::from_lookup(lookup);
    let service = AttributeService::builder()
        .config(config)
        .content(&ContentFactory::bundled())
        .expect("bundled content should load")
        .heroes(Arc::new(InMemoryHeroRepo::with_heroes([warrior(HERO)])))
        .build()
        .expect("service should build");

    assert_eq!(service.stats().leadership, 950.0);
    assert_eq!(service.get_or_compute(HERO).leadership, 950.0);
}

#[test]
fn content_leadership_survives_later_config() {
    init_tracing();
    let bundled = ContentFactory::bundled();
    let dir = tempfile::tempdir().expect("temp dir");
    for file in ["items.ron", "classes.ron"] {
        fs::copy(bundled.data_dir().join(file), dir.path().join(file)).expect("copy content");
    }
    fs::write(dir.path().join("config.toml"), "leadership = 850.0\n").expect("write config");

    let service = AttributeService::builder()
        .content(&ContentFactory::new(dir.path()))
        .expect("content should load")
        .config(RuntimeConfig::new().with_event_capacity(8))
        .heroes(Arc::new(InMemoryHeroRepo::with_heroes([warrior(HERO)])))
        .build()
        .expect("service should build");

    assert_eq!(service.config().event_capacity, 8);
    assert_eq!(service.stats().leadership, 850.0);
    assert_eq!(service.get_or_compute(HERO).leadership, 850.0);
}

#[test]
fn shutdown_ends_the_session() {
    let Session { service, heroes } = session();
    service.get_or_compute(HERO);
    service.set_temporary_modifiers(HERO, AttributeBonuses::armor(2));
    service.shutdown();

    // The repository outlives the session untouched.
    assert!(heroes.exists(HERO));
}
