//! Session-scoped services for hero attribute derivation.
//!
//! This crate wires hero-core's pure pipeline to mutable collaborators: a
//! hero repository, content oracles, a temporary modifier store and a
//! per-hero attribute cache. Consumers construct one [`AttributeService`] per
//! play session and read attributes through it.
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the session facade and its builder
//! - [`cache`] memoizes authoritative snapshots per hero
//! - [`preview`] computes what-if snapshots without touching the cache
//! - [`modifiers`] stores unsaved UI overlays
//! - [`events`] provides the topic-based event bus
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod cache;
pub mod config;
pub mod error;
pub mod events;
pub mod modifiers;
pub mod oracle;
pub mod preview;
pub mod repository;
pub mod service;

mod pipeline;

pub use cache::AttributeCache;
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use events::{AttributesEvent, Event, EventBus, HeroEvent, Topic};
pub use modifiers::TemporaryModifierStore;
pub use oracle::{ClassOracleImpl, ItemOracleImpl, OracleManager};
pub use preview::PreviewCalculator;
pub use repository::{HeroRepository, InMemoryHeroRepo, RepositoryError};
pub use service::{AttributeService, AttributeServiceBuilder};
