//! Runtime configuration structures and loaders.
use std::env;

use hero_core::StatsConfig;

use crate::events::EventBus;

/// Configuration required to bootstrap an attribute service.
///
/// Stats come from content (`config.toml`) first; any value set here
/// overrides the content value regardless of builder call order.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Buffered events per topic before slow subscribers start lagging.
    pub event_capacity: usize,
    /// Flat leadership override.
    pub leadership: Option<f32>,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_CAPACITY: usize = 100;

    pub fn new() -> Self {
        Self {
            event_capacity: Self::DEFAULT_EVENT_CAPACITY,
            leadership: None,
        }
    }

    #[must_use]
    pub fn with_leadership(mut self, leadership: f32) -> Self {
        self.leadership = Some(leadership);
        self
    }

    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = clamp_capacity(capacity);
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HERO_EVENT_CAPACITY` - Events buffered per topic (default: 100, range 1..=65536)
    /// - `HERO_LEADERSHIP` - Flat leadership value, overrides content config
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(capacity) = parse::<usize>(&lookup, "HERO_EVENT_CAPACITY") {
            config.event_capacity = clamp_capacity(capacity);
        }

        config.leadership = parse::<f32>(&lookup, "HERO_LEADERSHIP");

        config
    }

    /// Apply the overrides in this config on top of `base`.
    pub fn resolve_stats(&self, mut base: StatsConfig) -> StatsConfig {
        if let Some(leadership) = self.leadership {
            base.leadership = leadership;
        }
        base
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_capacity(capacity: usize) -> usize {
    capacity.clamp(1, EventBus::MAX_CAPACITY)
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
