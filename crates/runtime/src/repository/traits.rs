//! Repository contracts for loading and saving hero records.

use hero_core::{HeroId, HeroRecord};

use super::Result;

/// Repository for persisted hero records.
///
/// Implementations own change notification: every mutation that can alter a
/// hero's attributes must be announced so attribute caches can invalidate.
pub trait HeroRepository: Send + Sync {
    /// Load a hero record
    fn load(&self, hero: HeroId) -> Result<Option<HeroRecord>>;

    /// Save a hero record, replacing any existing one with the same id
    fn save(&self, record: &HeroRecord) -> Result<()>;

    /// Delete a hero record
    fn delete(&self, hero: HeroId) -> Result<()>;

    /// Check if a hero exists
    fn exists(&self, hero: HeroId) -> bool;

    /// List all stored hero ids
    fn list_heroes(&self) -> Result<Vec<HeroId>> {
        Ok(vec![])
    }
}
