//! What-if attribute snapshots for UI previews.
//!
//! Previews read the same hero record, items and class constants as the
//! cache, but combine them with a caller-supplied overlay. Nothing computed
//! here is stored or published.

use std::sync::Arc;

use hero_core::{AttributeBonuses, AttributeDelta, DerivedAttributes, HeroId};

use crate::modifiers::TemporaryModifierStore;
use crate::pipeline::AttributePipeline;

/// Ephemeral snapshot calculator.
///
/// Safe to call on every slider tick: it never touches the authoritative
/// cache, so repeated previews cannot change what
/// [`AttributeCache::get_or_compute`](crate::AttributeCache::get_or_compute)
/// returns.
#[derive(Clone)]
pub struct PreviewCalculator {
    pipeline: Arc<AttributePipeline>,
    modifiers: Arc<TemporaryModifierStore>,
}

impl PreviewCalculator {
    pub(crate) fn new(
        pipeline: Arc<AttributePipeline>,
        modifiers: Arc<TemporaryModifierStore>,
    ) -> Self {
        Self {
            pipeline,
            modifiers,
        }
    }

    /// Snapshot of `hero` as if `overlay` were its temporary modifiers.
    pub fn preview_with_temporary_mods(
        &self,
        hero: HeroId,
        overlay: &AttributeBonuses,
    ) -> DerivedAttributes {
        self.pipeline
            .compute(hero, overlay)
            .unwrap_or(DerivedAttributes::EMPTY)
    }

    /// Difference between the preview for `overlay` and the hero's current
    /// authoritative values (which include the registered overlay).
    ///
    /// Both sides are computed fresh; the cache is neither read nor written.
    pub fn preview_delta(&self, hero: HeroId, overlay: &AttributeBonuses) -> AttributeDelta {
        let registered = self.modifiers.get(hero);
        let current = self.preview_with_temporary_mods(hero, &registered);
        let preview = self.preview_with_temporary_mods(hero, overlay);
        current.delta(&preview)
    }

    /// Whether a non-zero overlay is registered for `hero`.
    pub fn has_temp_changes(&self, hero: HeroId) -> bool {
        self.modifiers.has_changes(hero)
    }
}
