//! Shared compute path for the attribute cache and the preview calculator.
//!
//! Both consumers must see identical inputs for identical hero state, so the
//! record lookup, equipment resolution and formula evaluation live here once.

use std::sync::Arc;

use hero_core::{
    AttributeBonuses, AttributeFormula, DerivedAttributes, EquipmentBonusResolver, GameError,
    HeroId, ResolutionIssue,
};

use crate::oracle::OracleManager;
use crate::repository::HeroRepository;

pub(crate) struct AttributePipeline {
    oracles: OracleManager,
    heroes: Arc<dyn HeroRepository>,
    formula: AttributeFormula,
}

impl AttributePipeline {
    pub(crate) fn new(
        oracles: OracleManager,
        heroes: Arc<dyn HeroRepository>,
        formula: AttributeFormula,
    ) -> Self {
        Self {
            oracles,
            heroes,
            formula,
        }
    }

    /// Compute a snapshot for the hero's current record with `temporary` applied.
    ///
    /// Errors are the two conditions that yield [`DerivedAttributes::EMPTY`];
    /// callers decide whether to store anything. Item issues never fail the
    /// computation.
    pub(crate) fn compute(
        &self,
        hero: HeroId,
        temporary: &AttributeBonuses,
    ) -> Result<DerivedAttributes, ResolutionIssue> {
        let record = match self.heroes.load(hero) {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::debug!(%hero, "hero not found, returning empty attributes");
                return Err(ResolutionIssue::MissingHero(hero));
            }
            Err(error) => {
                tracing::warn!(%hero, %error, "hero repository unavailable");
                return Err(ResolutionIssue::MissingHero(hero));
            }
        };

        let Some(constants) = self.oracles.classes().constants(&record.class) else {
            tracing::warn!(%hero, class = %record.class, "unknown hero class");
            return Err(ResolutionIssue::UnknownClass(record.class));
        };

        let resolution = EquipmentBonusResolver::new(self.oracles.items())
            .resolve_detailed(&record.equipment);
        for issue in &resolution.issues {
            tracing::warn!(
                %hero,
                %issue,
                code = issue.error_code(),
                severity = issue.severity().as_str(),
                "equipment slot contributes no bonus"
            );
        }

        Ok(self.formula.calculate(
            &record.base,
            &resolution.bonuses,
            temporary,
            Some(&constants),
        ))
    }
}
