//! Common error infrastructure for hero-core.
//!
//! The attribute pipeline never fails outright: every gap in its inputs
//! degrades to a neutral value (zero bonus, empty snapshot). The conditions
//! that caused the degradation are still described here as typed values so
//! callers can log or surface them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each degradation has its own variant with the offending ids
//! - **Severity Classification**: Issues are categorized for logging priority
//! - **Stable Codes**: Every variant exposes a static code for metrics and tests

use crate::state::{ClassId, EquipmentSlot, HeroId, ItemId};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The pipeline substituted a neutral value and carried on
/// - **Validation**: Input referenced something that does not exist
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recovered locally with a neutral value.
    ///
    /// Examples: unknown item in a slot, item worn in the wrong slot
    Recoverable,

    /// Invalid reference that makes the whole result meaningless.
    ///
    /// Examples: hero not found, class constants missing
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all hero-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// A degraded input encountered while deriving attributes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionIssue {
    /// Equipped item id has no definition; it contributes zero.
    #[error("{item} in slot {slot} has no definition")]
    UnknownItem { slot: EquipmentSlot, item: ItemId },

    /// Item definition cannot be worn in the slot it occupies; it contributes zero.
    #[error("{item} cannot be equipped in slot {slot}")]
    NotEquippable { slot: EquipmentSlot, item: ItemId },

    /// Class constants could not be resolved; the snapshot is empty.
    #[error("class '{0}' has no formula constants")]
    UnknownClass(ClassId),

    /// No persisted record exists for the hero; the snapshot is empty.
    #[error("{0} has no persisted record")]
    MissingHero(HeroId),
}

impl GameError for ResolutionIssue {
    fn severity(&self) -> ErrorSeverity {
        use ResolutionIssue::*;
        match self {
            UnknownItem { .. } | NotEquippable { .. } => ErrorSeverity::Recoverable,
            UnknownClass(_) | MissingHero(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use ResolutionIssue::*;
        match self {
            UnknownItem { .. } => "STATS_UNKNOWN_ITEM",
            NotEquippable { .. } => "STATS_NOT_EQUIPPABLE",
            UnknownClass(_) => "STATS_UNKNOWN_CLASS",
            MissingHero(_) => "STATS_MISSING_HERO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_issues_are_recoverable() {
        let issue = ResolutionIssue::UnknownItem {
            slot: EquipmentSlot::Head,
            item: ItemId(42),
        };
        assert!(issue.severity().is_recoverable());
        assert_eq!(issue.error_code(), "STATS_UNKNOWN_ITEM");
        assert_eq!(issue.to_string(), "item#42 in slot head has no definition");
    }

    #[test]
    fn missing_inputs_are_validation_errors() {
        let issue = ResolutionIssue::UnknownClass(ClassId::new("bard"));
        assert_eq!(issue.severity(), ErrorSeverity::Validation);
        assert_eq!(issue.severity().as_str(), "validation");
        assert_eq!(issue.to_string(), "class 'bard' has no formula constants");
        assert_eq!(
            ResolutionIssue::MissingHero(HeroId(3)).error_code(),
            "STATS_MISSING_HERO"
        );
    }
}
