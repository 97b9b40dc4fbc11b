use crate::state::ClassId;
use crate::stats::ClassFormulaConstants;

/// Read-only lookup of per-class formula constants.
pub trait ClassOracle: Send + Sync {
    /// Returns the constants for `class`, or `None` if the class is unknown.
    fn constants(&self, class: &ClassId) -> Option<ClassFormulaConstants>;
}
