//! Minimal [`hero_core::ClassOracle`] backed by an in-memory map.
use std::collections::HashMap;

use hero_core::{ClassFormulaConstants, ClassId, ClassOracle};

/// ClassOracle implementation with static per-class constants
pub struct ClassOracleImpl {
    classes: HashMap<ClassId, ClassFormulaConstants>,
}

impl ClassOracleImpl {
    pub fn new() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Add or replace the constants for a class
    pub fn add_class(&mut self, id: impl Into<ClassId>, constants: ClassFormulaConstants) {
        self.classes.insert(id.into(), constants);
    }
}

impl Default for ClassOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassOracle for ClassOracleImpl {
    fn constants(&self, class: &ClassId) -> Option<ClassFormulaConstants> {
        self.classes.get(class).cloned()
    }
}
