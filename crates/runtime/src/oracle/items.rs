//! Minimal [`hero_core::ItemOracle`] backed by an in-memory map.
use std::collections::HashMap;

use hero_core::{ItemDefinition, ItemId, ItemOracle};

/// ItemOracle implementation with static item definitions
pub struct ItemOracleImpl {
    definitions: HashMap<ItemId, ItemDefinition>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Add an item definition
    pub fn add_definition(&mut self, def: ItemDefinition) {
        self.definitions.insert(def.id, def);
    }
}

impl Default for ItemOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<ItemDefinition> for ItemOracleImpl {
    fn from_iter<T: IntoIterator<Item = ItemDefinition>>(iter: T) -> Self {
        let mut oracle = Self::new();
        for def in iter {
            oracle.add_definition(def);
        }
        oracle
    }
}

impl ItemOracle for ItemOracleImpl {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition> {
        self.definitions.get(&id).cloned()
    }
}
