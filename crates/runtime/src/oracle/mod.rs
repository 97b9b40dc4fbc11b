//! Runtime wrappers around static content oracles.
//!
//! These implementations expose `hero-core` oracle traits and bundle them into
//! an [`OracleManager`] so services can share one set of content handles. The
//! data is immutable at runtime; dynamic state lives in repositories.
mod classes;
mod items;

use std::sync::Arc;

use hero_content::ContentFactory;
use hero_core::{ClassOracle, ItemOracle};

pub use classes::ClassOracleImpl;
pub use items::ItemOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) items: Arc<dyn ItemOracle>,
    pub(crate) classes: Arc<dyn ClassOracle>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(items: Arc<dyn ItemOracle>, classes: Arc<dyn ClassOracle>) -> Self {
        Self { items, classes }
    }

    /// Builds in-memory oracles from a content directory.
    pub fn from_content(factory: &ContentFactory) -> anyhow::Result<Self> {
        let mut items = ItemOracleImpl::new();
        for definition in factory.load_items()? {
            items.add_definition(definition);
        }

        let mut classes = ClassOracleImpl::new();
        for (id, constants) in factory.load_classes()? {
            classes.add_class(id, constants);
        }

        Ok(Self::new(Arc::new(items), Arc::new(classes)))
    }

    pub fn items(&self) -> &dyn ItemOracle {
        self.items.as_ref()
    }

    pub fn classes(&self) -> &dyn ClassOracle {
        self.classes.as_ref()
    }
}
