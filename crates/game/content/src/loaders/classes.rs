//! Class formula constants loader.

use std::collections::BTreeMap;
use std::path::Path;

use hero_core::{ClassFormulaConstants, ClassId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Class catalog structure for RON files.
///
/// ```ron
/// (
///     classes: {
///         "warrior": (base_health: 100.0, health_per_vitality: 5.0),
///     },
/// )
/// ```
///
/// Omitted constants default to `0.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCatalog {
    pub classes: BTreeMap<ClassId, ClassFormulaConstants>,
}

/// Loader for class constants from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load class constants from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ClassCatalog
    pub fn load(path: &Path) -> LoadResult<Vec<(ClassId, ClassFormulaConstants)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse class constants from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<(ClassId, ClassFormulaConstants)>> {
        let catalog: ClassCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class catalog RON: {}", e))?;

        Ok(catalog.classes.into_iter().collect())
    }
}
