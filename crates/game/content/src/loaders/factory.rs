//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use hero_core::{ClassFormulaConstants, ClassId, ItemDefinition, StatsConfig};

use crate::loaders::{ClassLoader, ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads all hero content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── classes.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Content factory over the data files shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load stats configuration from `config.toml`.
    ///
    /// A missing file yields [`StatsConfig::default`].
    pub fn load_config(&self) -> LoadResult<StatsConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(StatsConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load class formula constants from `classes.ron`.
    pub fn load_classes(&self) -> LoadResult<Vec<(ClassId, ClassFormulaConstants)>> {
        let path = self.data_dir.join("classes.ron");
        ClassLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
