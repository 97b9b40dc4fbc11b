//! Stats configuration loader.

use std::path::Path;

use hero_core::StatsConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for stats configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing StatsConfig
    ///
    /// # Returns
    ///
    /// Returns a StatsConfig. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<StatsConfig> {
        let content = read_file(path)?;
        let config: StatsConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
