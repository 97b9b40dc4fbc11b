//! Content loaders for reading hero data from files.
//!
//! This module provides loaders that convert RON/TOML files into the plain
//! hero-core values runtime oracles are built from.

pub mod classes;
pub mod config;
pub mod factory;
pub mod item;

pub use classes::{ClassCatalog, ClassLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
