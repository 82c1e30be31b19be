//! Content factory for building oracles from a data directory.

use std::path::{Path, PathBuf};

use game_core::GameConfig;

use crate::catalog::Catalog;
use crate::loaders::{ConfigLoader, LoadResult, TablesLoader};
use crate::tables::BalanceTables;

/// Content factory that loads overrides from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── tables.toml
/// ```
///
/// Both files are optional; a missing file means built-in defaults.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load balance tables from `tables.toml`.
    pub fn load_tables(&self) -> LoadResult<BalanceTables> {
        let path = self.data_dir.join("tables.toml");
        if !path.exists() {
            return Ok(BalanceTables::default());
        }
        TablesLoader::load(&path)
    }

    pub fn load_catalog(&self) -> Catalog {
        Catalog::builtin()
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
