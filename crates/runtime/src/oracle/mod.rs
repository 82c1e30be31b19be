//! Runtime wrappers around static game content oracles.
//!
//! The content and balance tables are bundled into an [`OracleManager`] so
//! the worker can build a [`GameEnv`] for every engine call. The data is
//! immutable at runtime; dynamic state lives in the worker's store.
mod rng;

use std::sync::Arc;

use game_content::{BalanceTables, Catalog};
use game_core::{ContentOracle, GameEnv, TablesOracle};

pub use rng::StdRandom;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    content: Arc<dyn ContentOracle>,
    tables: Arc<dyn TablesOracle>,
}

impl OracleManager {
    pub fn new(content: Arc<dyn ContentOracle>, tables: Arc<dyn TablesOracle>) -> Self {
        Self { content, tables }
    }

    /// Built-in catalogue with the given balance tables.
    pub fn with_tables(tables: BalanceTables) -> Self {
        Self::new(Arc::new(Catalog::builtin()), Arc::new(tables))
    }

    /// Built-in catalogue and default balance tables.
    pub fn builtin() -> Self {
        Self::with_tables(BalanceTables::default())
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        GameEnv::new(self.content.as_ref(), self.tables.as_ref())
    }

    pub fn content(&self) -> &dyn ContentOracle {
        self.content.as_ref()
    }
}

impl Default for OracleManager {
    fn default() -> Self {
        Self::builtin()
    }
}
