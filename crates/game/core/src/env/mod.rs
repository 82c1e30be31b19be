//! Traits describing read-only game data.
//!
//! Oracles expose content tables and balance formulas. [`GameEnv`] bundles
//! them so the engine can access everything it needs without hard coupling
//! to concrete implementations.
mod content;
mod rng;
mod tables;

pub use content::{ClassDefinition, ContentOracle};
pub use rng::{RandomSource, ScriptedRandom};
pub use tables::{StageType, TablesOracle};

/// Aggregates the read-only oracles required by the engine.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    content: &'a dyn ContentOracle,
    tables: &'a dyn TablesOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(content: &'a dyn ContentOracle, tables: &'a dyn TablesOracle) -> Self {
        Self { content, tables }
    }

    pub fn content(&self) -> &'a dyn ContentOracle {
        self.content
    }

    pub fn tables(&self) -> &'a dyn TablesOracle {
        self.tables
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv").finish_non_exhaustive()
    }
}
