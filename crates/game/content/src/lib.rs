//! Data-driven content definitions and loaders.
//!
//! This crate houses the static game content and the balance numbers:
//! - Classes, card pools, enemies, events and artifacts ([`Catalog`])
//! - Dodge curve, element chart, rewards and odds ([`BalanceTables`])
//! - TOML overrides for [`game_core::GameConfig`] and the balance tables
//!
//! Content is consumed through the core oracle traits and never appears in
//! game state except as copies handed to the run.

pub mod catalog;
pub mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ArtifactEntry, Catalog, EnemyTemplate, KNIGHT, MAGE, ROGUE};
pub use tables::{BalanceTables, strong_against};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, TablesLoader};
