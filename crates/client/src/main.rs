//! Dungeon game client binary.
//!
//! Composition root: loads content overrides, builds the runtime and hands
//! its handle to the line-based terminal front end.
//!
//! # Examples
//!
//! ```bash
//! # Fast, reproducible play
//! DUNGEON_INSTANT=1 DUNGEON_SEED=7 cargo run -p dungeon-client
//! ```

mod app;
mod config;
mod input;
mod logging;
mod render;

use anyhow::{Context, Result};

use game_content::ContentFactory;
use game_core::ContentOracle;
use runtime::{OracleManager, Runtime, RuntimeConfig};

use crate::app::App;
use crate::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let client_config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(client_config.session_id.as_deref())?;

    tracing::info!("Starting Dungeon client");
    tracing::info!(data_dir = %client_config.data_dir.display(), "content directory");

    let factory = ContentFactory::new(&client_config.data_dir);
    let game_config = factory
        .load_config()
        .context("failed to load config.toml")?;
    let tables = factory
        .load_tables()
        .context("failed to load tables.toml")?;
    let catalog = factory.load_catalog();
    let classes = catalog.classes().to_vec();

    let mut runtime_config = RuntimeConfig::from_env();
    runtime_config.game_config = game_config;

    let runtime = Runtime::builder()
        .config(runtime_config)
        .oracles(OracleManager::new(
            std::sync::Arc::new(catalog),
            std::sync::Arc::new(tables),
        ))
        .build()
        .await?;

    tracing::info!("Runtime built successfully");

    let result = App::new(runtime.handle(), classes).run().await;
    runtime.shutdown().await?;

    tracing::info!("Client shutdown complete");
    result
}
