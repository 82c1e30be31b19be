//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`GameConfig`] overrides from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys absent from the file keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.hand_size == 0 {
            anyhow::bail!("hand_size must be at least 1");
        }
        if config.stages_per_layer == 0 {
            anyhow::bail!("stages_per_layer must be at least 1");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config = ConfigLoader::parse("hand_size = 5\npoison_turns = 4\n").unwrap();
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.poison_turns, 4);
        assert_eq!(config.stages_per_layer, GameConfig::DEFAULT_STAGES_PER_LAYER);
        assert_eq!(config.card_reward_cadence, GameConfig::DEFAULT_CARD_REWARD_CADENCE);
    }

    #[test]
    fn rejects_empty_hand() {
        assert!(ConfigLoader::parse("hand_size = 0").is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ConfigLoader::parse("hand_size = \"four\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
