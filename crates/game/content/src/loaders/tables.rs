//! Balance tables loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::tables::BalanceTables;

/// Loader for [`BalanceTables`] overrides from TOML files.
pub struct TablesLoader;

impl TablesLoader {
    pub fn load(path: &Path) -> LoadResult<BalanceTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BalanceTables> {
        let tables: BalanceTables = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;

        if tables.dodge_cap >= 100 {
            anyhow::bail!("dodge_cap must stay below 100, got {}", tables.dodge_cap);
        }
        if tables.advantage_multiplier <= 0.0 || tables.disadvantage_multiplier <= 0.0 {
            anyhow::bail!("element multipliers must be positive");
        }
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::TablesOracle;

    #[test]
    fn overrides_chances_and_defense() {
        let tables = TablesLoader::parse(
            r#"
combat_chance = 100
boss_drop_chance = 80

[starting_defense]
name = "Chain Mail"
reduction = 20
"#,
        )
        .unwrap();

        assert_eq!(tables.combat_chance(), 100);
        assert_eq!(tables.artifact_drop_chance(true), 80);
        assert_eq!(tables.artifact_drop_chance(false), 10);
        assert_eq!(tables.default_defense().reduction, 20);
        assert_eq!(tables.dodge_rate(0), 10);
    }

    #[test]
    fn rejects_certain_dodge() {
        assert!(TablesLoader::parse("dodge_cap = 100").is_err());
    }
}
