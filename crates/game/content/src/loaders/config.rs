//! Rule table loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`BattleConfig`] from TOML files.
///
/// Every table and field is optional; missing entries keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load rule tables from a TOML file.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| e.context(format!("in {}", path.display())))
    }

    /// Parse rule tables from TOML text.
    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        if !config.is_well_formed() {
            anyhow::bail!(
                "rule tables are malformed: advantage cycles need three distinct members and \
                 divisors must be positive"
            );
        }
        Ok(config)
    }
}
