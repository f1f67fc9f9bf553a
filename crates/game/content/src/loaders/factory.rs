//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, CatalogSnapshot, MatchState};
use tracing::info;

use crate::loaders::{
    ConfigLoader, CreatureLoader, ItemLoader, LoadResult, RosterLoader, RosterSpec,
};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml
/// ├── creatures.ron
/// ├── items.ron
/// └── match.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load rule tables from `rules.toml`. A missing file yields the defaults.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            info!(path = %path.display(), "no rule tables found, using defaults");
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the creature and item catalogs into one snapshot.
    ///
    /// Evolution edges pointing outside the catalog are rejected.
    pub fn load_catalog(&self) -> LoadResult<CatalogSnapshot> {
        let creatures = CreatureLoader::load(&self.data_dir.join("creatures.ron"))?;
        let items = ItemLoader::load(&self.data_dir.join("items.ron"))?;
        let catalog = CatalogSnapshot::new(creatures, items);

        if let Some((from, to)) = catalog.dangling_evolutions().first() {
            anyhow::bail!("{from} evolves into {to}, which is not in the catalog");
        }

        info!(
            creatures = catalog.creatures().count(),
            items = catalog.items().count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Load the match roster from `match.ron`.
    pub fn load_roster(&self) -> LoadResult<RosterSpec> {
        RosterLoader::load(&self.data_dir.join("match.ron"))
    }

    /// Loads the roster and instantiates it against `catalog`.
    pub fn build_match(&self, seed: u64, catalog: &CatalogSnapshot) -> LoadResult<MatchState> {
        self.load_roster()?.build(seed, catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use battle_core::CatalogId;

    use super::*;

    const CREATURES: &str = r#"(creatures: [
        (id: 1, name: "Agumon", level: 1, creature_type: Vaccine, base_power: 3000, evolves_to: [2]),
        (id: 2, name: "Greymon", level: 2, creature_type: Vaccine, base_power: 6000),
        (id: 3, name: "Gabumon", level: 1, creature_type: Data, base_power: 3000),
    ])"#;

    fn write_data(dir: &Path, creatures: &str) {
        fs::write(dir.join("creatures.ron"), creatures).unwrap();
        fs::write(dir.join("items.ron"), "(items: [])").unwrap();
        fs::write(
            dir.join("match.ron"),
            r#"(players: [(name: "A", party: [1]), (name: "B", party: [3])])"#,
        )
        .unwrap();
    }

    #[test]
    fn loads_full_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_data(dir.path(), CREATURES);
        fs::write(dir.path().join("rules.toml"), "[provoke]\ncooldown_rounds = 2\n").unwrap();

        let factory = ContentFactory::new(dir.path());
        let config = factory.load_config().unwrap();
        assert_eq!(config.provoke.cooldown_rounds, 2);

        let catalog = factory.load_catalog().unwrap();
        let state = factory.build_match(9, &catalog).unwrap();
        assert_eq!(state.players.len(), 2);
        assert_eq!(state.players[1].roster[0].form, CatalogId(3));
    }

    #[test]
    fn missing_rules_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), BattleConfig::default());
    }

    #[test]
    fn dangling_evolution_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_data(
            dir.path(),
            r#"(creatures: [(id: 1, name: "Agumon", level: 1, creature_type: Vaccine, base_power: 3000, evolves_to: [7])])"#,
        );

        let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        assert!(err.to_string().contains("creature:7"));
    }
}
