//! Creature catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use battle_core::{BattleConfig, CreatureDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Creature catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureCatalog {
    pub creatures: Vec<CreatureDefinition>,
}

/// Loader for creature definitions from RON files.
pub struct CreatureLoader;

impl CreatureLoader {
    /// Load creature definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<CreatureDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| e.context(format!("in {}", path.display())))
    }

    /// Parse and validate a creature catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<CreatureDefinition>> {
        let catalog: CreatureCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse creature catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for creature in &catalog.creatures {
            if !seen.insert(creature.id) {
                anyhow::bail!("duplicate creature id {}", creature.id);
            }
            if creature.level > BattleConfig::MAX_LEVEL {
                anyhow::bail!(
                    "{} ({}) has level {} above {}",
                    creature.name,
                    creature.id,
                    creature.level,
                    BattleConfig::MAX_LEVEL
                );
            }
            if creature.base_power == 0 {
                anyhow::bail!("{} ({}) has zero base power", creature.name, creature.id);
            }
        }
        Ok(catalog.creatures)
    }
}

#[cfg(test)]
mod tests {
    use battle_core::{Attribute, CatalogId, CreatureType};

    use super::*;

    #[test]
    fn parses_creatures_with_optional_fields() {
        let creatures = CreatureLoader::parse(
            r#"(
                creatures: [
                    (
                        id: 1,
                        name: "Agumon",
                        level: 1,
                        creature_type: Vaccine,
                        attribute: Some(Fire),
                        base_power: 3000,
                        evolves_to: [2],
                    ),
                    (id: 2, name: "Greymon", level: 2, creature_type: Vaccine, base_power: 6000),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(creatures.len(), 2);
        assert_eq!(creatures[0].attribute, Some(Attribute::Fire));
        assert_eq!(creatures[0].evolves_to, vec![CatalogId(2)]);
        assert_eq!(creatures[1].attribute, None);
        assert_eq!(creatures[1].creature_type, CreatureType::Vaccine);
    }

    #[test]
    fn rejects_duplicates_and_bad_levels() {
        let duplicate = r#"(creatures: [
            (id: 1, name: "A", level: 0, creature_type: Data, base_power: 100),
            (id: 1, name: "B", level: 0, creature_type: Data, base_power: 100),
        ])"#;
        assert!(CreatureLoader::parse(duplicate).is_err());

        let too_high = r#"(creatures: [
            (id: 1, name: "A", level: 9, creature_type: Data, base_power: 100),
        ])"#;
        assert!(CreatureLoader::parse(too_high).is_err());
    }
}
