//! The data directory shipped with the workspace must always load.

use std::path::PathBuf;

use battle_content::ContentFactory;
use battle_core::{BattleConfig, CatalogOracle, ItemKind};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn shipped_rules_match_defaults() {
    let config = ContentFactory::new(data_dir()).load_config().unwrap();
    assert_eq!(config, BattleConfig::default());
}

#[test]
fn shipped_match_builds() {
    let factory = ContentFactory::new(data_dir());
    let catalog = factory.load_catalog().unwrap();
    let state = factory.build_match(7, &catalog).unwrap();

    assert_eq!(state.players.len(), 2);
    for combatant in state.combatants() {
        let form = catalog.creature(combatant.form).unwrap();
        assert_eq!(combatant.current_hp, form.base_power);
    }
    assert!(
        state
            .shared_bag
            .slots()
            .iter()
            .all(|slot| matches!(slot.item, ItemKind::Catalog(_)))
    );
}
