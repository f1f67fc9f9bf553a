//! Match roster loader.
//!
//! A roster file seats players and names the catalog forms each one brings.
//! Combatant ids are assigned in file order starting from 1.

use std::path::Path;

use battle_core::{
    Bag, CatalogId, CatalogOracle, CatalogSnapshot, Combatant, CombatantId, ItemId, ItemKind,
    MatchState, Player, PlayerId, Roster, StateError,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Stack of catalog items placed in a bag at match start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSpec {
    pub item: ItemId,
    pub quantity: u16,
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub party: Vec<CatalogId>,
    /// Items given to the first combatant of the party.
    #[serde(default)]
    pub bag: Vec<StockSpec>,
}

/// Complete match roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSpec {
    pub players: Vec<PlayerSpec>,
    #[serde(default)]
    pub shared_bag: Vec<StockSpec>,
}

impl RosterSpec {
    /// Instantiates the roster against `catalog` into a fresh match.
    pub fn build(&self, seed: u64, catalog: &CatalogSnapshot) -> LoadResult<MatchState> {
        let mut next_id = 1u32;
        let mut players = Vec::with_capacity(self.players.len());

        for (index, spec) in self.players.iter().enumerate() {
            let player_id = PlayerId(index as u32 + 1);
            let mut roster = Roster::new();

            for form in &spec.party {
                let definition = catalog
                    .creature(*form)
                    .ok_or_else(|| anyhow::anyhow!("{} brings unknown {}", spec.name, form))?;
                let combatant = Combatant::from_definition(CombatantId(next_id), definition);
                roster
                    .try_push(combatant)
                    .map_err(|_| StateError::RosterFull(player_id))?;
                next_id += 1;
            }

            if let Some(first) = roster.first_mut() {
                first.bag = stock_bag(&spec.bag, catalog)?;
            }

            debug!(player = %player_id, name = %spec.name, party = roster.len(), "seated player");
            players.push(Player::new(player_id, spec.name.clone(), roster));
        }

        let shared_bag = stock_bag(&self.shared_bag, catalog)?;
        Ok(MatchState::new(seed, players)?.with_shared_bag(shared_bag))
    }
}

fn stock_bag(stock: &[StockSpec], catalog: &CatalogSnapshot) -> LoadResult<Bag> {
    let mut bag = Bag::empty();
    for entry in stock {
        if catalog.item(entry.item).is_none() {
            anyhow::bail!("unknown item {}", entry.item);
        }
        if entry.quantity == 0 {
            continue;
        }
        bag.add(ItemKind::Catalog(entry.item), entry.quantity)?;
    }
    Ok(bag)
}

/// Loader for match rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<RosterSpec> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON {}: {}", path.display(), e))
    }
}
