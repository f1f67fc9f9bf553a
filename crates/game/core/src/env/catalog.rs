//! Read-only catalog records consumed by the engine.
//!
//! The catalog (creature definitions, item effects) is authored and stored by
//! external collaborators. The engine only reads it through [`CatalogOracle`].

use std::collections::BTreeMap;

use crate::state::{Attribute, CatalogId, CreatureType, ItemId};

/// Oracle providing creature and item definitions.
pub trait CatalogOracle: Send + Sync {
    fn creature(&self, id: CatalogId) -> Option<&CreatureDefinition>;
    fn item(&self, id: ItemId) -> Option<&ItemDefinition>;
}

/// A creature form as printed in the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureDefinition {
    pub id: CatalogId,
    pub name: String,
    /// Evolution stage, 0 (baby) to [`BattleConfig::MAX_LEVEL`](crate::BattleConfig::MAX_LEVEL).
    pub level: u8,
    pub creature_type: CreatureType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attribute: Option<Attribute>,
    pub base_power: u32,
    /// Forms this creature may evolve into.
    #[cfg_attr(feature = "serde", serde(default))]
    pub evolves_to: Vec<CatalogId>,
}

impl CreatureDefinition {
    pub fn can_evolve_into(&self, target: &CreatureDefinition) -> bool {
        self.evolves_to.contains(&target.id) && target.level == self.level + 1
    }
}

/// An item as printed in the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub effect: ItemEffect,
}

/// Effect applied when an item is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Restores HP, capped at base power.
    Heal(u32),
    /// Adds percentage points to the attack bonus.
    AttackBonus(i32),
    /// Adds percentage points to the defense bonus.
    DefenseBonus(i32),
    /// Flat power added to the next exchange.
    PowerBoost(u32),
}

/// In-memory catalog backed by ordered maps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogSnapshot {
    creatures: BTreeMap<CatalogId, CreatureDefinition>,
    items: BTreeMap<ItemId, ItemDefinition>,
}

impl CatalogSnapshot {
    pub fn new(
        creatures: impl IntoIterator<Item = CreatureDefinition>,
        items: impl IntoIterator<Item = ItemDefinition>,
    ) -> Self {
        Self {
            creatures: creatures.into_iter().map(|def| (def.id, def)).collect(),
            items: items.into_iter().map(|def| (def.id, def)).collect(),
        }
    }

    pub fn creatures(&self) -> impl Iterator<Item = &CreatureDefinition> {
        self.creatures.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }

    /// Evolution edges whose target is missing from the catalog.
    pub fn dangling_evolutions(&self) -> Vec<(CatalogId, CatalogId)> {
        self.creatures
            .values()
            .flat_map(|def| def.evolves_to.iter().map(move |to| (def.id, *to)))
            .filter(|(_, to)| !self.creatures.contains_key(to))
            .collect()
    }
}

impl CatalogOracle for CatalogSnapshot {
    fn creature(&self, id: CatalogId) -> Option<&CreatureDefinition> {
        self.creatures.get(&id)
    }

    fn item(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.get(&id)
    }
}
