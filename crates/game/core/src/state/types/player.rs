use arrayvec::ArrayVec;

use super::{Combatant, CombatantId, PlayerId};
use crate::config::BattleConfig;

pub type Roster = ArrayVec<Combatant, { BattleConfig::MAX_PARTY_SIZE }>;

/// A seat at the table and the party it controls.
///
/// The roster is fixed at match start; combatants mutate in place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub roster: Roster,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, roster: Roster) -> Self {
        Self {
            id,
            name: name.into(),
            roster,
        }
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.roster.iter().find(|combatant| combatant.id == id)
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.roster.iter_mut().find(|combatant| combatant.id == id)
    }

    pub fn contains(&self, id: CombatantId) -> bool {
        self.combatant(id).is_some()
    }

    pub fn has_living(&self) -> bool {
        self.roster.iter().any(Combatant::is_alive)
    }

    pub fn living(&self) -> impl Iterator<Item = &Combatant> {
        self.roster.iter().filter(|combatant| combatant.is_alive())
    }

    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            player: self.id,
            name: self.name.clone(),
            survivors: self
                .living()
                .map(|combatant| SurvivorSummary {
                    id: combatant.id,
                    name: combatant.name.clone(),
                    current_hp: combatant.current_hp,
                    base_power: combatant.base_power,
                })
                .collect(),
        }
    }
}

/// Identity of a winning player and the combatants still standing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSummary {
    pub player: PlayerId,
    pub name: String,
    pub survivors: Vec<SurvivorSummary>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurvivorSummary {
    pub id: CombatantId,
    pub name: String,
    pub current_hp: u32,
    pub base_power: u32,
}
