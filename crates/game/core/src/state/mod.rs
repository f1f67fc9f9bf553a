//! Authoritative match state representation.
//!
//! This module owns the data structures that describe players, combatants,
//! turn bookkeeping and the shared inventory. Hosts clone or query this state
//! but mutate it exclusively through the engine.
pub mod delta;
mod error;
#[cfg(feature = "serde")]
mod root;
pub mod types;

use std::collections::BTreeSet;

use arrayvec::ArrayVec;

use crate::config::BattleConfig;

pub use delta::{CombatantChanges, CombatantFields, StateDelta, TurnFields};
pub use error::StateError;
#[cfg(feature = "serde")]
pub use root::compute_state_root;
pub use types::{
    Attribute, Bag, BagFull, BagSlot, CatalogId, Combatant, CombatantId, CreatureType,
    EvolutionGate, ItemId, ItemKind, MatchStatus, Player, PlayerId, PlayerSummary, Readiness,
    Roster, Round, SurvivorSummary, TurnState,
};

pub type Players = ArrayVec<Player, { BattleConfig::MAX_PLAYERS }>;

/// Canonical snapshot of one match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    /// Seed for deterministic rolls.
    ///
    /// Set once at match creation and never modified. Combined with
    /// `turn.nonce` to derive a distinct seed for every roll.
    pub seed: u64,

    /// Seats in turn order. Order is fixed at creation.
    pub players: Players,

    pub turn: TurnState,

    /// Team-level inventory any combatant may draw from.
    pub shared_bag: Bag,

    pub status: MatchStatus,
}

impl MatchState {
    /// Assembles a match from seated players.
    ///
    /// Rejects tables with fewer than [`BattleConfig::MIN_PLAYERS`] or more than
    /// [`BattleConfig::MAX_PLAYERS`] seats, empty rosters, reused ids, and
    /// combatants whose HP exceeds their base power.
    pub fn new(seed: u64, players: Vec<Player>) -> Result<Self, StateError> {
        if players.len() < BattleConfig::MIN_PLAYERS {
            return Err(StateError::TooFewPlayers {
                min: BattleConfig::MIN_PLAYERS,
                current: players.len(),
            });
        }
        if players.len() > BattleConfig::MAX_PLAYERS {
            return Err(StateError::TooManyPlayers {
                max: BattleConfig::MAX_PLAYERS,
                current: players.len(),
            });
        }

        let mut player_ids = BTreeSet::new();
        let mut combatant_ids = BTreeSet::new();
        for player in &players {
            if !player_ids.insert(player.id) {
                return Err(StateError::DuplicatePlayer(player.id));
            }
            if player.roster.is_empty() {
                return Err(StateError::EmptyRoster(player.id));
            }
            for combatant in &player.roster {
                if !combatant_ids.insert(combatant.id) {
                    return Err(StateError::DuplicateCombatant(combatant.id));
                }
                if !combatant.hp_within_bounds() {
                    return Err(StateError::HpOutOfBounds {
                        id: combatant.id,
                        hp: combatant.current_hp,
                        base_power: combatant.base_power,
                    });
                }
            }
        }

        Ok(Self {
            seed,
            players: players.into_iter().collect(),
            turn: TurnState::new(),
            shared_bag: Bag::empty(),
            status: MatchStatus::InProgress,
        })
    }

    #[must_use]
    pub fn with_shared_bag(mut self, bag: Bag) -> Self {
        self.shared_bag = bag;
        self
    }

    pub fn round(&self) -> Round {
        self.turn.round
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn.current_player]
    }

    /// Index of the player owning `id`.
    pub fn owner_of(&self, id: CombatantId) -> Option<usize> {
        self.players.iter().position(|player| player.contains(id))
    }

    /// The roster `id` belongs to.
    pub fn team_of(&self, id: CombatantId) -> Option<&Player> {
        self.owner_of(id).map(|index| &self.players[index])
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.players.iter().find_map(|player| player.combatant(id))
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.players
            .iter_mut()
            .find_map(|player| player.combatant_mut(id))
    }

    /// Returns true when `a` and `b` sit on the same team.
    pub fn are_teammates(&self, a: CombatantId, b: CombatantId) -> bool {
        match (self.owner_of(a), self.owner_of(b)) {
            (Some(owner_a), Some(owner_b)) => owner_a == owner_b,
            _ => false,
        }
    }

    /// Iterates every combatant of every player in seat order.
    pub fn combatants(&self) -> impl Iterator<Item = &Combatant> {
        self.players.iter().flat_map(|player| player.roster.iter())
    }

    /// Indices of players with at least one living combatant.
    pub fn living_players(&self) -> impl Iterator<Item = usize> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.has_living())
            .map(|(index, _)| index)
    }
}
