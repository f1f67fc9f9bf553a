//! Player actions and the transition contract they implement.
//!
//! Each action is a plain struct implementing [`ActionTransition`]. The engine
//! drives it through `pre_validate` → `apply` → `post_validate` and rolls the
//! state back if any phase fails.
//!
//! # Module Structure
//!
//! - `error`: shared actor checks, per-action errors, invariant violations
//! - `attack`: exchange with redirection, provoke release and evolution rolls
//! - `defend`, `provoke`: targeting declarations
//! - `rest`, `loot`, `revive`, `item`, `evolve`: remaining player actions
//! - `pass`: hands the turn to the next living player
mod attack;
mod defend;
mod error;
mod evolve;
mod item;
mod loot;
mod pass;
mod provoke;
mod rest;
mod revive;

pub use attack::{AttackAction, AttackOutcome};
pub use defend::DefendAction;
pub use error::{
    ActionError, AttackError, DefendError, EvolveError, InvariantViolation, ItemError, LootError,
    ProvokeError, RestError, ReviveError, TurnError,
};
pub use evolve::EvolveAction;
pub use item::{BagSource, ItemOutcome, UseItemAction};
pub use loot::LootAction;
pub use pass::PassTurnAction;
pub use provoke::ProvokeAction;
pub use rest::RestAction;
pub use revive::{ReviveAction, RevivalOutcome};

use crate::engine::TurnAdvance;
use crate::env::BattleEnv;
use crate::state::{CatalogId, Combatant, CombatantId, MatchState};

/// Defines how a concrete action mutates match state.
///
/// Validation hooks receive read-only access to the environment and must stay
/// side-effect free.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &MatchState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the match state directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut MatchState, env: &BattleEnv<'_>)
    -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &MatchState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Every action a player can submit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Attack(AttackAction),
    Defend(DefendAction),
    Provoke(ProvokeAction),
    Rest(RestAction),
    Loot(LootAction),
    Revive(ReviveAction),
    UseItem(UseItemAction),
    Evolve(EvolveAction),
    PassTurn(PassTurnAction),
}

impl Action {
    /// Combatant performing the action. `None` for pass turn.
    pub fn actor(&self) -> Option<CombatantId> {
        match self {
            Action::Attack(action) => Some(action.actor),
            Action::Defend(action) => Some(action.actor),
            Action::Provoke(action) => Some(action.actor),
            Action::Rest(action) => Some(action.actor),
            Action::Loot(action) => Some(action.actor),
            Action::Revive(action) => Some(action.actor),
            Action::UseItem(action) => Some(action.actor),
            Action::Evolve(action) => Some(action.actor),
            Action::PassTurn(_) => None,
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Attack(_) => ActionKind::Attack,
            Action::Defend(_) => ActionKind::Defend,
            Action::Provoke(_) => ActionKind::Provoke,
            Action::Rest(_) => ActionKind::Rest,
            Action::Loot(_) => ActionKind::Loot,
            Action::Revive(_) => ActionKind::Revive,
            Action::UseItem(_) => ActionKind::UseItem,
            Action::Evolve(_) => ActionKind::Evolve,
            Action::PassTurn(_) => ActionKind::PassTurn,
        }
    }

    pub fn attack(actor: CombatantId, target: CombatantId) -> Self {
        Self::Attack(AttackAction::new(actor, target))
    }

    pub fn pass_turn() -> Self {
        Self::PassTurn(PassTurnAction)
    }
}

/// Fieldless tag for logging and dispatch tables.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Attack,
    Defend,
    Provoke,
    Rest,
    Loot,
    Revive,
    UseItem,
    Evolve,
    PassTurn,
}

/// Action-specific outcome returned alongside the state delta.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Attack(AttackOutcome),
    Defend {
        protected: CombatantId,
    },
    Provoke {
        target: CombatantId,
    },
    Rest {
        healed: u32,
    },
    Loot {
        roll: u32,
        reward: u32,
    },
    Revive(RevivalOutcome),
    UseItem(ItemOutcome),
    Evolve {
        from: CatalogId,
        into: CatalogId,
    },
    PassTurn(TurnAdvance),
}

// ============================================================================
// Shared checks
// ============================================================================

/// Resolves a combatant owned by the current player that is alive.
pub(crate) fn owned_combatant(
    state: &MatchState,
    id: CombatantId,
) -> Result<&Combatant, ActionError> {
    let owner = state
        .owner_of(id)
        .ok_or(ActionError::UnknownCombatant(id))?;
    if owner != state.turn.current_player {
        return Err(ActionError::NotCurrentPlayer {
            actor: id,
            current: state.current_player().id,
        });
    }
    let combatant = state
        .players[owner]
        .combatant(id)
        .ok_or(ActionError::UnknownCombatant(id))?;
    if combatant.is_defeated() {
        return Err(ActionError::Defeated(id));
    }
    Ok(combatant)
}

/// Like [`owned_combatant`], additionally requiring the combatant to be ready.
pub(crate) fn acting_combatant(
    state: &MatchState,
    id: CombatantId,
) -> Result<&Combatant, ActionError> {
    let combatant = owned_combatant(state, id)?;
    if !combatant.is_ready() {
        return Err(ActionError::AlreadyActed(id));
    }
    Ok(combatant)
}

/// Mutable handle to a combatant the pre-validation already resolved.
pub(crate) fn combatant_mut(
    state: &mut MatchState,
    id: CombatantId,
) -> Result<&mut Combatant, ActionError> {
    state
        .combatant_mut(id)
        .ok_or(ActionError::UnknownCombatant(id))
}

/// Fails on the first combatant whose HP exceeds its base power.
pub(crate) fn ensure_hp_bounds(state: &MatchState) -> Result<(), InvariantViolation> {
    match state
        .combatants()
        .find(|combatant| !combatant.hp_within_bounds())
    {
        Some(combatant) => Err(InvariantViolation::HpOutOfBounds {
            id: combatant.id,
            hp: combatant.current_hp,
            base_power: combatant.base_power,
        }),
        None => Ok(()),
    }
}
