//! Match setup errors.
//!
//! Errors raised while assembling a `MatchState` from player rosters.

use crate::error::{BattleError, ErrorSeverity};
use crate::state::{CombatantId, PlayerId};

/// Errors that occur while building a match.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error("too few players (min: {min}, current: {current})")]
    TooFewPlayers { min: usize, current: usize },

    #[error("too many players (max: {max}, current: {current})")]
    TooManyPlayers { max: usize, current: usize },

    #[error("roster of player {0} is full")]
    RosterFull(PlayerId),

    #[error("player {0} has no combatants")]
    EmptyRoster(PlayerId),

    #[error("player id {0} is used twice")]
    DuplicatePlayer(PlayerId),

    #[error("combatant id {0} is used twice")]
    DuplicateCombatant(CombatantId),

    #[error("combatant {id} starts with hp {hp} above base power {base_power}")]
    HpOutOfBounds {
        id: CombatantId,
        hp: u32,
        base_power: u32,
    },
}

impl BattleError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            TooFewPlayers { .. } => "STATE_TOO_FEW_PLAYERS",
            TooManyPlayers { .. } => "STATE_TOO_MANY_PLAYERS",
            RosterFull(_) => "STATE_ROSTER_FULL",
            EmptyRoster(_) => "STATE_EMPTY_ROSTER",
            DuplicatePlayer(_) => "STATE_DUPLICATE_PLAYER",
            DuplicateCombatant(_) => "STATE_DUPLICATE_COMBATANT",
            HpOutOfBounds { .. } => "STATE_HP_OUT_OF_BOUNDS",
        }
    }
}
