//! Action execution errors.
//!
//! Shared actor checks live in [`ActionError`]; every action wraps it in its
//! own error type next to the variants specific to that action.

use crate::env::OracleError;
use crate::error::{BattleError, ErrorContext, ErrorSeverity};
use crate::state::{CatalogId, CombatantId, PlayerId, Round};

// ============================================================================
// Shared actor checks
// ============================================================================

/// Checks every player action runs against its acting combatant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("combatant {0} not found")]
    UnknownCombatant(CombatantId),

    #[error("combatant {actor} does not belong to current player {current}")]
    NotCurrentPlayer {
        actor: CombatantId,
        current: PlayerId,
    },

    #[error("combatant {0} already acted this round")]
    AlreadyActed(CombatantId),

    #[error("combatant {0} is defeated")]
    Defeated(CombatantId),

    #[error("match is already finished")]
    MatchFinished,
}

impl BattleError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            UnknownCombatant(_) => ErrorSeverity::Validation,
            NotCurrentPlayer { .. } | AlreadyActed(_) | Defeated(_) | MatchFinished => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            UnknownCombatant(_) => "ACTION_UNKNOWN_COMBATANT",
            NotCurrentPlayer { .. } => "ACTION_NOT_CURRENT_PLAYER",
            AlreadyActed(_) => "ACTION_ALREADY_ACTED",
            Defeated(_) => "ACTION_DEFEATED",
            MatchFinished => "ACTION_MATCH_FINISHED",
        }
    }
}

// ============================================================================
// Invariant violations
// ============================================================================

/// Broken state invariants. Always a defect in the engine or its caller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantViolation {
    #[error("combatant {id} has hp {hp} outside [0, {base_power}]")]
    HpOutOfBounds {
        id: CombatantId,
        hp: u32,
        base_power: u32,
    },

    #[error("redirect resolved to defeated combatant {0}")]
    RedirectToDefeated(CombatantId),
}

impl BattleError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use InvariantViolation::*;
        match self {
            HpOutOfBounds { .. } => "INVARIANT_HP_OUT_OF_BOUNDS",
            RedirectToDefeated(_) => "INVARIANT_REDIRECT_TO_DEFEATED",
        }
    }
}

// ============================================================================
// Per-action errors
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("target {0} not found")]
    TargetNotFound(CombatantId),

    #[error("target {0} is defeated")]
    TargetDefeated(CombatantId),

    #[error("target {0} is on the attacker's team")]
    FriendlyTarget(CombatantId),

    #[error("provoked: attack must target {required}")]
    Provoked { required: CombatantId },

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl BattleError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        use AttackError::*;
        match self {
            Action(error) => error.severity(),
            TargetNotFound(_) => ErrorSeverity::Validation,
            TargetDefeated(_) | FriendlyTarget(_) | Provoked { .. } => ErrorSeverity::Recoverable,
            Invariant(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use AttackError::*;
        match self {
            Action(error) => error.error_code(),
            TargetNotFound(_) => "ATTACK_TARGET_NOT_FOUND",
            TargetDefeated(_) => "ATTACK_TARGET_DEFEATED",
            FriendlyTarget(_) => "ATTACK_FRIENDLY_TARGET",
            Provoked { .. } => "ATTACK_PROVOKED",
            Invariant(error) => error.error_code(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefendError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("a combatant cannot defend itself")]
    ProtectSelf,

    #[error("protected combatant {0} not found")]
    ProtectedNotFound(CombatantId),

    #[error("protected combatant {0} is defeated")]
    ProtectedDefeated(CombatantId),

    #[error("combatant {0} is not a teammate")]
    NotTeammate(CombatantId),

    #[error("defender level {defender_level} exceeds protected level {protected_level}")]
    LevelTooHigh {
        defender_level: u8,
        protected_level: u8,
    },

    #[error("already defended by {by}")]
    AlreadyProtected { by: CombatantId },
}

impl BattleError for DefendError {
    fn severity(&self) -> ErrorSeverity {
        use DefendError::*;
        match self {
            Action(error) => error.severity(),
            ProtectedNotFound(_) => ErrorSeverity::Validation,
            ProtectSelf
            | ProtectedDefeated(_)
            | NotTeammate(_)
            | LevelTooHigh { .. }
            | AlreadyProtected { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use DefendError::*;
        match self {
            Action(error) => error.error_code(),
            ProtectSelf => "DEFEND_PROTECT_SELF",
            ProtectedNotFound(_) => "DEFEND_PROTECTED_NOT_FOUND",
            ProtectedDefeated(_) => "DEFEND_PROTECTED_DEFEATED",
            NotTeammate(_) => "DEFEND_NOT_TEAMMATE",
            LevelTooHigh { .. } => "DEFEND_LEVEL_TOO_HIGH",
            AlreadyProtected { .. } => "DEFEND_ALREADY_PROTECTED",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProvokeError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("provoker level {level} below required {min}")]
    LevelTooLow { level: u8, min: u8 },

    #[error("provoke on cooldown for {rounds_remaining} more rounds")]
    OnCooldown { rounds_remaining: u32 },

    #[error("target {0} not found")]
    TargetNotFound(CombatantId),

    #[error("target {0} is defeated")]
    TargetDefeated(CombatantId),

    #[error("target {0} is not an enemy")]
    NotEnemy(CombatantId),
}

impl BattleError for ProvokeError {
    fn severity(&self) -> ErrorSeverity {
        use ProvokeError::*;
        match self {
            Action(error) => error.severity(),
            TargetNotFound(_) => ErrorSeverity::Validation,
            LevelTooLow { .. } | OnCooldown { .. } | TargetDefeated(_) | NotEnemy(_) => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use ProvokeError::*;
        match self {
            Action(error) => error.error_code(),
            LevelTooLow { .. } => "PROVOKE_LEVEL_TOO_LOW",
            OnCooldown { .. } => "PROVOKE_ON_COOLDOWN",
            TargetNotFound(_) => "PROVOKE_TARGET_NOT_FOUND",
            TargetDefeated(_) => "PROVOKE_TARGET_DEFEATED",
            NotEnemy(_) => "PROVOKE_NOT_ENEMY",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RestError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl BattleError for RestError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RestError::Action(error) => error.severity(),
            RestError::Invariant(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RestError::Action(error) => error.error_code(),
            RestError::Invariant(error) => error.error_code(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LootError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("bag of {0} is full")]
    BagFull(CombatantId),
}

impl BattleError for LootError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            LootError::Action(error) => error.severity(),
            LootError::BagFull(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            LootError::Action(error) => error.error_code(),
            LootError::BagFull(_) => "LOOT_BAG_FULL",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReviveError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("target {0} not found")]
    TargetNotFound(CombatantId),

    #[error("target {0} is still alive")]
    TargetAlive(CombatantId),

    #[error("target {0} is not a teammate")]
    NotTeammate(CombatantId),

    #[error("revival already attempted in {round}")]
    AlreadyAttempted { round: Round },

    #[error("modifier {modifier} exceeds {max}")]
    ModifierOutOfRange { modifier: u32, max: u32 },
}

impl BattleError for ReviveError {
    fn severity(&self) -> ErrorSeverity {
        use ReviveError::*;
        match self {
            Action(error) => error.severity(),
            TargetNotFound(_) | ModifierOutOfRange { .. } => ErrorSeverity::Validation,
            TargetAlive(_) | NotTeammate(_) | AlreadyAttempted { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use ReviveError::*;
        match self {
            Action(error) => error.error_code(),
            TargetNotFound(_) => "REVIVE_TARGET_NOT_FOUND",
            TargetAlive(_) => "REVIVE_TARGET_ALIVE",
            NotTeammate(_) => "REVIVE_NOT_TEAMMATE",
            AlreadyAttempted { .. } => "REVIVE_ALREADY_ATTEMPTED",
            ModifierOutOfRange { .. } => "REVIVE_MODIFIER_OUT_OF_RANGE",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("bag slot {slot} is empty")]
    SlotEmpty { slot: usize },

    #[error("target {0} not found")]
    TargetNotFound(CombatantId),

    #[error("target {0} is not a teammate")]
    NotTeammate(CombatantId),

    #[error("target {0} is defeated")]
    TargetDefeated(CombatantId),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl BattleError for ItemError {
    fn severity(&self) -> ErrorSeverity {
        use ItemError::*;
        match self {
            Action(error) => error.severity(),
            SlotEmpty { .. } | TargetNotFound(_) => ErrorSeverity::Validation,
            NotTeammate(_) | TargetDefeated(_) => ErrorSeverity::Recoverable,
            Oracle(error) => error.severity(),
            Invariant(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use ItemError::*;
        match self {
            Action(error) => error.error_code(),
            SlotEmpty { .. } => "ITEM_SLOT_EMPTY",
            TargetNotFound(_) => "ITEM_TARGET_NOT_FOUND",
            NotTeammate(_) => "ITEM_NOT_TEAMMATE",
            TargetDefeated(_) => "ITEM_TARGET_DEFEATED",
            Oracle(error) => error.error_code(),
            Invariant(error) => error.error_code(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvolveError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("evolution of {0} is locked")]
    Locked(CombatantId),

    #[error("{from} cannot evolve into {into}")]
    InvalidForm { from: CatalogId, into: CatalogId },

    #[error("target level {next} is not one above {current}")]
    LevelMismatch { current: u8, next: u8 },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl BattleError for EvolveError {
    fn severity(&self) -> ErrorSeverity {
        use EvolveError::*;
        match self {
            Action(error) => error.severity(),
            Locked(_) => ErrorSeverity::Recoverable,
            InvalidForm { .. } | LevelMismatch { .. } => ErrorSeverity::Validation,
            Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use EvolveError::*;
        match self {
            Action(error) => error.error_code(),
            Locked(_) => "EVOLVE_LOCKED",
            InvalidForm { .. } => "EVOLVE_INVALID_FORM",
            LevelMismatch { .. } => "EVOLVE_LEVEL_MISMATCH",
            Oracle(error) => error.error_code(),
        }
    }
}

// ============================================================================
// Turn errors
// ============================================================================

/// Errors raised by the turn state machine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    /// No player has a living combatant; the match should have ended earlier.
    #[error("no player has a living combatant")]
    NoLivingPlayers {
        #[cfg_attr(feature = "serde", serde(skip))]
        context: ErrorContext,
    },

    #[error("match is already finished")]
    MatchFinished,
}

impl TurnError {
    /// Creates a NoLivingPlayers error pinned to the turn that hit it.
    pub fn no_living_players(nonce: u64, round: Round) -> Self {
        Self::NoLivingPlayers {
            context: ErrorContext::new(nonce)
                .with_round(round)
                .with_message("turn rotation found every roster defeated"),
        }
    }
}

impl BattleError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TurnError::NoLivingPlayers { .. } => ErrorSeverity::Fatal,
            TurnError::MatchFinished => ErrorSeverity::Recoverable,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            TurnError::NoLivingPlayers { context } => Some(context),
            TurnError::MatchFinished => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TurnError::NoLivingPlayers { .. } => "TURN_NO_LIVING_PLAYERS",
            TurnError::MatchFinished => "TURN_MATCH_FINISHED",
        }
    }
}
