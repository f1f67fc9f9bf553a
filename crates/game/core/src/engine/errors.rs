//! Error types for the action execution pipeline.

use crate::action::{
    ActionError, AttackError, DefendError, EvolveError, ItemError, LootError, ProvokeError,
    RestError, ReviveError, TurnError,
};
use crate::error::{BattleError, ErrorContext, ErrorSeverity};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

impl<E: BattleError> BattleError for TransitionPhaseError<E> {
    fn severity(&self) -> ErrorSeverity {
        self.error.severity()
    }

    fn context(&self) -> Option<&ErrorContext> {
        self.error.context()
    }

    fn error_code(&self) -> &'static str {
        self.error.error_code()
    }
}

/// Errors surfaced while executing an action through the battle engine.
///
/// The match state is restored to its pre-action value whenever one of these
/// is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("attack failed: {0}")]
    Attack(TransitionPhaseError<AttackError>),

    #[error("defend failed: {0}")]
    Defend(TransitionPhaseError<DefendError>),

    #[error("provoke failed: {0}")]
    Provoke(TransitionPhaseError<ProvokeError>),

    #[error("rest failed: {0}")]
    Rest(TransitionPhaseError<RestError>),

    #[error("loot failed: {0}")]
    Loot(TransitionPhaseError<LootError>),

    #[error("revive failed: {0}")]
    Revive(TransitionPhaseError<ReviveError>),

    #[error("use item failed: {0}")]
    UseItem(TransitionPhaseError<ItemError>),

    #[error("evolve failed: {0}")]
    Evolve(TransitionPhaseError<EvolveError>),

    #[error("pass turn failed: {0}")]
    PassTurn(TransitionPhaseError<TurnError>),

    /// Refused before dispatch.
    #[error("action rejected: {0}")]
    Rejected(ActionError),

    /// The rule tables would divide by zero or compare against a degenerate
    /// advantage cycle.
    #[error("rule tables are malformed")]
    MalformedRules,
}

impl ExecuteError {
    /// Phase that failed, `None` for errors raised outside the pipeline.
    pub fn phase(&self) -> Option<TransitionPhase> {
        use ExecuteError::*;
        match self {
            Attack(e) => Some(e.phase),
            Defend(e) => Some(e.phase),
            Provoke(e) => Some(e.phase),
            Rest(e) => Some(e.phase),
            Loot(e) => Some(e.phase),
            Revive(e) => Some(e.phase),
            UseItem(e) => Some(e.phase),
            Evolve(e) => Some(e.phase),
            PassTurn(e) => Some(e.phase),
            Rejected(_) | MalformedRules => None,
        }
    }
}

impl BattleError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        use ExecuteError::*;
        match self {
            Attack(e) => e.severity(),
            Defend(e) => e.severity(),
            Provoke(e) => e.severity(),
            Rest(e) => e.severity(),
            Loot(e) => e.severity(),
            Revive(e) => e.severity(),
            UseItem(e) => e.severity(),
            Evolve(e) => e.severity(),
            PassTurn(e) => e.severity(),
            Rejected(e) => e.severity(),
            MalformedRules => ErrorSeverity::Internal,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        use ExecuteError::*;
        match self {
            PassTurn(e) => e.context(),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        use ExecuteError::*;
        match self {
            Attack(e) => e.error_code(),
            Defend(e) => e.error_code(),
            Provoke(e) => e.error_code(),
            Rest(e) => e.error_code(),
            Loot(e) => e.error_code(),
            Revive(e) => e.error_code(),
            UseItem(e) => e.error_code(),
            Evolve(e) => e.error_code(),
            PassTurn(e) => e.error_code(),
            Rejected(e) => e.error_code(),
            MalformedRules => "ENGINE_MALFORMED_RULES",
        }
    }
}
