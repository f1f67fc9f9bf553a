//! Common error infrastructure for battle-core.
//!
//! This module provides shared types and traits used across all error types in
//! battle-core. Action-specific errors (e.g., `AttackError`, `DefendError`) are
//! defined next to the actions they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each action has its own error type with specific variants
//! - **Severity Classification**: Invalid actions are recoverable, broken
//!   invariants are fatal
//! - **Rich Context**: Errors carry the combatant, round and nonce when known

use crate::state::{CombatantId, Round};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the game rules refused the action; the caller shows
///   feedback and the player picks something else
/// - **Validation**: malformed input (unknown ids, out-of-range modifiers)
/// - **Internal**: missing collaborator data the engine expected to exist
/// - **Fatal**: a state invariant is broken, the caller contract was violated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The rules refused the action.
    ///
    /// Examples: combatant already acted, provoke on cooldown
    Recoverable,

    /// Invalid input, should not be retried without changes.
    ///
    /// Examples: combatant not found, revival modifier above 100
    Validation,

    /// Unexpected absence of collaborator data.
    ///
    /// Examples: catalog not wired into the environment
    Internal,

    /// Match state is corrupted and cannot continue.
    ///
    /// Examples: HP above base power, no living player at turn advance
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug rather than a game-rule outcome.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Contextual information attached to errors for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorContext {
    /// Combatant that triggered the error (if applicable).
    pub actor: Option<CombatantId>,

    /// Round during which the error occurred.
    pub round: Option<Round>,

    /// Match nonce at the time of error.
    ///
    /// The nonce counts executed actions and pins the error to one state.
    pub nonce: u64,

    pub message: Option<&'static str>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(nonce: u64) -> Self {
        Self {
            actor: None,
            round: None,
            nonce,
            message: None,
        }
    }

    #[must_use]
    pub const fn with_actor(mut self, actor: CombatantId) -> Self {
        self.actor = Some(actor);
        self
    }

    #[must_use]
    pub const fn with_round(mut self, round: Round) -> Self {
        self.round = Some(round);
        self
    }

    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns the context information for this error, if available.
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Returns a stable identifier for this error variant.
    ///
    /// Hosts map these onto user-facing messages.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(!ErrorSeverity::Recoverable.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Internal.as_str(), "internal");
    }

    #[test]
    fn context_builder_attaches_fields() {
        let context = ErrorContext::new(7)
            .with_actor(CombatantId(3))
            .with_round(Round(2))
            .with_message("redirect");
        assert_eq!(context.actor, Some(CombatantId(3)));
        assert_eq!(context.round, Some(Round(2)));
        assert_eq!(context.nonce, 7);
        assert_eq!(context.message, Some("redirect"));
    }
}
