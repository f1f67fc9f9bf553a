//! Action execution pipeline, turn rotation and win detection.
//!
//! The [`BattleEngine`] is the authoritative reducer for [`MatchState`]. It
//! orchestrates the transition phases, restores the state when any phase
//! fails, and re-evaluates the match status after every successful action.

mod errors;
mod outcome;
mod transition;
mod turns;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use outcome::detect_winner;
pub use turns::{TurnAdvance, advance_turn};

use tracing::{error, warn};

use crate::action::{Action, ActionError, ActionResult, TurnError};
use crate::env::BattleEnv;
use crate::error::{BattleError, ErrorContext, ErrorSeverity};
use crate::state::{MatchState, MatchStatus, PlayerSummary, StateDelta};

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// State change metadata (which fields changed).
    pub delta: StateDelta,

    /// Action-specific execution result (exchange breakdown, rolls, ...).
    pub result: ActionResult,

    /// Terminal status, set when this action ended the match.
    pub ended: Option<MatchStatus>,
}

impl ExecutionOutcome {
    /// Winner, when this action ended the match with one player standing.
    pub fn winner(&self) -> Option<&PlayerSummary> {
        self.ended.as_ref().and_then(MatchStatus::winner)
    }
}

/// Exclusive handle on one match.
///
/// Holding `&mut MatchState` for the engine's lifetime keeps a single writer
/// per match.
pub struct BattleEngine<'a> {
    state: &'a mut MatchState,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut MatchState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &MatchState {
        self.state
    }

    /// Executes a player action through the transition pipeline.
    ///
    /// On error the match state is left exactly as it was before the call.
    /// Rule tables that are not [well formed](crate::BattleConfig::is_well_formed)
    /// are refused before anything runs.
    pub fn execute(
        &mut self,
        env: BattleEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let refusal = if !env.rules().is_well_formed() {
            Some(ExecuteError::MalformedRules)
        } else if self.state.status.is_finished() {
            Some(ExecuteError::Rejected(ActionError::MatchFinished))
        } else {
            None
        };
        if let Some(error) = refusal {
            self.report(action, &error);
            return Err(error);
        }

        let before = self.state.clone();

        let result = match transition::execute_transition(action, self.state, &env) {
            Ok(result) => result,
            Err(error) => {
                *self.state = before;
                self.report(action, &error);
                return Err(error);
            }
        };

        self.state.turn.nonce += 1;
        let ended = outcome::refresh_status(self.state);

        let delta = StateDelta::from_states(action.clone(), &before, self.state);
        Ok(ExecutionOutcome {
            delta,
            result,
            ended,
        })
    }

    /// Hands the turn to the next living player without recording a delta.
    pub fn advance_turn(&mut self) -> Result<TurnAdvance, TurnError> {
        if self.state.status.is_finished() {
            return Err(TurnError::MatchFinished);
        }
        let advance = advance_turn(self.state)?;
        self.state.turn.nonce += 1;
        Ok(advance)
    }

    /// Winner of the match, if it has ended with one player standing.
    pub fn winner(&self) -> Option<&PlayerSummary> {
        self.state.status.winner()
    }

    /// Context of a rejected action: the error's own, or one built from the
    /// action and the current turn.
    fn context_of(&self, action: &Action, error: &ExecuteError) -> ErrorContext {
        if let Some(context) = error.context() {
            return context.clone();
        }
        let context = ErrorContext::new(self.state.turn.nonce).with_round(self.state.round());
        match action.actor() {
            Some(actor) => context.with_actor(actor),
            None => context,
        }
    }

    fn report(&self, action: &Action, error: &ExecuteError) {
        let severity = error.severity();
        let context = self.context_of(action, error);
        let kind = action.kind();
        let phase = error.phase().map_or("dispatch", |phase| phase.as_str());
        let actor = context.actor.map(|id| id.0);
        let round = context.round.map(|round| round.0);
        let nonce = context.nonce;
        let code = error.error_code();

        if severity == ErrorSeverity::Fatal {
            error!(
                %kind,
                phase,
                ?actor,
                ?round,
                nonce,
                code,
                note = ?context.message,
                %error,
                "invariant violated"
            );
            debug_assert!(severity != ErrorSeverity::Fatal, "invariant violated: {error}");
        } else if severity.is_internal() {
            error!(
                %kind,
                phase,
                ?actor,
                ?round,
                nonce,
                code,
                %error,
                "engine misconfigured"
            );
        } else {
            warn!(%kind, phase, ?actor, ?round, nonce, code, %error, "action rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CatalogId, Combatant, CombatantId, CreatureType, Player, PlayerId, Round};

    fn duel() -> MatchState {
        let seat = |id: u32| {
            let combatant = Combatant::new(
                CombatantId(id),
                CatalogId(id),
                format!("c{id}"),
                CreatureType::Data,
                3000,
            );
            Player::new(PlayerId(id), format!("p{id}"), [combatant].into_iter().collect())
        };
        MatchState::new(3, vec![seat(1), seat(2)]).unwrap()
    }

    #[test]
    fn rejection_context_names_actor_and_turn() {
        let mut state = duel();
        state.turn.nonce = 9;
        let engine = BattleEngine::new(&mut state);

        let action = Action::attack(CombatantId(2), CombatantId(1));
        let error = ExecuteError::Rejected(ActionError::MatchFinished);
        let context = engine.context_of(&action, &error);

        assert_eq!(context.actor, Some(CombatantId(2)));
        assert_eq!(context.round, Some(Round(1)));
        assert_eq!(context.nonce, 9);
        assert_eq!(context.message, None);
    }

    #[test]
    fn error_context_wins_over_the_engine_view() {
        let mut state = duel();
        let engine = BattleEngine::new(&mut state);

        let error = ExecuteError::PassTurn(TransitionPhaseError::new(
            TransitionPhase::Apply,
            TurnError::no_living_players(4, Round(7)),
        ));
        let context = engine.context_of(&Action::pass_turn(), &error);

        assert_eq!(context.nonce, 4);
        assert_eq!(context.round, Some(Round(7)));
        assert_eq!(context.actor, None);
        assert!(context.message.is_some());
    }
}
