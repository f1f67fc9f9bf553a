//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, ActionTransition};
use crate::env::BattleEnv;
use crate::state::MatchState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the match state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut MatchState,
    env: &BattleEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition and wraps the result in [`ActionResult`].
///
/// Leaves the state partially mutated on failure; the caller restores it.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut MatchState,
    env: &BattleEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Attack(transition) => {
            let outcome = drive_transition(transition, state, env).map_err(ExecuteError::Attack)?;
            Ok(ActionResult::Attack(outcome))
        }
        Action::Defend(transition) => {
            let protected =
                drive_transition(transition, state, env).map_err(ExecuteError::Defend)?;
            Ok(ActionResult::Defend { protected })
        }
        Action::Provoke(transition) => {
            let target = drive_transition(transition, state, env).map_err(ExecuteError::Provoke)?;
            Ok(ActionResult::Provoke { target })
        }
        Action::Rest(transition) => {
            let healed = drive_transition(transition, state, env).map_err(ExecuteError::Rest)?;
            Ok(ActionResult::Rest { healed })
        }
        Action::Loot(transition) => {
            let (roll, reward) =
                drive_transition(transition, state, env).map_err(ExecuteError::Loot)?;
            Ok(ActionResult::Loot { roll, reward })
        }
        Action::Revive(transition) => {
            let outcome = drive_transition(transition, state, env).map_err(ExecuteError::Revive)?;
            Ok(ActionResult::Revive(outcome))
        }
        Action::UseItem(transition) => {
            let outcome =
                drive_transition(transition, state, env).map_err(ExecuteError::UseItem)?;
            Ok(ActionResult::UseItem(outcome))
        }
        Action::Evolve(transition) => {
            let from = drive_transition(transition, state, env).map_err(ExecuteError::Evolve)?;
            Ok(ActionResult::Evolve {
                from,
                into: transition.into,
            })
        }
        Action::PassTurn(transition) => {
            let advance =
                drive_transition(transition, state, env).map_err(ExecuteError::PassTurn)?;
            Ok(ActionResult::PassTurn(advance))
        }
    }
}
