use crate::engine::{TurnAdvance, advance_turn};
use crate::env::BattleEnv;
use crate::state::MatchState;

use super::{ActionTransition, TurnError};

/// Ends the current player's turn.
///
/// The only action that moves `current_player` or the round counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassTurnAction;

impl ActionTransition for PassTurnAction {
    type Error = TurnError;
    type Result = TurnAdvance;

    fn pre_validate(&self, state: &MatchState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        if state.status.is_finished() {
            return Err(TurnError::MatchFinished);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut MatchState,
        _env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        advance_turn(state)
    }
}
