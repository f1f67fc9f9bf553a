use tracing::debug;

use crate::env::BattleEnv;
use crate::state::{CombatantId, MatchState, Readiness};
use crate::targeting::validate_provoke;

use super::{ActionTransition, ProvokeError, acting_combatant, combatant_mut};

/// Force an enemy to attack the provoker on its next attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProvokeAction {
    pub actor: CombatantId,
    pub target: CombatantId,
}

impl ProvokeAction {
    pub fn new(actor: CombatantId, target: CombatantId) -> Self {
        Self { actor, target }
    }
}

impl ActionTransition for ProvokeAction {
    type Error = ProvokeError;
    type Result = CombatantId;

    fn pre_validate(&self, state: &MatchState, env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        let provoker = acting_combatant(state, self.actor)?;
        let target = state
            .combatant(self.target)
            .ok_or(ProvokeError::TargetNotFound(self.target))?;
        if state.are_teammates(self.actor, self.target) {
            return Err(ProvokeError::NotEnemy(self.target));
        }

        validate_provoke(provoker, target, state.round(), &env.rules().provoke)
    }

    fn apply(
        &self,
        state: &mut MatchState,
        _env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let round = state.round();

        let target = combatant_mut(state, self.target)?;
        target.provoked_by = Some(self.actor);

        let provoker = combatant_mut(state, self.actor)?;
        provoker.last_provoke_round = Some(round);
        provoker.readiness = Readiness::Acted;

        debug!(provoker = %self.actor, target = %self.target, %round, "provoke declared");
        Ok(self.target)
    }
}
