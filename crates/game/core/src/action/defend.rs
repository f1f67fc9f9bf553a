use tracing::debug;

use crate::env::BattleEnv;
use crate::state::{CombatantId, MatchState, Readiness};
use crate::targeting::validate_defend;

use super::{ActionError, ActionTransition, DefendError, acting_combatant, combatant_mut};

/// Shield a teammate: the next attack aimed at it hits the defender instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefendAction {
    pub actor: CombatantId,
    pub protect: CombatantId,
}

impl DefendAction {
    pub fn new(actor: CombatantId, protect: CombatantId) -> Self {
        Self { actor, protect }
    }
}

impl ActionTransition for DefendAction {
    type Error = DefendError;
    type Result = CombatantId;

    fn pre_validate(&self, state: &MatchState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        let defender = acting_combatant(state, self.actor)?;
        let protected = state
            .combatant(self.protect)
            .ok_or(DefendError::ProtectedNotFound(self.protect))?;
        let team = state
            .team_of(self.actor)
            .ok_or(ActionError::UnknownCombatant(self.actor))?;

        validate_defend(defender, protected, &team.roster)
    }

    fn apply(
        &self,
        state: &mut MatchState,
        _env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let defender = combatant_mut(state, self.actor)?;
        defender.defending = Some(self.protect);
        defender.readiness = Readiness::Acted;
        debug!(defender = %self.actor, protected = %self.protect, "defend declared");
        Ok(self.protect)
    }
}
