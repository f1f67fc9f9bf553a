use tracing::debug;

use crate::env::BattleEnv;
use crate::gates::apply_rest;
use crate::state::{CombatantId, MatchState, Readiness};

use super::{ActionTransition, RestError, acting_combatant, combatant_mut, ensure_hp_bounds};

/// Skip attacking to recover a fixed share of base power.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestAction {
    pub actor: CombatantId,
}

impl ActionTransition for RestAction {
    type Error = RestError;
    /// HP restored.
    type Result = u32;

    fn pre_validate(&self, state: &MatchState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        acting_combatant(state, self.actor)?;
        Ok(())
    }

    fn apply(
        &self,
        state: &mut MatchState,
        env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let combatant = combatant_mut(state, self.actor)?;
        let healed = apply_rest(combatant, &env.rules().gates);
        combatant.readiness = Readiness::Acted;
        debug!(combatant = %self.actor, healed, hp = combatant.current_hp, "rested");
        Ok(healed)
    }

    fn post_validate(&self, state: &MatchState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        ensure_hp_bounds(state)?;
        Ok(())
    }
}
