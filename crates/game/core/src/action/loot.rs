use tracing::debug;

use crate::env::{BattleEnv, RollContext, compute_seed};
use crate::gates::loot_reward;
use crate::state::{CombatantId, ItemKind, MatchState, Readiness};

use super::{ActionTransition, LootError, acting_combatant, combatant_mut};

/// Search for a power boost and stash it in the looter's bag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootAction {
    pub actor: CombatantId,
}

impl ActionTransition for LootAction {
    type Error = LootError;
    /// `(roll, reward)`.
    type Result = (u32, u32);

    fn pre_validate(&self, state: &MatchState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        acting_combatant(state, self.actor)?;
        Ok(())
    }

    fn apply(
        &self,
        state: &mut MatchState,
        env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let gates = &env.rules().gates;
        let seed = compute_seed(state.seed, state.turn.nonce, self.actor, RollContext::Loot);
        let roll = env.rng().roll_die(seed, gates.loot_die_sides);
        let reward = loot_reward(roll, gates);

        let looter = combatant_mut(state, self.actor)?;
        looter
            .bag
            .add(ItemKind::PowerBoost(reward), 1)
            .map_err(|_| LootError::BagFull(self.actor))?;
        looter.readiness = Readiness::Acted;

        debug!(combatant = %self.actor, roll, reward, "looted");
        Ok((roll, reward))
    }
}
