use tracing::{debug, info};

use crate::env::{BattleEnv, RollContext, compute_seed};
use crate::gates::{MAX_REVIVAL_MODIFIER, check_revival, revival_chance};
use crate::state::{CombatantId, MatchState, Readiness};

use super::{ActionTransition, ReviveError, acting_combatant, combatant_mut};

/// Attempt to bring a defeated teammate back at full HP.
///
/// The attempt costs the reviver's action whether or not the roll succeeds.
/// Each defeated combatant can be the subject of one attempt per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReviveAction {
    pub actor: CombatantId,
    pub target: CombatantId,
    /// Operator-supplied bonus chance, 0 to 100.
    pub modifier: u32,
}

impl ReviveAction {
    pub fn new(actor: CombatantId, target: CombatantId, modifier: u32) -> Self {
        Self {
            actor,
            target,
            modifier,
        }
    }
}

/// Roll details of a revival attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevivalOutcome {
    pub target: CombatantId,
    pub roll: u32,
    pub chance: u32,
    pub revived: bool,
}

impl ActionTransition for ReviveAction {
    type Error = ReviveError;
    type Result = RevivalOutcome;

    fn pre_validate(&self, state: &MatchState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        acting_combatant(state, self.actor)?;
        if self.modifier > MAX_REVIVAL_MODIFIER {
            return Err(ReviveError::ModifierOutOfRange {
                modifier: self.modifier,
                max: MAX_REVIVAL_MODIFIER,
            });
        }

        let target = state
            .combatant(self.target)
            .ok_or(ReviveError::TargetNotFound(self.target))?;
        if !state.are_teammates(self.actor, self.target) {
            return Err(ReviveError::NotTeammate(self.target));
        }
        if target.is_alive() {
            return Err(ReviveError::TargetAlive(self.target));
        }
        let round = state.round();
        if target.last_revival_round == Some(round) {
            return Err(ReviveError::AlreadyAttempted { round });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut MatchState,
        env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let gates = &env.rules().gates;
        let round = state.round();
        let seed = compute_seed(state.seed, state.turn.nonce, self.target, RollContext::Revival);
        let roll = env.rng().roll_d100(seed);
        let chance = revival_chance(self.modifier, gates);
        let revived = check_revival(self.modifier, roll, gates);

        let target = combatant_mut(state, self.target)?;
        target.last_revival_round = Some(round);
        if revived {
            target.current_hp = target.base_power;
            target.readiness = Readiness::Acted;
            target.defending = None;
            target.provoked_by = None;
            info!(combatant = %self.target, name = %target.name, "revived");
        }

        let reviver = combatant_mut(state, self.actor)?;
        reviver.readiness = Readiness::Acted;

        debug!(reviver = %self.actor, target = %self.target, roll, chance, revived, "revival roll");
        Ok(RevivalOutcome {
            target: self.target,
            roll,
            chance,
            revived,
        })
    }
}
