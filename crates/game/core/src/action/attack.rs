use tracing::{debug, info};

use crate::combat::{ExchangeResult, resolve_exchange};
use crate::env::{BattleEnv, RollContext, compute_seed};
use crate::gates::check_evolution_unlock;
use crate::state::{Combatant, CombatantId, EvolutionGate, MatchState, Readiness};
use crate::targeting::{required_target, resolve_defend_target};

use super::{
    ActionError, ActionTransition, AttackError, InvariantViolation, acting_combatant,
    combatant_mut, ensure_hp_bounds,
};

/// Attack an enemy combatant.
///
/// The nominal target may be swapped for a teammate defending it. Both sides
/// deal damage in the same exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub actor: CombatantId,
    pub target: CombatantId,
}

impl AttackAction {
    pub fn new(actor: CombatantId, target: CombatantId) -> Self {
        Self { actor, target }
    }
}

/// What happened during an attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub attacker: CombatantId,
    pub nominal_target: CombatantId,
    /// Combatant actually hit; differs from `nominal_target` when redirected.
    pub target: CombatantId,
    pub exchange: ExchangeResult,
    pub attacker_unlocked: bool,
    pub target_unlocked: bool,
}

impl AttackOutcome {
    pub fn was_redirected(&self) -> bool {
        self.nominal_target != self.target
    }
}

impl ActionTransition for AttackAction {
    type Error = AttackError;
    type Result = AttackOutcome;

    fn pre_validate(&self, state: &MatchState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        let attacker = acting_combatant(state, self.actor)?;
        let target = state
            .combatant(self.target)
            .ok_or(AttackError::TargetNotFound(self.target))?;

        if state.are_teammates(self.actor, self.target) {
            return Err(AttackError::FriendlyTarget(self.target));
        }
        if target.is_defeated() {
            return Err(AttackError::TargetDefeated(self.target));
        }
        if let Some(required) = required_target(attacker, state) {
            if required != self.target {
                return Err(AttackError::Provoked { required });
            }
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut MatchState,
        env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let owner = state
            .owner_of(self.target)
            .ok_or(AttackError::TargetNotFound(self.target))?;
        let target_id = resolve_defend_target(self.target, &state.players[owner].roster);

        if target_id != self.target {
            let protector = combatant_mut(state, target_id)?;
            protector.defending = None;
            debug!(
                attacker = %self.actor,
                nominal = %self.target,
                protector = %target_id,
                "attack redirected to defender"
            );
        }

        let attacker_before = state
            .combatant(self.actor)
            .cloned()
            .ok_or(ActionError::UnknownCombatant(self.actor))?;
        let target_before = state
            .combatant(target_id)
            .cloned()
            .ok_or(AttackError::TargetNotFound(target_id))?;
        if target_before.is_defeated() {
            return Err(InvariantViolation::RedirectToDefeated(target_id).into());
        }

        let exchange = resolve_exchange(
            &attacker_before,
            &target_before,
            boost_modifier(&attacker_before),
            boost_modifier(&target_before),
            env.rules(),
        );
        debug!(
            attacker = %self.actor,
            target = %target_id,
            damage_to_target = exchange.damage_to_defender(),
            damage_to_attacker = exchange.damage_to_attacker(),
            type_advantage = ?exchange.type_advantage_attacker(),
            attribute_advantage = ?exchange.attribute_advantage_attacker(),
            "exchange resolved"
        );

        {
            let attacker = combatant_mut(state, self.actor)?;
            attacker.current_hp = exchange.attacker_hp_after();
            attacker.readiness = Readiness::Acted;
            attacker.provoked_by = None;
            attacker.pending_boost = 0;
        }
        {
            let target = combatant_mut(state, target_id)?;
            target.current_hp = exchange.defender_hp_after();
            target.pending_boost = 0;
        }

        let attacker_unlocked = roll_evolution(
            state,
            env,
            &attacker_before,
            RollContext::AttackerEvolution,
        );
        let target_unlocked =
            roll_evolution(state, env, &target_before, RollContext::DefenderEvolution);

        Ok(AttackOutcome {
            attacker: self.actor,
            nominal_target: self.target,
            target: target_id,
            exchange,
            attacker_unlocked,
            target_unlocked,
        })
    }

    fn post_validate(&self, state: &MatchState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        ensure_hp_bounds(state)?;
        Ok(())
    }
}

fn boost_modifier(combatant: &Combatant) -> i32 {
    i32::try_from(combatant.pending_boost).unwrap_or(i32::MAX)
}

/// Rolls the evolution gate for a combatant that just took part in an exchange.
fn roll_evolution(
    state: &mut MatchState,
    env: &BattleEnv<'_>,
    before: &Combatant,
    context: RollContext,
) -> bool {
    let Some(after) = state.combatant(before.id) else {
        return false;
    };
    if !after.is_alive() || after.evolution.is_unlocked() || after.current_hp >= before.current_hp
    {
        return false;
    }

    let seed = compute_seed(state.seed, state.turn.nonce, before.id, context);
    let roll = env.rng().roll_d100(seed);
    let unlocked = check_evolution_unlock(before, after, roll, &env.rules().gates);
    debug!(combatant = %before.id, roll, unlocked, "evolution roll");

    if unlocked {
        if let Some(combatant) = state.combatant_mut(before.id) {
            combatant.evolution = EvolutionGate::Unlocked;
            info!(combatant = %combatant.id, name = %combatant.name, "evolution unlocked");
        }
    }
    unlocked
}
