//! Greedy action policy used to drive simulated matches.

use battle_core::targeting::required_target;
use battle_core::{
    Action, CatalogOracle, Combatant, CombatantId, EvolveAction, MatchState, RestAction,
};

/// Combatants at or below this share of their base power rest instead of attacking.
const REST_BELOW_PCT: u32 = 30;

/// Picks the next action for the player whose turn it is.
///
/// Evolution comes first since it is free, then resting when low, then an
/// attack on the provoker or the weakest enemy. Passes once nobody is ready.
pub fn choose(state: &MatchState, catalog: &dyn CatalogOracle) -> Action {
    let player = state.current_player();

    for combatant in player.living() {
        if let Some(action) = evolution_for(combatant, catalog) {
            return action;
        }
    }

    for combatant in player.living().filter(|c| c.is_ready()) {
        if is_low(combatant) {
            return Action::Rest(RestAction {
                actor: combatant.id,
            });
        }
        let target = required_target(combatant, state).or_else(|| weakest_enemy(state, combatant));
        if let Some(target) = target {
            return Action::attack(combatant.id, target);
        }
    }

    Action::pass_turn()
}

fn evolution_for(combatant: &Combatant, catalog: &dyn CatalogOracle) -> Option<Action> {
    if !combatant.evolution.is_unlocked() {
        return None;
    }
    let current = catalog.creature(combatant.form)?;
    current
        .evolves_to
        .iter()
        .filter_map(|id| catalog.creature(*id))
        .filter(|next| current.can_evolve_into(next))
        .max_by_key(|next| next.base_power)
        .map(|next| Action::Evolve(EvolveAction::new(combatant.id, next.id)))
}

fn is_low(combatant: &Combatant) -> bool {
    u64::from(combatant.current_hp) * 100
        <= u64::from(combatant.base_power) * u64::from(REST_BELOW_PCT)
}

fn weakest_enemy(state: &MatchState, attacker: &Combatant) -> Option<CombatantId> {
    state
        .players
        .iter()
        .filter(|player| !player.contains(attacker.id))
        .flat_map(|player| player.living())
        .min_by_key(|enemy| (enemy.current_hp, enemy.id))
        .map(|enemy| enemy.id)
}
