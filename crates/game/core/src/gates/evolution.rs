use crate::config::GateRules;
use crate::state::Combatant;

/// Unlock chance in percent for a combatant at its current HP.
///
/// Grows by `evolution_step_chance` for every full `evolution_step_pct` of
/// base power lost.
pub fn evolution_chance(combatant: &Combatant, rules: &GateRules) -> u32 {
    if combatant.base_power == 0 || rules.evolution_step_pct == 0 {
        return rules.evolution_base_chance;
    }
    let lost_pct = u64::from(combatant.hp_lost()) * 100 / u64::from(combatant.base_power);
    let steps = lost_pct / u64::from(rules.evolution_step_pct);
    let bonus = steps * u64::from(rules.evolution_step_chance);
    rules
        .evolution_base_chance
        .saturating_add(u32::try_from(bonus).unwrap_or(u32::MAX))
}

/// Returns true when taking damage from `before` to `after` unlocks evolution.
///
/// Only a surviving, still locked combatant that actually lost HP rolls.
pub fn check_evolution_unlock(
    before: &Combatant,
    after: &Combatant,
    roll: u32,
    rules: &GateRules,
) -> bool {
    if !after.is_alive() || after.evolution.is_unlocked() || before.evolution.is_unlocked() {
        return false;
    }
    if after.current_hp >= before.current_hp {
        return false;
    }
    roll <= evolution_chance(after, rules)
}
