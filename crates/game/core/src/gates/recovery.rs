use crate::config::GateRules;
use crate::state::Combatant;

use super::MAX_REVIVAL_MODIFIER;

/// Revival chance in percent, capped at 100.
pub fn revival_chance(modifier: u32, rules: &GateRules) -> u32 {
    rules
        .revival_base_chance
        .saturating_add(modifier.min(MAX_REVIVAL_MODIFIER))
        .min(100)
}

/// Returns true when `roll` (1-100) revives under `modifier`.
pub fn check_revival(modifier: u32, roll: u32, rules: &GateRules) -> bool {
    roll <= revival_chance(modifier, rules)
}

/// HP a rest restores before capping at base power.
pub fn rest_amount(combatant: &Combatant, rules: &GateRules) -> u32 {
    let amount = u64::from(combatant.base_power) * u64::from(rules.rest_heal_pct) / 100;
    u32::try_from(amount).unwrap_or(u32::MAX)
}

/// Heals a living combatant and returns the HP actually restored.
///
/// Defeated combatants are revived only through the revival gate.
pub fn apply_rest(combatant: &mut Combatant, rules: &GateRules) -> u32 {
    if combatant.is_defeated() {
        return 0;
    }
    let amount = rest_amount(combatant, rules);
    combatant.heal(amount)
}
