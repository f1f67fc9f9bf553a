//! Power and defense formulas.
//!
//! All arithmetic is exact integer arithmetic over `i64`. Percentages are
//! whole percentage points and every rounding step names its direction.

use crate::config::CombatRules;

use super::Advantage;

/// Rounds `numerator / denominator` up to the next multiple of `unit`.
fn ceil_to_unit(numerator: i64, denominator: i64, unit: i64) -> i64 {
    let scaled = denominator * unit;
    -((-numerator).div_euclid(scaled)) * unit
}

/// Rounds `numerator / denominator` to the nearest multiple of `unit`, halves up.
fn round_to_unit(numerator: i64, denominator: i64, unit: i64) -> i64 {
    let scaled = denominator * unit;
    (2 * numerator + scaled).div_euclid(2 * scaled) * unit
}

/// Attack power from base power and an attack bonus.
///
/// `base_power / divisor`, scaled by `1 + step% * bonus`, rounded up to the
/// next rounding unit and floored at zero.
pub fn attack_power(base_power: u32, attack_bonus: i32, rules: &CombatRules) -> u32 {
    let scale = 100 + i64::from(rules.bonus_step_pct) * i64::from(attack_bonus);
    let numerator = i64::from(base_power) * scale;
    if numerator <= 0 {
        return 0;
    }
    let denominator = i64::from(rules.power_divisor) * 100;
    let power = ceil_to_unit(numerator, denominator, i64::from(rules.rounding_unit));
    u32::try_from(power).unwrap_or(u32::MAX)
}

/// Damage subtracted from incoming power, derived from the defender's own power.
///
/// Zero bonus means zero reduction. A negative bonus yields a negative
/// reduction, which raises the damage taken.
pub fn defense_reduction(own_power: u32, defense_bonus: i32, rules: &CombatRules) -> i32 {
    if defense_bonus == 0 {
        return 0;
    }
    let numerator =
        i64::from(own_power) * i64::from(rules.bonus_step_pct) * i64::from(defense_bonus);
    let reduction = round_to_unit(numerator, 100, i64::from(rules.rounding_unit));
    reduction.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Applies the type and attribute swings to `power`, rounded to the nearest unit.
pub fn advantaged_power(
    power: u32,
    type_advantage: Advantage,
    attribute_advantage: Advantage,
    rules: &CombatRules,
) -> u32 {
    let scale = 100
        + i64::from(rules.type_swing_pct) * i64::from(type_advantage.value())
        + i64::from(rules.attribute_swing_pct) * i64::from(attribute_advantage.value());
    let numerator = i64::from(power) * scale.max(0);
    let scaled = round_to_unit(numerator, 100, i64::from(rules.rounding_unit));
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Adds a flat status modifier, floors at zero and rounds to the nearest unit.
pub fn with_status(power: u32, status_modifier: i32, rules: &CombatRules) -> u32 {
    let total = (i64::from(power) + i64::from(status_modifier)).max(0);
    let rounded = round_to_unit(total, 1, i64::from(rules.rounding_unit));
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Damage dealt by `incoming` power against a side with `reduction`.
///
/// Never negative. Anything strictly between zero and the damage floor is
/// raised to the floor.
pub fn net_damage(incoming: u32, reduction: i32, rules: &CombatRules) -> u32 {
    let net = (i64::from(incoming) - i64::from(reduction)).max(0);
    let net = u32::try_from(net).unwrap_or(u32::MAX);
    if net > 0 && net < rules.damage_floor {
        rules.damage_floor
    } else {
        net
    }
}
