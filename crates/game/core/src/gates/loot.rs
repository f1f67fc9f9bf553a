use crate::config::GateRules;

/// Power reward for a loot roll, clamped to the die's faces.
pub fn loot_reward(roll: u32, rules: &GateRules) -> u32 {
    roll.clamp(1, rules.loot_die_sides.max(1))
        .saturating_mul(rules.loot_reward_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_scales_with_roll() {
        let rules = GateRules::default();
        assert_eq!(loot_reward(1, &rules), 100);
        assert_eq!(loot_reward(13, &rules), 1300);
        assert_eq!(loot_reward(20, &rules), 2000);
        assert_eq!(loot_reward(0, &rules), 100);
        assert_eq!(loot_reward(99, &rules), 2000);
    }
}
