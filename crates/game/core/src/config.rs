//! Rule tables and compile-time bounds for the battle engine.
//!
//! Every tunable number the rules use lives here so hosts can load a
//! `rules.toml` without recompiling. Defaults reproduce the board game's
//! printed rules.
use crate::combat::AdvantageCycle;
use crate::state::{Attribute, CreatureType};

/// Game configuration constants and tunable rule tables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    pub combat: CombatRules,
    pub gates: GateRules,
    pub provoke: ProvokeRules,
    /// Rock-paper-scissors cycle over creature types.
    pub type_cycle: AdvantageCycle<CreatureType>,
    /// Independent cycle over elemental attributes.
    pub attribute_cycle: AdvantageCycle<Attribute>,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_PLAYERS: usize = 8;
    pub const MAX_PARTY_SIZE: usize = 6;
    pub const MAX_BAG_SLOTS: usize = 10;
    /// Highest evolution stage a creature can reach.
    pub const MAX_LEVEL: u8 = 7;
    /// Smallest number of players a match can start with.
    pub const MIN_PLAYERS: usize = 2;

    pub fn new() -> Self {
        Self {
            combat: CombatRules::default(),
            gates: GateRules::default(),
            provoke: ProvokeRules::default(),
            type_cycle: AdvantageCycle::new([
                CreatureType::Vaccine,
                CreatureType::Virus,
                CreatureType::Data,
            ]),
            attribute_cycle: AdvantageCycle::new([
                Attribute::Fire,
                Attribute::Plant,
                Attribute::Water,
            ]),
        }
    }

    /// Returns true when both advantage cycles list three distinct members.
    pub fn is_well_formed(&self) -> bool {
        self.type_cycle.is_well_formed()
            && self.attribute_cycle.is_well_formed()
            && self.combat.rounding_unit > 0
            && self.combat.power_divisor > 0
            && self.gates.loot_die_sides > 0
            && self.gates.evolution_step_pct > 0
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of the power, defense and exchange formulas.
///
/// Percentages are integer percentage points so every formula stays in exact
/// integer arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatRules {
    /// Base power is `base_power / power_divisor`.
    pub power_divisor: u32,
    /// Percent of power gained per attack or defense bonus point.
    pub bonus_step_pct: i32,
    /// Multiplier swing for a favored/disfavored creature type.
    pub type_swing_pct: i32,
    /// Multiplier swing for a favored/disfavored attribute.
    pub attribute_swing_pct: i32,
    /// Granularity every power value is rounded to.
    pub rounding_unit: u32,
    /// Smallest non-zero damage an exchange can deal.
    pub damage_floor: u32,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            power_divisor: 3,
            bonus_step_pct: 2,
            type_swing_pct: 35,
            attribute_swing_pct: 20,
            rounding_unit: 100,
            damage_floor: 5,
        }
    }
}

/// Parameters of the probability gates and rest healing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GateRules {
    pub evolution_base_chance: u32,
    /// Chance added per full `evolution_step_pct` of HP lost.
    pub evolution_step_chance: u32,
    pub evolution_step_pct: u32,
    pub revival_base_chance: u32,
    pub loot_die_sides: u32,
    pub loot_reward_unit: u32,
    pub rest_heal_pct: u32,
}

impl Default for GateRules {
    fn default() -> Self {
        Self {
            evolution_base_chance: 20,
            evolution_step_chance: 5,
            evolution_step_pct: 10,
            revival_base_chance: 15,
            loot_die_sides: 20,
            loot_reward_unit: 100,
            rest_heal_pct: 20,
        }
    }
}

/// Eligibility rules for the provoke declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProvokeRules {
    pub min_level: u8,
    /// Rounds that must elapse between two provokes by the same combatant.
    pub cooldown_rounds: u32,
}

impl Default for ProvokeRules {
    fn default() -> Self {
        Self {
            min_level: 2,
            cooldown_rounds: 3,
        }
    }
}
