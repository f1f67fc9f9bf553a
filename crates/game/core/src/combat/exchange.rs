//! One simultaneous attack exchange between two combatants.

use crate::config::BattleConfig;
use crate::state::{Combatant, CombatantId};

use super::advantage::{Advantage, attribute_advantage, type_advantage};
use super::power::{advantaged_power, attack_power, defense_reduction, net_damage, with_status};

/// One side's breakdown of an exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeSide {
    pub combatant: CombatantId,
    pub raw_power: u32,
    pub defense_reduction: i32,
    /// Advantage of this side's type over the opponent's.
    pub type_advantage: Advantage,
    pub attribute_advantage: Advantage,
    /// Power after advantage and status modifier, the amount thrown at the opponent.
    pub effective_power: u32,
    pub damage_taken: u32,
    pub hp_after: u32,
}

/// Result of [`resolve_exchange`]. Both sides hit each other at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeResult {
    pub attacker: ExchangeSide,
    pub defender: ExchangeSide,
}

impl ExchangeResult {
    pub fn damage_to_attacker(&self) -> u32 {
        self.attacker.damage_taken
    }

    pub fn damage_to_defender(&self) -> u32 {
        self.defender.damage_taken
    }

    pub fn type_advantage_attacker(&self) -> Advantage {
        self.attacker.type_advantage
    }

    pub fn type_advantage_defender(&self) -> Advantage {
        self.defender.type_advantage
    }

    pub fn attribute_advantage_attacker(&self) -> Advantage {
        self.attacker.attribute_advantage
    }

    pub fn attribute_advantage_defender(&self) -> Advantage {
        self.defender.attribute_advantage
    }

    pub fn attacker_hp_after(&self) -> u32 {
        self.attacker.hp_after
    }

    pub fn defender_hp_after(&self) -> u32 {
        self.defender.hp_after
    }
}

struct Offense {
    raw_power: u32,
    defense_reduction: i32,
    type_advantage: Advantage,
    attribute_advantage: Advantage,
    effective_power: u32,
}

fn offense(own: &Combatant, opponent: &Combatant, status: i32, rules: &BattleConfig) -> Offense {
    let combat = &rules.combat;
    let raw_power = attack_power(own.base_power, own.attack_bonus, combat);
    let defense_reduction = defense_reduction(raw_power, own.defense_bonus, combat);
    let type_advantage = type_advantage(
        &rules.type_cycle,
        own.creature_type,
        opponent.creature_type,
    );
    let attribute_advantage =
        attribute_advantage(&rules.attribute_cycle, own.attribute, opponent.attribute);
    let advantaged = advantaged_power(raw_power, type_advantage, attribute_advantage, combat);
    let effective_power = with_status(advantaged, status, combat);

    Offense {
        raw_power,
        defense_reduction,
        type_advantage,
        attribute_advantage,
        effective_power,
    }
}

fn settle(own: &Combatant, offense: Offense, incoming: u32, rules: &BattleConfig) -> ExchangeSide {
    let damage_taken = net_damage(incoming, offense.defense_reduction, &rules.combat);
    ExchangeSide {
        combatant: own.id,
        raw_power: offense.raw_power,
        defense_reduction: offense.defense_reduction,
        type_advantage: offense.type_advantage,
        attribute_advantage: offense.attribute_advantage,
        effective_power: offense.effective_power,
        damage_taken,
        hp_after: own.current_hp.saturating_sub(damage_taken),
    }
}

/// Computes one exchange without touching either combatant.
///
/// Each side's power, defense and advantage are derived independently; the
/// status modifiers are flat additions applied after the advantage multiplier.
/// `rules` must be [well formed](BattleConfig::is_well_formed).
pub fn resolve_exchange(
    attacker: &Combatant,
    defender: &Combatant,
    attacker_status: i32,
    defender_status: i32,
    rules: &BattleConfig,
) -> ExchangeResult {
    let attack = offense(attacker, defender, attacker_status, rules);
    let counter = offense(defender, attacker, defender_status, rules);

    let attacker_power = attack.effective_power;
    let defender_power = counter.effective_power;

    ExchangeResult {
        attacker: settle(attacker, attack, defender_power, rules),
        defender: settle(defender, counter, attacker_power, rules),
    }
}
