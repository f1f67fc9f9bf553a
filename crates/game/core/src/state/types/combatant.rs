//! Creature instances bound to a match.

use super::{Attribute, Bag, CatalogId, CombatantId, CreatureType, Round};
use crate::env::CreatureDefinition;

/// Whether a combatant may still act this round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Readiness {
    #[default]
    Ready,
    Acted,
}

/// Sticky evolution permission, set by the unlock roll and consumed by evolving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvolutionGate {
    #[default]
    Locked,
    Unlocked,
}

impl EvolutionGate {
    pub const fn is_unlocked(self) -> bool {
        matches!(self, Self::Unlocked)
    }
}

/// One creature instance inside an active match.
///
/// # Invariants
///
/// - `current_hp <= base_power`
/// - `current_hp == 0` means defeated: cannot act, be defended or be provoked
/// - `defending` and `provoked_by` reference combatants by id, never by pointer
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    /// Catalog entry the combatant started the match as. Survives evolution.
    pub origin: CatalogId,
    /// Catalog entry of the current form.
    pub form: CatalogId,
    pub name: String,
    pub level: u8,
    pub creature_type: CreatureType,
    pub attribute: Option<Attribute>,

    /// DP: drives attack power and doubles as maximum HP.
    pub base_power: u32,
    pub current_hp: u32,
    pub attack_bonus: i32,
    pub defense_bonus: i32,

    pub evolution: EvolutionGate,
    pub readiness: Readiness,
    /// Teammate this combatant is shielding.
    pub defending: Option<CombatantId>,
    /// Enemy this combatant is forced to attack next.
    pub provoked_by: Option<CombatantId>,
    pub last_provoke_round: Option<Round>,
    /// Round of the last revival attempt made on this combatant.
    pub last_revival_round: Option<Round>,
    /// Flat power added to the next exchange this combatant takes part in.
    pub pending_boost: u32,

    pub bag: Bag,
}

impl Combatant {
    /// Creates a level-0 combatant at full HP with no attribute or bonuses.
    pub fn new(
        id: CombatantId,
        origin: CatalogId,
        name: impl Into<String>,
        creature_type: CreatureType,
        base_power: u32,
    ) -> Self {
        Self {
            id,
            origin,
            form: origin,
            name: name.into(),
            level: 0,
            creature_type,
            attribute: None,
            base_power,
            current_hp: base_power,
            attack_bonus: 0,
            defense_bonus: 0,
            evolution: EvolutionGate::Locked,
            readiness: Readiness::Ready,
            defending: None,
            provoked_by: None,
            last_provoke_round: None,
            last_revival_round: None,
            pending_boost: 0,
            bag: Bag::empty(),
        }
    }

    /// Instantiates a catalog definition at full HP.
    pub fn from_definition(id: CombatantId, definition: &CreatureDefinition) -> Self {
        Self::new(
            id,
            definition.id,
            definition.name.clone(),
            definition.creature_type,
            definition.base_power,
        )
        .with_level(definition.level)
        .with_attribute(definition.attribute)
    }

    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Option<Attribute>) -> Self {
        self.attribute = attribute;
        self
    }

    /// Sets current HP, clamped to `base_power`.
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.current_hp = hp.min(self.base_power);
        self
    }

    #[must_use]
    pub fn with_bonuses(mut self, attack_bonus: i32, defense_bonus: i32) -> Self {
        self.attack_bonus = attack_bonus;
        self.defense_bonus = defense_bonus;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }

    pub fn is_ready(&self) -> bool {
        self.readiness == Readiness::Ready
    }

    pub fn hp_within_bounds(&self) -> bool {
        self.current_hp <= self.base_power
    }

    /// HP missing from full.
    pub fn hp_lost(&self) -> u32 {
        self.base_power.saturating_sub(self.current_hp)
    }

    /// Heals up to `amount`, never beyond `base_power`. Returns the HP restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.hp_lost());
        self.current_hp += healed;
        healed
    }

    /// Clears the per-round flags when the owner's turn arrives.
    pub fn begin_turn(&mut self) {
        self.readiness = Readiness::Ready;
        self.defending = None;
    }

    /// Replaces the identity with `definition` and consumes the evolution gate.
    ///
    /// `origin`, bonuses, bag and battle flags carry over; HP refills to the new
    /// base power.
    pub fn evolve_into(&mut self, definition: &CreatureDefinition) {
        self.form = definition.id;
        self.name = definition.name.clone();
        self.level = definition.level;
        self.creature_type = definition.creature_type;
        self.attribute = definition.attribute;
        self.base_power = definition.base_power;
        self.current_hp = definition.base_power;
        self.evolution = EvolutionGate::Locked;
    }
}
