use crate::state::{Combatant, CombatantId};

use super::bitmask::CombatantFields;

/// Metadata describing which fields of a combatant changed.
///
/// Only the id and a bitmask are stored; values are read from the before/after
/// states when a host needs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantChanges {
    pub id: CombatantId,
    pub fields: CombatantFields,
}

impl CombatantChanges {
    /// Returns `None` if no fields changed.
    pub(super) fn from_states(before: &Combatant, after: &Combatant) -> Option<Self> {
        debug_assert_eq!(
            before.id, after.id,
            "Cannot compare combatants with different IDs"
        );

        let mut fields = CombatantFields::empty();

        if before.current_hp != after.current_hp {
            fields |= CombatantFields::HP;
        }
        if before.readiness != after.readiness {
            fields |= CombatantFields::READINESS;
        }
        if before.evolution != after.evolution {
            fields |= CombatantFields::EVOLUTION;
        }
        if before.defending != after.defending {
            fields |= CombatantFields::DEFENDING;
        }
        if before.provoked_by != after.provoked_by
            || before.last_provoke_round != after.last_provoke_round
        {
            fields |= CombatantFields::PROVOKE;
        }
        if before.last_revival_round != after.last_revival_round {
            fields |= CombatantFields::REVIVAL;
        }
        if before.attack_bonus != after.attack_bonus
            || before.defense_bonus != after.defense_bonus
            || before.pending_boost != after.pending_boost
        {
            fields |= CombatantFields::BONUSES;
        }
        if before.bag != after.bag {
            fields |= CombatantFields::BAG;
        }
        if before.form != after.form
            || before.name != after.name
            || before.level != after.level
            || before.creature_type != after.creature_type
            || before.attribute != after.attribute
            || before.base_power != after.base_power
        {
            fields |= CombatantFields::IDENTITY;
        }

        if fields.is_empty() {
            None
        } else {
            Some(Self {
                id: after.id,
                fields,
            })
        }
    }
}
