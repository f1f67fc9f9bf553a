mod bitmask;
mod changes;

use crate::action::Action;
use crate::state::{MatchState, Round};

pub use bitmask::{CombatantFields, TurnFields};
pub use changes::CombatantChanges;

/// Minimal description of an executed action's impact on the match state.
///
/// Uses bitmask-based change tracking: the delta records *which* fields
/// changed, not their values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDelta {
    /// The action that caused this transition.
    pub action: Action,

    /// Round in which the action executed.
    pub round: Round,

    pub turn: TurnFields,

    /// Combatants with at least one changed field, in seat order.
    pub combatants: Vec<CombatantChanges>,
}

impl StateDelta {
    /// Creates a delta by comparing two match states.
    ///
    /// Rosters are fixed for the lifetime of a match, so combatants are paired
    /// positionally.
    pub fn from_states(action: Action, before: &MatchState, after: &MatchState) -> Self {
        let mut turn = TurnFields::empty();
        if before.turn.current_player != after.turn.current_player {
            turn |= TurnFields::CURRENT_PLAYER;
        }
        if before.turn.round != after.turn.round {
            turn |= TurnFields::ROUND;
        }
        if before.status != after.status {
            turn |= TurnFields::STATUS;
        }
        if before.shared_bag != after.shared_bag {
            turn |= TurnFields::SHARED_BAG;
        }

        let combatants = before
            .combatants()
            .zip(after.combatants())
            .filter_map(|(b, a)| CombatantChanges::from_states(b, a))
            .collect();

        Self {
            action,
            round: before.turn.round,
            turn,
            combatants,
        }
    }

    /// Returns true if nothing observable changed.
    pub fn is_empty(&self) -> bool {
        self.turn.is_empty() && self.combatants.is_empty()
    }

    /// Fields changed on `id`, empty if it was untouched.
    pub fn fields_of(&self, id: crate::state::CombatantId) -> CombatantFields {
        self.combatants
            .iter()
            .find(|change| change.id == id)
            .map(|change| change.fields)
            .unwrap_or_default()
    }
}
