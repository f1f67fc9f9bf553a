use tracing::debug;

use crate::env::{BattleEnv, ItemEffect, OracleError};
use crate::state::{Bag, CombatantId, ItemKind, MatchState, Readiness};

use super::{
    ActionError, ActionTransition, ItemError, acting_combatant, combatant_mut, ensure_hp_bounds,
};

/// Which bag an item is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BagSource {
    /// The acting combatant's own bag.
    Own,
    /// The match-wide shared bag.
    Shared,
}

/// Consume one unit from a bag slot on the user or a teammate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub actor: CombatantId,
    pub source: BagSource,
    pub slot: usize,
    pub target: CombatantId,
}

impl UseItemAction {
    pub fn new(actor: CombatantId, source: BagSource, slot: usize, target: CombatantId) -> Self {
        Self {
            actor,
            source,
            slot,
            target,
        }
    }

    fn bag<'s>(&self, state: &'s MatchState) -> Result<&'s Bag, ActionError> {
        match self.source {
            BagSource::Own => state
                .combatant(self.actor)
                .map(|combatant| &combatant.bag)
                .ok_or(ActionError::UnknownCombatant(self.actor)),
            BagSource::Shared => Ok(&state.shared_bag),
        }
    }

    fn bag_mut<'s>(&self, state: &'s mut MatchState) -> Result<&'s mut Bag, ActionError> {
        match self.source {
            BagSource::Own => combatant_mut(state, self.actor).map(|combatant| &mut combatant.bag),
            BagSource::Shared => Ok(&mut state.shared_bag),
        }
    }
}

/// Effect an item applied and on whom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemOutcome {
    pub item: ItemKind,
    pub target: CombatantId,
    pub effect: ItemEffect,
    /// HP restored, zero for non-healing effects.
    pub healed: u32,
}

/// Resolves the effect of a bag item, looking catalog items up in the environment.
fn effect_of(item: ItemKind, env: &BattleEnv<'_>) -> Result<ItemEffect, OracleError> {
    match item {
        ItemKind::PowerBoost(amount) => Ok(ItemEffect::PowerBoost(amount)),
        ItemKind::Catalog(id) => env.item(id).map(|definition| definition.effect),
    }
}

impl ActionTransition for UseItemAction {
    type Error = ItemError;
    type Result = ItemOutcome;

    fn pre_validate(&self, state: &MatchState, env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        acting_combatant(state, self.actor)?;
        let slot = self
            .bag(state)?
            .slot(self.slot)
            .ok_or(ItemError::SlotEmpty { slot: self.slot })?;
        effect_of(slot.item, env)?;

        let target = state
            .combatant(self.target)
            .ok_or(ItemError::TargetNotFound(self.target))?;
        if !state.are_teammates(self.actor, self.target) {
            return Err(ItemError::NotTeammate(self.target));
        }
        if target.is_defeated() {
            return Err(ItemError::TargetDefeated(self.target));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut MatchState,
        env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let item = self
            .bag_mut(state)?
            .take_one(self.slot)
            .ok_or(ItemError::SlotEmpty { slot: self.slot })?;
        let effect = effect_of(item, env)?;

        let target = combatant_mut(state, self.target)?;
        let mut healed = 0;
        match effect {
            ItemEffect::Heal(amount) => healed = target.heal(amount),
            ItemEffect::AttackBonus(points) => {
                target.attack_bonus = target.attack_bonus.saturating_add(points);
            }
            ItemEffect::DefenseBonus(points) => {
                target.defense_bonus = target.defense_bonus.saturating_add(points);
            }
            ItemEffect::PowerBoost(amount) => {
                target.pending_boost = target.pending_boost.saturating_add(amount);
            }
        }

        let user = combatant_mut(state, self.actor)?;
        user.readiness = Readiness::Acted;

        debug!(user = %self.actor, target = %self.target, ?effect, healed, "item used");
        Ok(ItemOutcome {
            item,
            target: self.target,
            effect,
            healed,
        })
    }

    fn post_validate(&self, state: &MatchState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        ensure_hp_bounds(state)?;
        Ok(())
    }
}
