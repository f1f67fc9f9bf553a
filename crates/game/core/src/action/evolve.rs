use tracing::info;

use crate::env::BattleEnv;
use crate::state::{CatalogId, CombatantId, MatchState};

use super::{ActionTransition, EvolveError, combatant_mut, owned_combatant};

/// Evolve an unlocked combatant into its next form.
///
/// A free action: the combatant keeps its readiness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveAction {
    pub actor: CombatantId,
    pub into: CatalogId,
}

impl EvolveAction {
    pub fn new(actor: CombatantId, into: CatalogId) -> Self {
        Self { actor, into }
    }
}

impl ActionTransition for EvolveAction {
    type Error = EvolveError;
    /// Catalog id of the form left behind.
    type Result = CatalogId;

    fn pre_validate(&self, state: &MatchState, env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        let combatant = owned_combatant(state, self.actor)?;
        if !combatant.evolution.is_unlocked() {
            return Err(EvolveError::Locked(self.actor));
        }

        let current = env.creature(combatant.form)?;
        let next = env.creature(self.into)?;
        if !current.evolves_to.contains(&self.into) {
            return Err(EvolveError::InvalidForm {
                from: combatant.form,
                into: self.into,
            });
        }
        if next.level != combatant.level.saturating_add(1) {
            return Err(EvolveError::LevelMismatch {
                current: combatant.level,
                next: next.level,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut MatchState,
        env: &BattleEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let next = env.creature(self.into)?;
        let combatant = combatant_mut(state, self.actor)?;
        let from = combatant.form;
        combatant.evolve_into(next);

        info!(
            combatant = %self.actor,
            %from,
            into = %self.into,
            name = %combatant.name,
            level = combatant.level,
            "evolved"
        );
        Ok(from)
    }
}
