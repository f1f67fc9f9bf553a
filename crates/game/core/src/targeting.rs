//! Defend and provoke declarations and attack redirection.
//!
//! Back-references are plain [`CombatantId`]s resolved against a roster slice,
//! so nothing here needs the full match state.

use crate::action::{ActionError, DefendError, ProvokeError};
use crate::config::ProvokeRules;
use crate::state::{Combatant, CombatantId, MatchState, Round};

/// Living teammate currently shielding `protected`, if any.
pub fn protector_of(protected: CombatantId, team: &[Combatant]) -> Option<&Combatant> {
    team.iter().find(|candidate| {
        candidate.id != protected && candidate.is_alive() && candidate.defending == Some(protected)
    })
}

/// Resolves who actually takes an attack aimed at `nominal`.
///
/// Returns the protector when one exists, otherwise `nominal` itself.
pub fn resolve_defend_target(nominal: CombatantId, team: &[Combatant]) -> CombatantId {
    protector_of(nominal, team).map_or(nominal, |protector| protector.id)
}

/// Checks whether `defender` may shield `protected`.
///
/// `team` is the defender's roster.
pub fn validate_defend(
    defender: &Combatant,
    protected: &Combatant,
    team: &[Combatant],
) -> Result<(), DefendError> {
    if defender.is_defeated() {
        return Err(ActionError::Defeated(defender.id).into());
    }
    if defender.id == protected.id {
        return Err(DefendError::ProtectSelf);
    }
    if !team.iter().any(|member| member.id == protected.id) {
        return Err(DefendError::NotTeammate(protected.id));
    }
    if protected.is_defeated() {
        return Err(DefendError::ProtectedDefeated(protected.id));
    }
    if defender.level > protected.level {
        return Err(DefendError::LevelTooHigh {
            defender_level: defender.level,
            protected_level: protected.level,
        });
    }
    if let Some(existing) = protector_of(protected.id, team) {
        if existing.id != defender.id {
            return Err(DefendError::AlreadyProtected { by: existing.id });
        }
    }
    Ok(())
}

/// Checks whether `provoker` may provoke `target` in `round`.
///
/// Team membership is checked by the caller, which owns the full state.
pub fn validate_provoke(
    provoker: &Combatant,
    target: &Combatant,
    round: Round,
    rules: &ProvokeRules,
) -> Result<(), ProvokeError> {
    if provoker.is_defeated() {
        return Err(ActionError::Defeated(provoker.id).into());
    }
    if provoker.level < rules.min_level {
        return Err(ProvokeError::LevelTooLow {
            level: provoker.level,
            min: rules.min_level,
        });
    }
    if let Some(last) = provoker.last_provoke_round {
        let elapsed = round.since(last);
        if elapsed < rules.cooldown_rounds {
            return Err(ProvokeError::OnCooldown {
                rounds_remaining: rules.cooldown_rounds - elapsed,
            });
        }
    }
    if target.is_defeated() {
        return Err(ProvokeError::TargetDefeated(target.id));
    }
    Ok(())
}

/// Target `attacker` is forced to hit, if its provoker is still standing.
///
/// A provoker that is dead or gone releases the constraint.
pub fn required_target(attacker: &Combatant, state: &MatchState) -> Option<CombatantId> {
    let provoker = attacker.provoked_by?;
    state
        .combatant(provoker)
        .filter(|combatant| combatant.is_alive())
        .map(|combatant| combatant.id)
}
