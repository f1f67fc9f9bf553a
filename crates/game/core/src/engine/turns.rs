//! Turn rotation.
//!
//! Players act in seat order. Players without a living combatant are skipped,
//! and wrapping past the last seat starts a new round.

use tracing::{error, info};

use crate::action::TurnError;
use crate::state::{MatchState, PlayerId, Round};

/// Record of one turn hand-off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnAdvance {
    /// Seat index that passed.
    pub from: usize,
    /// Seat index now acting.
    pub to: usize,
    pub player: PlayerId,
    /// Round after the hand-off.
    pub round: Round,
    pub new_round: bool,
}

/// Hands the turn to the next player with a living combatant.
///
/// Only the arriving player's combatants get their readiness and defend
/// declaration reset.
///
/// # Errors
///
/// [`TurnError::NoLivingPlayers`] when every combatant of every player is
/// defeated. The outcome check ends the match before that can happen, so this
/// indicates a broken invariant. The error carries the nonce and round it
/// was raised at.
pub fn advance_turn(state: &mut MatchState) -> Result<TurnAdvance, TurnError> {
    let count = state.players.len();
    let from = state.turn.current_player;

    let Some(to) = (1..=count)
        .map(|offset| (from + offset) % count)
        .find(|&index| state.players[index].has_living())
    else {
        error!(%from, "turn advance found no living player");
        return Err(TurnError::no_living_players(state.turn.nonce, state.turn.round));
    };

    let new_round = to <= from;
    if new_round {
        state.turn.round = state.turn.round.next();
        info!(round = %state.turn.round, "new round");
    }
    state.turn.current_player = to;

    let player = &mut state.players[to];
    for combatant in player.roster.iter_mut() {
        combatant.begin_turn();
    }

    Ok(TurnAdvance {
        from,
        to,
        player: player.id,
        round: state.turn.round,
        new_round,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BattleError;
    use crate::state::{CatalogId, Combatant, CombatantId, CreatureType, Player, Readiness};

    fn table(players: u32) -> MatchState {
        let seats = (1..=players)
            .map(|id| {
                let mut roster = crate::state::Roster::new();
                roster.push(Combatant::new(
                    CombatantId(id),
                    CatalogId(1),
                    format!("c{id}"),
                    CreatureType::Data,
                    1000,
                ));
                Player::new(PlayerId(id), format!("p{id}"), roster)
            })
            .collect();
        MatchState::new(1, seats).unwrap()
    }

    fn defeat(state: &mut MatchState, id: u32) {
        state.combatant_mut(CombatantId(id)).unwrap().current_hp = 0;
    }

    #[test]
    fn skips_eliminated_players() {
        let mut state = table(3);
        defeat(&mut state, 2);

        let advance = advance_turn(&mut state).unwrap();

        assert_eq!(advance.to, 2);
        assert_eq!(advance.player, PlayerId(3));
        assert!(!advance.new_round);
        assert_eq!(state.round(), Round(1));
    }

    #[test]
    fn wrapping_increments_round_once() {
        let mut state = table(3);
        state.turn.current_player = 2;

        let advance = advance_turn(&mut state).unwrap();

        assert_eq!(advance.to, 0);
        assert!(advance.new_round);
        assert_eq!(state.round(), Round(2));
    }

    #[test]
    fn sole_survivor_wraps_onto_itself() {
        let mut state = table(2);
        defeat(&mut state, 2);

        let advance = advance_turn(&mut state).unwrap();

        assert_eq!(advance.to, 0);
        assert_eq!(state.round(), Round(2));
    }

    #[test]
    fn resets_only_the_arriving_player() {
        let mut state = table(3);
        for id in 1..=3 {
            let combatant = state.combatant_mut(CombatantId(id)).unwrap();
            combatant.readiness = Readiness::Acted;
            combatant.defending = Some(CombatantId(99));
        }

        advance_turn(&mut state).unwrap();

        let arriving = state.combatant(CombatantId(2)).unwrap();
        assert!(arriving.is_ready());
        assert_eq!(arriving.defending, None);
        for untouched in [1, 3] {
            let combatant = state.combatant(CombatantId(untouched)).unwrap();
            assert_eq!(combatant.readiness, Readiness::Acted);
            assert_eq!(combatant.defending, Some(CombatantId(99)));
        }
    }

    #[test]
    fn no_living_player_is_an_error() {
        let mut state = table(2);
        defeat(&mut state, 1);
        defeat(&mut state, 2);
        let before = state.clone();

        let error = advance_turn(&mut state).unwrap_err();
        assert!(matches!(error, TurnError::NoLivingPlayers { .. }));
        assert_eq!(state, before);

        let context = error.context().unwrap();
        assert_eq!(context.round, Some(before.turn.round));
        assert_eq!(context.nonce, before.turn.nonce);
    }
}
