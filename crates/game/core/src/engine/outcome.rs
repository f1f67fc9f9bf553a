//! Win detection.

use tracing::info;

use crate::state::{MatchState, MatchStatus, PlayerSummary};

/// Returns the sole player with a living combatant, if exactly one remains.
pub fn detect_winner(state: &MatchState) -> Option<PlayerSummary> {
    let mut living = state.living_players();
    match (living.next(), living.next()) {
        (Some(index), None) => Some(state.players[index].summary()),
        _ => None,
    }
}

/// Re-evaluates the match status after a mutation.
///
/// Returns the terminal status when this call ended the match. Exchanges hit
/// both sides at once, so the last two teams can fall together; that ends the
/// match as a draw.
pub(super) fn refresh_status(state: &mut MatchState) -> Option<MatchStatus> {
    if state.status.is_finished() {
        return None;
    }

    let status = if state.living_players().next().is_none() {
        info!(round = %state.round(), "match drawn, no combatant left standing");
        MatchStatus::Draw
    } else {
        let summary = detect_winner(state)?;
        info!(
            winner = %summary.player,
            name = %summary.name,
            survivors = summary.survivors.len(),
            round = %state.round(),
            "match finished"
        );
        MatchStatus::Finished(summary)
    };

    state.status = status.clone();
    Some(status)
}
