use super::{PlayerSummary, Round};

/// Turn bookkeeping. Mutated only by the turn state machine and the engine's
/// nonce counter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Index into `MatchState::players` of the player whose turn it is.
    pub current_player: usize,

    pub round: Round,

    /// Sequential action identifier that increments with every executed action.
    ///
    /// Mixed into roll seeds so two rolls in the same round never share a seed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nonce: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            current_player: 0,
            round: Round::FIRST,
            nonce: 0,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the match is still being played.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStatus {
    #[default]
    InProgress,
    Finished(PlayerSummary),
    /// The last combatants of every remaining player fell in the same exchange.
    Draw,
}

impl MatchStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn winner(&self) -> Option<&PlayerSummary> {
        match self {
            Self::Finished(summary) => Some(summary),
            Self::InProgress | Self::Draw => None,
        }
    }
}
