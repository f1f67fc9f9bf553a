use bitflags::bitflags;

bitflags! {
    /// Tracks which fields of a [`Combatant`](crate::state::Combatant) changed during an action.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CombatantFields: u16 {
        const HP        = 1 << 0;
        const READINESS = 1 << 1;
        const EVOLUTION = 1 << 2;
        const DEFENDING = 1 << 3;
        const PROVOKE   = 1 << 4;
        const REVIVAL   = 1 << 5;
        const BONUSES   = 1 << 6;
        const BAG       = 1 << 7;
        /// Form, name, level, type, attribute or base power (evolution).
        const IDENTITY  = 1 << 8;
    }
}

bitflags! {
    /// Tracks which fields of the turn bookkeeping changed during an action.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TurnFields: u8 {
        const CURRENT_PLAYER = 1 << 0;
        const ROUND          = 1 << 1;
        const STATUS         = 1 << 2;
        const SHARED_BAG     = 1 << 3;
    }
}
