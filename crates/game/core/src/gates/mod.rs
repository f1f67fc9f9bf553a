//! Probability gates.
//!
//! Each gate is a pure function of the combatant state and an explicit roll.
//! Actions draw the rolls from the environment's [`RngOracle`](crate::env::RngOracle).
mod evolution;
mod loot;
mod recovery;

pub use evolution::{check_evolution_unlock, evolution_chance};
pub use loot::loot_reward;
pub use recovery::{apply_rest, check_revival, rest_amount, revival_chance};

/// Largest operator modifier a revival attempt accepts.
pub const MAX_REVIVAL_MODIFIER: u32 = 100;
