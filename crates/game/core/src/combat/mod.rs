//! Pure combat math.
//!
//! Advantage relations, the power and defense formulas, and the exchange
//! resolver that composes them. Nothing here mutates match state; the attack
//! action writes the returned HP values back.
mod advantage;
mod exchange;
pub mod power;

pub use advantage::{Advantage, AdvantageCycle, attribute_advantage, type_advantage};
pub use exchange::{ExchangeResult, ExchangeSide, resolve_exchange};
pub use power::{attack_power, defense_reduction};
