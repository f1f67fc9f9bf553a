mod bag;
mod combatant;
mod common;
mod creature;
mod player;
mod turn;

pub use bag::{Bag, BagFull, BagSlot, ItemKind};
pub use combatant::{Combatant, EvolutionGate, Readiness};
pub use common::{CatalogId, CombatantId, ItemId, PlayerId, Round};
pub use creature::{Attribute, CreatureType};
pub use player::{Player, PlayerSummary, Roster, SurvivorSummary};
pub use turn::{MatchStatus, TurnState};
