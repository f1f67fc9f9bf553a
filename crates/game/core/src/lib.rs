//! Deterministic rules engine for a turn-based creature-battle game.
//!
//! `battle-core` defines the canonical rules (combat math, probability gates,
//! targeting, turn rotation, win detection) and exposes pure APIs that hosts
//! can drive without I/O. All state mutation flows through
//! [`engine::BattleEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod gates;
pub mod state;
pub mod targeting;

pub use action::{
    Action, ActionError, ActionKind, ActionResult, ActionTransition, AttackAction, AttackError,
    AttackOutcome, BagSource, DefendAction, DefendError, EvolveAction, EvolveError,
    InvariantViolation, ItemError, ItemOutcome, LootAction, LootError, PassTurnAction,
    ProvokeAction, ProvokeError, RestAction, RestError, ReviveAction, ReviveError,
    RevivalOutcome, TurnError, UseItemAction,
};
pub use combat::{
    Advantage, AdvantageCycle, ExchangeResult, ExchangeSide, attack_power, attribute_advantage,
    defense_reduction, resolve_exchange, type_advantage,
};
pub use config::{BattleConfig, CombatRules, GateRules, ProvokeRules};
pub use engine::{
    BattleEngine, ExecuteError, ExecutionOutcome, TransitionPhase, TransitionPhaseError,
    TurnAdvance, advance_turn, detect_winner,
};
pub use env::{
    BattleEnv, CatalogOracle, CatalogSnapshot, CreatureDefinition, ItemDefinition, ItemEffect,
    OracleError, PcgRng, RngOracle, RollContext, compute_seed,
};
pub use error::{BattleError, ErrorContext, ErrorSeverity};
pub use gates::{
    apply_rest, check_evolution_unlock, check_revival, evolution_chance, loot_reward,
    revival_chance,
};
#[cfg(feature = "serde")]
pub use state::compute_state_root;
pub use state::{
    Attribute, Bag, BagSlot, CatalogId, Combatant, CombatantId, CreatureType, EvolutionGate,
    ItemId, ItemKind, MatchState, MatchStatus, Player, PlayerId, PlayerSummary, Readiness, Roster,
    Round, StateDelta, StateError, SurvivorSummary, TurnState,
};
pub use targeting::{resolve_defend_target, validate_defend, validate_provoke};
