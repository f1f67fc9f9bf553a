//! Data-driven content for the battle engine.
//!
//! This crate reads the read-only catalog and the rule tables from disk:
//! - Creature catalog (RON)
//! - Item catalog (RON)
//! - Rule tables (TOML)
//! - Match rosters (RON)
//!
//! Content is consumed through `battle-core`'s oracles and never appears in
//! match state except as catalog ids.
//!
//! All loaders use battle-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, CreatureLoader, ItemLoader, LoadResult, PlayerSpec, RosterLoader,
    RosterSpec, StockSpec,
};
