//! Traits describing read-only match inputs.
//!
//! Oracles expose the catalog and the roll source. The [`BattleEnv`] aggregate
//! bundles them with the rule tables so actions can reach everything they need
//! without coupling to concrete implementations.
mod catalog;
mod error;
mod rng;

pub use catalog::{CatalogOracle, CatalogSnapshot, CreatureDefinition, ItemDefinition, ItemEffect};
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, RollContext, compute_seed};

use crate::config::BattleConfig;
use crate::state::{CatalogId, ItemId};

/// Aggregates read-only inputs required by the action pipeline.
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    rules: &'a BattleConfig,
    rng: &'a dyn RngOracle,
    catalog: Option<&'a dyn CatalogOracle>,
}

impl<'a> BattleEnv<'a> {
    pub fn new(rules: &'a BattleConfig, rng: &'a dyn RngOracle) -> Self {
        Self {
            rules,
            rng,
            catalog: None,
        }
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: &'a dyn CatalogOracle) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn rules(&self) -> &'a BattleConfig {
        self.rules
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    /// Returns the CatalogOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CatalogNotAvailable` if no catalog was provided.
    pub fn catalog(&self) -> Result<&'a dyn CatalogOracle, OracleError> {
        self.catalog.ok_or(OracleError::CatalogNotAvailable)
    }

    pub fn creature(&self, id: CatalogId) -> Result<&'a CreatureDefinition, OracleError> {
        self.catalog()?
            .creature(id)
            .ok_or(OracleError::CreatureNotFound(id))
    }

    pub fn item(&self, id: ItemId) -> Result<&'a ItemDefinition, OracleError> {
        self.catalog()?
            .item(id)
            .ok_or(OracleError::ItemNotFound(id))
    }
}
