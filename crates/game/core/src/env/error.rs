//! Oracle access errors.

use crate::error::{BattleError, ErrorSeverity};
use crate::state::{CatalogId, ItemId};

/// Errors that occur when accessing catalog data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// CatalogOracle is not available in the environment.
    #[error("CatalogOracle not available")]
    CatalogNotAvailable,

    #[error("creature definition {0} not found")]
    CreatureNotFound(CatalogId),

    #[error("item definition {0} not found")]
    ItemNotFound(ItemId),
}

impl BattleError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            CatalogNotAvailable => ErrorSeverity::Internal,
            CreatureNotFound(_) | ItemNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            CatalogNotAvailable => "ORACLE_CATALOG_NOT_AVAILABLE",
            CreatureNotFound(_) => "ORACLE_CREATURE_NOT_FOUND",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
        }
    }
}
