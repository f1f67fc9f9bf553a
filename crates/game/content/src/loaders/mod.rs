//! Content loaders for reading battle data from files.
//!
//! Each loader turns one RON/TOML file into battle-core types and rejects
//! content the engine could not run with.

pub mod config;
pub mod creatures;
pub mod factory;
pub mod items;
pub mod roster;

pub use config::ConfigLoader;
pub use creatures::CreatureLoader;
pub use factory::ContentFactory;
pub use items::ItemLoader;
pub use roster::{PlayerSpec, RosterLoader, RosterSpec, StockSpec};

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}
