//! Content loaders for reading catalog data from files.
//!
//! Each loader converts one RON/TOML file into the `sheet-core` type backing an
//! oracle. [`ContentFactory`] ties them together for a whole data directory.

pub mod armor;
pub mod config;
pub mod factory;
pub mod upgrades;
pub mod weapons;

pub use armor::ArmorLoader;
pub use config::ConfigLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use upgrades::UpgradeLoader;
pub use weapons::WeaponLoader;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))
}

/// Warns about entries whose key repeats an earlier one; the later entry wins.
pub(crate) fn warn_duplicates<'a>(kind: &str, keys: impl IntoIterator<Item = &'a str>) {
    let mut seen = std::collections::BTreeSet::new();
    for key in keys {
        if !seen.insert(key) {
            tracing::warn!(target: "sheet::content", kind, key, "duplicate catalog entry");
        }
    }
}
