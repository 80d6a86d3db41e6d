//! Upgrade-effects table loader.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sheet_core::{UpgradeEffect, UpgradeEffectsTable};

use crate::loaders::{LoadResult, read_file, warn_duplicates};

/// Upgrade-effects structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpgradeCatalogRon {
    pub upgrades: Vec<UpgradeEffect>,
}

/// Loader for upgrade-effects tables from RON files.
pub struct UpgradeLoader;

impl UpgradeLoader {
    /// Load the upgrade-effects table embedded in this crate.
    pub fn builtin() -> LoadResult<UpgradeEffectsTable> {
        let content = include_str!("../../data/upgrades.ron");
        Self::parse(content).context("Failed to parse built-in upgrades.ron")
    }

    /// Load an upgrade-effects table from a RON file.
    pub fn load(path: &Path) -> LoadResult<UpgradeEffectsTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse upgrade table {}", path.display()))
    }

    /// Parse upgrade-effects RON text.
    pub fn parse(content: &str) -> LoadResult<UpgradeEffectsTable> {
        let catalog: UpgradeCatalogRon = ron::from_str(content)?;
        warn_duplicates("upgrade", catalog.upgrades.iter().map(|u| u.group_id.as_str()));
        Ok(catalog.upgrades.into_iter().collect())
    }
}
