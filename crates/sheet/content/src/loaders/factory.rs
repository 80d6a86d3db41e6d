//! Content factory for building catalogs from data files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use sheet_core::{
    ArmorCatalog, CatalogSet, ModifierEngine, SheetConfig, UpgradeEffectsTable, WeaponCatalog,
};
use tracing::debug;

use crate::loaders::{ArmorLoader, ConfigLoader, LoadResult, UpgradeLoader, WeaponLoader};

/// Everything the standard engine needs, loaded from one data directory.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub config: SheetConfig,
    pub catalogs: CatalogSet,
}

impl ContentBundle {
    /// Standard engine over this bundle.
    pub fn engine(&self) -> ModifierEngine {
        ModifierEngine::standard(&self.catalogs, &self.config)
    }
}

/// Content factory that loads all sheet content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml    (optional)
/// ├── weapons.ron
/// ├── armor.ron
/// └── upgrades.ron   (optional; built-in table when missing)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const WEAPONS_FILE: &'static str = "weapons.ron";
    pub const ARMOR_FILE: &'static str = "armor.ron";
    pub const UPGRADES_FILE: &'static str = "upgrades.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the sample data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load configuration from `config.toml`, or defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<SheetConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            debug!(
                target: "sheet::content",
                path = %path.display(),
                "no config file, using defaults"
            );
            return Ok(SheetConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the weapon catalog from `weapons.ron`.
    pub fn load_weapons(&self) -> LoadResult<WeaponCatalog> {
        WeaponLoader::load(&self.data_dir.join(Self::WEAPONS_FILE))
    }

    /// Load the armor catalog from `armor.ron`.
    pub fn load_armor(&self) -> LoadResult<ArmorCatalog> {
        ArmorLoader::load(&self.data_dir.join(Self::ARMOR_FILE))
    }

    /// Load `upgrades.ron`, or the built-in table if the file is absent.
    pub fn load_upgrades(&self) -> LoadResult<UpgradeEffectsTable> {
        let path = self.data_dir.join(Self::UPGRADES_FILE);
        if !path.exists() {
            debug!(
                target: "sheet::content",
                path = %path.display(),
                "no upgrade table, using built-in"
            );
            return UpgradeLoader::builtin();
        }
        UpgradeLoader::load(&path)
    }

    /// Load all three catalogs as shared oracles.
    pub fn load_catalogs(&self) -> LoadResult<CatalogSet> {
        Ok(CatalogSet::new(
            Arc::new(self.load_weapons()?),
            Arc::new(self.load_armor()?),
            Arc::new(self.load_upgrades()?),
        ))
    }

    /// Load configuration and catalogs.
    pub fn load(&self) -> LoadResult<ContentBundle> {
        let bundle = ContentBundle {
            config: self.load_config()?,
            catalogs: self.load_catalogs()?,
        };
        debug!(
            target: "sheet::content",
            data_dir = %self.data_dir.display(),
            catalogs = ?bundle.catalogs,
            "loaded content"
        );
        Ok(bundle)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
