//! Traits describing read-only catalog data.
//!
//! Oracles expose the static weapon, armor and upgrade-effect tables authored
//! alongside the game content. Providers receive them at construction, so the
//! engine never reaches into global tables and tests can substitute fakes.
mod equipment;
mod upgrades;

pub use equipment::{
    ArmorCatalog, ArmorDefinition, NamedCatalog, WeaponCatalog, WeaponDefinition,
};
pub use upgrades::{UpgradeEffect, UpgradeEffectsTable};

use std::sync::Arc;

/// Weapon lookup by exact name.
pub trait WeaponOracle: Send + Sync {
    fn weapon(&self, name: &str) -> Option<&WeaponDefinition>;

    /// Number of weapons known to this oracle.
    fn weapon_count(&self) -> usize;
}

/// Armor lookup by exact name.
pub trait ArmorOracle: Send + Sync {
    fn armor(&self, name: &str) -> Option<&ArmorDefinition>;

    /// Number of armor pieces known to this oracle.
    fn armor_count(&self) -> usize;
}

/// Upgrade-effect lookup by upgrade group id.
pub trait UpgradeOracle: Send + Sync {
    fn effect(&self, group_id: &str) -> Option<&UpgradeEffect>;

    /// Number of upgrade groups that declare effects.
    fn effect_count(&self) -> usize;
}

/// Bundles the catalogs the built-in providers read.
#[derive(Clone)]
pub struct CatalogSet {
    pub weapons: Arc<dyn WeaponOracle>,
    pub armor: Arc<dyn ArmorOracle>,
    pub upgrades: Arc<dyn UpgradeOracle>,
}

impl CatalogSet {
    pub fn new(
        weapons: Arc<dyn WeaponOracle>,
        armor: Arc<dyn ArmorOracle>,
        upgrades: Arc<dyn UpgradeOracle>,
    ) -> Self {
        Self {
            weapons,
            armor,
            upgrades,
        }
    }

    /// Catalogs with no entries: every lookup misses.
    pub fn empty() -> Self {
        Self::new(
            Arc::new(WeaponCatalog::new()),
            Arc::new(ArmorCatalog::new()),
            Arc::new(UpgradeEffectsTable::new()),
        )
    }
}

impl Default for CatalogSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl core::fmt::Debug for CatalogSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CatalogSet")
            .field("weapons", &self.weapons.weapon_count())
            .field("armor", &self.armor.armor_count())
            .field("upgrades", &self.upgrades.effect_count())
            .finish()
    }
}
