//! Weapon catalog loader.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sheet_core::{WeaponCatalog, WeaponDefinition};

use crate::loaders::{LoadResult, read_file, warn_duplicates};

/// Weapon catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponCatalogRon {
    pub weapons: Vec<WeaponDefinition>,
}

/// Loader for the weapon catalog from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load a weapon catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<WeaponCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse weapon catalog {}", path.display()))
    }

    /// Parse weapon catalog RON text.
    pub fn parse(content: &str) -> LoadResult<WeaponCatalog> {
        let catalog: WeaponCatalogRon = ron::from_str(content)?;
        warn_duplicates("weapon", catalog.weapons.iter().map(|w| w.name.as_str()));
        Ok(catalog.weapons.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::{Attribute, ModifierSource, WeaponOracle};

    #[test]
    fn parses_weapons_with_and_without_modifiers() {
        let catalog = WeaponLoader::parse(
            r#"(
                weapons: [
                    (
                        name: "Longbow",
                        tier: 1,
                        damage: Some("d8+3"),
                        modifiers: Some([(attribute: evasion, type: penalty, value: 1)]),
                    ),
                    (name: "Dagger"),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(catalog.weapon_count(), 2);
        let longbow = catalog.weapon("Longbow").unwrap();
        assert_eq!(longbow.tier, 1);
        let declarations = longbow.declarations().unwrap();
        assert_eq!(declarations[0].attribute, Attribute::Evasion);
        assert!(catalog.weapon("Dagger").unwrap().declarations().is_none());
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(WeaponLoader::parse("(weapons: [(name: )])").is_err());
    }
}
