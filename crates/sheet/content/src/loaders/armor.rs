//! Armor catalog loader.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sheet_core::{ArmorCatalog, ArmorDefinition};

use crate::loaders::{LoadResult, read_file, warn_duplicates};

/// Armor catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArmorCatalogRon {
    pub armor: Vec<ArmorDefinition>,
}

/// Loader for the armor catalog from RON files.
pub struct ArmorLoader;

impl ArmorLoader {
    /// Load an armor catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ArmorCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse armor catalog {}", path.display()))
    }

    /// Parse armor catalog RON text.
    pub fn parse(content: &str) -> LoadResult<ArmorCatalog> {
        let catalog: ArmorCatalogRon = ron::from_str(content)?;
        warn_duplicates("armor", catalog.armor.iter().map(|a| a.name.as_str()));
        Ok(catalog.armor.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::{ArmorOracle, ModifierSource, ModifierType};

    #[test]
    fn later_duplicate_wins() {
        let catalog = ArmorLoader::parse(
            r#"(
                armor: [
                    (name: "Plate", modifiers: Some([(attribute: armorValue, type: bonus, value: 2)])),
                    (name: "Plate", modifiers: Some([(attribute: armorValue, type: bonus, value: 3)])),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(catalog.armor_count(), 1);
        let plate = catalog.armor("Plate").unwrap().declarations().unwrap();
        assert_eq!(plate[0].value, 3);
        assert_eq!(plate[0].modifier_type, ModifierType::Bonus);
    }
}
