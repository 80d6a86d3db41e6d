//! Weapon and armor definitions plus in-memory catalogs keyed by name.
use std::collections::BTreeMap;

use super::{ArmorOracle, WeaponOracle};
use crate::modifier::{ModifierDeclaration, ModifierSource};

/// Weapon catalog entry.
///
/// Display data (`tier`, `damage`, `feature`) is carried for presentation
/// layers; the engine only reads `modifiers`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WeaponDefinition {
    pub name: String,
    /// 0 when unspecified.
    pub tier: u8,
    pub damage: Option<String>,
    pub feature: Option<String>,
    pub modifiers: Option<Vec<ModifierDeclaration>>,
}

impl WeaponDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Vec<ModifierDeclaration>) -> Self {
        self.modifiers = Some(modifiers);
        self
    }
}

impl ModifierSource for WeaponDefinition {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn declarations(&self) -> Option<&[ModifierDeclaration]> {
        self.modifiers.as_deref()
    }
}

/// Armor catalog entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ArmorDefinition {
    pub name: String,
    pub tier: u8,
    pub feature: Option<String>,
    pub modifiers: Option<Vec<ModifierDeclaration>>,
}

impl ArmorDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Vec<ModifierDeclaration>) -> Self {
        self.modifiers = Some(modifiers);
        self
    }
}

impl ModifierSource for ArmorDefinition {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn declarations(&self) -> Option<&[ModifierDeclaration]> {
        self.modifiers.as_deref()
    }
}

/// In-memory catalog keyed by each entry's exact name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedCatalog<T> {
    entries: BTreeMap<String, T>,
}

pub type WeaponCatalog = NamedCatalog<WeaponDefinition>;
pub type ArmorCatalog = NamedCatalog<ArmorDefinition>;

impl<T: ModifierSource> NamedCatalog<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Adds an entry, returning the one it replaced under the same name.
    pub fn insert(&mut self, entry: T) -> Option<T> {
        self.entries.insert(entry.source_name().to_string(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ModifierSource> Default for NamedCatalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ModifierSource> FromIterator<T> for NamedCatalog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

impl WeaponOracle for WeaponCatalog {
    fn weapon(&self, name: &str) -> Option<&WeaponDefinition> {
        self.get(name)
    }

    fn weapon_count(&self) -> usize {
        self.len()
    }
}

impl ArmorOracle for ArmorCatalog {
    fn armor(&self, name: &str) -> Option<&ArmorDefinition> {
        self.get(name)
    }

    fn armor_count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attribute;

    #[test]
    fn lookup_is_exact() {
        let catalog: WeaponCatalog = [
            WeaponDefinition::new("Longbow")
                .with_modifiers(vec![ModifierDeclaration::penalty(Attribute::Evasion, 1)]),
            WeaponDefinition::new("Dagger"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.weapon_count(), 2);
        assert!(catalog.weapon("Longbow").is_some());
        assert!(catalog.weapon("longbow").is_none());
        assert!(catalog.weapon("Longbow ").is_none());
        assert!(catalog.weapon("Dagger").unwrap().declarations().is_none());
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut catalog = ArmorCatalog::new();
        assert!(catalog.insert(ArmorDefinition::new("Plate")).is_none());
        let replaced = catalog.insert(
            ArmorDefinition::new("Plate")
                .with_modifiers(vec![ModifierDeclaration::bonus(Attribute::ArmorValue, 3)]),
        );
        assert!(replaced.is_some());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.armor("Plate").unwrap().declarations().unwrap().len(), 1);
    }
}
