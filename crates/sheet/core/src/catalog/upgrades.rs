//! Upgrade-effects lookup table keyed by upgrade group id.
use std::collections::BTreeMap;

use super::UpgradeOracle;
use crate::modifier::{ModifierDeclaration, ModifierSource};

/// Declarations granted by one upgrade group once any of its options is checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct UpgradeEffect {
    pub group_id: String,
    /// Display name, e.g. "+1 to Evasion".
    pub name: String,
    pub modifiers: Vec<ModifierDeclaration>,
}

impl UpgradeEffect {
    pub fn new(
        group_id: impl Into<String>,
        name: impl Into<String>,
        modifiers: Vec<ModifierDeclaration>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            name: name.into(),
            modifiers,
        }
    }
}

impl ModifierSource for UpgradeEffect {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn declarations(&self) -> Option<&[ModifierDeclaration]> {
        if self.modifiers.is_empty() {
            None
        } else {
            Some(&self.modifiers)
        }
    }
}

/// In-memory [`UpgradeOracle`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpgradeEffectsTable {
    effects: BTreeMap<String, UpgradeEffect>,
}

impl UpgradeEffectsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an effect, returning the one it replaced for the same group.
    pub fn insert(&mut self, effect: UpgradeEffect) -> Option<UpgradeEffect> {
        self.effects.insert(effect.group_id.clone(), effect)
    }

    /// Effects in group-id order.
    pub fn iter(&self) -> impl Iterator<Item = &UpgradeEffect> + '_ {
        self.effects.values()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl FromIterator<UpgradeEffect> for UpgradeEffectsTable {
    fn from_iter<I: IntoIterator<Item = UpgradeEffect>>(iter: I) -> Self {
        let mut table = Self::new();
        for effect in iter {
            table.insert(effect);
        }
        table
    }
}

impl UpgradeOracle for UpgradeEffectsTable {
    fn effect(&self, group_id: &str) -> Option<&UpgradeEffect> {
        self.effects.get(group_id)
    }

    fn effect_count(&self) -> usize {
        self.len()
    }
}
