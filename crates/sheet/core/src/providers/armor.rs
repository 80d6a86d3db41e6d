//! Armor provider: the single armor slot.
use std::sync::Arc;

use tracing::debug;

use super::{ModifierProvider, SourceRef};
use crate::catalog::ArmorOracle;
use crate::modifier::{Modifier, ModifierSource, SourceType};
use crate::state::CharacterState;

/// Emits the declarations of the equipped armor, looked up by exact name.
pub struct ArmorProvider {
    catalog: Arc<dyn ArmorOracle>,
}

impl ArmorProvider {
    pub fn new(catalog: Arc<dyn ArmorOracle>) -> Self {
        Self { catalog }
    }
}

impl ModifierProvider for ArmorProvider {
    fn name(&self) -> &'static str {
        "armor"
    }

    fn modifiers(&self, state: &CharacterState) -> Vec<Modifier> {
        let name = state.armor.as_str();
        if name.trim().is_empty() {
            return Vec::new();
        }

        let Some(armor) = self.catalog.armor(name) else {
            debug!(target: "sheet::providers", armor = name, "equipped armor not in catalog");
            return Vec::new();
        };
        let Some(declarations) = armor.declarations() else {
            return Vec::new();
        };

        let id_prefix = format!("armor:{}", armor.source_name());
        SourceRef::new(&id_prefix, SourceType::Armor, armor.source_name())
            .instantiate(declarations)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attribute;
    use crate::catalog::{ArmorCatalog, ArmorDefinition};
    use crate::modifier::ModifierDeclaration;

    fn provider() -> ArmorProvider {
        let catalog: ArmorCatalog = [
            ArmorDefinition::new("Plate")
                .with_modifiers(vec![ModifierDeclaration::bonus(Attribute::ArmorValue, 3)]),
            ArmorDefinition::new("Full Plate").with_modifiers(vec![
                ModifierDeclaration::bonus(Attribute::ArmorValue, 4),
                ModifierDeclaration::penalty(Attribute::Evasion, 2),
                ModifierDeclaration::penalty(Attribute::Agility, 1),
            ]),
        ]
        .into_iter()
        .collect();
        ArmorProvider::new(Arc::new(catalog))
    }

    #[test]
    fn equipped_armor_contributes_all_declarations() {
        let mut state = CharacterState::new();
        state.equip_armor("Full Plate");

        let modifiers = provider().modifiers(&state);
        let ids: Vec<_> = modifiers.iter().map(|m| m.id()).collect();
        assert_eq!(
            ids,
            vec!["armor:Full Plate:0", "armor:Full Plate:1", "armor:Full Plate:2"]
        );
        assert!(modifiers.iter().all(|m| m.source_type() == SourceType::Armor));
    }

    #[test]
    fn unequipped_or_unknown_armor_contributes_nothing() {
        let mut state = CharacterState::new();
        assert!(provider().modifiers(&state).is_empty());

        state.equip_armor("Leather");
        assert!(provider().modifiers(&state).is_empty());

        state.equip_armor("Plate");
        assert_eq!(provider().modifiers(&state).len(), 1);
        state.unequip_armor();
        assert!(provider().modifiers(&state).is_empty());
    }
}
