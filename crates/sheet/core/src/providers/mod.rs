//! Modifier providers: one per category of character state.
//!
//! Each provider reads one slice of the snapshot plus the catalog injected at
//! construction and emits [`Modifier`]s for the sources that are currently
//! active. Providers never filter by attribute; the engine scopes centrally.
//!
//! # Edge policy
//!
//! - A catalog miss (unknown or renamed entry) contributes nothing for that slot
//! - A source without declarations contributes nothing
//! - Modifier ids are unique within one call: `<source>:<slot/name/id>:<index>`

mod armor;
mod card;
mod upgrade;
mod weapon;

pub use armor::ArmorProvider;
pub use card::CardProvider;
pub use upgrade::UpgradeProvider;
pub use weapon::{WeaponProvider, WeaponSlot};

use crate::modifier::{Modifier, ModifierDeclaration, Provenance, SourceType};
use crate::state::CharacterState;

/// Converts one category of character state into active modifiers.
///
/// Implementations must be pure: the same snapshot always yields the same
/// modifiers in the same order.
pub trait ModifierProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Modifiers for every currently active source this provider covers.
    fn modifiers(&self, state: &CharacterState) -> Vec<Modifier>;
}

/// Provenance shared by every declaration of one active source.
#[derive(Clone, Copy, Debug)]
pub struct SourceRef<'a> {
    /// Id prefix; the declaration index is appended as `:<index>`.
    pub id_prefix: &'a str,
    pub source_type: SourceType,
    pub source_name: &'a str,
    pub source_id: Option<&'a str>,
}

impl<'a> SourceRef<'a> {
    pub fn new(id_prefix: &'a str, source_type: SourceType, source_name: &'a str) -> Self {
        Self {
            id_prefix,
            source_type,
            source_name,
            source_id: None,
        }
    }

    #[must_use]
    pub fn with_source_id(mut self, source_id: Option<&'a str>) -> Self {
        self.source_id = source_id;
        self
    }

    /// Instantiates `declarations` as runtime modifiers tagged with this source.
    pub fn instantiate(
        self,
        declarations: &'a [ModifierDeclaration],
    ) -> impl Iterator<Item = Modifier> + 'a {
        declarations
            .iter()
            .enumerate()
            .map(move |(index, declaration)| {
                Modifier::new(
                    declaration.clone(),
                    Provenance {
                        id: format!("{}:{}", self.id_prefix, index),
                        source_type: self.source_type,
                        source_name: self.source_name.to_string(),
                        source_id: self.source_id.map(str::to_string),
                    },
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attribute;

    #[test]
    fn instantiate_appends_index_and_copies_provenance() {
        let declarations = vec![
            ModifierDeclaration::bonus(Attribute::Evasion, 1),
            ModifierDeclaration::penalty(Attribute::Agility, 1).with_description("Heavy"),
        ];
        let modifiers: Vec<_> = SourceRef::new("armor:Chainmail", SourceType::Armor, "Chainmail")
            .with_source_id(Some("chainmail"))
            .instantiate(&declarations)
            .collect();

        assert_eq!(modifiers.len(), 2);
        assert_eq!(modifiers[0].id(), "armor:Chainmail:0");
        assert_eq!(modifiers[1].id(), "armor:Chainmail:1");
        assert_eq!(modifiers[1].declaration.description.as_deref(), Some("Heavy"));
        assert_eq!(modifiers[1].provenance.source_id.as_deref(), Some("chainmail"));
        assert!(modifiers.iter().all(|m| m.source_type() == SourceType::Armor));
    }
}
