//! Card provider: focused ability cards.
use super::{ModifierProvider, SourceRef};
use crate::config::SheetConfig;
use crate::modifier::{Modifier, ModifierSource, SourceType};
use crate::state::{Card, CharacterState};

/// Emits the declarations of every non-empty focused card.
///
/// Cards authored in the current format carry `modifiers`. Older profession
/// cards only carry starting evasion / starting HP; those are converted by
/// [`legacy::profession_declarations`], and only when `modifiers` is absent.
pub struct CardProvider {
    slots: usize,
}

impl CardProvider {
    pub fn new(config: &SheetConfig) -> Self {
        Self {
            slots: config.focused_card_slots,
        }
    }
}

impl Default for CardProvider {
    fn default() -> Self {
        Self::new(&SheetConfig::default())
    }
}

impl ModifierProvider for CardProvider {
    fn name(&self) -> &'static str {
        "card"
    }

    fn modifiers(&self, state: &CharacterState) -> Vec<Modifier> {
        let mut modifiers = Vec::new();

        for (slot, card) in state.focused_cards.iter().take(self.slots).enumerate() {
            let Some(card) = card.as_ref().filter(|card| !card.is_placeholder()) else {
                continue;
            };

            let id_prefix = format!("card:{}:{}", slot, card.key());
            let source = SourceRef::new(&id_prefix, SourceType::Card, card.source_name())
                .with_source_id(card.id.as_deref());

            match card.declarations() {
                Some(declarations) => modifiers.extend(source.instantiate(declarations)),
                None => {
                    let declarations = legacy::profession_declarations(card);
                    modifiers.extend(source.instantiate(&declarations));
                }
            }
        }

        modifiers
    }
}

mod legacy {
    use super::Card;
    use crate::attributes::Attribute;
    use crate::modifier::ModifierDeclaration;
    use crate::state::CardKind;

    /// Bonus declarations equivalent to a legacy profession card's named fields.
    pub(super) fn profession_declarations(card: &Card) -> Vec<ModifierDeclaration> {
        if card.kind != CardKind::Profession {
            return Vec::new();
        }

        [
            (Attribute::Evasion, card.starting_evasion),
            (Attribute::HpMax, card.starting_hp),
        ]
        .into_iter()
        .filter_map(|(attribute, value)| value.map(|v| ModifierDeclaration::bonus(attribute, v)))
        .collect()
    }
}
