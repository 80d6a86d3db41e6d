//! Read-only character-state snapshot consumed by providers.
//!
//! The snapshot is owned and mutated by the sheet (an external collaborator).
//! The engine only borrows it for the duration of one query.
//!
//! Base values are kept as the text the user typed. Parsing happens in the
//! attribute registry, never here.

mod card;

pub use card::{Card, CardKind};

use std::collections::BTreeMap;

use crate::attributes::Attribute;

/// Checked flags of one upgrade group, keyed by option index.
pub type UpgradeSelection = BTreeMap<String, bool>;

/// Stored text of the six character traits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct TraitScores {
    pub agility: String,
    pub strength: String,
    pub finesse: String,
    pub instinct: String,
    pub presence: String,
    pub knowledge: String,
}

/// Everything the providers and the registry read from a character sheet.
///
/// Ordered maps keep upgrade iteration deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct CharacterState {
    // Stored base-value text
    pub evasion: String,
    pub armor_value: String,
    pub major_threshold: String,
    pub severe_threshold: String,
    pub proficiency: String,
    pub hp_max: String,
    pub stress_max: String,
    pub hope_max: String,
    pub traits: TraitScores,

    // Equipment slots, empty string = nothing equipped
    pub primary_weapon: String,
    pub secondary_weapon: String,
    pub armor: String,

    /// Focused card slots in display order. `None` is an empty placeholder.
    pub focused_cards: Vec<Option<Card>>,

    /// Upgrade group id → option index → checked.
    pub upgrades: BTreeMap<String, UpgradeSelection>,
}

impl CharacterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored base-value text for an attribute.
    pub fn base_text(&self, attribute: Attribute) -> &str {
        use Attribute::*;
        match attribute {
            Evasion => &self.evasion,
            ArmorValue => &self.armor_value,
            MajorThreshold => &self.major_threshold,
            SevereThreshold => &self.severe_threshold,
            Proficiency => &self.proficiency,
            HpMax => &self.hp_max,
            StressMax => &self.stress_max,
            HopeMax => &self.hope_max,
            Agility => &self.traits.agility,
            Strength => &self.traits.strength,
            Finesse => &self.traits.finesse,
            Instinct => &self.traits.instinct,
            Presence => &self.traits.presence,
            Knowledge => &self.traits.knowledge,
        }
    }

    /// Overwrites the stored base-value text for an attribute.
    pub fn set_base_text(&mut self, attribute: Attribute, text: impl Into<String>) {
        use Attribute::*;
        let slot = match attribute {
            Evasion => &mut self.evasion,
            ArmorValue => &mut self.armor_value,
            MajorThreshold => &mut self.major_threshold,
            SevereThreshold => &mut self.severe_threshold,
            Proficiency => &mut self.proficiency,
            HpMax => &mut self.hp_max,
            StressMax => &mut self.stress_max,
            HopeMax => &mut self.hope_max,
            Agility => &mut self.traits.agility,
            Strength => &mut self.traits.strength,
            Finesse => &mut self.traits.finesse,
            Instinct => &mut self.traits.instinct,
            Presence => &mut self.traits.presence,
            Knowledge => &mut self.traits.knowledge,
        };
        *slot = text.into();
    }

    /// Equips a primary weapon, returning the previous name.
    pub fn equip_primary(&mut self, name: impl Into<String>) -> String {
        std::mem::replace(&mut self.primary_weapon, name.into())
    }

    /// Equips a secondary weapon, returning the previous name.
    pub fn equip_secondary(&mut self, name: impl Into<String>) -> String {
        std::mem::replace(&mut self.secondary_weapon, name.into())
    }

    /// Equips armor, returning the previous name.
    pub fn equip_armor(&mut self, name: impl Into<String>) -> String {
        std::mem::replace(&mut self.armor, name.into())
    }

    pub fn unequip_primary(&mut self) -> String {
        std::mem::take(&mut self.primary_weapon)
    }

    pub fn unequip_secondary(&mut self) -> String {
        std::mem::take(&mut self.secondary_weapon)
    }

    pub fn unequip_armor(&mut self) -> String {
        std::mem::take(&mut self.armor)
    }

    /// Places a card in a focused slot, growing the slot list with placeholders
    /// if needed. Returns the card previously in that slot.
    pub fn focus_card(&mut self, slot: usize, card: Card) -> Option<Card> {
        if self.focused_cards.len() <= slot {
            self.focused_cards.resize(slot + 1, None);
        }
        self.focused_cards[slot].replace(card)
    }

    /// Empties a focused slot, leaving a placeholder in place.
    pub fn clear_card_slot(&mut self, slot: usize) -> Option<Card> {
        self.focused_cards.get_mut(slot).and_then(Option::take)
    }

    /// Sets one checkbox of an upgrade group.
    pub fn set_upgrade_option(
        &mut self,
        group_id: impl Into<String>,
        option: impl Into<String>,
        checked: bool,
    ) {
        self.upgrades
            .entry(group_id.into())
            .or_default()
            .insert(option.into(), checked);
    }
}
