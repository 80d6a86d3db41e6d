//! Ability cards as they appear in the focused-card slots.

use crate::modifier::{ModifierDeclaration, ModifierSource};

/// Card type discriminator.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CardKind {
    #[default]
    Domain,
    Ancestry,
    Community,
    Profession,
    Subclass,
}

/// A card held in one focused slot.
///
/// `modifiers` is the current authoring format. Profession cards authored
/// before it existed carry `starting_evasion` / `starting_hp` instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Card {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub id: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: CardKind,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub modifiers: Option<Vec<ModifierDeclaration>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub starting_evasion: Option<i32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub starting_hp: Option<i32>,
}

impl Card {
    pub fn new(name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Vec<ModifierDeclaration>) -> Self {
        self.modifiers = Some(modifiers);
        self
    }

    /// Sets the legacy profession fields.
    #[must_use]
    pub fn with_legacy_stats(
        mut self,
        starting_evasion: Option<i32>,
        starting_hp: Option<i32>,
    ) -> Self {
        self.starting_evasion = starting_evasion;
        self.starting_hp = starting_hp;
        self
    }

    /// An empty slot marker: a card with no name.
    pub fn is_placeholder(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Identifier used in modifier ids and provenance: the id if any, else the name.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

impl ModifierSource for Card {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn declarations(&self) -> Option<&[ModifierDeclaration]> {
        self.modifiers.as_deref()
    }
}
