//! Modifier declarations and their runtime, provenance-tagged instances.
//!
//! A [`ModifierDeclaration`] is authored data that sits next to a catalog entry
//! (weapon, armor piece, card, upgrade group). When the entry's source is active
//! in the character snapshot, a provider turns each declaration into a
//! [`Modifier`] that also records where it came from.

use crate::attributes::Attribute;

/// Whether a modifier adds to or subtracts from the base value.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
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
pub enum ModifierType {
    Bonus,
    Penalty,
}

/// Kind of source a modifier was produced from.
///
/// The declaration order is the order sources appear in a breakdown.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
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
pub enum SourceType {
    Weapon,
    Armor,
    Card,
    Upgrade,
    /// Contributed by a provider registered at runtime by a collaborator.
    Other,
}

/// One authored effect on one attribute. Immutable catalog data.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ModifierDeclaration {
    pub attribute: Attribute,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub modifier_type: ModifierType,
    /// Magnitude; the sign comes from `modifier_type`.
    pub value: i32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
}

impl ModifierDeclaration {
    pub fn new(attribute: Attribute, modifier_type: ModifierType, value: i32) -> Self {
        Self {
            attribute,
            modifier_type,
            value,
            description: None,
        }
    }

    pub fn bonus(attribute: Attribute, value: i32) -> Self {
        Self::new(attribute, ModifierType::Bonus, value)
    }

    pub fn penalty(attribute: Attribute, value: i32) -> Self {
        Self::new(attribute, ModifierType::Penalty, value)
    }

    /// Attaches a description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Value with the sign applied: positive for bonuses, negative for penalties.
    pub fn signed_value(&self) -> i32 {
        match self.modifier_type {
            ModifierType::Bonus => self.value,
            ModifierType::Penalty => -self.value,
        }
    }
}

/// Where a runtime modifier came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Provenance {
    /// Unique within one computation pass; stable list key for the UI.
    pub id: String,
    pub source_type: SourceType,
    pub source_name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub source_id: Option<String>,
}

/// A declaration instantiated for an active source.
///
/// Created fresh on every computation and owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Modifier {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub declaration: ModifierDeclaration,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub provenance: Provenance,
}

impl Modifier {
    pub fn new(declaration: ModifierDeclaration, provenance: Provenance) -> Self {
        Self {
            declaration,
            provenance,
        }
    }

    pub fn id(&self) -> &str {
        &self.provenance.id
    }

    pub fn attribute(&self) -> Attribute {
        self.declaration.attribute
    }

    pub fn modifier_type(&self) -> ModifierType {
        self.declaration.modifier_type
    }

    pub fn value(&self) -> i32 {
        self.declaration.value
    }

    pub fn source_type(&self) -> SourceType {
        self.provenance.source_type
    }

    pub fn source_name(&self) -> &str {
        &self.provenance.source_name
    }

    pub fn is_bonus(&self) -> bool {
        self.declaration.modifier_type == ModifierType::Bonus
    }
}

/// Capability shared by every catalog entry that may carry declarations.
///
/// Weapons, armor, cards and upgrade groups are unrelated types; they only
/// agree on exposing an optional declaration list.
pub trait ModifierSource {
    /// Display name used as provenance.
    fn source_name(&self) -> &str;

    /// Authored declarations, or `None` when the entry declares nothing.
    fn declarations(&self) -> Option<&[ModifierDeclaration]> {
        None
    }
}
