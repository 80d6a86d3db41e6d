//! Static attribute table: label, category and base-value rule per attribute.

use tracing::debug;

use super::{Attribute, AttributeCategory};
use crate::state::CharacterState;

/// Reads an attribute's base value from the snapshot.
///
/// Must be pure and total: malformed stored data yields a number, never a panic.
pub type BaseValueGetter = fn(&CharacterState) -> i32;

/// Registration entry for one attribute.
#[derive(Clone, Copy, Debug)]
pub struct AttributeConfig {
    pub key: Attribute,
    pub label: &'static str,
    pub category: AttributeCategory,
    pub base_value_getter: BaseValueGetter,
}

impl AttributeConfig {
    pub fn new(
        key: Attribute,
        label: &'static str,
        category: AttributeCategory,
        base_value_getter: BaseValueGetter,
    ) -> Self {
        Self {
            key,
            label,
            category,
            base_value_getter,
        }
    }

    /// Base value of this attribute for the given snapshot.
    pub fn base_value(&self, state: &CharacterState) -> i32 {
        (self.base_value_getter)(state)
    }
}

/// Parses stored base-value text.
///
/// Accepts an optional sign and decimal digits surrounded by whitespace.
/// Anything else (empty text, dice notation, overflow) is 0. Evaluating richer
/// expressions is left to the sheet.
///
/// ```
/// # use sheet_core::attributes::parse_base_value;
/// assert_eq!(parse_base_value(" 10 "), 10);
/// assert_eq!(parse_base_value("-2"), -2);
/// assert_eq!(parse_base_value("1d6"), 0);
/// ```
pub fn parse_base_value(text: &str) -> i32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.parse().unwrap_or_else(|_| {
        debug!(
            target: "sheet::attributes",
            text = trimmed,
            "unparseable base value, using 0"
        );
        0
    })
}

/// Table of attribute configurations, in registration order.
#[derive(Clone, Debug, Default)]
pub struct AttributeRegistry {
    entries: Vec<AttributeConfig>,
}

impl AttributeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in attribute: combat, then resource, then stat.
    pub fn standard() -> Self {
        use Attribute::*;
        use AttributeCategory::{Combat, Resource, Stat};

        let mut registry = Self::new();
        let entries: [AttributeConfig; Attribute::COUNT] = [
            AttributeConfig::new(Evasion, "Evasion", Combat, |s| {
                parse_base_value(&s.evasion)
            }),
            AttributeConfig::new(ArmorValue, "Armor Value", Combat, |s| {
                parse_base_value(&s.armor_value)
            }),
            AttributeConfig::new(MajorThreshold, "Major Threshold", Combat, |s| {
                parse_base_value(&s.major_threshold)
            }),
            AttributeConfig::new(SevereThreshold, "Severe Threshold", Combat, |s| {
                parse_base_value(&s.severe_threshold)
            }),
            AttributeConfig::new(Proficiency, "Proficiency", Combat, |s| {
                parse_base_value(&s.proficiency)
            }),
            AttributeConfig::new(HpMax, "Max HP", Resource, |s| {
                parse_base_value(&s.hp_max)
            }),
            AttributeConfig::new(StressMax, "Max Stress", Resource, |s| {
                parse_base_value(&s.stress_max)
            }),
            AttributeConfig::new(HopeMax, "Max Hope", Resource, |s| {
                parse_base_value(&s.hope_max)
            }),
            AttributeConfig::new(Agility, "Agility", Stat, |s| {
                parse_base_value(&s.traits.agility)
            }),
            AttributeConfig::new(Strength, "Strength", Stat, |s| {
                parse_base_value(&s.traits.strength)
            }),
            AttributeConfig::new(Finesse, "Finesse", Stat, |s| {
                parse_base_value(&s.traits.finesse)
            }),
            AttributeConfig::new(Instinct, "Instinct", Stat, |s| {
                parse_base_value(&s.traits.instinct)
            }),
            AttributeConfig::new(Presence, "Presence", Stat, |s| {
                parse_base_value(&s.traits.presence)
            }),
            AttributeConfig::new(Knowledge, "Knowledge", Stat, |s| {
                parse_base_value(&s.traits.knowledge)
            }),
        ];
        for entry in entries {
            registry.register(entry);
        }
        registry
    }

    /// Adds a configuration, replacing any existing entry for the same key in place.
    pub fn register(&mut self, config: AttributeConfig) {
        match self.entries.iter_mut().find(|e| e.key == config.key) {
            Some(existing) => *existing = config,
            None => self.entries.push(config),
        }
    }

    /// Configuration for `attribute`, if registered.
    pub fn get(&self, attribute: Attribute) -> Option<&AttributeConfig> {
        self.entries.iter().find(|e| e.key == attribute)
    }

    /// All configurations in registration order.
    pub fn all(&self) -> &[AttributeConfig] {
        &self.entries
    }

    /// Configurations in one category, in registration order.
    pub fn by_category(
        &self,
        category: AttributeCategory,
    ) -> impl Iterator<Item = &AttributeConfig> + '_ {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
