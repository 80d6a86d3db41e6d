/// Tunable parameters of the sheet layout the providers depend on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SheetConfig {
    /// Number of focused-card slots read by the card provider. Slots past this
    /// count are ignored.
    pub focused_card_slots: usize,

    /// Top-level keys of the upgrade map that group tiers rather than name an
    /// upgrade. Never treated as upgrade groups.
    pub tier_structure_keys: Vec<String>,
}

impl SheetConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FOCUSED_CARD_SLOTS: usize = 5;
    pub const DEFAULT_TIER_STRUCTURE_KEYS: [&'static str; 3] = ["tier1", "tier2", "tier3"];

    pub fn new() -> Self {
        Self {
            focused_card_slots: Self::DEFAULT_FOCUSED_CARD_SLOTS,
            tier_structure_keys: Self::DEFAULT_TIER_STRUCTURE_KEYS
                .iter()
                .map(|key| key.to_string())
                .collect(),
        }
    }

    pub fn with_focused_card_slots(mut self, slots: usize) -> Self {
        self.focused_card_slots = slots;
        self
    }

    /// True if `key` is tier scaffolding in the upgrade map.
    pub fn is_tier_structure_key(&self, key: &str) -> bool {
        self.tier_structure_keys.iter().any(|k| k == key)
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SheetConfig::default();
        assert_eq!(config.focused_card_slots, 5);
        assert!(config.is_tier_structure_key("tier2"));
        assert!(!config.is_tier_structure_key("tier1-5-0"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: SheetConfig = serde_json::from_str(r#"{"focused_card_slots": 3}"#).unwrap();
        assert_eq!(config.focused_card_slots, 3);
        assert_eq!(config.tier_structure_keys.len(), 3);
    }
}
