//! Aggregation engine.
//!
//! The engine owns the attribute registry and the provider list. A query
//! resolves the attribute's config, computes its base value, invokes every
//! provider, keeps the modifiers that target the attribute, partitions them
//! into bonuses and penalties and totals the result.
//!
//! # Determinism
//!
//! Partitions are stably sorted by (source type, modifier id), so the result
//! does not depend on provider registration order. Queries never mutate the
//! engine; the same engine and snapshot always produce the same breakdown.
mod breakdown;

pub use breakdown::AttributeModifiers;

use std::sync::Arc;

use tracing::trace;

use crate::attributes::{Attribute, AttributeCategory, AttributeConfig, AttributeRegistry};
use crate::catalog::CatalogSet;
use crate::config::SheetConfig;
use crate::error::{AggregationError, Result};
use crate::modifier::{Modifier, ModifierType};
use crate::providers::{
    ArmorProvider, CardProvider, ModifierProvider, UpgradeProvider, WeaponProvider,
};
use crate::state::CharacterState;

/// Computes attribute breakdowns from a character snapshot.
pub struct ModifierEngine {
    registry: AttributeRegistry,
    providers: Vec<Arc<dyn ModifierProvider>>,
}

impl ModifierEngine {
    /// Engine over `registry` with no providers.
    pub fn new(registry: AttributeRegistry) -> Self {
        Self {
            registry,
            providers: Vec::new(),
        }
    }

    pub fn builder() -> ModifierEngineBuilder {
        ModifierEngineBuilder::new()
    }

    /// Standard registry plus the weapon, armor, card and upgrade providers.
    pub fn standard(catalogs: &CatalogSet, config: &SheetConfig) -> Self {
        Self::builder().standard_providers(catalogs, config).build()
    }

    /// Appends a provider. Later queries include its modifiers.
    pub fn register_provider(&mut self, provider: impl ModifierProvider + 'static) {
        self.register_shared_provider(Arc::new(provider));
    }

    pub fn register_shared_provider(&mut self, provider: Arc<dyn ModifierProvider>) {
        trace!(target: "sheet::engine", provider = provider.name(), "registered provider");
        self.providers.push(provider);
    }

    pub fn registry(&self) -> &AttributeRegistry {
        &self.registry
    }

    /// Names of the registered providers, in registration order.
    pub fn provider_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.providers.iter().map(|provider| provider.name())
    }

    /// Breakdown of one attribute.
    ///
    /// # Errors
    ///
    /// [`AggregationError::UnregisteredAttribute`] if the registry has no
    /// config for `attribute`.
    pub fn attribute_modifiers(
        &self,
        attribute: Attribute,
        state: &CharacterState,
    ) -> Result<AttributeModifiers> {
        let config = self
            .registry
            .get(attribute)
            .ok_or(AggregationError::UnregisteredAttribute(attribute))?;

        let active = self.collect(state);
        Ok(Self::breakdown(config, state, &active))
    }

    /// Breakdown of the attribute whose key is `key` (e.g. `"armorValue"`).
    ///
    /// # Errors
    ///
    /// [`AggregationError::UnknownAttribute`] if `key` names no attribute.
    pub fn attribute_modifiers_by_name(
        &self,
        key: &str,
        state: &CharacterState,
    ) -> Result<AttributeModifiers> {
        let attribute: Attribute = key
            .parse()
            .map_err(|_| AggregationError::UnknownAttribute(key.to_string()))?;
        self.attribute_modifiers(attribute, state)
    }

    /// Breakdowns of every registered attribute, in registry order.
    ///
    /// Providers run once for the whole batch.
    pub fn all_attribute_modifiers(&self, state: &CharacterState) -> Vec<AttributeModifiers> {
        let active = self.collect(state);
        self.registry
            .all()
            .iter()
            .map(|config| Self::breakdown(config, state, &active))
            .collect()
    }

    /// Breakdowns of every registered attribute in `category`.
    pub fn category_modifiers(
        &self,
        category: AttributeCategory,
        state: &CharacterState,
    ) -> Vec<AttributeModifiers> {
        let active = self.collect(state);
        self.registry
            .by_category(category)
            .map(|config| Self::breakdown(config, state, &active))
            .collect()
    }

    fn collect(&self, state: &CharacterState) -> Vec<Modifier> {
        let mut active = Vec::new();
        for provider in &self.providers {
            let modifiers = provider.modifiers(state);
            trace!(
                target: "sheet::engine",
                provider = provider.name(),
                count = modifiers.len(),
                "collected modifiers"
            );
            active.extend(modifiers);
        }
        active
    }

    fn breakdown(
        config: &AttributeConfig,
        state: &CharacterState,
        active: &[Modifier],
    ) -> AttributeModifiers {
        let base_value = config.base_value(state);

        let (mut bonuses, mut penalties): (Vec<Modifier>, Vec<Modifier>) = active
            .iter()
            .filter(|modifier| modifier.attribute() == config.key)
            .cloned()
            .partition(|modifier| modifier.modifier_type() == ModifierType::Bonus);

        sort_partition(&mut bonuses);
        sort_partition(&mut penalties);

        let mut breakdown = AttributeModifiers {
            attribute: config.key,
            attribute_label: config.label.to_string(),
            base_value,
            bonuses,
            penalties,
            total: 0,
        };
        breakdown.total = base_value
            .saturating_add(breakdown.bonus_total())
            .saturating_sub(breakdown.penalty_total());

        trace!(
            target: "sheet::engine",
            attribute = %config.key,
            base = base_value,
            bonuses = breakdown.bonuses.len(),
            penalties = breakdown.penalties.len(),
            total = breakdown.total,
            "computed attribute modifiers"
        );

        breakdown
    }
}

fn sort_partition(partition: &mut [Modifier]) {
    partition.sort_by(|a, b| {
        a.source_type()
            .cmp(&b.source_type())
            .then_with(|| a.id().cmp(b.id()))
    });
}

impl Default for ModifierEngine {
    fn default() -> Self {
        Self::new(AttributeRegistry::standard())
    }
}

impl core::fmt::Debug for ModifierEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModifierEngine")
            .field("attributes", &self.registry.len())
            .field("providers", &self.provider_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`ModifierEngine`].
pub struct ModifierEngineBuilder {
    registry: Option<AttributeRegistry>,
    providers: Vec<Arc<dyn ModifierProvider>>,
}

impl ModifierEngineBuilder {
    fn new() -> Self {
        Self {
            registry: None,
            providers: Vec::new(),
        }
    }

    /// Override the attribute registry (standard registry if not set).
    pub fn registry(mut self, registry: AttributeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn provider(mut self, provider: impl ModifierProvider + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    pub fn shared_provider(mut self, provider: Arc<dyn ModifierProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Adds the four built-in providers over `catalogs`.
    pub fn standard_providers(self, catalogs: &CatalogSet, config: &SheetConfig) -> Self {
        self.provider(WeaponProvider::new(Arc::clone(&catalogs.weapons)))
            .provider(ArmorProvider::new(Arc::clone(&catalogs.armor)))
            .provider(CardProvider::new(config))
            .provider(UpgradeProvider::new(Arc::clone(&catalogs.upgrades), config))
    }

    pub fn build(self) -> ModifierEngine {
        let registry = self.registry.unwrap_or_else(AttributeRegistry::standard);
        let mut engine = ModifierEngine::new(registry);
        for provider in self.providers {
            engine.register_shared_provider(provider);
        }
        engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::{ModifierDeclaration, Provenance, SourceType};

    /// Emits a fixed list regardless of state.
    struct FixedProvider(Vec<Modifier>);

    impl ModifierProvider for FixedProvider {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn modifiers(&self, _state: &CharacterState) -> Vec<Modifier> {
            self.0.clone()
        }
    }

    fn modifier(id: &str, source_type: SourceType, declaration: ModifierDeclaration) -> Modifier {
        Modifier::new(
            declaration,
            Provenance {
                id: id.to_string(),
                source_type,
                source_name: id.to_string(),
                source_id: None,
            },
        )
    }

    #[test]
    fn no_providers_yields_base_value() {
        let engine = ModifierEngine::default();
        let mut state = CharacterState::new();
        state.set_base_text(Attribute::Evasion, "10");

        let breakdown = engine.attribute_modifiers(Attribute::Evasion, &state).unwrap();
        assert_eq!(breakdown.base_value, 10);
        assert_eq!(breakdown.total, 10);
        assert_eq!(breakdown.attribute_label, "Evasion");
        assert!(!breakdown.is_modified());
    }

    #[test]
    fn filters_partitions_and_totals() {
        let mut engine = ModifierEngine::default();
        engine.register_provider(FixedProvider(vec![
            modifier("a", SourceType::Armor, ModifierDeclaration::bonus(Attribute::Evasion, 2)),
            modifier("b", SourceType::Weapon, ModifierDeclaration::penalty(Attribute::Evasion, 1)),
            modifier("c", SourceType::Armor, ModifierDeclaration::bonus(Attribute::HpMax, 5)),
        ]));

        let mut state = CharacterState::new();
        state.set_base_text(Attribute::Evasion, "10");

        let breakdown = engine.attribute_modifiers(Attribute::Evasion, &state).unwrap();
        assert_eq!(breakdown.bonuses.len(), 1);
        assert_eq!(breakdown.penalties.len(), 1);
        assert_eq!(breakdown.total, 11);
        assert!(breakdown.modifiers().all(|m| m.attribute() == Attribute::Evasion));
    }

    #[test]
    fn partitions_sorted_by_source_type_then_id() {
        let mut engine = ModifierEngine::default();
        let evasion = || ModifierDeclaration::bonus(Attribute::Evasion, 1);
        engine.register_provider(FixedProvider(vec![
            modifier("upgrade:x:0", SourceType::Upgrade, evasion()),
            modifier("armor:b:0", SourceType::Armor, evasion()),
            modifier("armor:a:0", SourceType::Armor, evasion()),
            modifier("weapon:primary:z:0", SourceType::Weapon, evasion()),
        ]));

        let breakdown = engine
            .attribute_modifiers(Attribute::Evasion, &CharacterState::new())
            .unwrap();
        let ids: Vec<_> = breakdown.bonuses.iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["weapon:primary:z:0", "armor:a:0", "armor:b:0", "upgrade:x:0"]);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let engine = ModifierEngine::default();
        let err = engine
            .attribute_modifiers_by_name("luck", &CharacterState::new())
            .unwrap_err();
        assert_eq!(err, AggregationError::UnknownAttribute("luck".to_string()));
    }

    #[test]
    fn unregistered_attribute_is_rejected() {
        let engine = ModifierEngine::new(AttributeRegistry::new());
        let err = engine
            .attribute_modifiers(Attribute::Evasion, &CharacterState::new())
            .unwrap_err();
        assert!(err.is_unknown_attribute());
        assert!(engine.all_attribute_modifiers(&CharacterState::new()).is_empty());
    }

    #[test]
    fn batch_queries_follow_registry() {
        let engine = ModifierEngine::default();
        let state = CharacterState::new();

        let all = engine.all_attribute_modifiers(&state);
        assert_eq!(all.len(), Attribute::COUNT);
        assert_eq!(all[0].attribute, engine.registry().all()[0].key);

        let resources = engine.category_modifiers(AttributeCategory::Resource, &state);
        assert!(
            resources
                .iter()
                .all(|b| b.attribute.category() == AttributeCategory::Resource)
        );
        assert_eq!(resources.len(), 3);
    }

    #[test]
    fn builder_wires_standard_providers() {
        let engine = ModifierEngine::standard(&CatalogSet::empty(), &SheetConfig::default());
        let names: Vec<_> = engine.provider_names().collect();
        assert_eq!(names, vec!["weapon", "armor", "card", "upgrade"]);
    }
}
