//! Derived-attribute aggregation for character sheets.
//!
//! `sheet-core` turns a read-only [`state::CharacterState`] snapshot into a
//! per-attribute breakdown: base value, every active bonus and penalty with its
//! provenance, and the final total. Equipment, focused cards and purchased
//! upgrades are translated into modifiers by [`providers::ModifierProvider`]s
//! and combined by [`engine::ModifierEngine`]. Catalog data reaches providers
//! through the oracle traits in [`catalog`], never through global tables.
pub mod attributes;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod modifier;
pub mod providers;
pub mod state;

pub use attributes::{
    Attribute, AttributeCategory, AttributeConfig, AttributeRegistry, BaseValueGetter,
    parse_base_value,
};
pub use catalog::{
    ArmorCatalog, ArmorDefinition, ArmorOracle, CatalogSet, NamedCatalog, UpgradeEffect,
    UpgradeEffectsTable, UpgradeOracle, WeaponCatalog, WeaponDefinition, WeaponOracle,
};
pub use config::SheetConfig;
pub use engine::{AttributeModifiers, ModifierEngine, ModifierEngineBuilder};
pub use error::{AggregationError, ErrorSeverity, Result, SheetError};
pub use modifier::{
    Modifier, ModifierDeclaration, ModifierSource, ModifierType, Provenance, SourceType,
};
pub use providers::{
    ArmorProvider, CardProvider, ModifierProvider, SourceRef, UpgradeProvider, WeaponProvider,
    WeaponSlot,
};
pub use state::{Card, CardKind, CharacterState, TraitScores, UpgradeSelection};
