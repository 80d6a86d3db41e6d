//! Shared fixtures: a small in-memory catalog set and snapshot helpers.
#![allow(dead_code)]

use std::sync::Arc;

use sheet_core::{
    ArmorCatalog, ArmorDefinition, Attribute, Card, CardKind, CatalogSet, CharacterState,
    ModifierDeclaration, ModifierEngine, SheetConfig, UpgradeEffect, UpgradeEffectsTable,
    WeaponCatalog, WeaponDefinition,
};

pub fn weapons() -> WeaponCatalog {
    [
        WeaponDefinition::new("Longbow")
            .with_modifiers(vec![ModifierDeclaration::penalty(Attribute::Evasion, 1)]),
        WeaponDefinition::new("Round Shield")
            .with_modifiers(vec![ModifierDeclaration::bonus(Attribute::ArmorValue, 1)]),
        WeaponDefinition::new("Greatsword").with_modifiers(vec![
            ModifierDeclaration::penalty(Attribute::Evasion, 1),
            ModifierDeclaration::bonus(Attribute::MajorThreshold, 1),
        ]),
        WeaponDefinition::new("Dagger"),
    ]
    .into_iter()
    .collect()
}

pub fn armor() -> ArmorCatalog {
    [
        ArmorDefinition::new("Plate")
            .with_modifiers(vec![ModifierDeclaration::bonus(Attribute::ArmorValue, 3)]),
        ArmorDefinition::new("Gambeson")
            .with_modifiers(vec![ModifierDeclaration::bonus(Attribute::Evasion, 1)]),
        ArmorDefinition::new("Leather"),
    ]
    .into_iter()
    .collect()
}

pub fn upgrades() -> UpgradeEffectsTable {
    [
        UpgradeEffect::new(
            "tier1-5-0",
            "+1 to Evasion",
            vec![ModifierDeclaration::bonus(Attribute::Evasion, 1)],
        ),
        UpgradeEffect::new(
            "tier1-3-0",
            "+1 to Hit Point slots",
            vec![ModifierDeclaration::bonus(Attribute::HpMax, 1)],
        ),
    ]
    .into_iter()
    .collect()
}

pub fn catalogs() -> CatalogSet {
    CatalogSet::new(Arc::new(weapons()), Arc::new(armor()), Arc::new(upgrades()))
}

pub fn engine() -> ModifierEngine {
    ModifierEngine::standard(&catalogs(), &SheetConfig::default())
}

/// Snapshot with evasion base "10" and nothing active.
pub fn base_state() -> CharacterState {
    let mut state = CharacterState::new();
    state.set_base_text(Attribute::Evasion, "10");
    state.set_base_text(Attribute::ArmorValue, "0");
    state.set_base_text(Attribute::HpMax, "6");
    state
}

/// Snapshot with something active in every provider's slice.
pub fn loaded_state() -> CharacterState {
    let mut state = base_state();
    state.equip_primary("Greatsword");
    state.equip_secondary("Round Shield");
    state.equip_armor("Gambeson");
    state.focus_card(
        0,
        Card::new("Bolt Beacon", CardKind::Domain)
            .with_modifiers(vec![ModifierDeclaration::bonus(Attribute::Evasion, 2)]),
    );
    state.focus_card(
        2,
        Card::new("Guardian", CardKind::Profession).with_legacy_stats(Some(1), Some(2)),
    );
    state.set_upgrade_option("tier1-5-0", "0", true);
    state.set_upgrade_option("tier1-3-0", "0", true);
    state
}
