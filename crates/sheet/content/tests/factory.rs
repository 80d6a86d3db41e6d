//! Loads content directories end to end and runs the standard engine over them.
use std::fs;

use sheet_content::ContentFactory;
use sheet_core::{Attribute, CharacterState, SheetConfig};
use tempfile::TempDir;

const WEAPONS: &str = r#"(
    weapons: [
        (name: "Longbow", modifiers: Some([(attribute: evasion, type: penalty, value: 1)])),
    ],
)"#;

const ARMOR: &str = r#"(
    armor: [
        (name: "Plate", modifiers: Some([(attribute: armorValue, type: bonus, value: 3)])),
    ],
)"#;

fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("weapons.ron"), WEAPONS).expect("write weapons");
    fs::write(dir.path().join("armor.ron"), ARMOR).expect("write armor");
    dir
}

#[test]
fn optional_files_fall_back_to_defaults() {
    let dir = data_dir();
    let bundle = ContentFactory::new(dir.path()).load().expect("content loads");

    assert_eq!(bundle.config, SheetConfig::default());
    assert_eq!(bundle.catalogs.weapons.weapon_count(), 1);
    assert_eq!(bundle.catalogs.armor.armor_count(), 1);
    assert!(bundle.catalogs.upgrades.effect("tier1-5-0").is_some());
}

#[test]
fn loaded_content_drives_the_engine() {
    let dir = data_dir();
    let engine = ContentFactory::new(dir.path())
        .load()
        .expect("content loads")
        .engine();

    let mut state = CharacterState::new();
    state.set_base_text(Attribute::Evasion, "10");
    state.equip_primary("Longbow");
    state.equip_armor("Plate");
    state.set_upgrade_option("tier1-5-0", "0", true);

    let evasion = engine
        .attribute_modifiers(Attribute::Evasion, &state)
        .expect("evasion is registered");
    assert_eq!(evasion.total, 10);
    assert_eq!(evasion.bonus_total(), 1);
    assert_eq!(evasion.penalty_total(), 1);

    let armor_value = engine
        .attribute_modifiers(Attribute::ArmorValue, &state)
        .expect("armorValue is registered");
    assert_eq!(armor_value.total, 3);
}

#[test]
fn config_and_upgrade_overrides_are_used() {
    let dir = data_dir();
    fs::write(
        dir.path().join("config.toml"),
        "focused_card_slots = 2\ntier_structure_keys = [\"levels\"]\n",
    )
    .expect("write config");
    fs::write(
        dir.path().join("upgrades.ron"),
        r#"(upgrades: [(group_id: "custom", name: "Custom", modifiers: [(attribute: hopeMax, type: bonus, value: 1)])])"#,
    )
    .expect("write upgrades");

    let bundle = ContentFactory::new(dir.path()).load().expect("content loads");
    assert_eq!(bundle.config.focused_card_slots, 2);
    assert!(bundle.config.is_tier_structure_key("levels"));
    assert_eq!(bundle.catalogs.upgrades.effect_count(), 1);
    assert!(bundle.catalogs.upgrades.effect("tier1-5-0").is_none());
}

#[test]
fn missing_required_catalog_names_the_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = ContentFactory::new(dir.path())
        .load()
        .expect_err("weapons.ron is required");
    assert!(format!("{err:#}").contains("weapons.ron"));
}

#[test]
fn malformed_catalog_names_the_file() {
    let dir = data_dir();
    fs::write(dir.path().join("armor.ron"), "(armor: [(name: 3)])").expect("write armor");

    let err = ContentFactory::new(dir.path())
        .load()
        .expect_err("armor.ron is malformed");
    assert!(format!("{err:#}").contains("armor.ron"));
}

#[test]
fn bundled_sample_data_loads() {
    let bundle = ContentFactory::bundled().load().expect("bundled data loads");
    assert!(bundle.catalogs.weapons.weapon("Longbow").is_some());
    assert!(bundle.catalogs.armor.armor("Plate").is_some());
    assert_eq!(bundle.config, SheetConfig::default());
}
