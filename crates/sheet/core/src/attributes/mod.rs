//! Attribute keys and the registry that gives each one a base-value rule.
//!
//! An attribute is a named, computed character statistic. Providers only ever
//! contribute relative amounts (add/subtract); how the base value is obtained
//! lives here, in one place.

mod registry;

pub use registry::{AttributeConfig, AttributeRegistry, BaseValueGetter, parse_base_value};

/// Every attribute the engine knows how to compute.
///
/// String forms are camelCase (`evasion`, `armorValue`, `hpMax`, ...) and match
/// the keys used by authored catalog data and character snapshots.
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
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[strum(serialize_all = "camelCase")]
pub enum Attribute {
    // ========================================================================
    // Combat
    // ========================================================================
    Evasion,
    ArmorValue,
    MajorThreshold,
    SevereThreshold,
    Proficiency,

    // ========================================================================
    // Resources
    // ========================================================================
    HpMax,
    StressMax,
    HopeMax,

    // ========================================================================
    // Character traits
    // ========================================================================
    Agility,
    Strength,
    Finesse,
    Instinct,
    Presence,
    Knowledge,
}

impl Attribute {
    /// Number of attribute keys.
    pub const COUNT: usize = 14;

    /// Category the attribute is grouped under by default.
    pub const fn category(self) -> AttributeCategory {
        use Attribute::*;
        match self {
            Evasion | ArmorValue | MajorThreshold | SevereThreshold | Proficiency => {
                AttributeCategory::Combat
            }
            HpMax | StressMax | HopeMax => AttributeCategory::Resource,
            Agility | Strength | Finesse | Instinct | Presence | Knowledge => {
                AttributeCategory::Stat
            }
        }
    }
}

/// Grouping used by presentation layers to lay out the sheet.
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
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AttributeCategory {
    Combat,
    Resource,
    Stat,
}
