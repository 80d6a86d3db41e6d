//! Data-driven catalogs for the sheet engine.
//!
//! This crate houses the static content the built-in providers read and the
//! loaders for RON/TOML data files:
//! - Weapon catalog (RON)
//! - Armor catalog (RON)
//! - Upgrade-effects table (RON, with a built-in copy embedded in the crate)
//! - Engine configuration (TOML)
//!
//! Content is consumed through the `sheet-core` oracle traits and never appears
//! in character state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ArmorLoader, ConfigLoader, ContentBundle, ContentFactory, LoadResult, UpgradeLoader,
    WeaponLoader,
};
