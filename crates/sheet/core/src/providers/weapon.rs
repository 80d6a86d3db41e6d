//! Weapon provider: primary and secondary equip slots.
use std::sync::Arc;

use tracing::debug;

use super::{ModifierProvider, SourceRef};
use crate::catalog::WeaponOracle;
use crate::modifier::{Modifier, ModifierSource, SourceType};
use crate::state::CharacterState;

/// Weapon equip slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum WeaponSlot {
    Primary,
    Secondary,
}

impl WeaponSlot {
    pub const ALL: [WeaponSlot; 2] = [WeaponSlot::Primary, WeaponSlot::Secondary];

    /// Name of the weapon equipped in this slot (empty when nothing is).
    pub fn equipped(self, state: &CharacterState) -> &str {
        match self {
            WeaponSlot::Primary => &state.primary_weapon,
            WeaponSlot::Secondary => &state.secondary_weapon,
        }
    }
}

/// Emits the declarations of equipped weapons, looked up by exact name.
pub struct WeaponProvider {
    catalog: Arc<dyn WeaponOracle>,
}

impl WeaponProvider {
    pub fn new(catalog: Arc<dyn WeaponOracle>) -> Self {
        Self { catalog }
    }
}

impl ModifierProvider for WeaponProvider {
    fn name(&self) -> &'static str {
        "weapon"
    }

    fn modifiers(&self, state: &CharacterState) -> Vec<Modifier> {
        let mut modifiers = Vec::new();

        for slot in WeaponSlot::ALL {
            let name = slot.equipped(state);
            if name.trim().is_empty() {
                continue;
            }

            let Some(weapon) = self.catalog.weapon(name) else {
                debug!(
                    target: "sheet::providers",
                    slot = slot.as_ref(),
                    weapon = name,
                    "equipped weapon not in catalog"
                );
                continue;
            };
            let Some(declarations) = weapon.declarations() else {
                continue;
            };

            let id_prefix = format!("weapon:{}:{}", slot, weapon.source_name());
            modifiers.extend(
                SourceRef::new(&id_prefix, SourceType::Weapon, weapon.source_name())
                    .instantiate(declarations),
            );
        }

        modifiers
    }
}
