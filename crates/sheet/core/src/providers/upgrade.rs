//! Upgrade provider: purchased level-up options.
use std::sync::Arc;

use tracing::debug;

use super::{ModifierProvider, SourceRef};
use crate::catalog::UpgradeOracle;
use crate::config::SheetConfig;
use crate::modifier::{Modifier, ModifierSource, SourceType};
use crate::state::CharacterState;

/// Emits the declarations of every active upgrade group.
///
/// A group is active when any of its options is checked. Its declarations
/// apply once, however many options are checked.
pub struct UpgradeProvider {
    table: Arc<dyn UpgradeOracle>,
    config: SheetConfig,
}

impl UpgradeProvider {
    pub fn new(table: Arc<dyn UpgradeOracle>, config: &SheetConfig) -> Self {
        Self {
            table,
            config: config.clone(),
        }
    }
}

impl ModifierProvider for UpgradeProvider {
    fn name(&self) -> &'static str {
        "upgrade"
    }

    fn modifiers(&self, state: &CharacterState) -> Vec<Modifier> {
        let mut modifiers = Vec::new();

        for (group_id, options) in &state.upgrades {
            if self.config.is_tier_structure_key(group_id) {
                continue;
            }
            if !options.values().any(|&checked| checked) {
                continue;
            }

            let Some(effect) = self.table.effect(group_id) else {
                debug!(
                    target: "sheet::providers",
                    group = group_id.as_str(),
                    "active upgrade group has no effect entry"
                );
                continue;
            };
            let Some(declarations) = effect.declarations() else {
                continue;
            };

            let id_prefix = format!("upgrade:{group_id}");
            modifiers.extend(
                SourceRef::new(&id_prefix, SourceType::Upgrade, effect.source_name())
                    .with_source_id(Some(group_id))
                    .instantiate(declarations),
            );
        }

        modifiers
    }
}
