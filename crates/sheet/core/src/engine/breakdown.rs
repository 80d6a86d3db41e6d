//! Per-attribute breakdown returned by the engine.
use sha2::{Digest, Sha256};

use crate::attributes::Attribute;
use crate::modifier::Modifier;

/// Everything that goes into one attribute's displayed value.
///
/// `total = base_value + Σ bonuses − Σ penalties`. Both partitions are sorted
/// by (source type, modifier id).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AttributeModifiers {
    pub attribute: Attribute,
    pub attribute_label: String,
    pub base_value: i32,
    pub bonuses: Vec<Modifier>,
    pub penalties: Vec<Modifier>,
    pub total: i32,
}

impl AttributeModifiers {
    /// Sum of bonus values.
    pub fn bonus_total(&self) -> i32 {
        self.bonuses
            .iter()
            .fold(0i32, |acc, m| acc.saturating_add(m.value()))
    }

    /// Sum of penalty values (as a positive number).
    pub fn penalty_total(&self) -> i32 {
        self.penalties
            .iter()
            .fold(0i32, |acc, m| acc.saturating_add(m.value()))
    }

    /// True if any active source touches this attribute.
    pub fn is_modified(&self) -> bool {
        !self.bonuses.is_empty() || !self.penalties.is_empty()
    }

    /// All contributing modifiers, bonuses first.
    pub fn modifiers(&self) -> impl Iterator<Item = &Modifier> {
        self.bonuses.iter().chain(self.penalties.iter())
    }

    /// SHA-256 over a canonical encoding of the breakdown.
    ///
    /// Two breakdowns share a digest iff they agree on every field, including
    /// provenance and partition order.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();

        write_str(&mut hasher, self.attribute.as_ref());
        write_str(&mut hasher, &self.attribute_label);
        hasher.update(self.base_value.to_le_bytes());

        for partition in [&self.bonuses, &self.penalties] {
            hasher.update((partition.len() as u64).to_le_bytes());
            for modifier in partition {
                write_modifier(&mut hasher, modifier);
            }
        }

        hasher.update(self.total.to_le_bytes());
        hasher.finalize().into()
    }
}

fn write_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

fn write_opt_str(hasher: &mut Sha256, value: Option<&str>) {
    match value {
        Some(value) => {
            hasher.update([1u8]);
            write_str(hasher, value);
        }
        None => hasher.update([0u8]),
    }
}

fn write_modifier(hasher: &mut Sha256, modifier: &Modifier) {
    write_str(hasher, modifier.id());
    write_str(hasher, modifier.attribute().as_ref());
    write_str(hasher, modifier.modifier_type().as_ref());
    hasher.update(modifier.value().to_le_bytes());
    write_opt_str(hasher, modifier.declaration.description.as_deref());
    write_str(hasher, modifier.source_type().as_ref());
    write_str(hasher, modifier.source_name());
    write_opt_str(hasher, modifier.provenance.source_id.as_deref());
}
