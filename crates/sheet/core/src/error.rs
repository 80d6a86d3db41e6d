//! Common error infrastructure for sheet-core.
//!
//! The engine recovers from almost every degenerate input on its own (catalog
//! misses, absent declarations, unparseable base values all contribute zero).
//! The errors defined here are the few cases surfaced to callers because they
//! indicate a programming mistake rather than bad data.
//!
//! # Design Principles
//!
//! - **Type Safety**: each failure mode has its own variant
//! - **Severity Classification**: errors are categorized for handling strategies
//! - **Stable Codes**: every variant maps to a static code for logs and tests

use crate::attributes::Attribute;

/// Severity level of an error, used for categorization and handling strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: attribute key that names no attribute at all
    Validation,

    /// The engine itself is misconfigured and cannot serve the request.
    ///
    /// Examples: a known attribute missing from the engine's registry
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error points at engine setup rather than input.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all sheet-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to fix it, not on impact
pub trait SheetError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors returned by [`crate::engine::ModifierEngine`] queries.
///
/// Both variants are the "unknown attribute" case: the query never produces a
/// partial breakdown.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AggregationError {
    /// The key text does not name any attribute. Carries the key as spelled.
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),

    /// The attribute exists but the engine's registry has no configuration for it.
    #[error("attribute '{0}' is not registered")]
    UnregisteredAttribute(Attribute),
}

impl AggregationError {
    /// Returns true for either flavour of unknown-attribute failure.
    pub const fn is_unknown_attribute(&self) -> bool {
        matches!(
            self,
            Self::UnknownAttribute(_) | Self::UnregisteredAttribute(_)
        )
    }
}

impl SheetError for AggregationError {
    fn severity(&self) -> ErrorSeverity {
        use AggregationError::*;
        match self {
            UnknownAttribute(_) => ErrorSeverity::Validation,
            UnregisteredAttribute(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use AggregationError::*;
        match self {
            UnknownAttribute(_) => "AGGREGATION_UNKNOWN_ATTRIBUTE",
            UnregisteredAttribute(_) => "AGGREGATION_UNREGISTERED_ATTRIBUTE",
        }
    }
}

/// Result alias for engine queries.
pub type Result<T, E = AggregationError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_attribute_is_a_validation_error() {
        let err = AggregationError::UnknownAttribute("luck".into());
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(!err.severity().is_fatal());
        assert!(err.is_unknown_attribute());
        assert_eq!(err.error_code(), "AGGREGATION_UNKNOWN_ATTRIBUTE");
        assert_eq!(err.to_string(), "unknown attribute 'luck'");
    }

    #[test]
    fn unregistered_attribute_is_fatal() {
        let err = AggregationError::UnregisteredAttribute(Attribute::HopeMax);
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert!(err.is_unknown_attribute());
        assert_eq!(err.to_string(), "attribute 'hopeMax' is not registered");
    }
}
