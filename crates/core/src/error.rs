//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant describes a caller input problem or a missing record. None of
/// them are transient, so nothing in the domain layer retries.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A field was missing, malformed or out of range.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A unit symbol is not part of the selected conversion table.
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(String),

    /// A profit margin outside `[0, 100)`.
    #[error("invalid margin: {0} (must be >= 0 and < 100)")]
    InvalidMargin(f64),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unsupported_unit(unit: impl Into<String>) -> Self {
        Self::UnsupportedUnit(unit.into())
    }

    pub fn invalid_margin(margin_percent: f64) -> Self {
        Self::InvalidMargin(margin_percent)
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
