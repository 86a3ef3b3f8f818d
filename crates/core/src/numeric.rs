//! Numeric validation and rounding shared by every calculator.
//!
//! Rounding is **half away from zero** (`f64::round` applied to the scaled
//! value): `round_to(0.125, 2) == 0.13`, `round_to(-0.125, 2) == -0.13`.
//! Values are rounded only at output boundaries; intermediate sums stay at
//! full precision.

use crate::error::{DomainError, DomainResult};

/// Decimal places used for money and stock quantities in outputs.
pub const MONEY_PLACES: i32 = 2;

/// Decimal places used for converted unit values.
pub const CONVERSION_PLACES: i32 = 4;

/// Round `value` to `places` decimal digits, half away from zero.
///
/// Values too large to scale without overflowing are returned unchanged (they
/// already have no fractional digits to round).
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    // Normalise -0.0 so serialized output never shows a signed zero.
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Round to [`MONEY_PLACES`].
pub fn round_money(value: f64) -> f64 {
    round_to(value, MONEY_PLACES)
}

/// Require a finite number (rejects NaN and infinities).
pub fn ensure_finite(field: &str, value: f64) -> DomainResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::validation(format!("{field} must be a finite number")))
    }
}

/// Require a computed figure to still be finite.
///
/// Used on outputs: finite inputs can still overflow once multiplied or summed.
pub fn ensure_representable(field: &str, value: f64) -> DomainResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::validation(format!("{field} is too large to compute")))
    }
}

/// Require a finite, non-negative number.
pub fn ensure_non_negative(field: &str, value: f64) -> DomainResult<f64> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(DomainError::validation(format!(
            "{field} cannot be negative (got {value})"
        )));
    }
    Ok(value)
}

/// Require a finite, strictly positive number.
pub fn ensure_positive(field: &str, value: f64) -> DomainResult<f64> {
    let value = ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(DomainError::validation(format!(
            "{field} must be greater than zero (got {value})"
        )));
    }
    Ok(value)
}

/// Require a non-blank string, returning it trimmed.
pub fn ensure_present<'a>(field: &str, value: Option<&'a str>) -> DomainResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::validation(format!("{field} is required"))),
    }
}
