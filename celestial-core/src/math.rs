//! Guarded arithmetic.
//!
//! Formula code never checks domains inline; it routes every divisor and
//! every sqrt argument through these helpers so the same condition always
//! produces the same [`MathErrorKind`]. NaN fails every guard.
//!
//! Transcendentals go through `libm`: repeated evaluations must agree to the
//! bit, across platforms as well as across calls.

use crate::errors::{AstroError, AstroResult, MathErrorKind};

/// Passes `value` through if it is strictly positive, otherwise fails with `kind`.
#[inline]
pub fn require_positive(
    operation: &str,
    name: &str,
    value: f64,
    kind: MathErrorKind,
) -> AstroResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(AstroError::math_error(
            operation,
            kind,
            &format!("{name} must be positive, got {value}"),
        ))
    }
}

/// Passes `value` through if it is zero or positive, otherwise fails with
/// [`MathErrorKind::InvalidInput`].
#[inline]
pub fn require_non_negative(operation: &str, name: &str, value: f64) -> AstroResult<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(AstroError::math_error(
            operation,
            MathErrorKind::InvalidInput,
            &format!("{name} must not be negative, got {value}"),
        ))
    }
}

/// Divides by a divisor that must be strictly positive.
#[inline]
pub fn checked_div(operation: &str, name: &str, numerator: f64, divisor: f64) -> AstroResult<f64> {
    let divisor = require_positive(operation, name, divisor, MathErrorKind::DivisionByZero)?;
    Ok(numerator / divisor)
}

/// Square root that refuses negative arguments with [`MathErrorKind::DomainError`].
#[inline]
pub fn checked_sqrt(operation: &str, x: f64) -> AstroResult<f64> {
    if x >= 0.0 {
        Ok(libm::sqrt(x))
    } else {
        Err(AstroError::math_error(
            operation,
            MathErrorKind::DomainError,
            &format!("square root of negative value {x}"),
        ))
    }
}

#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[inline]
pub fn cbrt(x: f64) -> f64 {
    libm::cbrt(x)
}

#[inline]
pub fn ln(x: f64) -> f64 {
    libm::log(x)
}

#[inline]
pub fn exp(x: f64) -> f64 {
    libm::exp(x)
}
