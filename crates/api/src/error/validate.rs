//! Validation utilities for arithmetic operations

use alloc::string::ToString;

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a modulus is usable, i.e. strictly greater than 1
///
/// `rendered` is the decimal rendering of the modulus, carried into the
/// error for diagnostics.
#[inline(always)]
pub fn modulus<D: ToString>(usable: bool, rendered: &D) -> Result<()> {
    if !usable {
        return Err(Error::InvalidModulus {
            modulus: rendered.to_string(),
        });
    }
    Ok(())
}

/// Validate a dimension
#[inline(always)]
pub fn dimension(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::DimensionMismatch {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a nonzero divisor
#[inline(always)]
pub fn divisor(nonzero: bool, operation: &'static str) -> Result<()> {
    if !nonzero {
        return Err(Error::DivisionByZero { operation });
    }
    Ok(())
}
