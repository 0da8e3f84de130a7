//! Error handling for the zring arithmetic layer

use alloc::borrow::Cow;
use alloc::string::String;

use core::fmt;

/// The error type for arithmetic operations
///
/// Every variant is raised synchronously at the point of violation and is
/// never retried or suppressed internally; arithmetic correctness requires
/// surfacing each condition to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A modulus of 1 or less was passed to context or ring initialization,
    /// or an element was constructed before any modulus was set (the
    /// uninitialized slot renders as modulus "0")
    InvalidModulus {
        /// Decimal rendering of the offending modulus
        modulus: String,
    },

    /// Integer or polynomial division with a zero divisor
    DivisionByZero {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// A multiplicative inverse was requested for a non-invertible element
    ///
    /// Carries both operands so callers can inspect which value/modulus
    /// combination failed; this is deliberately distinct from a generic
    /// domain error.
    InvMod {
        /// Decimal rendering of the element that has no inverse
        value: String,
        /// Decimal rendering of the modulus it was inverted against
        modulus: String,
    },

    /// Vector or matrix operand size mismatch
    DimensionMismatch {
        /// Operation where the mismatch occurred
        context: &'static str,
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        actual: usize,
    },

    /// Internal consistency failure, e.g. extension-field inversion
    /// discovering the configured modulus polynomial is not irreducible
    InvariantViolation {
        /// Subsystem where the invariant broke
        context: &'static str,
        /// Additional details about the failure
        details: String,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for arithmetic operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidModulus { modulus } => {
                write!(f, "Invalid modulus {}: must be greater than 1", modulus)
            }
            Error::DivisionByZero { operation } => {
                write!(f, "Division by zero in {}", operation)
            }
            Error::InvMod { value, modulus } => {
                write!(f, "{} is not invertible modulo {}", value, modulus)
            }
            Error::DimensionMismatch {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvariantViolation { context, details } => {
                write!(f, "Invariant violation in {}: {}", context, details)
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
