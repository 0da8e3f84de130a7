//! Number-theory arithmetic for the zring library
//!
//! This crate implements the arithmetic core: arbitrary-precision integers,
//! modular rings `Z/pZ` (big and machine-word moduli), the two-element
//! field GF(2), dense polynomial rings generic over any coefficient ring,
//! GF(p^k) extension fields built as polynomial quotient rings, Gaussian
//! elimination over GF(2), and the classic number-theory functions
//! (modular exponentiation, probabilistic primality, prime enumeration).
//!
//! # Design
//!
//! Every ring is a *descriptor* value implementing the capability traits of
//! [`zring_api::traits`]; elements carry their descriptor, so arithmetic
//! never consults shared mutable state. The thread-local contexts in
//! [`context`] exist purely as construction-time conveniences and restore
//! themselves on every exit path.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

pub mod bigint;
pub mod extension;
pub mod gf2;
pub mod matrix;
pub mod modular;
pub mod numtheory;
pub mod poly;

#[cfg(feature = "std")]
pub mod context;

// Re-export the error types and capability traits for convenience
pub use zring_api::error::{self, Error, Result};
pub use zring_api::traits::{Field, FiniteField, Ring};

/// Prelude for easy importing of the common types and traits
pub mod prelude {
    pub use super::bigint::{Integer, IntegerRing};
    pub use super::extension::{ExtElem, ExtRing};
    pub use super::gf2::{Gf2, Gf2Ring};
    pub use super::matrix::{Gf2Matrix, Gf2Vector};
    pub use super::modular::{ModInt, ModInt64, ModRing, ModRing64};
    pub use super::poly::{FieldPolyExt, FiniteFieldPolyExt, Poly};
    pub use zring_api::error::{Error, Result};
    pub use zring_api::traits::{Field, FiniteField, Ring};

    #[cfg(feature = "std")]
    pub use super::context::{zp, zp64, zpe};
}
