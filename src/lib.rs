//! # zring
//!
//! A pure Rust number-theory engine: arbitrary-precision integers, modular
//! and binary-field arithmetic, dense polynomial rings, and GF(p^k)
//! extension fields.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! zring = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, including the thread-local
//!   modulus contexts
//! - `alloc`: allocator support without the full standard library
//! - `serde`: serialization for plain value types
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from two sub-crates:
//!
//! - [`zring-api`]: ring/field capability traits and the error taxonomy
//! - [`zring-algorithms`]: the arithmetic itself — integers, modular rings,
//!   GF(2), polynomials, extension fields, GF(2) linear algebra, and
//!   number-theory functions

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use zring_algorithms as algorithms;
pub use zring_api as api;

/// Common imports for zring users
pub mod prelude {
    pub use zring_api::error::{Error, Result};
    pub use zring_api::traits::{Field, FiniteField, Ring};

    pub use zring_algorithms::bigint::{Integer, IntegerRing};
    pub use zring_algorithms::extension::{ExtElem, ExtRing};
    pub use zring_algorithms::gf2::{Gf2, Gf2Ring};
    pub use zring_algorithms::matrix::{Gf2Matrix, Gf2Vector};
    pub use zring_algorithms::modular::{ModInt, ModInt64, ModRing, ModRing64};
    pub use zring_algorithms::poly::{FieldPolyExt, FiniteFieldPolyExt, Poly};

    #[cfg(feature = "std")]
    pub use zring_algorithms::context::{zp, zp64, zpe};
}
