//! Capability traits for coefficient rings and fields
//!
//! The polynomial layer and the linear-algebra layer are generic over these
//! traits. A *ring descriptor* value (e.g. a prime-field descriptor holding
//! its modulus) implements [`Ring`]; elements are plain data of the
//! associated `Elem` type. Carrying the modulus in the descriptor rather
//! than in global state is what makes the arithmetic race-free and lets
//! quotient constructions nest (a GF(p^k) descriptor is itself a `Ring`).

mod rings;

pub use rings::{Field, FiniteField, Ring};
