//! Modular rings `Z/pZ` and their element types
//!
//! Two specializations share one contract: [`ModRing`]/[`ModInt`] for
//! arbitrary-precision moduli, and [`ModRing64`]/[`ModInt64`] for moduli
//! that fit a machine word. The ring descriptor carries the modulus;
//! elements store the canonical least-non-negative residue and a copy of
//! their descriptor, so arithmetic never consults global state.
//!
//! Combining two elements that belong to different rings is a programming
//! error and panics with a descriptive message.

mod big;
mod word;

pub use big::{ModInt, ModRing};
pub use word::{ModInt64, ModRing64, MAX_WORD_MODULUS};
