//! Public API traits and types for the zring library
//!
//! This crate provides the public API surface for the zring ecosystem:
//! the ring/field capability traits the polynomial layer is generic over,
//! and the error taxonomy shared by every arithmetic operation.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{Field, FiniteField, Ring};
