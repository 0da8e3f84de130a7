//! Shared helpers for the zring integration tests

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use zring_algorithms::bigint::{Integer, IntegerRing};
use zring_algorithms::modular::ModRing;
use zring_algorithms::poly::Poly;
use zring_api::traits::Ring;

/// A deterministic RNG so failures reproduce across runs
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// The prime field used by most concrete scenarios
pub fn ring17() -> ModRing {
    ModRing::new(&Integer::from(17)).expect("17 is a valid modulus")
}

/// A modular polynomial from signed coefficients, constant term first
pub fn poly_mod(ring: &ModRing, coeffs: &[i64]) -> Poly<ModRing> {
    let elems = coeffs.iter().map(|&c| ring.from_i64(c)).collect();
    Poly::from_coeffs(ring.clone(), elems)
}

/// An integer polynomial from signed coefficients, constant term first
pub fn poly_zz(coeffs: &[i64]) -> Poly<IntegerRing> {
    Poly::from_coeffs(
        IntegerRing,
        coeffs.iter().map(|&c| Integer::from(c)).collect(),
    )
}
