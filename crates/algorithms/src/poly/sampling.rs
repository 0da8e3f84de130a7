//! Random polynomial sampling

use alloc::vec::Vec;

use rand::RngCore;

use zring_api::traits::FiniteField;

use super::Poly;

/// A polynomial with uniformly random coefficients for `x^0 .. x^(len-1)`
///
/// The result has degree strictly less than `len`; it can be lower when
/// the leading draws happen to be zero, and `len == 0` yields the zero
/// polynomial.
pub fn random_poly<F, G>(rng: &mut G, ring: &F, len: usize) -> Poly<F>
where
    F: FiniteField,
    G: RngCore + ?Sized,
{
    let coeffs: Vec<F::Elem> = (0..len).map(|_| ring.random_elem(rng)).collect();
    Poly::from_coeffs(ring.clone(), coeffs)
}

/// A uniformly random monic polynomial of exactly the given degree
pub fn random_monic<F, G>(rng: &mut G, ring: &F, degree: usize) -> Poly<F>
where
    F: FiniteField,
    G: RngCore + ?Sized,
{
    let mut poly = random_poly(rng, ring, degree);
    poly.set_coeff(degree, ring.one());
    poly
}
