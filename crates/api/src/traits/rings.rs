//! Ring, field, and finite-field capability traits

use core::fmt;

use num_bigint::BigUint;
use rand::RngCore;

use crate::error::Result;

/// A commutative ring with identity, presented as a descriptor object
///
/// The descriptor owns whatever data defines the ring (for `Z/pZ`, the
/// modulus); elements of the ring are values of the associated [`Elem`]
/// type and carry no ring data of their own. All operations go through the
/// descriptor, so the same element representation can never be combined
/// under two different moduli by accident.
///
/// [`Elem`]: Ring::Elem
pub trait Ring: Clone + PartialEq + fmt::Debug {
    /// Element representation for this ring
    type Elem: Clone + PartialEq + fmt::Debug;

    /// The additive identity
    fn zero(&self) -> Self::Elem;

    /// The multiplicative identity
    fn one(&self) -> Self::Elem;

    /// Whether `a` is the additive identity
    fn is_zero(&self, a: &Self::Elem) -> bool;

    /// Whether `a` is the multiplicative identity
    fn is_one(&self, a: &Self::Elem) -> bool;

    /// Addition
    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Subtraction
    fn sub(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Additive inverse
    fn neg(&self, a: &Self::Elem) -> Self::Elem;

    /// Multiplication
    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// The canonical image of a machine integer in this ring
    ///
    /// Used by the formal derivative (multiplication by the exponent) and
    /// by generic constructors.
    fn from_i64(&self, n: i64) -> Self::Elem;

    /// Exact division: `Some(q)` with `a == q * b` if such a `q` exists
    ///
    /// Over a field this succeeds for every nonzero `b`. Over `Z` it is the
    /// divisibility test that polynomial long division probes at each step.
    fn try_div(&self, a: &Self::Elem, b: &Self::Elem) -> Option<Self::Elem>;

    /// Ring-aware display of an element
    fn fmt_elem(&self, a: &Self::Elem, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A ring in which every nonzero element has a multiplicative inverse
pub trait Field: Ring {
    /// Multiplicative inverse
    ///
    /// Fails with [`Error::InvMod`] when `a` has no inverse — for a true
    /// field that means `a == 0`, but descriptors over a composite modulus
    /// surface the offending value/modulus pair here.
    ///
    /// [`Error::InvMod`]: crate::error::Error::InvMod
    fn inv(&self, a: &Self::Elem) -> Result<Self::Elem>;

    /// Division, defined as `a * inv(b)`
    fn div(&self, a: &Self::Elem, b: &Self::Elem) -> Result<Self::Elem> {
        Ok(self.mul(a, &self.inv(b)?))
    }
}

/// A field with finitely many elements
pub trait FiniteField: Field {
    /// The number of elements q of the field
    fn order(&self) -> BigUint;

    /// A uniformly random element
    fn random_elem<G: RngCore + ?Sized>(&self, rng: &mut G) -> Self::Elem;
}
