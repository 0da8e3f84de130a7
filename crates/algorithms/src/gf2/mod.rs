//! The two-element field GF(2)
//!
//! Addition and subtraction are both XOR, negation is the identity, and
//! multiplication is AND. The type is a `Copy` wrapper over a single bit.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use rand::{Rng, RngCore};

use zring_api::error::{Error, Result};
use zring_api::traits::{Field, FiniteField, Ring};

/// An element of GF(2)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gf2(bool);

impl Gf2 {
    /// The zero element
    pub const ZERO: Gf2 = Gf2(false);

    /// The one element
    pub const ONE: Gf2 = Gf2(true);

    /// Construct from the low bit of an integer
    pub fn new(value: u64) -> Self {
        Gf2(value & 1 == 1)
    }

    /// The representative bit, 0 or 1
    pub fn rep(&self) -> u64 {
        u64::from(self.0)
    }

    /// Whether the element is 0
    pub fn is_zero(&self) -> bool {
        !self.0
    }

    /// Whether the element is 1
    pub fn is_one(&self) -> bool {
        self.0
    }

    /// Multiplicative inverse: `inv(1) == 1`, `inv(0)` fails
    pub fn inv(&self) -> Result<Gf2> {
        if self.0 {
            Ok(*self)
        } else {
            Err(Error::InvMod {
                value: crate::bigint::rendered(&0u8),
                modulus: crate::bigint::rendered(&2u8),
            })
        }
    }

    /// Division, defined as `self * inv(divisor)`
    pub fn div(&self, divisor: &Gf2) -> Result<Gf2> {
        Ok(*self * divisor.inv()?)
    }

    /// Raise to a signed power; `pow(_, 0) == 1` regardless of base
    pub fn pow(&self, exponent: i64) -> Result<Gf2> {
        if exponent == 0 {
            return Ok(Gf2::ONE);
        }
        if exponent < 0 {
            self.inv()?;
        }
        Ok(*self)
    }
}

impl From<bool> for Gf2 {
    fn from(bit: bool) -> Self {
        Gf2(bit)
    }
}

impl From<u64> for Gf2 {
    fn from(value: u64) -> Self {
        Gf2::new(value)
    }
}

impl fmt::Display for Gf2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rep())
    }
}

impl Add for Gf2 {
    type Output = Gf2;

    fn add(self, other: Self) -> Gf2 {
        Gf2(self.0 ^ other.0)
    }
}

impl Sub for Gf2 {
    type Output = Gf2;

    fn sub(self, other: Self) -> Gf2 {
        // In characteristic 2 subtraction coincides with addition
        Gf2(self.0 ^ other.0)
    }
}

impl Mul for Gf2 {
    type Output = Gf2;

    fn mul(self, other: Self) -> Gf2 {
        Gf2(self.0 & other.0)
    }
}

impl Neg for Gf2 {
    type Output = Gf2;

    fn neg(self) -> Gf2 {
        self
    }
}

/// Descriptor of GF(2) as a coefficient field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gf2Ring;

impl Ring for Gf2Ring {
    type Elem = Gf2;

    fn zero(&self) -> Gf2 {
        Gf2::ZERO
    }

    fn one(&self) -> Gf2 {
        Gf2::ONE
    }

    fn is_zero(&self, a: &Gf2) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Gf2) -> bool {
        a.is_one()
    }

    fn add(&self, a: &Gf2, b: &Gf2) -> Gf2 {
        *a + *b
    }

    fn sub(&self, a: &Gf2, b: &Gf2) -> Gf2 {
        *a - *b
    }

    fn neg(&self, a: &Gf2) -> Gf2 {
        -*a
    }

    fn mul(&self, a: &Gf2, b: &Gf2) -> Gf2 {
        *a * *b
    }

    fn from_i64(&self, n: i64) -> Gf2 {
        Gf2(n & 1 == 1)
    }

    fn try_div(&self, a: &Gf2, b: &Gf2) -> Option<Gf2> {
        if b.is_zero() {
            None
        } else {
            Some(*a)
        }
    }

    fn fmt_elem(&self, a: &Gf2, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", a)
    }
}

impl Field for Gf2Ring {
    fn inv(&self, a: &Gf2) -> Result<Gf2> {
        a.inv()
    }
}

impl FiniteField for Gf2Ring {
    fn order(&self) -> BigUint {
        BigUint::from(2u32)
    }

    fn random_elem<G: RngCore + ?Sized>(&self, rng: &mut G) -> Gf2 {
        Gf2(rng.gen::<bool>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_is_xor() {
        assert_eq!(Gf2::ZERO + Gf2::ZERO, Gf2::ZERO);
        assert_eq!(Gf2::ZERO + Gf2::ONE, Gf2::ONE);
        assert_eq!(Gf2::ONE + Gf2::ONE, Gf2::ZERO);
        assert_eq!(Gf2::ONE - Gf2::ONE, Gf2::ZERO);
        assert_eq!(Gf2::ZERO - Gf2::ONE, Gf2::ONE);
    }

    #[test]
    fn negation_is_identity() {
        assert_eq!(-Gf2::ONE, Gf2::ONE);
        assert_eq!(-Gf2::ZERO, Gf2::ZERO);
    }

    #[test]
    fn multiplication_is_and() {
        assert_eq!(Gf2::ONE * Gf2::ONE, Gf2::ONE);
        assert_eq!(Gf2::ONE * Gf2::ZERO, Gf2::ZERO);
        assert_eq!(Gf2::ZERO * Gf2::ZERO, Gf2::ZERO);
    }

    #[test]
    fn inverse() {
        assert_eq!(Gf2::ONE.inv().unwrap(), Gf2::ONE);
        assert!(matches!(
            Gf2::ZERO.inv(),
            Err(Error::InvMod { .. })
        ));
    }

    #[test]
    fn pow_conventions() {
        assert_eq!(Gf2::ZERO.pow(0).unwrap(), Gf2::ONE);
        assert_eq!(Gf2::ONE.pow(0).unwrap(), Gf2::ONE);
        assert_eq!(Gf2::ONE.pow(1000).unwrap(), Gf2::ONE);
        assert_eq!(Gf2::ZERO.pow(3).unwrap(), Gf2::ZERO);
        assert_eq!(Gf2::ONE.pow(-5).unwrap(), Gf2::ONE);
        assert!(Gf2::ZERO.pow(-1).is_err());
    }

    #[test]
    fn low_bit_conversions() {
        assert_eq!(Gf2::new(6), Gf2::ZERO);
        assert_eq!(Gf2::new(7), Gf2::ONE);
        assert_eq!(Gf2::from(true), Gf2::ONE);
    }

    #[test]
    fn ring_descriptor() {
        use zring_api::traits::{Field, FiniteField, Ring};
        let gf2 = Gf2Ring;
        assert_eq!(gf2.add(&Gf2::ONE, &Gf2::ONE), Gf2::ZERO);
        assert_eq!(gf2.from_i64(-1), Gf2::ONE);
        assert_eq!(gf2.from_i64(-2), Gf2::ZERO);
        assert_eq!(gf2.inv(&Gf2::ONE).unwrap(), Gf2::ONE);
        assert_eq!(gf2.try_div(&Gf2::ONE, &Gf2::ZERO), None);
        assert_eq!(gf2.order(), 2u32.into());
    }
}
