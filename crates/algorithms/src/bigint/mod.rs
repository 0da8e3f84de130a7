//! Arbitrary-precision signed integers
//!
//! [`Integer`] is the foundation type of the engine: a signed integer of
//! unbounded magnitude with ring operations, floor division, GCD and
//! extended GCD, and bit/byte introspection. The backing store is
//! `num_bigint::BigInt`, which keeps the canonical form (no leading zero
//! limbs, zero carries no sign) so equality and hashing are structural.

use alloc::string::String;
use alloc::vec::Vec;

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer as NumInteger;
use num_traits::{One, Signed, ToPrimitive, Zero};

use zring_api::error::{validate, Error, Result};
use zring_api::traits::Ring;


/// A signed integer of arbitrary precision
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Integer(pub(crate) BigInt);

impl Integer {
    /// The value 0
    pub fn zero() -> Self {
        Integer(BigInt::zero())
    }

    /// The value 1
    pub fn one() -> Self {
        Integer(BigInt::one())
    }

    /// Parse a base-10 string, accepting an optional leading sign
    pub fn from_decimal(s: &str) -> Result<Self> {
        BigInt::from_str(s)
            .map(Integer)
            .map_err(|_| Error::param("integer literal", "not a valid base-10 integer"))
    }

    /// Construct from little-endian magnitude bytes (non-negative result)
    pub fn from_bytes_le(bytes: &[u8]) -> Self {
        Integer(BigInt::from_biguint(
            Sign::Plus,
            BigUint::from_bytes_le(bytes),
        ))
    }

    /// Little-endian bytes of the magnitude; empty for the value 0
    pub fn to_bytes_le(&self) -> Vec<u8> {
        if self.0.is_zero() {
            return Vec::new();
        }
        self.0.magnitude().to_bytes_le()
    }

    /// Number of significant bits of the magnitude; 0 for the value 0
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    /// Number of bytes needed to store the magnitude; 0 for the value 0
    pub fn byte_len(&self) -> usize {
        ((self.bits() + 7) / 8) as usize
    }

    /// -1, 0, or 1 according to the sign of the value
    pub fn sign(&self) -> i32 {
        match self.0.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Whether the value is 0
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whether the value is 1
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Whether the value is even
    pub fn is_even(&self) -> bool {
        self.0.is_even()
    }

    /// Whether the value is odd
    pub fn is_odd(&self) -> bool {
        self.0.is_odd()
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        Integer(self.0.abs())
    }

    /// Floor division: quotient rounded toward negative infinity
    ///
    /// The corresponding remainder carries the divisor's sign, so it is
    /// always non-negative for a positive divisor.
    pub fn div_floor(&self, divisor: &Integer) -> Result<Integer> {
        validate::divisor(!divisor.is_zero(), "integer div")?;
        Ok(Integer(self.0.div_floor(&divisor.0)))
    }

    /// Floor remainder: `self - div_floor(self, divisor) * divisor`
    pub fn rem_floor(&self, divisor: &Integer) -> Result<Integer> {
        validate::divisor(!divisor.is_zero(), "integer rem")?;
        Ok(Integer(self.0.mod_floor(&divisor.0)))
    }

    /// Floor quotient and remainder in one step
    pub fn divrem(&self, divisor: &Integer) -> Result<(Integer, Integer)> {
        validate::divisor(!divisor.is_zero(), "integer divrem")?;
        let (q, r) = self.0.div_mod_floor(&divisor.0);
        Ok((Integer(q), Integer(r)))
    }

    /// Non-negative greatest common divisor; `gcd(0, 0) == 0`
    pub fn gcd(&self, other: &Integer) -> Integer {
        Integer(self.0.gcd(&other.0))
    }

    /// Extended GCD: returns `(d, s, t)` with `d = gcd(self, other) >= 0`
    /// and `d == self * s + other * t` exactly
    pub fn gcdx(&self, other: &Integer) -> (Integer, Integer, Integer) {
        let eg = self.0.extended_gcd(&other.0);
        if eg.gcd.is_negative() {
            (Integer(-eg.gcd), Integer(-eg.x), Integer(-eg.y))
        } else {
            (Integer(eg.gcd), Integer(eg.x), Integer(eg.y))
        }
    }

    /// Raise to a non-negative power; `0^0 == 1` by convention
    pub fn pow(&self, exponent: u64) -> Integer {
        Integer(num_traits::pow(self.0.clone(), exponent as usize))
    }

    /// Convert to `i64` if the value fits
    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    /// Convert to `u64` if the value is non-negative and fits
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Integer::from_decimal(s)
    }
}

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Self {
        Integer(value)
    }
}

impl From<Integer> for BigInt {
    fn from(value: Integer) -> Self {
        value.0
    }
}

macro_rules! integer_from_prim {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Self {
                    Integer(BigInt::from(value))
                }
            }
        )*
    };
}

integer_from_prim!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, isize);

// Operator impls for owned and borrowed operands

impl Add for Integer {
    type Output = Integer;

    fn add(self, other: Self) -> Integer {
        Integer(self.0 + other.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, other: Self) -> Integer {
        Integer(&self.0 + &other.0)
    }
}

impl Sub for Integer {
    type Output = Integer;

    fn sub(self, other: Self) -> Integer {
        Integer(self.0 - other.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, other: Self) -> Integer {
        Integer(&self.0 - &other.0)
    }
}

impl Mul for Integer {
    type Output = Integer;

    fn mul(self, other: Self) -> Integer {
        Integer(self.0 * other.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, other: Self) -> Integer {
        Integer(&self.0 * &other.0)
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-&self.0)
    }
}

/// The ring of integers, as a coefficient-ring descriptor
///
/// `Z` is not a field: `try_div` is the exact-divisibility test, which is
/// what makes polynomial division over `Z` stop at inexact steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerRing;

impl Ring for IntegerRing {
    type Elem = Integer;

    fn zero(&self) -> Integer {
        Integer::zero()
    }

    fn one(&self) -> Integer {
        Integer::one()
    }

    fn is_zero(&self, a: &Integer) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Integer) -> bool {
        a.is_one()
    }

    fn add(&self, a: &Integer, b: &Integer) -> Integer {
        a + b
    }

    fn sub(&self, a: &Integer, b: &Integer) -> Integer {
        a - b
    }

    fn neg(&self, a: &Integer) -> Integer {
        -a
    }

    fn mul(&self, a: &Integer, b: &Integer) -> Integer {
        a * b
    }

    fn from_i64(&self, n: i64) -> Integer {
        Integer::from(n)
    }

    fn try_div(&self, a: &Integer, b: &Integer) -> Option<Integer> {
        if b.is_zero() {
            return None;
        }
        let (q, r) = a.0.div_rem(&b.0);
        if r.is_zero() {
            Some(Integer(q))
        } else {
            None
        }
    }

    fn fmt_elem(&self, a: &Integer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", a)
    }
}

/// Render an arbitrary value for an error payload
pub(crate) fn rendered<D: fmt::Display>(value: &D) -> String {
    use alloc::string::ToString;
    value.to_string()
}
