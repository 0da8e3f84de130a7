//! Machine-word specialization of the modular ring

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use rand::{Rng, RngCore};

use zring_api::error::{Error, Result};
use zring_api::traits::{Field, FiniteField, Ring};

use crate::bigint::rendered;

/// Largest accepted word modulus
///
/// Keeping `p <= 2^62` lets sums fit a `u64` and products fit a `u128`
/// without overflow checks on the hot paths.
pub const MAX_WORD_MODULUS: u64 = 1 << 62;

/// Descriptor of `Z/pZ` for a modulus that fits a machine word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModRing64 {
    modulus: u64,
}

impl ModRing64 {
    /// Create a ring descriptor; requires `1 < p <= MAX_WORD_MODULUS`
    pub fn new(modulus: u64) -> Result<Self> {
        if modulus <= 1 {
            return Err(Error::InvalidModulus {
                modulus: rendered(&modulus),
            });
        }
        if modulus > MAX_WORD_MODULUS {
            return Err(Error::param(
                "modulus",
                "word modulus exceeds the 2^62 bound; use ModRing instead",
            ));
        }
        Ok(ModRing64 { modulus })
    }

    /// The modulus
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub(crate) fn reduce_i64(&self, value: i64) -> u64 {
        (value as i128).rem_euclid(self.modulus as i128) as u64
    }

    pub(crate) fn inv_word(&self, a: u64) -> Result<u64> {
        // Extended Euclid on signed double-words
        let p = self.modulus as i128;
        let (mut t, mut new_t): (i128, i128) = (0, 1);
        let (mut r, mut new_r): (i128, i128) = (p, a as i128);
        while new_r != 0 {
            let q = r / new_r;
            (t, new_t) = (new_t, t - q * new_t);
            (r, new_r) = (new_r, r - q * new_r);
        }
        if r != 1 {
            return Err(Error::InvMod {
                value: rendered(&a),
                modulus: rendered(&self.modulus),
            });
        }
        Ok(t.rem_euclid(p) as u64)
    }

    pub(crate) fn pow_word(&self, base: u64, mut exponent: u64) -> u64 {
        let p = self.modulus as u128;
        let mut acc: u128 = 1 % p;
        let mut b = base as u128 % p;
        while exponent > 0 {
            if exponent & 1 == 1 {
                acc = acc * b % p;
            }
            b = b * b % p;
            exponent >>= 1;
        }
        acc as u64
    }
}

impl Ring for ModRing64 {
    type Elem = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn one(&self) -> u64 {
        1
    }

    fn is_zero(&self, a: &u64) -> bool {
        *a == 0
    }

    fn is_one(&self, a: &u64) -> bool {
        *a == 1
    }

    fn add(&self, a: &u64, b: &u64) -> u64 {
        let sum = a + b;
        if sum >= self.modulus {
            sum - self.modulus
        } else {
            sum
        }
    }

    fn sub(&self, a: &u64, b: &u64) -> u64 {
        if a >= b {
            a - b
        } else {
            a + self.modulus - b
        }
    }

    fn neg(&self, a: &u64) -> u64 {
        if *a == 0 {
            0
        } else {
            self.modulus - a
        }
    }

    fn mul(&self, a: &u64, b: &u64) -> u64 {
        (*a as u128 * *b as u128 % self.modulus as u128) as u64
    }

    fn from_i64(&self, n: i64) -> u64 {
        self.reduce_i64(n)
    }

    fn try_div(&self, a: &u64, b: &u64) -> Option<u64> {
        let inv = self.inv_word(*b).ok()?;
        Some(self.mul(a, &inv))
    }

    fn fmt_elem(&self, a: &u64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", a)
    }
}

impl Field for ModRing64 {
    fn inv(&self, a: &u64) -> Result<u64> {
        self.inv_word(*a)
    }
}

impl FiniteField for ModRing64 {
    fn order(&self) -> BigUint {
        BigUint::from(self.modulus)
    }

    fn random_elem<G: RngCore + ?Sized>(&self, rng: &mut G) -> u64 {
        rng.gen_range(0..self.modulus)
    }
}

/// An element of a word-modulus ring; `Copy`, residue in `[0, p)`
///
/// Equality and hashing use only the representative.
#[derive(Debug, Clone, Copy)]
pub struct ModInt64 {
    ring: ModRing64,
    rep: u64,
}

impl ModInt64 {
    /// Construct under the thread-local word-modulus context
    #[cfg(feature = "std")]
    pub fn new(value: i64) -> Result<Self> {
        let ring = crate::context::zp64::current()?;
        Ok(Self::new_in(&ring, value))
    }

    /// Construct in an explicit ring, reducing into `[0, p)`
    pub fn new_in(ring: &ModRing64, value: i64) -> Self {
        ModInt64 {
            ring: *ring,
            rep: ring.reduce_i64(value),
        }
    }

    /// The canonical representative, in `[0, p)`
    pub fn rep(&self) -> u64 {
        self.rep
    }

    /// The ring this element belongs to
    pub fn ring(&self) -> &ModRing64 {
        &self.ring
    }

    /// The modulus of this element's ring
    pub fn modulus(&self) -> u64 {
        self.ring.modulus
    }

    /// Whether the element is 0
    pub fn is_zero(&self) -> bool {
        self.rep == 0
    }

    /// Whether the element is 1
    pub fn is_one(&self) -> bool {
        self.rep == 1
    }

    /// Multiplicative inverse; fails with [`Error::InvMod`] when
    /// `gcd(rep, p) != 1`
    pub fn inv(&self) -> Result<ModInt64> {
        Ok(ModInt64 {
            ring: self.ring,
            rep: self.ring.inv_word(self.rep)?,
        })
    }

    /// Division, defined as `self * inv(divisor)`
    pub fn div(&self, divisor: &ModInt64) -> Result<ModInt64> {
        self.same_ring_check(divisor, "division");
        Ok(*self * divisor.inv()?)
    }

    /// Raise to a signed power; a negative exponent inverts first
    pub fn pow(&self, exponent: i64) -> Result<ModInt64> {
        let base = if exponent < 0 { self.inv()? } else { *self };
        Ok(ModInt64 {
            ring: self.ring,
            rep: self.ring.pow_word(base.rep, exponent.unsigned_abs()),
        })
    }

    fn same_ring_check(&self, other: &ModInt64, operation: &str) {
        if self.ring != other.ring {
            panic!(
                "{} is only defined for elements of the same ring: moduli {} and {}",
                operation, self.ring.modulus, other.ring.modulus
            );
        }
    }
}

impl PartialEq for ModInt64 {
    fn eq(&self, other: &Self) -> bool {
        self.rep == other.rep
    }
}

impl Eq for ModInt64 {}

impl Hash for ModInt64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rep.hash(state);
    }
}

impl fmt::Display for ModInt64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rep)
    }
}

impl Add for ModInt64 {
    type Output = ModInt64;

    fn add(self, other: Self) -> ModInt64 {
        self.same_ring_check(&other, "addition");
        ModInt64 {
            ring: self.ring,
            rep: self.ring.add(&self.rep, &other.rep),
        }
    }
}

impl Sub for ModInt64 {
    type Output = ModInt64;

    fn sub(self, other: Self) -> ModInt64 {
        self.same_ring_check(&other, "subtraction");
        ModInt64 {
            ring: self.ring,
            rep: self.ring.sub(&self.rep, &other.rep),
        }
    }
}

impl Mul for ModInt64 {
    type Output = ModInt64;

    fn mul(self, other: Self) -> ModInt64 {
        self.same_ring_check(&other, "multiplication");
        ModInt64 {
            ring: self.ring,
            rep: self.ring.mul(&self.rep, &other.rep),
        }
    }
}

impl Neg for ModInt64 {
    type Output = ModInt64;

    fn neg(self) -> ModInt64 {
        ModInt64 {
            ring: self.ring,
            rep: self.ring.neg(&self.rep),
        }
    }
}
