//! Prime-field arithmetic over arbitrary-precision moduli

use alloc::sync::Arc;

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer as NumInteger;
use num_traits::{One, Zero};
use rand::RngCore;

use zring_api::error::{Error, Result};
use zring_api::traits::{Field, FiniteField, Ring};

use crate::bigint::{rendered, Integer};

/// Descriptor of the ring `Z/pZ` for an arbitrary-precision modulus
///
/// The modulus is shared behind an `Arc`, so cloning the descriptor (which
/// every element does) is cheap. For field semantics `p` should be prime;
/// a composite modulus still yields a well-defined ring, with inversion
/// failing exactly on the residues that share a factor with `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModRing {
    modulus: Arc<BigUint>,
}

impl ModRing {
    /// Create a ring descriptor; the modulus must be greater than 1
    pub fn new(modulus: &Integer) -> Result<Self> {
        if modulus.0 <= BigInt::one() {
            return Err(Error::InvalidModulus {
                modulus: rendered(modulus),
            });
        }
        let magnitude = modulus.0.magnitude().clone();
        Ok(ModRing {
            modulus: Arc::new(magnitude),
        })
    }

    /// The modulus as a signed integer
    pub fn modulus(&self) -> Integer {
        Integer(BigInt::from((*self.modulus).clone()))
    }

    /// The modulus as an unsigned magnitude
    pub fn modulus_uint(&self) -> &BigUint {
        &self.modulus
    }

    /// Canonical residue of an arbitrary signed integer
    pub(crate) fn reduce_int(&self, value: &BigInt) -> BigUint {
        let p = BigInt::from((*self.modulus).clone());
        value
            .mod_floor(&p)
            .to_biguint()
            .expect("floor residue for a positive modulus is non-negative")
    }

    pub(crate) fn inv_uint(&self, a: &BigUint) -> Result<BigUint> {
        let a_int = BigInt::from(a.clone());
        let p_int = BigInt::from((*self.modulus).clone());
        // Both operands are non-negative, so the gcd comes out non-negative
        let eg = a_int.extended_gcd(&p_int);
        if !eg.gcd.is_one() {
            return Err(Error::InvMod {
                value: rendered(a),
                modulus: rendered(&self.modulus),
            });
        }
        Ok(self.reduce_int(&eg.x))
    }
}

impl Ring for ModRing {
    type Elem = BigUint;

    fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    fn one(&self) -> BigUint {
        // The ring one; for the degenerate modulus this cannot occur since
        // construction requires p > 1
        BigUint::one()
    }

    fn is_zero(&self, a: &BigUint) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &BigUint) -> bool {
        a.is_one()
    }

    fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let sum = a + b;
        if sum >= *self.modulus {
            sum - &*self.modulus
        } else {
            sum
        }
    }

    fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a >= b {
            a - b
        } else {
            a + &*self.modulus - b
        }
    }

    fn neg(&self, a: &BigUint) -> BigUint {
        if a.is_zero() {
            BigUint::zero()
        } else {
            &*self.modulus - a
        }
    }

    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &*self.modulus
    }

    fn from_i64(&self, n: i64) -> BigUint {
        self.reduce_int(&BigInt::from(n))
    }

    fn try_div(&self, a: &BigUint, b: &BigUint) -> Option<BigUint> {
        let inv = self.inv_uint(b).ok()?;
        Some(self.mul(a, &inv))
    }

    fn fmt_elem(&self, a: &BigUint, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", a)
    }
}

impl Field for ModRing {
    fn inv(&self, a: &BigUint) -> Result<BigUint> {
        self.inv_uint(a)
    }
}

impl FiniteField for ModRing {
    fn order(&self) -> BigUint {
        (*self.modulus).clone()
    }

    fn random_elem<G: RngCore + ?Sized>(&self, rng: &mut G) -> BigUint {
        rng.gen_biguint_below(&self.modulus)
    }
}

/// An element of `Z/pZ`: the canonical residue in `[0, p)` plus its ring
///
/// Equality and hashing use only the representative.
#[derive(Debug, Clone)]
pub struct ModInt {
    ring: ModRing,
    rep: BigUint,
}

impl ModInt {
    /// Construct under the thread-local modulus context
    ///
    /// Fails with [`Error::InvalidModulus`] if no modulus has been
    /// initialized on this thread.
    #[cfg(feature = "std")]
    pub fn new<T: Into<Integer>>(value: T) -> Result<Self> {
        let ring = crate::context::zp::current()?;
        Ok(Self::new_in(&ring, value))
    }

    /// Construct in an explicit ring, reducing into `[0, p)`
    pub fn new_in<T: Into<Integer>>(ring: &ModRing, value: T) -> Self {
        let value = value.into();
        let rep = ring.reduce_int(&value.0);
        ModInt {
            ring: ring.clone(),
            rep,
        }
    }

    /// The zero of a ring
    pub fn zero_in(ring: &ModRing) -> Self {
        ModInt {
            ring: ring.clone(),
            rep: BigUint::zero(),
        }
    }

    /// The one of a ring
    pub fn one_in(ring: &ModRing) -> Self {
        ModInt {
            ring: ring.clone(),
            rep: BigUint::one(),
        }
    }

    /// The canonical representative, in `[0, p)`
    pub fn rep(&self) -> Integer {
        Integer(BigInt::from(self.rep.clone()))
    }

    /// The representative as an unsigned magnitude
    pub fn rep_uint(&self) -> &BigUint {
        &self.rep
    }

    /// The ring this element belongs to
    pub fn ring(&self) -> &ModRing {
        &self.ring
    }

    /// The modulus of this element's ring
    pub fn modulus(&self) -> Integer {
        self.ring.modulus()
    }

    /// Whether the element is 0
    pub fn is_zero(&self) -> bool {
        self.rep.is_zero()
    }

    /// Whether the element is 1
    pub fn is_one(&self) -> bool {
        self.rep.is_one()
    }

    /// Multiplicative inverse via the extended Euclidean algorithm
    ///
    /// Fails with [`Error::InvMod`] carrying the representative and the
    /// modulus when `gcd(rep, p) != 1`.
    pub fn inv(&self) -> Result<ModInt> {
        let rep = self.ring.inv_uint(&self.rep)?;
        Ok(ModInt {
            ring: self.ring.clone(),
            rep,
        })
    }

    /// Division, defined as `self * inv(divisor)`; fails like [`inv`]
    ///
    /// [`inv`]: ModInt::inv
    pub fn div(&self, divisor: &ModInt) -> Result<ModInt> {
        self.same_ring_check(divisor, "division");
        Ok(self * &divisor.inv()?)
    }

    /// Raise to a signed power; a negative exponent inverts first
    pub fn pow(&self, exponent: i64) -> Result<ModInt> {
        let base = if exponent < 0 { self.inv()? } else { self.clone() };
        let e = BigUint::from(exponent.unsigned_abs());
        let rep = base.rep.modpow(&e, self.ring.modulus_uint());
        Ok(ModInt {
            ring: self.ring.clone(),
            rep,
        })
    }

    fn same_ring_check(&self, other: &ModInt, operation: &str) {
        if self.ring != other.ring {
            panic!(
                "{} is only defined for elements of the same ring: moduli {} and {}",
                operation,
                self.ring.modulus_uint(),
                other.ring.modulus_uint()
            );
        }
    }
}

impl PartialEq for ModInt {
    fn eq(&self, other: &Self) -> bool {
        self.rep == other.rep
    }
}

impl Eq for ModInt {}

impl Hash for ModInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rep.hash(state);
    }
}

impl fmt::Display for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rep)
    }
}

impl Add for &ModInt {
    type Output = ModInt;

    fn add(self, other: Self) -> ModInt {
        self.same_ring_check(other, "addition");
        ModInt {
            ring: self.ring.clone(),
            rep: self.ring.add(&self.rep, &other.rep),
        }
    }
}

impl Add for ModInt {
    type Output = ModInt;

    fn add(self, other: Self) -> ModInt {
        (&self).add(&other)
    }
}

impl Sub for &ModInt {
    type Output = ModInt;

    fn sub(self, other: Self) -> ModInt {
        self.same_ring_check(other, "subtraction");
        ModInt {
            ring: self.ring.clone(),
            rep: self.ring.sub(&self.rep, &other.rep),
        }
    }
}

impl Sub for ModInt {
    type Output = ModInt;

    fn sub(self, other: Self) -> ModInt {
        (&self).sub(&other)
    }
}

impl Mul for &ModInt {
    type Output = ModInt;

    fn mul(self, other: Self) -> ModInt {
        self.same_ring_check(other, "multiplication");
        ModInt {
            ring: self.ring.clone(),
            rep: self.ring.mul(&self.rep, &other.rep),
        }
    }
}

impl Mul for ModInt {
    type Output = ModInt;

    fn mul(self, other: Self) -> ModInt {
        (&self).mul(&other)
    }
}

impl Neg for &ModInt {
    type Output = ModInt;

    fn neg(self) -> ModInt {
        ModInt {
            ring: self.ring.clone(),
            rep: self.ring.neg(&self.rep),
        }
    }
}

impl Neg for ModInt {
    type Output = ModInt;

    fn neg(self) -> ModInt {
        (&self).neg()
    }
}
