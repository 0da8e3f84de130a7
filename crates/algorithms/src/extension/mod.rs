//! Extension fields GF(p^k) as polynomial quotient rings
//!
//! An [`ExtRing`] is the quotient of the polynomial ring over a prime
//! field by a degree-k modulus polynomial P: elements are polynomials of
//! degree below k, and every arithmetic result is reduced modulo P.
//! When P is irreducible the quotient is the field of p^k elements;
//! inversion runs the polynomial extended-Euclidean algorithm, and a
//! non-constant gcd there is the tell that the configured modulus was not
//! irreducible after all.
//!
//! Because `ExtRing` implements the same capability traits as the base
//! rings, `Poly<ExtRing>` gives polynomial arithmetic over GF(p^k) —
//! division, gcd, irreducibility testing — with no further code.

use alloc::format;

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use rand::RngCore;

use zring_api::error::{Error, Result};
use zring_api::traits::{Field, FiniteField, Ring};

use crate::bigint::rendered;
use crate::modular::ModRing;
use crate::poly::{random_poly, FieldPolyExt, FiniteFieldPolyExt, Poly};


/// Descriptor of GF(p^k): a prime-field polynomial ring modulo P
///
/// The modulus is normalized to monic at construction, which keeps every
/// internal reduction total.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtRing {
    base: ModRing,
    modulus: Poly<ModRing>,
}

impl ExtRing {
    /// Create an extension descriptor from the defining polynomial
    ///
    /// Requires degree >= 1 and an invertible leading coefficient (the
    /// modulus is scaled to monic). A modulus that fails the
    /// irreducibility test is accepted with a warning rather than an
    /// error: arithmetic in the quotient ring is still well defined, and
    /// inversion reports [`Error::InvariantViolation`] if the defect is
    /// ever exercised.
    pub fn new(modulus: Poly<ModRing>) -> Result<Self> {
        if modulus.degree() < 1 {
            return Err(Error::InvalidModulus {
                modulus: rendered(&modulus),
            });
        }
        let base = modulus.ring().clone();
        let modulus = modulus.make_monic().map_err(|_| Error::InvalidModulus {
            modulus: rendered(&modulus),
        })?;
        match modulus.is_irreducible() {
            Ok(true) => {}
            Ok(false) => {
                log::warn!(
                    "extension modulus {} is not irreducible over Z/{}; inversion may fail",
                    modulus,
                    base.modulus()
                );
            }
            Err(e) => {
                log::warn!(
                    "could not verify irreducibility of extension modulus {}: {}",
                    modulus,
                    e
                );
            }
        }
        Ok(ExtRing { base, modulus })
    }

    /// The underlying prime-field descriptor
    pub fn base(&self) -> &ModRing {
        &self.base
    }

    /// The (monic) defining polynomial P
    pub fn modulus_poly(&self) -> &Poly<ModRing> {
        &self.modulus
    }

    /// The extension degree k
    pub fn degree(&self) -> usize {
        self.modulus.degree() as usize
    }

    pub(crate) fn reduce(&self, value: &Poly<ModRing>) -> Poly<ModRing> {
        if value.degree() < self.modulus.degree() {
            return value.clone();
        }
        value
            .rem(&self.modulus)
            .expect("extension modulus is nonzero by construction")
    }
}

impl Ring for ExtRing {
    type Elem = Poly<ModRing>;

    fn zero(&self) -> Poly<ModRing> {
        Poly::new(self.base.clone())
    }

    fn one(&self) -> Poly<ModRing> {
        Poly::one(self.base.clone())
    }

    fn is_zero(&self, a: &Poly<ModRing>) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Poly<ModRing>) -> bool {
        a.is_one()
    }

    fn add(&self, a: &Poly<ModRing>, b: &Poly<ModRing>) -> Poly<ModRing> {
        // Reduced inputs stay below degree k under addition
        a + b
    }

    fn sub(&self, a: &Poly<ModRing>, b: &Poly<ModRing>) -> Poly<ModRing> {
        a - b
    }

    fn neg(&self, a: &Poly<ModRing>) -> Poly<ModRing> {
        -a
    }

    fn mul(&self, a: &Poly<ModRing>, b: &Poly<ModRing>) -> Poly<ModRing> {
        self.reduce(&(a * b))
    }

    fn from_i64(&self, n: i64) -> Poly<ModRing> {
        Poly::constant(self.base.clone(), self.base.from_i64(n))
    }

    fn try_div(&self, a: &Poly<ModRing>, b: &Poly<ModRing>) -> Option<Poly<ModRing>> {
        let inv = self.inv(b).ok()?;
        Some(self.mul(a, &inv))
    }

    fn fmt_elem(&self, a: &Poly<ModRing>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", a)
    }
}

impl Field for ExtRing {
    fn inv(&self, a: &Poly<ModRing>) -> Result<Poly<ModRing>> {
        if a.is_zero() {
            return Err(Error::InvMod {
                value: rendered(a),
                modulus: rendered(&self.modulus),
            });
        }
        let (g, s, _) = a.xgcd(&self.modulus)?;
        if g.degree() > 0 {
            // A nontrivial common factor with P can only exist when P is
            // reducible, which construction warned about
            return Err(Error::InvariantViolation {
                context: "extension-field inversion",
                details: format!(
                    "modulus {} is not irreducible: gcd with {} is {}",
                    self.modulus, a, g
                ),
            });
        }
        let scale = self.base.inv(&g.coeff(0))?;
        Ok(self.reduce(&s.mul_scalar(&scale)))
    }
}

impl FiniteField for ExtRing {
    fn order(&self) -> BigUint {
        num_traits::pow(self.base.order(), self.degree())
    }

    fn random_elem<G: RngCore + ?Sized>(&self, rng: &mut G) -> Poly<ModRing> {
        random_poly(rng, &self.base, self.degree())
    }
}

/// An element of GF(p^k): a reduced representative plus its descriptor
///
/// Equality and hashing use only the reduced representative.
#[derive(Debug, Clone)]
pub struct ExtElem {
    ring: ExtRing,
    rep: Poly<ModRing>,
}

impl ExtElem {
    /// Construct under the thread-local extension context
    #[cfg(feature = "std")]
    pub fn new(value: Poly<ModRing>) -> Result<Self> {
        let ring = crate::context::zpe::current()?;
        Ok(Self::new_in(&ring, value))
    }

    /// Construct in an explicit ring, reducing modulo P
    pub fn new_in(ring: &ExtRing, value: Poly<ModRing>) -> Self {
        ExtElem {
            ring: ring.clone(),
            rep: ring.reduce(&value),
        }
    }

    /// The zero of a ring
    pub fn zero_in(ring: &ExtRing) -> Self {
        ExtElem {
            ring: ring.clone(),
            rep: ring.zero(),
        }
    }

    /// The one of a ring
    pub fn one_in(ring: &ExtRing) -> Self {
        ExtElem {
            ring: ring.clone(),
            rep: ring.one(),
        }
    }

    /// The residue class of `x`, a generator of the representation
    pub fn gen_in(ring: &ExtRing) -> Self {
        Self::new_in(ring, Poly::x(ring.base().clone()))
    }

    /// The reduced representative, of degree below k
    pub fn rep(&self) -> &Poly<ModRing> {
        &self.rep
    }

    /// The ring this element belongs to
    pub fn ring(&self) -> &ExtRing {
        &self.ring
    }

    /// Whether the element is 0
    pub fn is_zero(&self) -> bool {
        self.rep.is_zero()
    }

    /// Whether the element is 1
    pub fn is_one(&self) -> bool {
        self.rep.is_one()
    }

    /// Multiplicative inverse via the polynomial extended-Euclidean
    /// algorithm; see [`ExtRing`] for the failure modes
    pub fn inv(&self) -> Result<ExtElem> {
        Ok(ExtElem {
            ring: self.ring.clone(),
            rep: self.ring.inv(&self.rep)?,
        })
    }

    /// Division, defined as `self * inv(divisor)`
    pub fn div(&self, divisor: &ExtElem) -> Result<ExtElem> {
        self.same_ring_check(divisor, "division");
        Ok(self * &divisor.inv()?)
    }

    /// Raise to a signed power; a negative exponent inverts first
    pub fn pow(&self, exponent: i64) -> Result<ExtElem> {
        let mut base = if exponent < 0 { self.inv()? } else { self.clone() };
        let mut e = exponent.unsigned_abs();
        let mut acc = Self::one_in(&self.ring);
        while e > 0 {
            if e & 1 == 1 {
                acc = &acc * &base;
            }
            base = &base * &base;
            e >>= 1;
        }
        Ok(acc)
    }

    fn same_ring_check(&self, other: &ExtElem, operation: &str) {
        if self.ring != other.ring {
            panic!(
                "{} is only defined for elements of the same extension field",
                operation
            );
        }
    }
}

impl PartialEq for ExtElem {
    fn eq(&self, other: &Self) -> bool {
        self.rep == other.rep
    }
}

impl Eq for ExtElem {}

impl Hash for ExtElem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rep.hash(state);
    }
}

impl fmt::Display for ExtElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rep)
    }
}

impl Add for &ExtElem {
    type Output = ExtElem;

    fn add(self, other: Self) -> ExtElem {
        self.same_ring_check(other, "addition");
        ExtElem {
            ring: self.ring.clone(),
            rep: self.ring.add(&self.rep, &other.rep),
        }
    }
}

impl Add for ExtElem {
    type Output = ExtElem;

    fn add(self, other: Self) -> ExtElem {
        (&self).add(&other)
    }
}

impl Sub for &ExtElem {
    type Output = ExtElem;

    fn sub(self, other: Self) -> ExtElem {
        self.same_ring_check(other, "subtraction");
        ExtElem {
            ring: self.ring.clone(),
            rep: self.ring.sub(&self.rep, &other.rep),
        }
    }
}

impl Sub for ExtElem {
    type Output = ExtElem;

    fn sub(self, other: Self) -> ExtElem {
        (&self).sub(&other)
    }
}

impl Mul for &ExtElem {
    type Output = ExtElem;

    fn mul(self, other: Self) -> ExtElem {
        self.same_ring_check(other, "multiplication");
        ExtElem {
            ring: self.ring.clone(),
            rep: self.ring.mul(&self.rep, &other.rep),
        }
    }
}

impl Mul for ExtElem {
    type Output = ExtElem;

    fn mul(self, other: Self) -> ExtElem {
        (&self).mul(&other)
    }
}

impl Neg for &ExtElem {
    type Output = ExtElem;

    fn neg(self) -> ExtElem {
        ExtElem {
            ring: self.ring.clone(),
            rep: self.ring.neg(&self.rep),
        }
    }
}

impl Neg for ExtElem {
    type Output = ExtElem;

    fn neg(self) -> ExtElem {
        (&self).neg()
    }
}
