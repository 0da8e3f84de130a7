//! Dense polynomials over a generic coefficient ring
//!
//! [`Poly`] stores an ordered coefficient sequence, index 0 being the
//! constant term, and keeps the canonical trimmed form: no trailing zero
//! coefficients, ever. Canonical form is what makes equality, hashing,
//! degree, and Euclidean-algorithm termination well defined.
//!
//! One algorithm body serves every coefficient type: the integers
//! ([`IntegerRing`]), the modular rings, GF(2), and even the GF(p^k)
//! extension descriptor, which is itself a [`Ring`].
//!
//! [`IntegerRing`]: crate::bigint::IntegerRing

use alloc::vec;
use alloc::vec::Vec;

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg, Sub};

use zring_api::error::{Error, Result};
use zring_api::traits::Ring;

mod euclid;
mod irreducible;
mod sampling;

pub use euclid::FieldPolyExt;
pub use irreducible::FiniteFieldPolyExt;
pub use sampling::{random_monic, random_poly};


/// A dense polynomial over the coefficient ring `R`
///
/// Invariant: `coeffs` never ends in a zero of `R`, so the zero polynomial
/// is the empty sequence and `degree` is −1 for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Poly<R: Ring> {
    ring: R,
    coeffs: Vec<R::Elem>,
}

impl<R: Ring> Poly<R> {
    /// The zero polynomial
    pub fn new(ring: R) -> Self {
        Poly {
            ring,
            coeffs: Vec::new(),
        }
    }

    /// Build from a coefficient sequence (constant term first), trimming
    /// trailing zeros
    pub fn from_coeffs(ring: R, coeffs: Vec<R::Elem>) -> Self {
        let mut poly = Poly { ring, coeffs };
        poly.trim();
        poly
    }

    /// The constant polynomial `c`
    pub fn constant(ring: R, c: R::Elem) -> Self {
        Poly::from_coeffs(ring, vec![c])
    }

    /// The constant polynomial 1
    pub fn one(ring: R) -> Self {
        let c = ring.one();
        Poly::constant(ring, c)
    }

    /// The monomial `x`
    pub fn x(ring: R) -> Self {
        let coeffs = vec![ring.zero(), ring.one()];
        Poly::from_coeffs(ring, coeffs)
    }

    /// The monomial `c * x^degree`
    pub fn monomial(ring: R, degree: usize, c: R::Elem) -> Self {
        let mut poly = Poly::new(ring);
        poly.set_coeff(degree, c);
        poly
    }

    /// The coefficient ring descriptor
    pub fn ring(&self) -> &R {
        &self.ring
    }

    /// The trimmed coefficient slice, constant term first
    pub fn coeffs(&self) -> &[R::Elem] {
        &self.coeffs
    }

    /// Degree: −1 for the zero polynomial, else the index of the highest
    /// nonzero coefficient
    pub fn degree(&self) -> i64 {
        self.coeffs.len() as i64 - 1
    }

    /// Whether this is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Whether this is the constant polynomial 1
    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.ring.is_one(&self.coeffs[0])
    }

    /// The coefficient of `x^i`; the ring zero for any `i` beyond the
    /// degree (reading past the end is never an error)
    pub fn coeff(&self, i: usize) -> R::Elem {
        match self.coeffs.get(i) {
            Some(c) => c.clone(),
            None => self.ring.zero(),
        }
    }

    /// The leading coefficient, if the polynomial is nonzero
    pub fn lead(&self) -> Option<&R::Elem> {
        self.coeffs.last()
    }

    /// Write the coefficient of `x^i`, zero-extending if needed and
    /// re-trimming afterwards
    ///
    /// Setting the leading coefficient to zero therefore lowers the degree.
    pub fn set_coeff(&mut self, i: usize, c: R::Elem) {
        if i >= self.coeffs.len() {
            if self.ring.is_zero(&c) {
                return;
            }
            self.coeffs.resize(i + 1, self.ring.zero());
        }
        self.coeffs[i] = c;
        self.trim();
    }

    /// Multiply every coefficient by `c`
    pub fn mul_scalar(&self, c: &R::Elem) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .map(|a| self.ring.mul(a, c))
            .collect::<Vec<_>>();
        Poly::from_coeffs(self.ring.clone(), coeffs)
    }

    /// Multiply by `x^k`
    pub fn mul_xk(&self, k: usize) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let mut coeffs = vec![self.ring.zero(); k];
        coeffs.extend(self.coeffs.iter().cloned());
        Poly {
            ring: self.ring.clone(),
            coeffs,
        }
    }

    /// Evaluate at `x` with Horner's rule
    pub fn eval(&self, x: &R::Elem) -> R::Elem {
        let mut acc = self.ring.zero();
        for c in self.coeffs.iter().rev() {
            acc = self.ring.add(&self.ring.mul(&acc, x), c);
        }
        acc
    }

    /// Formal derivative
    ///
    /// Coefficient `i` contributes `i * coeff(i)` to coefficient `i - 1`,
    /// the factor taken in the coefficient ring — so over characteristic p
    /// the derivative of a nonzero polynomial can be zero.
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Poly::new(self.ring.clone());
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| self.ring.mul(c, &self.ring.from_i64(i as i64)))
            .collect::<Vec<_>>();
        Poly::from_coeffs(self.ring.clone(), coeffs)
    }

    /// Quotient and remainder of classical long division
    ///
    /// Fails with [`Error::DivisionByZero`] when `divisor` is zero. Over a
    /// field coefficient type the result always satisfies
    /// `self == q * divisor + r` with `deg r < deg divisor`. Over a
    /// non-field ring such as the integers, division stops at the first
    /// step whose trial quotient coefficient is not exactly divisible; the
    /// returned pair still satisfies `self == q * divisor + r`, but the
    /// remainder degree may then be `>= deg divisor`.
    pub fn divrem(&self, divisor: &Poly<R>) -> Result<(Poly<R>, Poly<R>)> {
        self.same_ring_check(divisor, "division");
        if divisor.is_zero() {
            return Err(Error::DivisionByZero {
                operation: "polynomial divrem",
            });
        }
        let dlen = divisor.coeffs.len();
        let mut r = self.clone();
        if self.coeffs.len() < dlen {
            return Ok((Poly::new(self.ring.clone()), r));
        }
        let mut q = vec![self.ring.zero(); self.coeffs.len() - dlen + 1];
        while r.coeffs.len() >= dlen {
            let rlead = &r.coeffs[r.coeffs.len() - 1];
            let dlead = &divisor.coeffs[dlen - 1];
            let Some(c) = self.ring.try_div(rlead, dlead) else {
                break;
            };
            let k = r.coeffs.len() - dlen;
            for j in 0..dlen {
                let t = self.ring.mul(&c, &divisor.coeffs[j]);
                r.coeffs[k + j] = self.ring.sub(&r.coeffs[k + j], &t);
            }
            q[k] = c;
            // The leading term cancels exactly; trimming may drop more
            r.trim();
        }
        Ok((Poly::from_coeffs(self.ring.clone(), q), r))
    }

    /// Quotient of [`divrem`]
    ///
    /// [`divrem`]: Poly::divrem
    pub fn div(&self, divisor: &Poly<R>) -> Result<Poly<R>> {
        Ok(self.divrem(divisor)?.0)
    }

    /// Remainder of [`divrem`]
    ///
    /// [`divrem`]: Poly::divrem
    pub fn rem(&self, divisor: &Poly<R>) -> Result<Poly<R>> {
        Ok(self.divrem(divisor)?.1)
    }

    pub(crate) fn trim(&mut self) {
        while let Some(last) = self.coeffs.last() {
            if self.ring.is_zero(last) {
                self.coeffs.pop();
            } else {
                break;
            }
        }
    }

    pub(crate) fn same_ring_check(&self, other: &Poly<R>, operation: &str) {
        if self.ring != other.ring {
            panic!(
                "polynomial {} is only defined over the same coefficient ring",
                operation
            );
        }
    }

    fn add_impl(&self, other: &Poly<R>, negate_rhs: bool) -> Poly<R> {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut coeffs = Vec::with_capacity(len);
        for i in 0..len {
            let a = self.coeff(i);
            let b = other.coeff(i);
            let b = if negate_rhs { self.ring.neg(&b) } else { b };
            coeffs.push(self.ring.add(&a, &b));
        }
        Poly::from_coeffs(self.ring.clone(), coeffs)
    }

    fn mul_impl(&self, other: &Poly<R>) -> Poly<R> {
        if self.is_zero() || other.is_zero() {
            return Poly::new(self.ring.clone());
        }
        let mut coeffs = vec![self.ring.zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                let t = self.ring.mul(a, b);
                coeffs[i + j] = self.ring.add(&coeffs[i + j], &t);
            }
        }
        // Leading products can vanish over rings with zero divisors
        Poly::from_coeffs(self.ring.clone(), coeffs)
    }
}

impl<R: Ring> Hash for Poly<R>
where
    R::Elem: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coeffs.len().hash(state);
        for c in &self.coeffs {
            c.hash(state);
        }
    }
}

impl<R: Ring> fmt::Display for Poly<R> {
    /// Bracketed, space-separated coefficients from the constant term up,
    /// e.g. `[1 2 3]` for `1 + 2x + 3x^2`; the zero polynomial is `[0]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        if self.is_zero() {
            self.ring.fmt_elem(&self.ring.zero(), f)?;
        } else {
            for (i, c) in self.coeffs.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                self.ring.fmt_elem(c, f)?;
            }
        }
        write!(f, "]")
    }
}

impl<R: Ring> Add for &Poly<R> {
    type Output = Poly<R>;

    fn add(self, other: Self) -> Poly<R> {
        self.same_ring_check(other, "addition");
        self.add_impl(other, false)
    }
}

impl<R: Ring> Add for Poly<R> {
    type Output = Poly<R>;

    fn add(self, other: Self) -> Poly<R> {
        (&self).add(&other)
    }
}

impl<R: Ring> Sub for &Poly<R> {
    type Output = Poly<R>;

    fn sub(self, other: Self) -> Poly<R> {
        self.same_ring_check(other, "subtraction");
        self.add_impl(other, true)
    }
}

impl<R: Ring> Sub for Poly<R> {
    type Output = Poly<R>;

    fn sub(self, other: Self) -> Poly<R> {
        (&self).sub(&other)
    }
}

impl<R: Ring> Mul for &Poly<R> {
    type Output = Poly<R>;

    fn mul(self, other: Self) -> Poly<R> {
        self.same_ring_check(other, "multiplication");
        self.mul_impl(other)
    }
}

impl<R: Ring> Mul for Poly<R> {
    type Output = Poly<R>;

    fn mul(self, other: Self) -> Poly<R> {
        (&self).mul(&other)
    }
}

impl<R: Ring> Neg for &Poly<R> {
    type Output = Poly<R>;

    fn neg(self) -> Poly<R> {
        let coeffs = self
            .coeffs
            .iter()
            .map(|c| self.ring.neg(c))
            .collect::<Vec<_>>();
        Poly::from_coeffs(self.ring.clone(), coeffs)
    }
}

impl<R: Ring> Neg for Poly<R> {
    type Output = Poly<R>;

    fn neg(self) -> Poly<R> {
        (&self).neg()
    }
}
