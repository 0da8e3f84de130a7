//! Euclidean algorithms over field coefficients, and the
//! content/primitive-part machinery for integer polynomials

use core::mem;

use num_bigint::BigUint;

use zring_api::error::{Error, Result};
use zring_api::traits::Field;

use super::Poly;
use crate::bigint::{Integer, IntegerRing};

/// Euclidean operations available when the coefficients form a field
pub trait FieldPolyExt<F: Field> {
    /// Scale so the leading coefficient is 1; the zero polynomial stays zero
    fn make_monic(&self) -> Result<Poly<F>>;

    /// Greatest common divisor by the classical Euclidean algorithm
    ///
    /// The result is either zero (when both inputs are zero) or monic.
    fn gcd(&self, other: &Poly<F>) -> Result<Poly<F>>;

    /// Extended GCD: `(g, s, t)` with `s * self + t * other == g`
    ///
    /// `g` is not normalized to monic; callers that need the monic gcd can
    /// scale all three by the inverse of `g`'s leading coefficient.
    fn xgcd(&self, other: &Poly<F>) -> Result<(Poly<F>, Poly<F>, Poly<F>)>;

    /// `self^exponent mod modulus` by square-and-multiply
    fn powmod(&self, exponent: &BigUint, modulus: &Poly<F>) -> Result<Poly<F>>;
}

impl<F: Field> FieldPolyExt<F> for Poly<F> {
    fn make_monic(&self) -> Result<Poly<F>> {
        match self.lead() {
            None => Ok(self.clone()),
            Some(lc) if self.ring.is_one(lc) => Ok(self.clone()),
            Some(lc) => {
                let scale = self.ring.inv(lc)?;
                Ok(self.mul_scalar(&scale))
            }
        }
    }

    fn gcd(&self, other: &Poly<F>) -> Result<Poly<F>> {
        self.same_ring_check(other, "gcd");
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.rem(&b)?;
            a = mem::replace(&mut b, r);
        }
        a.make_monic()
    }

    fn xgcd(&self, other: &Poly<F>) -> Result<(Poly<F>, Poly<F>, Poly<F>)> {
        self.same_ring_check(other, "xgcd");
        let field = self.ring.clone();
        let mut r0 = self.clone();
        let mut r1 = other.clone();
        let mut s0 = Poly::one(field.clone());
        let mut s1 = Poly::new(field.clone());
        let mut t0 = Poly::new(field.clone());
        let mut t1 = Poly::one(field);
        while !r1.is_zero() {
            let (q, r) = r0.divrem(&r1)?;
            let s_next = &s0 - &(&q * &s1);
            let t_next = &t0 - &(&q * &t1);
            r0 = mem::replace(&mut r1, r);
            s0 = mem::replace(&mut s1, s_next);
            t0 = mem::replace(&mut t1, t_next);
        }
        Ok((r0, s0, t0))
    }

    fn powmod(&self, exponent: &BigUint, modulus: &Poly<F>) -> Result<Poly<F>> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero {
                operation: "polynomial powmod",
            });
        }
        let base = self.rem(modulus)?;
        let mut acc = Poly::one(self.ring.clone()).rem(modulus)?;
        let bits = exponent.bits();
        for i in (0..bits).rev() {
            acc = (&acc * &acc).rem(modulus)?;
            if exponent.bit(i) {
                acc = (&acc * &base).rem(modulus)?;
            }
        }
        Ok(acc)
    }
}

/// Content/primitive-part operations, specific to integer coefficients
impl Poly<IntegerRing> {
    /// The content: non-negative GCD of all coefficients (0 for the zero
    /// polynomial)
    pub fn content(&self) -> Integer {
        self.coeffs
            .iter()
            .fold(Integer::zero(), |acc, c| acc.gcd(c))
    }

    /// The primitive part `self / content(self)`, preserving the leading
    /// coefficient's sign
    pub fn primitive_part(&self) -> Poly<IntegerRing> {
        if self.is_zero() {
            return self.clone();
        }
        let content = self.content();
        let coeffs = self
            .coeffs
            .iter()
            .map(|c| Integer(&c.0 / &content.0))
            .collect();
        Poly::from_coeffs(IntegerRing, coeffs)
    }

    /// Pseudo-division: always-defined division after scaling by a power
    /// of the divisor's leading coefficient
    ///
    /// Returns `(q, r)` with `lc(g)^(deg f - deg g + 1) * f == q * g + r`
    /// and `deg r < deg g`. When `deg f < deg g` no scaling is applied and
    /// the result is `(0, f)`.
    pub fn pseudo_divrem(
        &self,
        divisor: &Poly<IntegerRing>,
    ) -> Result<(Poly<IntegerRing>, Poly<IntegerRing>)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero {
                operation: "polynomial pseudo-division",
            });
        }
        if self.degree() < divisor.degree() {
            return Ok((Poly::new(IntegerRing), self.clone()));
        }
        let steps = (self.degree() - divisor.degree() + 1) as u64;
        let lc = &divisor.coeffs[divisor.coeffs.len() - 1];
        let scaled = self.mul_scalar(&lc.pow(steps));
        // After scaling, every trial quotient coefficient divides exactly
        scaled.divrem(divisor)
    }

    /// GCD via the primitive remainder sequence
    ///
    /// The integer content is factored out of both operands, the primitive
    /// parts run through a pseudo-remainder loop, and the result is
    /// recombined with `gcd(content(f), content(g))`. The leading
    /// coefficient of a nonzero result is always positive.
    pub fn gcd(&self, other: &Poly<IntegerRing>) -> Result<Poly<IntegerRing>> {
        if self.is_zero() {
            return Ok(other.normalize_sign());
        }
        if other.is_zero() {
            return Ok(self.normalize_sign());
        }
        let c = self.content().gcd(&other.content());
        let mut a = self.primitive_part();
        let mut b = other.primitive_part();
        if a.degree() < b.degree() {
            mem::swap(&mut a, &mut b);
        }
        while !b.is_zero() {
            let (_, r) = a.pseudo_divrem(&b)?;
            a = mem::replace(&mut b, r.primitive_part());
        }
        Ok(a.normalize_sign().mul_scalar(&c))
    }

    fn normalize_sign(&self) -> Poly<IntegerRing> {
        match self.lead() {
            Some(lc) if lc.sign() < 0 => -self,
            _ => self.clone(),
        }
    }
}
