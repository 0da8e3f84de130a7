//! Irreducibility testing over finite fields
//!
//! Uses the Ben-Or variant of the distinct-degree test: a squarefree `f`
//! of degree n over GF(q) is irreducible exactly when it shares no factor
//! with `x^(q^i) - x` for any `i <= n/2`, since that polynomial is the
//! product of all irreducibles whose degree divides `i`. The iterated
//! `q`-th powers are computed by modular square-and-multiply, so the test
//! is complete for every degree, not just small ones.

use zring_api::error::Result;
use zring_api::traits::FiniteField;

use super::{FieldPolyExt, Poly};

/// Operations available when the coefficients form a finite field
pub trait FiniteFieldPolyExt<F: FiniteField> {
    /// Whether the polynomial is irreducible over its coefficient field
    ///
    /// Constants (including zero) are not irreducible; every degree-1
    /// polynomial is.
    fn is_irreducible(&self) -> Result<bool>;
}

impl<F: FiniteField> FiniteFieldPolyExt<F> for Poly<F> {
    fn is_irreducible(&self) -> Result<bool> {
        let n = self.degree();
        if n <= 0 {
            return Ok(false);
        }
        if n == 1 {
            return Ok(true);
        }

        // Squarefree fast path: a vanishing derivative means a perfect
        // p-th power, and a repeated factor shows up in gcd(f, f')
        let d = self.derivative();
        if d.is_zero() {
            return Ok(false);
        }
        if self.gcd(&d)?.degree() > 0 {
            return Ok(false);
        }

        let q = self.ring().order();
        let x = Poly::x(self.ring().clone());
        let mut h = x.clone();
        for _ in 0..(n as u64) / 2 {
            // h = x^(q^i) mod f, by raising the previous power to the q-th
            h = h.powmod(&q, self)?;
            let probe = &h - &x;
            // gcd(f, x^(q^i) - x) collects all factors of degree dividing i
            if self.gcd(&probe)?.degree() != 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
