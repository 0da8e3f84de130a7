//! Property tests for the polynomial ring: division law, GCD monicity,
//! Bezout identity, and ring homomorphisms

use proptest::collection::vec;
use proptest::prelude::*;

use zring_algorithms::bigint::Integer;
use zring_algorithms::poly::FieldPolyExt;
use zring_api::traits::Ring;
use zring_tests::{poly_mod, poly_zz, ring17};

fn coeffs() -> impl Strategy<Value = Vec<i64>> {
    vec(-50i64..50, 0..8)
}

proptest! {
    #[test]
    fn field_division_law(f in coeffs(), g in coeffs()) {
        let ring = ring17();
        let f = poly_mod(&ring, &f);
        let g = poly_mod(&ring, &g);
        prop_assume!(!g.is_zero());

        let (q, r) = f.divrem(&g).unwrap();
        prop_assert_eq!(&(&q * &g) + &r, f);
        prop_assert!(r.degree() < g.degree());
    }

    #[test]
    fn field_gcd_is_monic_and_divides(f in coeffs(), g in coeffs()) {
        let ring = ring17();
        let f = poly_mod(&ring, &f);
        let g = poly_mod(&ring, &g);

        let d = f.gcd(&g).unwrap();
        if d.is_zero() {
            prop_assert!(f.is_zero() && g.is_zero());
        } else {
            prop_assert!(ring17().is_one(d.lead().unwrap()));
            if !f.is_zero() {
                prop_assert!(f.rem(&d).unwrap().is_zero());
            }
            if !g.is_zero() {
                prop_assert!(g.rem(&d).unwrap().is_zero());
            }
        }
    }

    #[test]
    fn field_xgcd_bezout(f in coeffs(), g in coeffs()) {
        let ring = ring17();
        let f = poly_mod(&ring, &f);
        let g = poly_mod(&ring, &g);

        let (d, s, t) = f.xgcd(&g).unwrap();
        prop_assert_eq!(&(&s * &f) + &(&t * &g), d);
    }

    #[test]
    fn integer_divrem_identity_even_when_partial(f in coeffs(), g in coeffs()) {
        let f = poly_zz(&f);
        let g = poly_zz(&g);
        prop_assume!(!g.is_zero());

        // Over Z the quotient may stop early, but the identity always holds
        let (q, r) = f.divrem(&g).unwrap();
        prop_assert_eq!(&(&q * &g) + &r, f);
    }

    #[test]
    fn integer_pseudo_division_bounds(f in coeffs(), g in coeffs()) {
        let f = poly_zz(&f);
        let g = poly_zz(&g);
        prop_assume!(!g.is_zero());
        prop_assume!(f.degree() >= g.degree());

        let (q, r) = f.pseudo_divrem(&g).unwrap();
        let steps = (f.degree() - g.degree() + 1) as u64;
        let scale = g.lead().unwrap().pow(steps);
        prop_assert_eq!(&(&q * &g) + &r, f.mul_scalar(&scale));
        prop_assert!(r.degree() < g.degree());
    }

    #[test]
    fn integer_gcd_divides_both(f in coeffs(), g in coeffs()) {
        let f = poly_zz(&f);
        let g = poly_zz(&g);
        let d = f.gcd(&g).unwrap();

        if d.is_zero() {
            prop_assert!(f.is_zero() && g.is_zero());
        } else {
            // d | f and d | g with exact schoolbook division
            prop_assert!(f.rem(&d).unwrap().is_zero());
            prop_assert!(g.rem(&d).unwrap().is_zero());
            prop_assert!(d.lead().unwrap().sign() > 0);
        }
    }

    #[test]
    fn evaluation_is_a_ring_homomorphism(f in coeffs(), g in coeffs(), x in -20i64..20) {
        let f = poly_zz(&f);
        let g = poly_zz(&g);
        let x = Integer::from(x);

        let sum = (&f + &g).eval(&x);
        prop_assert_eq!(sum, &f.eval(&x) + &g.eval(&x));
        let prod = (&f * &g).eval(&x);
        prop_assert_eq!(prod, &f.eval(&x) * &g.eval(&x));
    }

    #[test]
    fn derivative_satisfies_the_product_rule(f in coeffs(), g in coeffs()) {
        let f = poly_zz(&f);
        let g = poly_zz(&g);

        let lhs = (&f * &g).derivative();
        let rhs = &(&f.derivative() * &g) + &(&f * &g.derivative());
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn multiplication_degree_adds_over_a_domain(f in coeffs(), g in coeffs()) {
        let f = poly_zz(&f);
        let g = poly_zz(&g);
        prop_assume!(!f.is_zero() && !g.is_zero());
        prop_assert_eq!((&f * &g).degree(), f.degree() + g.degree());
    }
}
