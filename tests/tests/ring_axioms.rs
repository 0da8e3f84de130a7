//! Property tests for the ring and field axioms

use proptest::prelude::*;

use zring_algorithms::bigint::Integer;
use zring_algorithms::gf2::{Gf2, Gf2Ring};
use zring_algorithms::modular::{ModInt, ModInt64, ModRing, ModRing64};
use zring_api::traits::Field;

const P: i64 = 10_007;

fn ring() -> ModRing {
    ModRing::new(&Integer::from(P)).unwrap()
}

proptest! {
    #[test]
    fn addition_is_associative(a in -P..P, b in -P..P, c in -P..P) {
        let ring = ring();
        let (a, b, c) = (
            ModInt::new_in(&ring, a),
            ModInt::new_in(&ring, b),
            ModInt::new_in(&ring, c),
        );
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn addition_is_commutative(a in -P..P, b in -P..P) {
        let ring = ring();
        let (a, b) = (ModInt::new_in(&ring, a), ModInt::new_in(&ring, b));
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn multiplication_distributes(a in -P..P, b in -P..P, c in -P..P) {
        let ring = ring();
        let (a, b, c) = (
            ModInt::new_in(&ring, a),
            ModInt::new_in(&ring, b),
            ModInt::new_in(&ring, c),
        );
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn additive_inverses_cancel(a in -P..P) {
        let ring = ring();
        let a = ModInt::new_in(&ring, a);
        prop_assert!((&a + &(-&a)).is_zero());
    }

    #[test]
    fn nonzero_elements_have_inverses(a in 1..P) {
        let ring = ring();
        let a = ModInt::new_in(&ring, a);
        let inv = a.inv().unwrap();
        prop_assert!((&a * &inv).is_one());
    }

    #[test]
    fn representative_is_canonical(x in proptest::num::i64::ANY) {
        let ring = ring();
        let a = ModInt::new_in(&ring, x);
        let rep = a.rep().to_i64().unwrap();
        prop_assert!((0..P).contains(&rep));
        // Shifting by the modulus does not change the class
        if let Some(shifted) = x.checked_add(P) {
            prop_assert_eq!(a, ModInt::new_in(&ring, shifted));
        }
    }

    #[test]
    fn word_field_matches_big_field(a in -P..P, b in -P..P) {
        let big = ring();
        let word = ModRing64::new(P as u64).unwrap();
        let (ba, bb) = (ModInt::new_in(&big, a), ModInt::new_in(&big, b));
        let (wa, wb) = (ModInt64::new_in(&word, a), ModInt64::new_in(&word, b));
        prop_assert_eq!((&ba * &bb).rep().to_u64().unwrap(), (wa * wb).rep());
        prop_assert_eq!((&ba + &bb).rep().to_u64().unwrap(), (wa + wb).rep());
        prop_assert_eq!((&ba - &bb).rep().to_u64().unwrap(), (wa - wb).rep());
    }

    #[test]
    fn integer_gcdx_bezout(a in proptest::num::i32::ANY, b in proptest::num::i32::ANY) {
        let (a, b) = (Integer::from(a), Integer::from(b));
        let (d, s, t) = a.gcdx(&b);
        prop_assert_eq!(&(&a * &s) + &(&b * &t), d.clone());
        prop_assert_eq!(d, a.gcd(&b));
    }

    #[test]
    fn integer_floor_division_identity(a in proptest::num::i32::ANY, b in proptest::num::i32::ANY) {
        prop_assume!(b != 0);
        let (a, b) = (Integer::from(a), Integer::from(b));
        let (q, r) = a.divrem(&b).unwrap();
        prop_assert_eq!(&(&q * &b) + &r, a);
    }
}

#[test]
fn gf2_axioms_exhaustively() {
    let gf2 = Gf2Ring;
    let elems = [Gf2::ZERO, Gf2::ONE];
    for &a in &elems {
        for &b in &elems {
            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
            for &c in &elems {
                assert_eq!((a + b) + c, a + (b + c));
                assert_eq!(a * (b + c), a * b + a * c);
            }
        }
        assert_eq!(a + a, Gf2::ZERO);
        assert_eq!(-a, a);
    }
    assert!(gf2.inv(&Gf2::ONE).is_ok());
    assert!(gf2.inv(&Gf2::ZERO).is_err());
}
