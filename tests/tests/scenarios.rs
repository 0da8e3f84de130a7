//! Concrete end-to-end scenarios pinning down the arithmetic contracts

use zring_algorithms::bigint::Integer;
use zring_algorithms::extension::{ExtElem, ExtRing};
use zring_algorithms::matrix::Gf2Matrix;
use zring_algorithms::modular::{ModInt, ModInt64, ModRing, ModRing64};
use zring_algorithms::numtheory;
use zring_algorithms::poly::{FiniteFieldPolyExt, Poly};
use zring_api::error::Error;
use zring_api::traits::Ring;
use zring_tests::{poly_mod, poly_zz, ring17, seeded_rng};

#[test]
fn five_times_ten_mod_seventeen() {
    let ring = ring17();
    let product = &ModInt::new_in(&ring, 5) * &ModInt::new_in(&ring, 10);
    assert_eq!(product.rep(), Integer::from(16));
}

#[test]
fn inverse_of_five_mod_seventeen() {
    let word = ModRing64::new(17).unwrap();
    let five = ModInt64::new_in(&word, 5);
    let inv = five.inv().unwrap();
    assert_eq!(inv.rep(), 7);
    assert_eq!((five * inv).rep(), 1);

    assert!(matches!(
        ModInt64::new_in(&word, 0).inv(),
        Err(Error::InvMod { .. })
    ));
}

#[test]
fn polynomial_division_scenario() {
    // (x^2 - 1) / (x + 1) = x - 1 over Z/17, remainder zero
    let ring = ring17();
    let f = poly_mod(&ring, &[-1, 0, 1]);
    let g = poly_mod(&ring, &[1, 1]);
    let (q, r) = f.divrem(&g).unwrap();
    assert_eq!(q, poly_mod(&ring, &[16, 1]));
    assert!(r.is_zero());
}

#[test]
fn gf2_irreducibility_scenario() {
    let gf2 = zring_algorithms::gf2::Gf2Ring;
    let f = Poly::from_coeffs(
        gf2,
        [1i64, 1, 1].iter().map(|&c| gf2.from_i64(c)).collect(),
    );
    assert!(f.is_irreducible().unwrap());

    // x^2 + 1 = (x + 1)^2 over GF(2)
    let g = Poly::from_coeffs(
        gf2,
        [1i64, 0, 1].iter().map(|&c| gf2.from_i64(c)).collect(),
    );
    assert!(!g.is_irreducible().unwrap());
    let x_plus_1 = Poly::from_coeffs(
        gf2,
        [1i64, 1].iter().map(|&c| gf2.from_i64(c)).collect(),
    );
    let square = &x_plus_1 * &x_plus_1;
    assert_eq!(square, g);
}

#[test]
fn cyclotomic_phi_four() {
    // Phi_4(x) = (x^4 - 1)/(x^2 - 1) = x^2 + 1, coefficients [1 0 1]
    let numerator = poly_zz(&[-1, 0, 0, 0, 1]);
    let denominator = poly_zz(&[-1, 0, 1]);
    let (phi4, rem) = numerator.divrem(&denominator).unwrap();
    assert!(rem.is_zero());
    assert_eq!(phi4, poly_zz(&[1, 0, 1]));
    assert_eq!(phi4.to_string(), "[1 0 1]");
}

#[test]
fn extension_field_round_trip() {
    // GF(7^2) via x^2 + 1; random nonzero elements invert cleanly
    let base = ModRing::new(&Integer::from(7)).unwrap();
    let modulus = poly_mod(&base, &[1, 0, 1]);
    let field = ExtRing::new(modulus).unwrap();

    let mut rng = seeded_rng(1);
    for _ in 0..50 {
        let rep = zring_algorithms::poly::random_poly(&mut rng, &base, 2);
        let elem = ExtElem::new_in(&field, rep);
        if elem.is_zero() {
            continue;
        }
        let inv = elem.inv().unwrap();
        assert!((&elem * &inv).is_one());
    }
}

#[test]
fn gauss_rank_scenario() {
    let mut m = Gf2Matrix::from_rows(&[
        &[1, 1, 0, 1],
        &[1, 0, 1, 0],
        &[0, 1, 1, 1],
        &[1, 1, 0, 1],
    ])
    .unwrap();
    // Rows 1 and 4 coincide and row3 = row1 + row2
    assert_eq!(m.rank(), 2);
    assert_eq!(m.gauss(), 2);

    let id = Gf2Matrix::identity(5);
    assert_eq!(id.rank(), 5);
}

#[test]
fn primality_scenarios() {
    let mut rng = seeded_rng(2);
    assert!(numtheory::is_prime(&mut rng, &Integer::from(17), 20));
    assert!(!numtheory::is_prime(&mut rng, &Integer::from(561), 20));

    let p = numtheory::next_prime(&mut rng, &Integer::from(1_000_000));
    assert_eq!(p, Integer::from(1_000_003));

    assert_eq!(
        numtheory::power_mod(&Integer::from(5), &Integer::from(-1), &Integer::from(17)).unwrap(),
        Integer::from(7)
    );
}

#[test]
fn display_conventions() {
    let ring = ring17();
    assert_eq!(poly_mod(&ring, &[1, 2, 3]).to_string(), "[1 2 3]");
    assert_eq!(Poly::new(ring).to_string(), "[0]");
}
