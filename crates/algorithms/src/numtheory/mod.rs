//! Number-theory functions: modular exponentiation, probabilistic
//! primality, random residues, and prime enumeration

use alloc::vec::Vec;

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::RngCore;

use zring_api::error::{Error, Result};

use crate::bigint::{rendered, Integer};


/// Default number of Miller-Rabin rounds used by [`probab_prime`]
pub const DEFAULT_PRIMALITY_REPS: u32 = 20;

/// Trial division covers all primes up to this bound before Miller-Rabin
const SMALL_PRIME_LIMIT: u64 = 1_000;

/// `base^exponent mod modulus`
///
/// Fails with [`Error::InvalidModulus`] unless `modulus > 1`. A negative
/// exponent inverts the base first and fails with [`Error::InvMod`] when
/// no inverse exists.
pub fn power_mod(base: &Integer, exponent: &Integer, modulus: &Integer) -> Result<Integer> {
    if modulus <= &Integer::one() {
        return Err(Error::InvalidModulus {
            modulus: rendered(modulus),
        });
    }
    let base = if exponent.sign() < 0 {
        inv_mod(base, modulus)?
    } else {
        base.rem_floor(modulus)?
    };
    // Base and exponent are non-negative here, so BigInt::modpow applies
    Ok(Integer(base.0.modpow(&exponent.abs().0, &modulus.0)))
}

/// Multiplicative inverse of `value` modulo `modulus`
///
/// Fails with [`Error::InvMod`] carrying both operands when
/// `gcd(value, modulus) != 1`.
pub fn inv_mod(value: &Integer, modulus: &Integer) -> Result<Integer> {
    if modulus <= &Integer::one() {
        return Err(Error::InvalidModulus {
            modulus: rendered(modulus),
        });
    }
    let (d, s, _) = value.gcdx(modulus);
    if !d.is_one() {
        return Err(Error::InvMod {
            value: rendered(value),
            modulus: rendered(modulus),
        });
    }
    s.rem_floor(modulus)
}

/// Miller-Rabin probabilistic primality test with `reps` random bases
///
/// Always correct for composites found by trial division; otherwise the
/// error probability is at most 4^(-reps) per call.
pub fn is_prime<G: RngCore + ?Sized>(rng: &mut G, n: &Integer, reps: u32) -> bool {
    if n.sign() <= 0 {
        return false;
    }
    let n = n.0.magnitude();
    let two = BigUint::from(2u32);
    if *n < two {
        return false;
    }

    // Trial division by the small primes settles everything below the
    // square of the sieve bound
    for p in primes_upto(SMALL_PRIME_LIMIT) {
        let p = BigUint::from(p);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }
    if *n < BigUint::from(SMALL_PRIME_LIMIT * SMALL_PRIME_LIMIT) {
        return true;
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_1 = n - BigUint::one();
    let s = n_minus_1.trailing_zeros().unwrap_or(0);
    let d = &n_minus_1 >> s;

    'witness: for _ in 0..reps {
        let a = rng.gen_biguint_range(&two, &n_minus_1);
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_1 {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// [`is_prime`] with the default round count and a thread-local RNG
#[cfg(feature = "std")]
pub fn probab_prime(n: &Integer) -> bool {
    is_prime(&mut rand::thread_rng(), n, DEFAULT_PRIMALITY_REPS)
}

/// A uniformly random integer in `[0, bound)`
///
/// Fails when `bound <= 0`.
pub fn random_below<G: RngCore + ?Sized>(rng: &mut G, bound: &Integer) -> Result<Integer> {
    if bound.sign() <= 0 {
        return Err(Error::param("bound", "must be positive"));
    }
    Ok(Integer(BigInt::from(
        rng.gen_biguint_below(bound.0.magnitude()),
    )))
}

/// A uniformly random non-negative integer below `2^bits`
pub fn random_bits<G: RngCore + ?Sized>(rng: &mut G, bits: u64) -> Integer {
    Integer(BigInt::from(rng.gen_biguint(bits)))
}

/// The smallest probable prime greater than or equal to `n`
pub fn next_prime<G: RngCore + ?Sized>(rng: &mut G, n: &Integer) -> Integer {
    let two = Integer::from(2);
    if n <= &two {
        return two;
    }
    let mut candidate = if n.is_even() {
        n + &Integer::one()
    } else {
        n.clone()
    };
    while !is_prime(rng, &candidate, DEFAULT_PRIMALITY_REPS) {
        candidate = candidate + Integer::from(2);
    }
    candidate
}

/// A random probable prime of exactly `bits` bits
///
/// Fails when `bits < 2`, since there is no prime below 2 bits.
pub fn random_prime<G: RngCore + ?Sized>(rng: &mut G, bits: u64) -> Result<Integer> {
    if bits < 2 {
        return Err(Error::param("bits", "a prime needs at least 2 bits"));
    }
    loop {
        let mut c = rng.gen_biguint(bits);
        c.set_bit(bits - 1, true);
        c.set_bit(0, true);
        let candidate = Integer(BigInt::from(c));
        if is_prime(rng, &candidate, DEFAULT_PRIMALITY_REPS) {
            return Ok(candidate);
        }
    }
}

/// All primes up to and including `limit`, by the sieve of Eratosthenes
pub fn primes_upto(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }
    let limit = limit as usize;
    let mut composite = alloc::vec![false; limit + 1];
    let mut primes = Vec::new();
    for n in 2..=limit {
        if composite[n] {
            continue;
        }
        primes.push(n as u64);
        let mut multiple = n * n;
        while multiple <= limit {
            composite[multiple] = true;
            multiple += n;
        }
    }
    primes
}
