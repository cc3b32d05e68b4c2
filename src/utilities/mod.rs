#![allow(non_snake_case)]

use curv::arithmetic::traits::*;
use curv::BigInt;

use crate::{Error, Result};

pub mod encoding;
pub mod hashing;
pub mod mod_int;
pub mod ring_pedersen;

pub use mod_int::ModInt;
pub use ring_pedersen::{RingPedersenParams, RingPedersenWitness};

/// `v^pow mod modulus`, inverting `v` first when `pow` is negative.
pub fn mod_pow_with_negative(
    v: &BigInt,
    pow: &BigInt,
    modulus: &BigInt,
) -> Result<BigInt> {
    if BigInt::is_negative(pow) {
        let v_inv = BigInt::mod_inv(&v.modulus(modulus), modulus)
            .ok_or(Error::NoInverse)?;
        let pow_abs = BigInt::abs(pow);
        Ok(BigInt::mod_pow(&v_inv, &pow_abs, modulus))
    } else {
        Ok(BigInt::mod_pow(&v.modulus(modulus), pow, modulus))
    }
}

/// Uniform element of Z*_N.
pub fn sample_relatively_prime_integer(N: &BigInt) -> BigInt {
    let mut sample = BigInt::sample_below(N);
    while BigInt::gcd(&sample, N) != BigInt::one() {
        sample = BigInt::sample_below(N);
    }
    sample
}

/// Uniform integer in `[0, bound)`.
pub fn get_random_positive_int(bound: &BigInt) -> BigInt {
    BigInt::sample_below(bound)
}

/// `0 <= b < bound`
pub fn is_in_interval(b: &BigInt, bound: &BigInt) -> bool {
    !BigInt::is_negative(b) && b < bound
}

/// Membership of `v` in Z*_n: `0 < v < n` and `gcd(v, n) = 1`.
pub fn is_number_in_multiplicative_group(n: &BigInt, v: &BigInt) -> bool {
    v > &BigInt::zero() && v < n && BigInt::gcd(v, n) == BigInt::one()
}

/// Maps a 256-bit digest, read as a big-endian integer, into `[0, q)`.
pub fn rejection_sample(q: &BigInt, e_hash: &BigInt) -> BigInt {
    e_hash.modulus(q)
}

/// Primes strictly below `limit`, by sieve of Eratosthenes.
pub fn primes_below(limit: u32) -> Vec<u32> {
    let limit = limit as usize;
    if limit < 3 {
        return Vec::new();
    }
    let mut composite = vec![false; limit];
    let mut primes = Vec::new();
    for i in 2..limit {
        if composite[i] {
            continue;
        }
        primes.push(i as u32);
        let mut j = i * i;
        while j < limit {
            composite[j] = true;
            j += i;
        }
    }
    primes
}

/// True when one of `primes` divides `n` without being `n` itself.
pub fn has_small_factor(n: &BigInt, primes: &[u32]) -> bool {
    primes.iter().any(|p| {
        let p = BigInt::from(*p);
        n != &p && n.modulus(&p).is_zero()
    })
}
