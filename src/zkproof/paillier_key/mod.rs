#![allow(non_snake_case)]
/*
    Paillier Key Proof

    This file is part of the paillier-mta library.

    paillier-mta is free software: you can redistribute
    it and/or modify it under the terms of the GNU General Public
    License as published by the Free Software Foundation, either
    version 3 of the License, or (at your option) any later version.

    @license GPL-3.0+
*/

//! Non-interactive proof that a Paillier modulus N was honestly generated,
//! bound to a party index k and the party's curve point X.
//!
//! Both sides derive challenges x_1..x_m ∈ Z*_N from a tagged hash of
//! (i, k, X, N). The prover answers each with the N-th root
//!             y_i = x_i^{N^{-1} mod λ} mod N,
//! which only the holder of the factorisation can compute, and the verifier
//! checks y_i^N ≡ x_i (mod N) for every round.

use curv::arithmetic::traits::*;
use curv::elliptic::curves::{Curve, Point};
use curv::BigInt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::point_coords;
use crate::paillier::PrivateKey;
use crate::security_level::{
    HASH_BITS, PAILLIER_PROOF_ITERS, VERIFY_PRIMES_UNTIL,
};
use crate::utilities::encoding::{big_ints_to_bytes, decode_proof_parts};
use crate::utilities::hashing::sha512_256i_tagged;
use crate::utilities::{
    is_in_interval, is_number_in_multiplicative_group, primes_below,
};
use crate::{Error, Result};

pub const PAILLIER_KEY_PROOF_TAG: &[u8] = b"paillier-key-proof";

/// One response per challenge round, in round order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaillierKeyProof {
    responses: [BigInt; PAILLIER_PROOF_ITERS],
}

/// Challenge values for `m` rounds. Each value spans the full width of `n`:
/// ⌈bits(n)/256⌉ tagged digests over (round, block, counter, k, x, y, n) are
/// concatenated and reduced mod `n`, bumping `counter` until the result lies
/// in Z*_n.
pub fn generate_xs(
    m: usize,
    k: &BigInt,
    n: &BigInt,
    x: &BigInt,
    y: &BigInt,
) -> Result<Vec<BigInt>> {
    if n < &BigInt::from(2) {
        return Err(Error::InvalidModulus);
    }
    let blocks = (n.bit_length() + HASH_BITS - 1) / HASH_BITS;
    let mut xs = Vec::with_capacity(m);
    for i in 0..m {
        let round = BigInt::from(i as u64);
        let mut counter = 0u64;
        let xi = loop {
            let n_counter = BigInt::from(counter);
            let mut bytes = Vec::with_capacity(blocks * HASH_BITS / 8);
            for j in 0..blocks {
                let block = BigInt::from(j as u64);
                let digest = sha512_256i_tagged(
                    PAILLIER_KEY_PROOF_TAG,
                    &[&round, &block, &n_counter, k, x, y, n],
                );
                bytes.extend_from_slice(digest.as_bytes());
            }
            let candidate = BigInt::from_bytes(&bytes).modulus(n);
            if is_number_in_multiplicative_group(n, &candidate) {
                break candidate;
            }
            counter += 1;
        };
        xs.push(xi);
    }
    Ok(xs)
}

impl PaillierKeyProof {
    pub fn prove<E: Curve>(
        sk: &PrivateKey,
        k: &BigInt,
        point: &Point<E>,
    ) -> Result<Self> {
        let N = &sk.public_key().n;
        let (x, y) = point_coords(point)?;
        let xs = generate_xs(PAILLIER_PROOF_ITERS, k, N, &x, &y)?;
        // N-th roots exist for all of Z*_N since gcd(N, λ) = 1
        let M = BigInt::mod_inv(N, sk.lambda()).ok_or(Error::NoInverse)?;
        let responses: Vec<BigInt> =
            xs.iter().map(|xi| BigInt::mod_pow(xi, &M, N)).collect();
        Self::from_responses(responses)
    }

    /// Returns true only if every round checks out.
    pub fn verify<E: Curve>(
        &self,
        N: &BigInt,
        k: &BigInt,
        point: &Point<E>,
    ) -> bool {
        if N < &BigInt::from(2) {
            debug!("paillier key proof: modulus is not greater than one");
            return false;
        }
        let small_factor = primes_below(VERIFY_PRIMES_UNTIL)
            .into_iter()
            .any(|p| N.modulus(&BigInt::from(p)).is_zero());
        if small_factor {
            debug!("paillier key proof: modulus has a small prime factor");
            return false;
        }
        let (x, y) = match point_coords(point) {
            Ok(coords) => coords,
            Err(_) => return false,
        };
        let xs = match generate_xs(PAILLIER_PROOF_ITERS, k, N, &x, &y) {
            Ok(xs) => xs,
            Err(_) => return false,
        };
        for (i, (xi, yi)) in xs.iter().zip(self.responses.iter()).enumerate() {
            if !is_in_interval(yi, N) || &BigInt::mod_pow(yi, N, N) != xi {
                debug!(round = i, "paillier key proof: round failed");
                return false;
            }
        }
        true
    }

    pub fn from_responses(responses: Vec<BigInt>) -> Result<Self> {
        let responses = <[BigInt; PAILLIER_PROOF_ITERS]>::try_from(responses)
            .map_err(|_| Error::MalformedProof("paillier key proof"))?;
        Ok(Self { responses })
    }

    pub fn responses(&self) -> &[BigInt] {
        &self.responses
    }

    pub fn to_bytes_parts(&self) -> Vec<Vec<u8>> {
        big_ints_to_bytes(&self.responses)
    }

    pub fn from_bytes_parts<B: AsRef<[u8]>>(parts: &[B]) -> Result<Self> {
        let ints = decode_proof_parts(
            parts,
            PAILLIER_PROOF_ITERS,
            "paillier key proof",
        )?;
        Self::from_responses(ints)
    }
}
