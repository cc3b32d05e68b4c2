#![allow(non_snake_case)]

use curv::arithmetic::traits::*;
use curv::BigInt;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use tracing::error;

use crate::paillier::{generate_prime_pair, KeyGenContext};
use crate::utilities::is_number_in_multiplicative_group;
use crate::{Error, Result};

/// Auxiliary modulus Ñ = p̃·q̃ with bases h1, h2 ∈ Z*_Ñ such that h2 lies in
/// the subgroup generated by h1. Commitments `h1^x h2^ρ mod Ñ` are hiding,
/// and binding for anyone not knowing log_h1(h2).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingPedersenParams {
    pub ntilde: BigInt,
    pub h1: BigInt,
    pub h2: BigInt,
}

// RingPedersenWitness holds the discrete logs relating h1 and h2:
// h2 = h1^lambda and h1 = h2^lambda_inv mod Ñ.
#[derive(Clone, Serialize, Deserialize)]
pub struct RingPedersenWitness {
    pub lambda: BigInt,
    pub lambda_inv: BigInt,
    pub phi: BigInt,
}

impl Drop for RingPedersenWitness {
    fn drop(&mut self) {
        self.lambda.zeroize();
        self.lambda_inv.zeroize();
        self.phi.zeroize();
    }
}

impl RingPedersenParams {
    /// Checks parameters received from another party before they are used
    /// as a commitment modulus: Ñ > 1 and h1, h2 ∈ Z*_Ñ.
    pub fn validate(&self) -> Result<()> {
        if self.ntilde <= BigInt::one() {
            error!("ring-pedersen modulus is not greater than one");
            return Err(Error::InvalidModulus);
        }
        if !is_number_in_multiplicative_group(&self.ntilde, &self.h1)
            || !is_number_in_multiplicative_group(&self.ntilde, &self.h2)
        {
            error!("ring-pedersen base is not in Z*_Ñ");
            return Err(Error::Encoding);
        }
        Ok(())
    }

    /// `h1^x · h2^r mod Ñ` for non-negative exponents.
    pub fn commit(&self, x: &BigInt, r: &BigInt) -> BigInt {
        BigInt::mod_mul(
            &BigInt::mod_pow(&self.h1, x, &self.ntilde),
            &BigInt::mod_pow(&self.h2, r, &self.ntilde),
            &self.ntilde,
        )
    }
}

/// Generates Ñ of `bits` bits together with h1 and h2.
pub fn generate_ring_pedersen_params(
    ctx: &KeyGenContext,
    bits: usize,
) -> Result<(RingPedersenParams, RingPedersenWitness)> {
    let (p, q) = generate_prime_pair(ctx, bits)?;
    let ntilde = &p * &q;
    Ok(get_related_values(&ntilde, &p, &q))
}

fn get_related_values(
    N: &BigInt,
    p: &BigInt,
    q: &BigInt,
) -> (RingPedersenParams, RingPedersenWitness) {
    let one = BigInt::one();
    let phi = (p - &one) * (q - &one);
    // h1 is a random quadratic residue
    let tau = crate::utilities::sample_relatively_prime_integer(N);
    let h1 = BigInt::mod_pow(&tau, &BigInt::from(2), N);
    let (lambda, lambda_inv) = loop {
        let lambda_ = BigInt::sample_below(&phi);
        match BigInt::mod_inv(&lambda_, &phi) {
            Some(inv) => break (lambda_, inv),
            None => continue,
        }
    };
    let h2 = BigInt::mod_pow(&h1, &lambda, N);
    (
        RingPedersenParams {
            ntilde: N.clone(),
            h1,
            h2,
        },
        RingPedersenWitness {
            lambda,
            lambda_inv,
            phi,
        },
    )
}
