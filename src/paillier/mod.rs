#![allow(non_snake_case)]
/*
    Paillier Cryptosystem

    This file is part of the paillier-mta library.

    paillier-mta is free software: you can redistribute
    it and/or modify it under the terms of the GNU General Public
    License as published by the Free Software Foundation, either
    version 3 of the License, or (at your option) any later version.

    @license GPL-3.0+
*/

//! Additively homomorphic encryption over Z*_{N^2} with generator Γ = N+1.
//!
//! ```text
//! Enc(m; r) = Γ^m · r^N mod N^2
//! Dec(c)    = L(c^λ mod N^2) · μ mod N,   L(u) = (u - 1) / N
//! ```
//!
//! with λ = lcm(p-1, q-1) and μ = λ^{-1} mod N.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use curv::arithmetic::traits::*;
use curv::elliptic::curves::{Curve, Point};
use curv::BigInt;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};
use zeroize::Zeroize;

use crate::security_level::{
    PAILLIER_PROOF_ITERS, PRIME_TEST_ROUNDS, P_Q_BIT_LEN_DIFFERENCE,
    VERIFY_PRIMES_UNTIL,
};
use crate::utilities::{
    has_small_factor, is_number_in_multiplicative_group, primes_below,
    sample_relatively_prime_integer,
};
use crate::zkproof::paillier_key::PaillierKeyProof;
use crate::{Error, Result};

/// Smallest modulus `generate_key_pair` accepts.
pub const MIN_MODULUS_BITS: usize = 16;

/// Cancellation and deadline for prime generation. Clones share the same
/// cancellation flag.
#[derive(Clone, Debug, Default)]
pub struct KeyGenContext {
    deadline: Option<Instant>,
    canceled: Arc<AtomicBool>,
}

/// Cancels every [KeyGenContext] it was obtained from. May be moved to
/// another thread.
#[derive(Clone, Debug)]
pub struct Canceler {
    canceled: Arc<AtomicBool>,
}

impl Canceler {
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }
}

impl KeyGenContext {
    /// No deadline, not canceled.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::default()
        }
    }

    /// A timeout too large to represent is treated as no deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
            ..Self::default()
        }
    }

    pub fn canceler(&self) -> Canceler {
        Canceler {
            canceled: self.canceled.clone(),
        }
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }

    /// Fails with `Canceled` or `Timeout` once either applies. Cancellation
    /// takes precedence.
    pub fn check(&self) -> Result<()> {
        if self.is_canceled() {
            return Err(Error::Canceled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(Error::Timeout),
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub n: BigInt,
}

pub struct PrivateKey {
    public: PublicKey,
    lambda: BigInt,
    mu: BigInt,
}

impl Clone for PrivateKey {
    fn clone(&self) -> Self {
        Self {
            public: self.public.clone(),
            lambda: self.lambda.clone(),
            mu: self.mu.clone(),
        }
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.lambda.zeroize();
        self.mu.zeroize();
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public", &self.public)
            .field("lambda", &"[redacted]")
            .field("mu", &"[redacted]")
            .finish()
    }
}

/// `L(u) = (u - 1) / n`, exact for `u ≡ 1 mod n`.
pub fn l_function(u: &BigInt, n: &BigInt) -> BigInt {
    (u - BigInt::one()) / n
}

/// Generates a key pair whose modulus has exactly `bits` bits. `bits` must be
/// even.
#[instrument(skip(ctx), err(Debug))]
pub fn generate_key_pair(
    ctx: &KeyGenContext,
    bits: usize,
) -> Result<(PrivateKey, PublicKey)> {
    let (mut p, mut q) = generate_prime_pair(ctx, bits)?;
    let n = &p * &q;
    let one = BigInt::one();
    let mut p_minus_one = &p - &one;
    let mut q_minus_one = &q - &one;
    let lambda = BigInt::lcm(&p_minus_one, &q_minus_one);
    p.zeroize();
    q.zeroize();
    p_minus_one.zeroize();
    q_minus_one.zeroize();
    let mu = BigInt::mod_inv(&lambda, &n).ok_or(Error::NoInverse)?;

    let public = PublicKey { n };
    debug!(bits = public.n.bit_length(), "generated paillier key pair");
    Ok((
        PrivateKey {
            public: public.clone(),
            lambda,
            mu,
        },
        public,
    ))
}

/// Two distinct primes of `bits / 2` bits each, far enough apart that their
/// product resists Fermat factorisation.
pub(crate) fn generate_prime_pair(
    ctx: &KeyGenContext,
    bits: usize,
) -> Result<(BigInt, BigInt)> {
    if bits < MIN_MODULUS_BITS || bits % 2 != 0 {
        error!(bits, "requested modulus size is unsupported");
        return Err(Error::InvalidModulus);
    }
    let half = bits / 2;
    let min_diff_bits = half.saturating_sub(P_Q_BIT_LEN_DIFFERENCE);
    let sieve = primes_below(VERIFY_PRIMES_UNTIL);
    loop {
        let mut p = generate_prime(ctx, half, &sieve)?;
        let mut q = generate_prime(ctx, half, &sieve)?;
        if keep_if_far_apart(&mut p, &mut q, min_diff_bits) {
            return Ok((p, q));
        }
        debug!("prime pair too close together, regenerating");
    }
}

// Wipes both primes in place when |p - q| is shorter than `min_diff_bits`.
fn keep_if_far_apart(
    p: &mut BigInt,
    q: &mut BigInt,
    min_diff_bits: usize,
) -> bool {
    let mut diff = BigInt::abs(&(&*p - &*q));
    let far_apart = diff.bit_length() >= min_diff_bits;
    diff.zeroize();
    if !far_apart {
        p.zeroize();
        q.zeroize();
    }
    far_apart
}

// Random `bits`-bit prime with the two top bits set, so that the product of
// two of them has exactly 2·bits bits.
fn generate_prime(
    ctx: &KeyGenContext,
    bits: usize,
    sieve: &[u32],
) -> Result<BigInt> {
    loop {
        ctx.check()?;
        let mut candidate = BigInt::sample(bits);
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(bits - 2, true);
        candidate.set_bit(0, true);
        if has_small_factor(&candidate, sieve) {
            continue;
        }
        if candidate.is_probable_prime(PRIME_TEST_ROUNDS) {
            return Ok(candidate);
        }
    }
}

impl PublicKey {
    pub fn new(n: BigInt) -> Self {
        Self { n }
    }

    /// Generator Γ = N + 1.
    pub fn gamma(&self) -> BigInt {
        &self.n + BigInt::one()
    }

    pub fn n_square(&self) -> BigInt {
        &self.n * &self.n
    }

    /// `[N, Γ]`, the order in which the key enters challenge hashes.
    pub fn as_ints(&self) -> [BigInt; 2] {
        [self.n.clone(), self.gamma()]
    }

    /// Rejects a modulus that cannot be a Paillier modulus, such as one
    /// received from a misbehaving peer.
    pub fn validate(&self) -> Result<()> {
        if self.n <= BigInt::one() {
            error!("paillier modulus is not greater than one");
            return Err(Error::InvalidModulus);
        }
        Ok(())
    }

    pub fn encrypt(&self, m: &BigInt) -> Result<BigInt> {
        self.encrypt_and_return_randomness(m).map(|(c, _)| c)
    }

    /// Encrypts `m` under fresh randomness `r ∈ Z*_N` and returns both.
    pub fn encrypt_and_return_randomness(
        &self,
        m: &BigInt,
    ) -> Result<(BigInt, BigInt)> {
        self.validate()?;
        self.check_message(m)?;
        let r = sample_relatively_prime_integer(&self.n);
        let c = self.encrypt_with_randomness(m, &r)?;
        Ok((c, r))
    }

    /// `Γ^m · r^N mod N^2` for caller-chosen `r ∈ Z*_N`.
    pub fn encrypt_with_randomness(
        &self,
        m: &BigInt,
        r: &BigInt,
    ) -> Result<BigInt> {
        self.check_message(m)?;
        if !is_number_in_multiplicative_group(&self.n, r) {
            return Err(Error::NoInverse);
        }
        let nn = self.n_square();
        // Γ^m = 1 + m·N mod N^2
        let gm = (BigInt::one() + m * &self.n).modulus(&nn);
        let rn = BigInt::mod_pow(r, &self.n, &nn);
        Ok(BigInt::mod_mul(&gm, &rn, &nn))
    }

    /// Encryption of `m · Dec(c1)`.
    pub fn homo_mult(&self, m: &BigInt, c1: &BigInt) -> Result<BigInt> {
        self.check_message(m)?;
        self.check_ciphertext(c1)?;
        Ok(BigInt::mod_pow(c1, m, &self.n_square()))
    }

    /// Encryption of `Dec(c1) + Dec(c2)`.
    pub fn homo_add(&self, c1: &BigInt, c2: &BigInt) -> Result<BigInt> {
        self.check_ciphertext(c1)?;
        self.check_ciphertext(c2)?;
        Ok(BigInt::mod_mul(c1, c2, &self.n_square()))
    }

    /// Checks a key proof produced by the holder of the matching private key
    /// for party index `k` and curve point `point`.
    pub fn verify_key_proof<E: Curve>(
        &self,
        proof: &PaillierKeyProof,
        k: &BigInt,
        point: &Point<E>,
    ) -> bool {
        proof.verify(&self.n, k, point)
    }

    fn check_message(&self, m: &BigInt) -> Result<()> {
        if BigInt::is_negative(m) || m >= &self.n {
            error!("plaintext is outside [0, N)");
            return Err(Error::InvalidMessage);
        }
        Ok(())
    }

    pub(crate) fn check_ciphertext(&self, c: &BigInt) -> Result<()> {
        if !is_number_in_multiplicative_group(&self.n_square(), c) {
            error!("ciphertext is not in Z*_{{N^2}}");
            return Err(Error::InvalidCiphertext);
        }
        Ok(())
    }
}

impl PrivateKey {
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub(crate) fn lambda(&self) -> &BigInt {
        &self.lambda
    }

    pub fn decrypt(&self, c: &BigInt) -> Result<BigInt> {
        let n = &self.public.n;
        let nn = self.public.n_square();
        self.public.check_ciphertext(c)?;
        let lc = l_function(&BigInt::mod_pow(c, &self.lambda, &nn), n);
        Ok(BigInt::mod_mul(&lc, &self.mu, n))
    }

    /// Proof of correct key generation, bound to party index `k` and the
    /// party's curve point. Yields `PAILLIER_PROOF_ITERS` responses.
    pub fn proof<E: Curve>(
        &self,
        k: &BigInt,
        point: &Point<E>,
    ) -> Result<PaillierKeyProof> {
        let proof = PaillierKeyProof::prove(self, k, point)?;
        debug_assert_eq!(proof.responses().len(), PAILLIER_PROOF_ITERS);
        Ok(proof)
    }
}
