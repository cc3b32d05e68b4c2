#![allow(non_snake_case)]
/*
    Multiplicative-to-Additive Share Conversion

    This file is part of the paillier-mta library.

    paillier-mta is free software: you can redistribute
    it and/or modify it under the terms of the GNU General Public
    License as published by the Free Software Foundation, either
    version 3 of the License, or (at your option) any later version.

    @license GPL-3.0+
*/

//! Alice holds a, Bob holds b, both in Z_q. After three messages Alice holds
//! α and Bob holds β with α + β ≡ a·b (mod q).
//!
//! 1. Alice sends c_A = Enc_A(a) with a [RangeProofAlice].
//! 2. Bob checks it, samples β' ∈ [0, q^5), and sends
//!    c_B = c_A^b · Enc_A(β') with a [ProofBob] (or [ProofBobWc] when g^b is
//!    public). Bob keeps β = -β' mod q.
//! 3. Alice checks Bob's proof and keeps α = Dec_A(c_B) mod q.
//!
//! Each range proof is made against the verifier's ring-Pedersen parameters,
//! so Alice proves under Bob's (Ñ, h1, h2) and Bob under Alice's.

use std::fmt;

use curv::arithmetic::traits::*;
use curv::elliptic::curves::{Curve, Point, Scalar};
use curv::BigInt;
use tracing::{error, instrument};
use zeroize::Zeroize;

use crate::paillier::{PrivateKey, PublicKey};
use crate::security_level::MTA_Y_EXP;
use crate::utilities::{get_random_positive_int, RingPedersenParams};
use crate::zkproof::alice_range::{
    AliceStatement, AliceWitness, RangeProofAlice,
};
use crate::zkproof::bob::{BobStatement, BobWitness, ProofBob, ProofBobWc};
use crate::{Error, Result};

/// Bob's result of the middle step. `beta` is his additive share and never
/// leaves him; `c_b` and `proof` go to Alice.
#[derive(Clone)]
pub struct BobMidOutput<P> {
    pub beta: BigInt,
    pub c_b: BigInt,
    pub beta_prm: BigInt,
    pub proof: P,
}

impl<P: fmt::Debug> fmt::Debug for BobMidOutput<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BobMidOutput")
            .field("beta", &"[redacted]")
            .field("c_b", &self.c_b)
            .field("beta_prm", &"[redacted]")
            .field("proof", &self.proof)
            .finish()
    }
}

impl<P> Drop for BobMidOutput<P> {
    fn drop(&mut self) {
        self.beta.zeroize();
        self.beta_prm.zeroize();
    }
}

/// Alice's first message: `Enc(a)` and the range proof for it, made against
/// Bob's ring-Pedersen parameters.
pub fn alice_init<E: Curve>(
    session: &[u8],
    pk_a: &PublicKey,
    a: &BigInt,
    rp_b: &RingPedersenParams,
) -> Result<(BigInt, RangeProofAlice)> {
    let (c_a, r) = pk_a.encrypt_and_return_randomness(a)?;
    let statement = AliceStatement {
        pk: pk_a.clone(),
        rp: rp_b.clone(),
        c: c_a.clone(),
    };
    let proof = RangeProofAlice::prove::<E>(
        session,
        &statement,
        &AliceWitness::new(a.clone(), r),
    )?;
    Ok((c_a, proof))
}

// Checks Alice's proof and computes c_B = c_A^b · Enc(β'; r).
fn bob_mid_common<E: Curve>(
    session: &[u8],
    pk_a: &PublicKey,
    proof: &RangeProofAlice,
    b: &BigInt,
    c_a: &BigInt,
    rp_a: &RingPedersenParams,
    rp_b: &RingPedersenParams,
) -> Result<(BobStatement, BobWitness, BigInt, BigInt)> {
    let alice_statement = AliceStatement {
        pk: pk_a.clone(),
        rp: rp_b.clone(),
        c: c_a.clone(),
    };
    if !proof.verify::<E>(session, &alice_statement) {
        error!("alice range proof did not verify");
        return Err(Error::ProofRejected("alice range proof"));
    }

    let q = Scalar::<E>::group_order();
    let beta_prm = get_random_positive_int(&BigInt::pow(q, MTA_Y_EXP));
    let (c_beta_prm, r) = pk_a.encrypt_and_return_randomness(&beta_prm)?;
    let c_b = pk_a.homo_add(&pk_a.homo_mult(b, c_a)?, &c_beta_prm)?;
    let beta = (-&beta_prm).modulus(q);

    let statement = BobStatement {
        pk: pk_a.clone(),
        rp: rp_a.clone(),
        c1: c_a.clone(),
        c2: c_b,
    };
    let witness = BobWitness::new(b.clone(), beta_prm.clone(), r);
    Ok((statement, witness, beta, beta_prm))
}

/// Bob's step without a public commitment to b.
#[allow(clippy::too_many_arguments)]
#[instrument(skip_all, err(Debug))]
pub fn bob_mid<E: Curve>(
    session: &[u8],
    pk_a: &PublicKey,
    proof: &RangeProofAlice,
    b: &BigInt,
    c_a: &BigInt,
    rp_a: &RingPedersenParams,
    rp_b: &RingPedersenParams,
) -> Result<BobMidOutput<ProofBob>> {
    let (statement, witness, beta, beta_prm) =
        bob_mid_common::<E>(session, pk_a, proof, b, c_a, rp_a, rp_b)?;
    let proof = ProofBob::prove::<E>(session, &statement, &witness)?;
    Ok(BobMidOutput {
        beta,
        c_b: statement.c2,
        beta_prm,
        proof,
    })
}

/// Bob's step when `B = g^b` is public; the proof also binds B.
#[allow(clippy::too_many_arguments)]
#[instrument(skip_all, err(Debug))]
pub fn bob_mid_wc<E: Curve>(
    session: &[u8],
    pk_a: &PublicKey,
    proof: &RangeProofAlice,
    b: &BigInt,
    c_a: &BigInt,
    rp_a: &RingPedersenParams,
    rp_b: &RingPedersenParams,
    B: &Point<E>,
) -> Result<BobMidOutput<ProofBobWc<E>>> {
    let (statement, witness, beta, beta_prm) =
        bob_mid_common::<E>(session, pk_a, proof, b, c_a, rp_a, rp_b)?;
    let proof = ProofBobWc::prove(session, &statement, &witness, B)?;
    Ok(BobMidOutput {
        beta,
        c_b: statement.c2,
        beta_prm,
        proof,
    })
}

fn alice_decrypt_share<E: Curve>(
    sk_a: &PrivateKey,
    c_b: &BigInt,
) -> Result<BigInt> {
    let alpha_prm = sk_a.decrypt(c_b)?;
    Ok(alpha_prm.modulus(Scalar::<E>::group_order()))
}

/// Alice's last step: checks Bob's proof and returns her share α.
#[instrument(skip_all, err(Debug))]
pub fn alice_end<E: Curve>(
    session: &[u8],
    proof: &ProofBob,
    rp_a: &RingPedersenParams,
    c_a: &BigInt,
    c_b: &BigInt,
    sk_a: &PrivateKey,
) -> Result<BigInt> {
    let statement = BobStatement {
        pk: sk_a.public_key().clone(),
        rp: rp_a.clone(),
        c1: c_a.clone(),
        c2: c_b.clone(),
    };
    if !proof.verify::<E>(session, &statement) {
        error!("bob proof did not verify");
        return Err(Error::ProofRejected("bob proof"));
    }
    alice_decrypt_share::<E>(sk_a, c_b)
}

/// Like [alice_end], additionally checking that Bob's proof binds `B`.
#[instrument(skip_all, err(Debug))]
pub fn alice_end_wc<E: Curve>(
    session: &[u8],
    proof: &ProofBobWc<E>,
    B: &Point<E>,
    rp_a: &RingPedersenParams,
    c_a: &BigInt,
    c_b: &BigInt,
    sk_a: &PrivateKey,
) -> Result<BigInt> {
    let statement = BobStatement {
        pk: sk_a.public_key().clone(),
        rp: rp_a.clone(),
        c1: c_a.clone(),
        c2: c_b.clone(),
    };
    if !proof.verify(session, &statement, B) {
        error!("bob proof with check did not verify");
        return Err(Error::ProofRejected("bob proof with check"));
    }
    alice_decrypt_share::<E>(sk_a, c_b)
}
