#![allow(non_snake_case)]
/*
    MtA Range Proof for Alice

    This file is part of the paillier-mta library.

    paillier-mta is free software: you can redistribute
    it and/or modify it under the terms of the GNU General Public
    License as published by the Free Software Foundation, either
    version 3 of the License, or (at your option) any later version.

    @license GPL-3.0+
*/

//! Alice's range proof for the MtA conversion (GG18, appendix A.1).
//!
//! Common input is Alice's Paillier key N, the verifier's ring-Pedersen
//! parameters (Ñ, h1, h2) and a ciphertext c. Alice knows m ∈ [0, q) and
//! r ∈ Z*_N with c = Γ^m · r^N mod N^2, and convinces the verifier that
//! m < q^3.

use curv::arithmetic::traits::*;
use curv::elliptic::curves::{Curve, Scalar};
use curv::BigInt;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use zeroize::Zeroize;

use crate::paillier::PublicKey;
use crate::security_level::{MTA_ALPHA_EXP, MTA_X_EXP};
use crate::utilities::encoding::{big_ints_to_bytes, decode_proof_parts};
use crate::utilities::hashing::sha512_256i_tagged;
use crate::utilities::{
    get_random_positive_int, is_in_interval, is_number_in_multiplicative_group,
    mod_pow_with_negative, rejection_sample, sample_relatively_prime_integer,
    RingPedersenParams,
};
use crate::{Error, Result};

const RANGE_PROOF_ALICE_PARTS: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliceStatement {
    pub pk: PublicKey,
    /// The verifier's auxiliary modulus and bases.
    pub rp: RingPedersenParams,
    pub c: BigInt,
}

#[derive(Clone)]
pub struct AliceWitness {
    m: BigInt,
    r: BigInt,
}

impl AliceWitness {
    pub fn new(m: BigInt, r: BigInt) -> Self {
        Self { m, r }
    }
}

impl Drop for AliceWitness {
    fn drop(&mut self) {
        self.m.zeroize();
        self.r.zeroize();
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeProofAlice {
    pub z: BigInt,
    pub u: BigInt,
    pub w: BigInt,
    pub s: BigInt,
    pub s1: BigInt,
    pub s2: BigInt,
}

fn challenge(
    session: &[u8],
    q: &BigInt,
    statement: &AliceStatement,
    z: &BigInt,
    u: &BigInt,
    w: &BigInt,
) -> BigInt {
    let gamma = statement.pk.gamma();
    let e_hash = sha512_256i_tagged(
        session,
        &[
            &statement.pk.n,
            &gamma,
            &statement.rp.ntilde,
            &statement.rp.h1,
            &statement.rp.h2,
            &statement.c,
            z,
            u,
            w,
        ],
    );
    rejection_sample(q, &e_hash.to_bigint())
}

impl RangeProofAlice {
    /// Uses fresh randomness on every call.
    pub fn prove<E: Curve>(
        session: &[u8],
        statement: &AliceStatement,
        witness: &AliceWitness,
    ) -> Result<Self> {
        statement.pk.validate()?;
        statement.rp.validate()?;
        let q = Scalar::<E>::group_order();
        let q3 = BigInt::pow(q, MTA_ALPHA_EXP);
        let N = &statement.pk.n;
        let NN = statement.pk.n_square();
        let Nt = &statement.rp.ntilde;

        if !is_in_interval(&witness.m, &BigInt::pow(q, MTA_X_EXP)) {
            error!("alice range proof witness is outside its range");
            return Err(Error::RangeViolation);
        }

        // Step 1: sample α ∈ [0, q^3), β ∈ Z*_N, γ ∈ [0, q^3·Ñ), ρ ∈ [0, q·Ñ)
        let alpha = get_random_positive_int(&q3);
        let beta = sample_relatively_prime_integer(N);
        let gamma = get_random_positive_int(&(&q3 * Nt));
        let rho = get_random_positive_int(&(q * Nt));

        // Step 2: z = h1^m h2^ρ, u = Γ^α β^N mod N^2, w = h1^α h2^γ
        let z = statement.rp.commit(&witness.m, &rho);
        let u = BigInt::mod_mul(
            &(BigInt::one() + &alpha * N).modulus(&NN),
            &BigInt::mod_pow(&beta, N, &NN),
            &NN,
        );
        let w = statement.rp.commit(&alpha, &gamma);

        // Step 3: challenge
        let e = challenge(session, q, statement, &z, &u, &w);

        // Step 4: s = r^e β mod N, s1 = e·m + α, s2 = e·ρ + γ
        let s = BigInt::mod_mul(&BigInt::mod_pow(&witness.r, &e, N), &beta, N);
        let s1 = &e * &witness.m + &alpha;
        let s2 = &e * &rho + &gamma;

        Ok(Self { z, u, w, s, s1, s2 })
    }

    pub fn verify<E: Curve>(
        &self,
        session: &[u8],
        statement: &AliceStatement,
    ) -> bool {
        let q = Scalar::<E>::group_order();
        let q3 = BigInt::pow(q, MTA_ALPHA_EXP);
        let N = &statement.pk.n;
        let NN = statement.pk.n_square();
        let Nt = &statement.rp.ntilde;

        if !is_number_in_multiplicative_group(Nt, &self.z)
            || !is_number_in_multiplicative_group(Nt, &self.w)
            || !is_number_in_multiplicative_group(&NN, &self.u)
            || !is_number_in_multiplicative_group(N, &self.s)
            || !is_number_in_multiplicative_group(&NN, &statement.c)
        {
            debug!("alice range proof: value outside its group");
            return false;
        }
        if BigInt::is_negative(&self.s1)
            || BigInt::is_negative(&self.s2)
            || self.s1 > q3
        {
            debug!("alice range proof: response out of range");
            return false;
        }

        let e = challenge(session, q, statement, &self.z, &self.u, &self.w);
        let minus_e = -&e;

        // u == Γ^s1 · s^N · c^-e mod N^2
        let c_inv_e = match mod_pow_with_negative(&statement.c, &minus_e, &NN)
        {
            Ok(v) => v,
            Err(_) => return false,
        };
        let right = BigInt::mod_mul(
            &BigInt::mod_mul(
                &(BigInt::one() + &self.s1 * N).modulus(&NN),
                &BigInt::mod_pow(&self.s, N, &NN),
                &NN,
            ),
            &c_inv_e,
            &NN,
        );
        if self.u != right {
            debug!("alice range proof: paillier relation failed");
            return false;
        }

        // w == h1^s1 · h2^s2 · z^-e mod Ñ
        let z_inv_e = match mod_pow_with_negative(&self.z, &minus_e, Nt) {
            Ok(v) => v,
            Err(_) => return false,
        };
        let right = BigInt::mod_mul(
            &statement.rp.commit(&self.s1, &self.s2),
            &z_inv_e,
            Nt,
        );
        if self.w != right {
            debug!("alice range proof: commitment failed");
            return false;
        }
        true
    }

    /// `[z, u, w, s, s1, s2]`
    pub fn to_bytes_parts(&self) -> Vec<Vec<u8>> {
        big_ints_to_bytes(&[
            self.z.clone(),
            self.u.clone(),
            self.w.clone(),
            self.s.clone(),
            self.s1.clone(),
            self.s2.clone(),
        ])
    }

    pub fn from_bytes_parts<B: AsRef<[u8]>>(parts: &[B]) -> Result<Self> {
        let ints = decode_proof_parts(
            parts,
            RANGE_PROOF_ALICE_PARTS,
            "alice range proof",
        )?;
        Ok(Self {
            z: ints[0].clone(),
            u: ints[1].clone(),
            w: ints[2].clone(),
            s: ints[3].clone(),
            s1: ints[4].clone(),
            s2: ints[5].clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::testing::{paillier_key, ring_pedersen};
    use curv::elliptic::curves::Secp256k1;

    fn instance(m: BigInt) -> (AliceStatement, AliceWitness) {
        let pk = paillier_key().public_key().clone();
        let (rp, _) = ring_pedersen();
        let (c, r) = pk.encrypt_and_return_randomness(&m).unwrap();
        (
            AliceStatement {
                pk,
                rp: rp.clone(),
                c,
            },
            AliceWitness::new(m, r),
        )
    }

    #[test]
    fn test_range_proof_alice() {
        let q = Scalar::<Secp256k1>::group_order();
        let (statement, witness) = instance(get_random_positive_int(q));
        let proof = RangeProofAlice::prove::<Secp256k1>(
            b"mta-1",
            &statement,
            &witness,
        )
        .unwrap();
        assert!(proof.verify::<Secp256k1>(b"mta-1", &statement));
        assert!(!proof.verify::<Secp256k1>(b"mta-2", &statement));

        let mut other = statement.clone();
        other.c = statement.pk.encrypt(&BigInt::from(7)).unwrap();
        assert!(!proof.verify::<Secp256k1>(b"mta-1", &other));

        let mut tampered = proof.clone();
        tampered.s2 = &tampered.s2 + BigInt::one();
        assert!(!tampered.verify::<Secp256k1>(b"mta-1", &statement));

        let mut tampered = proof;
        tampered.s1 = BigInt::pow(q, MTA_ALPHA_EXP) + BigInt::one();
        assert!(!tampered.verify::<Secp256k1>(b"mta-1", &statement));
    }

    #[test]
    fn test_range_proof_alice_rejects_large_witness() {
        let q = Scalar::<Secp256k1>::group_order();
        let (statement, witness) = instance(q.clone());
        assert_eq!(
            RangeProofAlice::prove::<Secp256k1>(b"mta-1", &statement, &witness),
            Err(Error::RangeViolation)
        );
    }

    #[test]
    fn test_range_proof_alice_rejects_degenerate_statement() {
        let (statement, witness) = instance(BigInt::from(5));

        let mut bad = statement.clone();
        bad.rp.ntilde = -&statement.rp.ntilde;
        assert_eq!(
            RangeProofAlice::prove::<Secp256k1>(b"mta-1", &bad, &witness),
            Err(Error::InvalidModulus)
        );

        let mut bad = statement.clone();
        bad.rp.h1 = bad.rp.ntilde.clone();
        assert_eq!(
            RangeProofAlice::prove::<Secp256k1>(b"mta-1", &bad, &witness),
            Err(Error::Encoding)
        );

        let mut bad = statement;
        bad.pk = PublicKey::new(BigInt::zero());
        assert_eq!(
            RangeProofAlice::prove::<Secp256k1>(b"mta-1", &bad, &witness),
            Err(Error::InvalidModulus)
        );
    }

    #[test]
    fn test_range_proof_alice_parts() {
        let (statement, witness) = instance(BigInt::from(12345));
        let proof = RangeProofAlice::prove::<Secp256k1>(
            b"mta-1",
            &statement,
            &witness,
        )
        .unwrap();
        let parts = proof.to_bytes_parts();
        assert_eq!(parts.len(), RANGE_PROOF_ALICE_PARTS);
        let decoded = RangeProofAlice::from_bytes_parts(&parts).unwrap();
        assert!(decoded.verify::<Secp256k1>(b"mta-1", &statement));
        assert_eq!(
            RangeProofAlice::from_bytes_parts(&parts[..5]),
            Err(Error::MalformedProof("alice range proof"))
        );
    }
}
