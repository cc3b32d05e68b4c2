/*
    Paillier MtA

    This file is part of the paillier-mta library.

    paillier-mta is free software: you can redistribute
    it and/or modify it under the terms of the GNU General Public
    License as published by the Free Software Foundation, either
    version 3 of the License, or (at your option) any later version.

    @license GPL-3.0+
*/

//! Cryptographic core of the GG18/GG20 threshold ECDSA signing protocol.
//!
//! * [paillier]: the additively homomorphic Paillier cryptosystem.
//! * [zkproof::paillier_key]: proof that a Paillier modulus was honestly
//!   generated, bound to a party index and an elliptic-curve public point.
//! * [zkproof::bob] and [zkproof::alice_range]: the range proofs of the
//!   Multiplicative-to-Additive (MtA) conversion.
//! * [mta]: the MtA share conversion built on top of those proofs.
//!
//! Every proof in this crate consumes fresh randomness from the operating
//! system on each invocation. Two proofs over the same key must never share
//! prover randomness; doing so leaks the witness.

pub mod mta;
pub mod paillier;
pub mod security_level;
pub mod utilities;
pub mod zkproof;

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("modulus must be an integer greater than one")]
    InvalidModulus,
    #[error("value is not invertible modulo the modulus")]
    NoInverse,
    #[error("plaintext is outside [0, N)")]
    InvalidMessage,
    #[error("ciphertext is outside Z*_{{N^2}}")]
    InvalidCiphertext,
    #[error("witness is outside the range allowed by the proof")]
    RangeViolation,
    #[error("malformed curve point or byte encoding")]
    Encoding,
    #[error("key generation was canceled")]
    Canceled,
    #[error("key generation deadline elapsed")]
    Timeout,
    #[error("malformed proof: {0}")]
    MalformedProof(&'static str),
    #[error("{0} did not verify")]
    ProofRejected(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
