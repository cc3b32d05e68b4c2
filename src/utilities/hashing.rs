//! Framed SHA-512/256 used as the Fiat-Shamir random oracle.
//!
//! A list of `n` parts is absorbed as `LE64(n)` followed by
//! `part ‖ '$' ‖ LE64(len(part))` for every part, so `[12, 3]` and `[1, 23]`
//! never collide. Integers enter as their big-endian magnitude with zero as
//! the empty string.

use curv::{arithmetic::traits::*, BigInt};
use sha2::{Digest, Sha512Trunc256};

use super::encoding::big_int_to_bytes;

const HASH_INPUT_DELIMITER: u8 = b'$';

pub const DIGEST_BYTES: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digest256([u8; DIGEST_BYTES]);

impl Digest256 {
    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// The digest read as a non-negative big-endian integer.
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from_bytes(&self.0)
    }
}

impl AsRef<[u8]> for Digest256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

fn absorb_framed<B: AsRef<[u8]>>(state: &mut Sha512Trunc256, parts: &[B]) {
    state.update((parts.len() as u64).to_le_bytes());
    for part in parts {
        let part = part.as_ref();
        state.update(part);
        state.update([HASH_INPUT_DELIMITER]);
        state.update((part.len() as u64).to_le_bytes());
    }
}

fn finish(state: Sha512Trunc256) -> Digest256 {
    let mut out = [0u8; DIGEST_BYTES];
    out.copy_from_slice(&state.finalize());
    Digest256(out)
}

/// Framed digest of a list of byte strings.
pub fn sha512_256<B: AsRef<[u8]>>(parts: &[B]) -> Digest256 {
    let mut state = Sha512Trunc256::new();
    absorb_framed(&mut state, parts);
    finish(state)
}

/// Framed digest of a list of integers.
pub fn sha512_256i(ints: &[&BigInt]) -> Digest256 {
    let parts: Vec<Vec<u8>> =
        ints.iter().map(|n| big_int_to_bytes(n)).collect();
    sha512_256(&parts)
}

/// Framed digest of a list of integers under a domain-separation tag:
/// `H(H(tag) ‖ H(tag) ‖ frame(ints))`.
pub fn sha512_256i_tagged(tag: &[u8], ints: &[&BigInt]) -> Digest256 {
    let tag_digest = sha512_256(&[tag]);
    let parts: Vec<Vec<u8>> =
        ints.iter().map(|n| big_int_to_bytes(n)).collect();
    let mut state = Sha512Trunc256::new();
    state.update(tag_digest);
    state.update(tag_digest);
    absorb_framed(&mut state, &parts);
    finish(state)
}
