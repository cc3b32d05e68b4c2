//! Canonical byte encoding of integers and proof bundles.
//!
//! Every integer is its minimal big-endian magnitude; zero is the empty
//! string. The same encoding feeds the challenge hashes, so two parties that
//! agree on the integers agree on the bytes.

use curv::{arithmetic::traits::*, BigInt};

use crate::{Error, Result};

pub fn big_int_to_bytes(n: &BigInt) -> Vec<u8> {
    if n.is_zero() {
        return Vec::new();
    }
    // the sign is not part of the encoding
    BigInt::abs(n).to_bytes()
}

pub fn big_ints_to_bytes(ints: &[BigInt]) -> Vec<Vec<u8>> {
    ints.iter().map(big_int_to_bytes).collect()
}

pub fn multi_bytes_to_big_ints<B: AsRef<[u8]>>(parts: &[B]) -> Vec<BigInt> {
    parts
        .iter()
        .map(|part| BigInt::from_bytes(part.as_ref()))
        .collect()
}

pub fn non_empty_bytes(bz: &[u8]) -> bool {
    !bz.is_empty()
}

/// True when there are exactly `expected_len` parts and none is empty.
pub fn non_empty_multi_bytes<B: AsRef<[u8]>>(
    parts: &[B],
    expected_len: usize,
) -> bool {
    parts.len() == expected_len
        && parts.iter().all(|part| non_empty_bytes(part.as_ref()))
}

/// Left-pads `src` with zeros up to `length` bytes. Longer input is returned
/// unchanged.
pub fn pad_to_length_bytes(src: &[u8], length: usize) -> Vec<u8> {
    if src.len() >= length {
        return src.to_vec();
    }
    let mut out = vec![0u8; length - src.len()];
    out.extend_from_slice(src);
    out
}

/// Decodes a fixed-shape proof. Rejects a wrong number of parts or an empty
/// part, the latter because no proof value is ever zero.
pub(crate) fn decode_proof_parts<B: AsRef<[u8]>>(
    parts: &[B],
    expected_len: usize,
    what: &'static str,
) -> Result<Vec<BigInt>> {
    if !non_empty_multi_bytes(parts, expected_len) {
        return Err(Error::MalformedProof(what));
    }
    Ok(multi_bytes_to_big_ints(parts))
}
