//! The variable-length hash `H'` built on top of plain BLAKE2b (Argon2 §3.3).
//!
//! `H'` is used everywhere Argon2 needs more than 64 bytes of pseudorandom
//! output: filling the first two blocks of each lane and producing the
//! final tag. Address-block generation does not go through `H'` at all; it
//! uses the Argon2-specific compression function directly.

use super::constants::MAX_OUT_LEN;
use super::core::blake2b;

/// Computes `H'(out_len, input)`.
///
/// For `out_len <= 64` this is a single BLAKE2b call over the 4-byte
/// length prefix followed by `input`. For longer outputs it chains
/// BLAKE2b-512 calls, keeping the first half of each intermediate digest
/// except for the last one, which is emitted at whatever length remains.
pub fn blake2b_long(out_len: usize, input: &[u8]) -> Vec<u8> {
    assert!(out_len >= 1, "H' output length must be at least 1 byte");

    let mut prefixed = Vec::with_capacity(4 + input.len());
    prefixed.extend_from_slice(&(out_len as u32).to_le_bytes());
    prefixed.extend_from_slice(input);

    if out_len <= MAX_OUT_LEN {
        return blake2b(out_len, &prefixed);
    }

    let half = MAX_OUT_LEN / 2;
    let r = (out_len + 31) / 32 - 2;

    let mut out = Vec::with_capacity(out_len);
    let mut v = blake2b(MAX_OUT_LEN, &prefixed);
    out.extend_from_slice(&v[..half]);

    for _ in 1..r {
        v = blake2b(MAX_OUT_LEN, &v);
        out.extend_from_slice(&v[..half]);
    }

    let last_len = out_len - 32 * r;
    let last = blake2b(last_len, &v);
    out.extend_from_slice(&last);

    out
}
