//! BLAKE2b-512 compression and single-shot hashing (RFC 7693).
//!
//! This module implements plain, unkeyed BLAKE2b with a caller-chosen
//! digest length of up to 64 bytes. It underlies both the parameter
//! preamble hash used directly by Argon2 (`blake2b`) and the long-output
//! construction `H'` (`super::long::blake2b_long`), which chains calls to
//! this primitive to produce digests longer than 64 bytes.

use super::constants::{BLOCK_BYTES, IV, MAX_OUT_LEN};
use super::computations::compress_rounds;

/// Compresses a single 128-byte message block into the running state.
///
/// `t` is the total number of input bytes processed so far, including this
/// block; `last` marks the final block of the message.
fn compress(state: &mut [u64; 8], block: &[u8; BLOCK_BYTES], t: u128, last: bool) {
    let mut m = [0u64; 16];
    for (slot, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        *slot = u64::from_le_bytes(chunk.try_into().unwrap());
    }

    let mut v = [0u64; 16];
    v[0..8].copy_from_slice(state);
    v[8..16].copy_from_slice(&IV);

    v[12] ^= t as u64;
    v[13] ^= (t >> 64) as u64;
    if last {
        v[14] = !v[14];
    }

    compress_rounds(&mut v, &m);

    for i in 0..8 {
        state[i] ^= v[i] ^ v[i + 8];
    }
}

/// Computes a plain, unkeyed BLAKE2b digest of `input`, truncated to
/// `out_len` bytes (`1..=64`).
///
/// This is the raw primitive described by RFC 7693; it does not apply the
/// Argon2 length-prefix framing used by `H'` (see `super::long`).
pub fn blake2b(out_len: usize, input: &[u8]) -> Vec<u8> {
    assert!(
        (1..=MAX_OUT_LEN).contains(&out_len),
        "blake2b output length must be between 1 and 64 bytes"
    );

    let mut state = IV;
    state[0] ^= 0x01010000 ^ (out_len as u64);

    let mut processed: u128 = 0;
    let mut chunks = input.chunks(BLOCK_BYTES).peekable();

    if chunks.peek().is_none() {
        let block = [0u8; BLOCK_BYTES];
        compress(&mut state, &block, 0, true);
    } else {
        while let Some(chunk) = chunks.next() {
            let is_last = chunks.peek().is_none();
            let mut block = [0u8; BLOCK_BYTES];
            block[..chunk.len()].copy_from_slice(chunk);
            processed += chunk.len() as u128;
            compress(&mut state, &block, processed, is_last);
        }
    }

    let mut out = Vec::with_capacity(out_len);
    for word in state.iter() {
        out.extend_from_slice(&word.to_le_bytes());
    }
    out.truncate(out_len);
    out
}
