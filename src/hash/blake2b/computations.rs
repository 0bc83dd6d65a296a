//! BLAKE2b internal mixing function and round logic (RFC 7693 §3.1-3.2).
//!
//! This is the unmodified BLAKE2b mixing function, built from additions and
//! message words. It is distinct from the Argon2-specific variant in
//! `derivation::argon2::block`, which drops the message schedule entirely
//! and introduces a multiplication step for extra diffusion.

use super::constants::SIGMA;

/// BLAKE2b mixing function G, applied to one of the eight (a, b, c, d)
/// quadruples that make up a round.
#[inline(always)]
fn mix(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

/// Runs the 12 BLAKE2b rounds over the 16-word working vector `v`, using
/// the 16-word message block `m`.
pub(super) fn compress_rounds(v: &mut [u64; 16], m: &[u64; 16]) {
    for round in SIGMA.iter() {
        mix(v, 0, 4, 8, 12, m[round[0]], m[round[1]]);
        mix(v, 1, 5, 9, 13, m[round[2]], m[round[3]]);
        mix(v, 2, 6, 10, 14, m[round[4]], m[round[5]]);
        mix(v, 3, 7, 11, 15, m[round[6]], m[round[7]]);

        mix(v, 0, 5, 10, 15, m[round[8]], m[round[9]]);
        mix(v, 1, 6, 11, 12, m[round[10]], m[round[11]]);
        mix(v, 2, 7, 8, 13, m[round[12]], m[round[13]]);
        mix(v, 3, 4, 9, 14, m[round[14]], m[round[15]]);
    }
}
