//! Top-level Argon2 orchestration: seeding the matrix, running the fill
//! loop, and deriving the output tag.
//!
//! This module owns the public entry points (`key`, `id_key`) and the
//! internal derivation shared with `pool::Argon2Pool`, which reuses
//! already-allocated matrices across calls instead of allocating one per
//! derivation.

use super::block::Block;
use super::boundary::{finalize, init};
use super::memory::MemoryLayout;
use super::params::{Argon2Params, Mode};
use crate::hash::blake2b_long;

/// Argon2 version 1.3, per RFC 9106.
pub const VERSION: u32 = super::boundary::ARGON2_VERSION;

/// Derives a key using Argon2i.
///
/// Argon2i uses exclusively data-independent memory addressing, which is
/// the right choice for decrypting secrets where an attacker able to
/// observe memory access patterns should learn nothing useful. It is
/// more vulnerable to GPU cracking than Argon2id for the same cost
/// parameters.
///
/// `memory` is in KiB and is rounded per §3 before use. `password`,
/// `salt`, `secret`, and `data` accept any byte sequence, including
/// empty. Panics if `time < 1` or `threads < 1` — both are fatal
/// programmer errors, not recoverable conditions.
pub fn key(password: &[u8], salt: &[u8], time: u32, memory: u32, threads: u32, key_len: usize) -> Vec<u8> {
    run(password, salt, None, None, time, memory, threads, key_len, Mode::Argon2i)
}

/// Derives a key using Argon2id.
///
/// Argon2id spends its first half-pass on data-independent addressing
/// (resisting side-channel leakage during the pass most useful to an
/// observer) and switches to data-dependent addressing afterward
/// (resisting the GPU/ASIC tradeoffs Argon2i alone is weaker against).
/// This is the variant recommended for password hashing.
///
/// `memory` is in KiB and is rounded per §3 before use. `password`,
/// `salt`, `secret`, and `data` accept any byte sequence, including
/// empty. Panics if `time < 1` or `threads < 1` — both are fatal
/// programmer errors, not recoverable conditions.
pub fn id_key(password: &[u8], salt: &[u8], time: u32, memory: u32, threads: u32, key_len: usize) -> Vec<u8> {
    run(password, salt, None, None, time, memory, threads, key_len, Mode::Argon2id)
}

fn run(
    password: &[u8],
    salt: &[u8],
    secret: Option<Vec<u8>>,
    associated_data: Option<Vec<u8>>,
    time: u32,
    memory: u32,
    threads: u32,
    key_len: usize,
    mode: Mode,
) -> Vec<u8> {
    let params = Argon2Params {
        mem_kib: memory,
        time,
        lanes: threads,
        tag_len: key_len,
        secret,
        associated_data,
    };
    params.validate();

    let mut matrix = vec![Block::ZERO; params.rounded_memory() as usize];
    derive_into(&mut matrix, password, salt, &params, mode)
}

/// Runs a full Argon2 derivation into an already-sized matrix.
///
/// `memory.len()` must equal `params.rounded_memory()`; callers that
/// lease matrices from an `Argon2Pool` guarantee this by construction.
pub(crate) fn derive_into(
    memory: &mut [Block],
    password: &[u8],
    salt: &[u8],
    params: &Argon2Params,
    mode: Mode,
) -> Vec<u8> {
    let layout = MemoryLayout::new(params, memory.len() as u32);
    let h0 = init(password, salt, params, params.mem_kib, mode);

    // B[i][0] = H'^(1024)(H0 || 0 || i), B[i][1] = H'^(1024)(H0 || 1 || i)
    for i in 0..layout.lanes {
        for j in 0..2u32 {
            let mut input = Vec::with_capacity(h0.len() + 8);
            input.extend_from_slice(&h0);
            input.extend_from_slice(&j.to_le_bytes());
            input.extend_from_slice(&i.to_le_bytes());

            let seed = blake2b_long(1024, &input);
            memory[layout.index(i, j)] = Block::from_bytes(seed.try_into().unwrap());
        }
    }

    layout.fill(memory, params.time, mode);

    finalize(memory, layout.lanes, layout.lane_len, params.tag_len)
}
