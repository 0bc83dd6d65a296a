//! A pool of reusable Argon2 memory matrices.
//!
//! Allocating the working matrix is the dominant cost of a single
//! derivation once memory is in the tens of megabytes. A server verifying
//! many passwords under the same cost parameters can avoid repeating that
//! allocation by leasing a matrix from an `Argon2Pool`, deriving into it,
//! and returning it for the next caller. Returned matrices are zeroed
//! before they go back into the free list, so no password-derived state
//! outlives the call that produced it.

use std::sync::Mutex;

use super::block::Block;
use super::core::derive_into;
use super::params::{Argon2Params, Mode};

/// A pool of reusable memory matrices for repeated Argon2id derivations
/// under fixed cost parameters.
///
/// All derivations through a pool use Argon2id, since the pool's purpose
/// (repeatedly hashing passwords under a server's configured cost) is
/// exactly what Argon2id is recommended for.
pub struct Argon2Pool {
    time: u32,
    mem_kib_requested: u32,
    threads: u32,
    rounded_memory: u32,
    free: Mutex<Vec<Vec<Block>>>,
}

impl Argon2Pool {
    /// Creates a pool for the given cost parameters. Panics if
    /// `time < 1` or `threads < 1`, the same fatal-programmer-error
    /// conditions `key`/`id_key` enforce.
    pub fn new(time: u32, memory: u32, threads: u32) -> Self {
        let probe = Argon2Params {
            mem_kib: memory,
            time,
            lanes: threads,
            tag_len: 32,
            secret: None,
            associated_data: None,
        };
        probe.validate();

        Self {
            time,
            mem_kib_requested: memory,
            threads,
            rounded_memory: probe.rounded_memory(),
            free: Mutex::new(Vec::new()),
        }
    }

    /// Derives an Argon2id key using this pool's cost parameters, leasing
    /// a matrix from the free list (or allocating one if the list is
    /// empty) and returning it, zeroed, once the derivation completes.
    /// `password`, `salt`, `secret`, and `data` accept any byte sequence,
    /// including empty.
    pub fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        secret: Option<Vec<u8>>,
        associated_data: Option<Vec<u8>>,
        key_len: usize,
    ) -> Vec<u8> {
        let params = Argon2Params {
            mem_kib: self.mem_kib_requested,
            time: self.time,
            lanes: self.threads,
            tag_len: key_len,
            secret,
            associated_data,
        };

        let mut matrix = self.lease();
        let tag = derive_into(&mut matrix, password, salt, &params, Mode::Argon2id);
        self.release(matrix);

        tag
    }

    fn lease(&self) -> Vec<Block> {
        let mut free = self.free.lock().unwrap();
        free.pop()
            .unwrap_or_else(|| vec![Block::ZERO; self.rounded_memory as usize])
    }

    fn release(&self, mut matrix: Vec<Block>) {
        matrix.iter_mut().for_each(Block::clear);
        self.free.lock().unwrap().push(matrix);
    }
}
