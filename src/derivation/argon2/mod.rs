//! Argon2 password hashing and key derivation (RFC 9106).
//!
//! Argon2 is a memory-hard key derivation function. This module
//! implements the Argon2i and Argon2id variants; Argon2d exists only
//! internally as the data-dependent addressing rule Argon2id's second
//! half reuses, and is not exposed publicly.
//!
//! # Security Properties
//!
//! - **Memory hardness**: requires a configurable amount of memory,
//!   making parallel attacks expensive.
//! - **Time hardness**: supports multiple passes over memory to
//!   increase computation time.
//! - **Side-channel resistance** (Argon2i, and the first half-pass of
//!   Argon2id): reference-block indices are derived from a counter
//!   rather than from data already in memory.
//!
//! # Algorithm Overview
//!
//! 1. **Initialization**: compute H0 = BLAKE2b(params || password || salt || secret || data).
//! 2. **Lane initialization**: generate the first two blocks of each
//!    lane using H' (the variable-length BLAKE2b extension).
//! 3. **Memory filling**: fill the remaining blocks using the
//!    compression function G, processing one segment per lane per
//!    slice on its own OS thread.
//! 4. **Finalization**: XOR the last block of each lane together and
//!    apply H' to produce the output tag.
//!
//! # Memory Organization
//!
//! Memory is organized as a matrix of 1024-byte blocks:
//! - **Lanes**: independent rows, each filled by its own worker thread.
//! - **Slices**: each lane is divided into 4 slices (sync points).
//! - **Segments**: the blocks within one (lane, slice) pair.

mod block;
mod boundary;
mod core;
mod memory;
mod parallel;
mod params;
mod pool;
mod reference;

pub use self::core::{id_key, key, VERSION};
pub use params::Argon2Params;
pub use pool::Argon2Pool;
