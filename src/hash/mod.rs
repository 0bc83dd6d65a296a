//! Hash primitives exposed by the crate.
//!
//! Currently just BLAKE2b-512 and its variable-length extension `H'`,
//! which together back the Argon2 derivation in `derivation::argon2`.

pub mod blake2b;

pub use blake2b::{blake2b, blake2b_long};
