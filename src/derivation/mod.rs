//! Key derivation functions.

pub mod argon2;
