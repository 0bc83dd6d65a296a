//! Cryptographic utilities and primitives for Nebula
//!
//! This crate provides low-level cryptographic building blocks used
//! throughout the Nebula ecosystem.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All components
//! are designed to be dependency-free, explicit in their semantics, and
//! suitable for security-critical code.
//!
//! # Module overview
//!
//! - `hash`
//!   Cryptographic hash functions and related utilities. Currently
//!   BLAKE2b-512 and its variable-length extension H', which back the
//!   key derivation in `derivation::argon2`.
//!
//! - `derivation`
//!   Key derivation functions. Currently Argon2i/Argon2id (RFC 9106), a
//!   memory-hard password hashing and key derivation function, along
//!   with an `Argon2Pool` for reusing working memory across repeated
//!   derivations under the same cost parameters.
//!
//! # Design goals
//!
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between cryptographic code and supporting utilities
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for Nebula's internal cryptographic needs.

pub mod derivation;
pub mod hash;
