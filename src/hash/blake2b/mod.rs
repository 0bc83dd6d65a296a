//! BLAKE2b-512 and its Argon2 variable-length extension `H'`.

mod constants;
mod computations;
mod core;
mod long;

pub use self::core::blake2b;
pub use self::long::blake2b_long;
