//! Parameter definitions and validation for Argon2.
//!
//! This module defines the configurable parameters for an Argon2 run and
//! provides the validation RFC 9106 requires before a derivation starts.

/// Number of synchronization points (slices) per pass. Fixed by the
/// algorithm, not configurable.
pub(crate) const SYNC_POINTS: u32 = 4;

/// The three Argon2 variants. `Argon2d` is never exposed through the
/// public API; it exists only because Argon2id's data-dependent half
/// reuses its indexing rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    Argon2d = 0,
    Argon2i = 1,
    Argon2id = 2,
}

impl Mode {
    pub(crate) fn as_u32(self) -> u32 {
        self as u32
    }

    /// Whether pass `n`, slice `slice` uses data-independent addressing.
    pub(crate) fn data_independent(self, pass: u32, slice: u32) -> bool {
        match self {
            Mode::Argon2i => true,
            Mode::Argon2id => pass == 0 && slice < SYNC_POINTS / 2,
            Mode::Argon2d => false,
        }
    }
}

/// Configuration parameters for an Argon2 run.
///
/// These parameters control the memory and time cost of the hash function,
/// allowing the security level to be tuned for the target hardware and
/// threat model.
///
/// # Recommended Values
///
/// For password hashing in 2024+, OWASP recommends:
/// - `mem_kib`: 19456 (19 MiB) minimum, 47104 (46 MiB) for higher security
/// - `time`: 2 passes minimum
/// - `lanes`: 1 (single-threaded) or number of available cores
/// - `tag_len`: 32 bytes for most applications
#[derive(Clone, Debug)]
pub struct Argon2Params {
    /// Memory size in KiB. Rounded internally; see `rounded_memory`.
    pub mem_kib: u32,
    /// Number of passes over memory (minimum 1).
    pub time: u32,
    /// Degree of parallelism (number of lanes, minimum 1).
    pub lanes: u32,
    /// Length of the output tag in bytes.
    pub tag_len: usize,
    /// Optional secret key for keyed hashing.
    pub secret: Option<Vec<u8>>,
    /// Optional associated data.
    pub associated_data: Option<Vec<u8>>,
}

impl Argon2Params {
    /// Checks the only two conditions the algorithm treats as errors.
    /// Both are fatal programmer errors, not recoverable values: a
    /// caller passing `time < 1` or `lanes < 1` gets a panic, not a
    /// `Result`, matching the Argon2 reference implementations.
    pub(crate) fn validate(&self) {
        assert!(self.time >= 1, "argon2: number of rounds too small");
        assert!(self.lanes >= 1, "argon2: parallelism degree too low");
    }

    /// Rounds `mem_kib` down to a multiple of `SYNC_POINTS * lanes`,
    /// floored at `2 * SYNC_POINTS * lanes`, per RFC 9106 §3.1.
    pub(crate) fn rounded_memory(&self) -> u32 {
        let quantum = SYNC_POINTS * self.lanes;
        let floor = 2 * quantum;
        self.mem_kib.max(floor) / quantum * quantum
    }
}

impl Default for Argon2Params {
    /// Default parameters: 64 MiB memory, 3 passes, 1 lane, 32-byte tag.
    fn default() -> Self {
        Self {
            mem_kib: 64 * 1024,
            time: 3,
            lanes: 1,
            tag_len: 32,
            secret: None,
            associated_data: None,
        }
    }
}
