use argon2_core::derivation::argon2::{id_key, key, Argon2Pool};

fn hex_to_bytes(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}

#[test]
fn id_key_is_deterministic() {
    let a = id_key(b"password", b"saltsalt", 3, 32, 4, 32);
    let b = id_key(b"password", b"saltsalt", 3, 32, 4, 32);
    assert_eq!(a, b);
}

#[test]
fn key_is_deterministic() {
    let a = key(b"password", b"saltsalt", 3, 32, 4, 32);
    let b = key(b"password", b"saltsalt", 3, 32, 4, 32);
    assert_eq!(a, b);
}

#[test]
fn id_key_changes_with_salt() {
    let a = id_key(b"password", b"saltAAAA", 3, 32, 4, 32);
    let b = id_key(b"password", b"saltBBBB", 3, 32, 4, 32);
    assert_ne!(a, b);
}

#[test]
fn id_key_and_key_diverge() {
    // Argon2i and Argon2id must differ under identical inputs: the mode
    // byte is folded into H0, and Argon2id uses data-dependent addressing
    // for the back half of its passes.
    let a = key(b"password", b"saltsalt", 3, 32, 4, 32);
    let b = id_key(b"password", b"saltsalt", 3, 32, 4, 32);
    assert_ne!(a, b);
}

#[test]
fn single_bit_flips_change_the_output() {
    let base = id_key(b"password", b"saltsalt", 2, 64, 2, 32);

    assert_ne!(base, id_key(b"Password", b"saltsalt", 2, 64, 2, 32));
    assert_ne!(base, id_key(b"password", b"Saltsalt", 2, 64, 2, 32));
    assert_ne!(base, id_key(b"password", b"saltsalt", 3, 64, 2, 32));
    assert_ne!(base, id_key(b"password", b"saltsalt", 2, 64, 1, 32));
    assert_ne!(base, id_key(b"password", b"saltsalt", 2, 64, 2, 16));
}

#[test]
fn output_length_matches_request() {
    assert_eq!(id_key(b"p", b"saltsalt", 1, 32, 1, 4).len(), 4);
    assert_eq!(id_key(b"p", b"saltsalt", 1, 32, 1, 64).len(), 64);
    assert_eq!(id_key(b"p", b"saltsalt", 1, 32, 1, 128).len(), 128);
}

/// Empty salt, password, secret, and associated data are all legal inputs
/// (spec §7/§8) — none of them gets a length floor.
#[test]
fn empty_salt_is_legal() {
    let out = id_key(b"password", b"", 2, 32, 1, 32);
    assert_eq!(out.len(), 32);
}

#[test]
fn empty_password_is_legal() {
    let out = id_key(b"", b"saltsalt", 2, 32, 1, 32);
    assert_eq!(out.len(), 32);
}

#[test]
fn empty_secret_and_data_are_legal_through_pool() {
    let pool = Argon2Pool::new(2, 32, 1);
    let via_pool = pool.derive(b"password", b"saltsalt", None, None, 32);
    let via_id_key = id_key(b"password", b"saltsalt", 2, 32, 1, 32);
    assert_eq!(via_pool, via_id_key);
}

#[test]
#[should_panic(expected = "number of rounds too small")]
fn zero_passes_panics() {
    id_key(b"password", b"saltsalt", 0, 32, 1, 32);
}

#[test]
#[should_panic(expected = "parallelism degree too low")]
fn zero_lanes_panics() {
    id_key(b"password", b"saltsalt", 1, 32, 0, 32);
}

#[test]
#[should_panic(expected = "number of rounds too small")]
fn pool_new_rejects_zero_passes() {
    Argon2Pool::new(0, 32, 1);
}

#[test]
#[should_panic(expected = "parallelism degree too low")]
fn pool_new_rejects_zero_lanes() {
    Argon2Pool::new(1, 32, 0);
}

/// S6: `memory = 2` with `threads = 4` is below the internal rounding
/// quantum (`2 * syncPoints * threads = 32`), but the algorithm has no
/// memory floor error, only a rounding rule (§3/§8) — this must succeed,
/// not panic or error.
#[test]
fn small_memory_rounds_up_instead_of_being_rejected() {
    let a = id_key(b"password", b"saltsalt", 1, 2, 4, 32);
    let b = id_key(b"password", b"saltsalt", 1, 2, 4, 32);
    assert_eq!(a, b);
    assert_eq!(a.len(), 32);

    // The preamble embeds the requested memory value (2), not the rounded
    // matrix size (32), so this must diverge from a derivation that asks
    // for 32 KiB directly even though both run against the same matrix.
    let requesting_rounded_value_directly = id_key(b"password", b"saltsalt", 1, 32, 4, 32);
    assert_ne!(a, requesting_rounded_value_directly);
}

#[test]
fn pool_reuses_matrices_without_cross_contamination() {
    let pool = Argon2Pool::new(1, 64, 4);

    let first = pool.derive(b"password-one", b"saltsalt", None, None, 32);
    let _second = pool.derive(b"password-two", b"saltsalt", None, None, 32);
    let first_again = pool.derive(b"password-one", b"saltsalt", None, None, 32);

    assert_eq!(first, first_again);
}

/// Short/empty salt and arbitrary tag lengths are legal through the pool
/// too — there is no validation beyond `time >= 1` and `threads >= 1`.
#[test]
fn pool_accepts_short_salt_and_any_tag_length() {
    let pool = Argon2Pool::new(1, 32, 1);
    assert_eq!(pool.derive(b"password", b"short", None, None, 32).len(), 32);
    assert_eq!(pool.derive(b"password", b"saltsalt", None, None, 2).len(), 2);
}

// --- Pinned known-answer tests ---------------------------------------
//
// These vectors are the canonical Argon2 reference-implementation test
// suite values (password = "password", salt = "somesalt", version =
// 0x13), cross-checked against the z33ky/argon2 test vectors in the
// example pack. A fill loop that only produced correctly-sized garbage
// would pass a `.len()` check but fail these.

/// S1: Argon2i, reachable directly through `key` with its implicit empty
/// secret/associated data.
#[test]
fn argon2i_known_answer_vector() {
    let expected = hex_to_bytes("c1628832147d9720c5bd1cfd61367078729f6dfb6f8fea9ff98158e0d7816ed0");
    assert_eq!(key(b"password", b"somesalt", 2, 65536, 1, 32), expected);
}

/// Same vector family, exercising the multi-lane fill path under Argon2i.
#[test]
fn argon2i_known_answer_vector_multi_lane() {
    let expected = hex_to_bytes("4ff5ce2769a1d7f4c8a491df09d41a9fbe90e5eb02155a13e4c01e20cd4eab61");
    assert_eq!(key(b"password", b"somesalt", 2, 256, 2, 32), expected);
}

/// S3: Argon2id, single-lane fill path.
#[test]
fn argon2id_known_answer_vector_single_lane() {
    let expected = hex_to_bytes("09316115d5cf24ed5a15a31a3ba326e5cf32edc24702987c02b6566f61913cf7");
    assert_eq!(id_key(b"password", b"somesalt", 2, 65536, 1, 32), expected);
}

/// S4: Argon2id, multi-lane fill path.
#[test]
fn argon2id_known_answer_vector_many_lanes() {
    let expected = hex_to_bytes("6d093c501fd5999645e0ea3bf620d7b8be7fd2db59c20d9fff9539da2bf57037");
    assert_eq!(id_key(b"password", b"somesalt", 2, 256, 2, 32), expected);
}

/// RFC 9106 §5.3 Argon2id known-answer test: 32-byte password of 0x01,
/// 16-byte salt of 0x02, 8-byte secret of 0x03, 12-byte associated data
/// of 0x04, time=3, memory=32, threads=4, keyLen=32, version=0x13.
///
/// `secret`/`data` are only reachable through `Argon2Pool::derive`, since
/// `id_key` always passes them empty; a pool built with matching cost
/// parameters exercises exactly this vector.
#[test]
fn rfc9106_argon2id_known_answer_vector() {
    let password = [0x01u8; 32];
    let salt = [0x02u8; 16];
    let secret = vec![0x03u8; 8];
    let associated_data = vec![0x04u8; 12];

    let pool = Argon2Pool::new(3, 32, 4);
    let result = pool.derive(&password, &salt, Some(secret), Some(associated_data), 32);

    let expected = [
        0x0d, 0x64, 0x0d, 0xf5, 0x8d, 0x78, 0x76, 0x6c, 0x08, 0xc0, 0x37, 0xa3, 0x4a, 0x8b, 0x53,
        0xc9, 0xd0, 0x1e, 0xf0, 0x45, 0x2d, 0x75, 0xb6, 0x5e, 0xb5, 0x25, 0x20, 0xe9, 0x6b, 0x01,
        0xe6, 0x59,
    ];

    assert_eq!(result, expected);
}
