//! Integration tests for raw cipher contexts.
//!
//! Exercises the public surface only: resolution, construction checks,
//! transform checks, round-trips and chaining for every supported cipher.

use rawcipher_crypto::{
    create_cipher, create_decipher, supported_ciphers, CipherContext, CipherError, Direction,
};

fn key_iv(name: &str) -> (Vec<u8>, Vec<u8>) {
    let d = rawcipher_crypto::resolve(name).unwrap();
    let key = (0..d.key_len).map(|i| (i * 7 + 1) as u8).collect();
    let iv = (0..d.iv_len).map(|i| (i * 13 + 5) as u8).collect();
    (key, iv)
}

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (7 + 11 * i) as u8).collect()
}

// -------------------------------------------------------
// Round-trip for every cipher
// -------------------------------------------------------
#[test]
fn test_roundtrip_all_ciphers() {
    for d in supported_ciphers() {
        let (key, iv) = key_iv(d.name);
        let pt = sample(d.block_size.max(8) * 6);

        let mut enc = create_cipher(d.name, &key, &iv).unwrap();
        let mut ct = vec![0u8; pt.len()];
        enc.transform(&mut ct, &pt).unwrap();
        assert_ne!(ct, pt, "{}", d.name);

        let mut dec = create_decipher(d.name, &key, &iv).unwrap();
        let mut out = vec![0u8; ct.len()];
        dec.transform(&mut out, &ct).unwrap();
        assert_eq!(out, pt, "{}", d.name);
    }
}

// -------------------------------------------------------
// Chaining: [A, B] on one context == A+B on a fresh one
// -------------------------------------------------------
#[test]
fn test_chaining_matches_single_call() {
    for d in supported_ciphers() {
        let (key, iv) = key_iv(d.name);
        let a_len = 2 * d.block_size.max(8);
        let b_len = 3 * d.block_size.max(8);
        let pt = sample(a_len + b_len);

        let mut whole = vec![0u8; pt.len()];
        create_cipher(d.name, &key, &iv)
            .unwrap()
            .transform(&mut whole, &pt)
            .unwrap();

        let mut enc = create_cipher(d.name, &key, &iv).unwrap();
        let mut split = vec![0u8; pt.len()];
        let (out_a, out_b) = split.split_at_mut(a_len);
        enc.transform(out_a, &pt[..a_len]).unwrap();
        enc.transform(out_b, &pt[a_len..]).unwrap();

        assert_eq!(split, whole, "{}", d.name);
    }
}

#[test]
fn test_stream_modes_chain_on_odd_lengths() {
    for name in ["aes-128-ctr", "aes-256-cfb", "aes-192-ofb", "sm4-ctr", "sm4-cfb"] {
        let (key, iv) = key_iv(name);
        let pt = sample(61);

        let mut whole = vec![0u8; pt.len()];
        create_cipher(name, &key, &iv)
            .unwrap()
            .transform(&mut whole, &pt)
            .unwrap();

        let mut enc = create_cipher(name, &key, &iv).unwrap();
        let mut pieces = pt.clone();
        for chunk in pieces.chunks_mut(5) {
            enc.transform_in_place(chunk).unwrap();
        }
        assert_eq!(pieces, whole, "{name}");

        let mut dec = create_decipher(name, &key, &iv).unwrap();
        for chunk in pieces.chunks_mut(9) {
            dec.transform_in_place(chunk).unwrap();
        }
        assert_eq!(pieces, pt, "{name}");
    }
}

// -------------------------------------------------------
// Validation failures leave the context usable
// -------------------------------------------------------
#[test]
fn test_unaligned_input_is_stateless() {
    let (key, iv) = key_iv("aes-128-cbc");
    let mut ctx = create_cipher("aes-128-cbc", &key, &iv).unwrap();

    let bad = sample(24);
    let mut out = vec![0u8; 24];
    let first = ctx.transform(&mut out, &bad).unwrap_err();
    let second = ctx.transform(&mut out, &bad).unwrap_err();
    assert_eq!(
        first,
        CipherError::UnalignedInput {
            len: 24,
            block_size: 16
        }
    );
    assert_eq!(first, second);

    let pt = sample(32);
    let mut after_errors = vec![0u8; 32];
    ctx.transform(&mut after_errors, &pt).unwrap();

    let mut fresh = vec![0u8; 32];
    create_cipher("aes-128-cbc", &key, &iv)
        .unwrap()
        .transform(&mut fresh, &pt)
        .unwrap();
    assert_eq!(after_errors, fresh);
}

#[test]
fn test_unaligned_in_place_is_stateless() {
    let cases = [("aes-128-cbc", 20usize, 16usize), ("des-ede3-ecb", 12, 8)];
    for (name, bad_len, block_size) in cases {
        let (key, iv) = key_iv(name);
        let mut ctx = create_cipher(name, &key, &iv).unwrap();

        let original = sample(bad_len);
        let mut buf = original.clone();
        for _ in 0..2 {
            assert_eq!(
                ctx.transform_in_place(&mut buf).unwrap_err(),
                CipherError::UnalignedInput {
                    len: bad_len,
                    block_size
                },
                "{name}"
            );
            assert_eq!(buf, original, "{name}");
        }

        let pt = sample(block_size * 4);
        let mut after_errors = pt.clone();
        ctx.transform_in_place(&mut after_errors).unwrap();

        let mut fresh = pt.clone();
        create_cipher(name, &key, &iv)
            .unwrap()
            .transform_in_place(&mut fresh)
            .unwrap();
        assert_eq!(after_errors, fresh, "{name}");
    }
}

#[test]
fn test_length_mismatch_regardless_of_alignment() {
    for name in ["aes-256-ecb", "des-ede3-cbc", "aes-128-ctr"] {
        let (key, iv) = key_iv(name);
        let mut ctx = create_cipher(name, &key, &iv).unwrap();
        let input = sample(16);
        for out_len in [0usize, 8, 15, 32] {
            let mut out = vec![0u8; out_len];
            assert_eq!(
                ctx.transform(&mut out, &input).unwrap_err(),
                CipherError::LengthMismatch {
                    output: out_len,
                    input: 16
                },
                "{name}"
            );
        }
    }
}

#[test]
fn test_wrong_key_and_iv_lengths() {
    for d in supported_ciphers() {
        let (key, iv) = key_iv(d.name);
        let short_key = &key[..key.len() - 1];
        assert_eq!(
            CipherContext::new(d.name, short_key, &iv, Direction::Encrypt).unwrap_err(),
            CipherError::InvalidKeyLength {
                expected: d.key_len,
                got: d.key_len - 1
            }
        );

        let mut long_iv = iv.clone();
        long_iv.push(0);
        assert_eq!(
            CipherContext::new(d.name, &key, &long_iv, Direction::Decrypt).unwrap_err(),
            CipherError::InvalidIvLength {
                expected: d.iv_len,
                got: d.iv_len + 1
            }
        );
    }
}

#[test]
fn test_unknown_algorithm_message() {
    let err = create_cipher("aes-128-xyz", &[0u8; 16], &[0u8; 16]).unwrap_err();
    assert_eq!(err.to_string(), "invalid cipher type: aes-128-xyz");
}

// -------------------------------------------------------
// transform and transform_in_place agree
// -------------------------------------------------------
#[test]
fn test_in_place_matches_disjoint() {
    for d in supported_ciphers() {
        let (key, iv) = key_iv(d.name);
        let pt = sample(48);

        let mut disjoint = vec![0u8; pt.len()];
        create_cipher(d.name, &key, &iv)
            .unwrap()
            .transform(&mut disjoint, &pt)
            .unwrap();

        let mut in_place = pt.clone();
        create_cipher(d.name, &key, &iv)
            .unwrap()
            .transform_in_place(&mut in_place)
            .unwrap();

        assert_eq!(in_place, disjoint, "{}", d.name);
    }
}

// -------------------------------------------------------
// Known answers
// -------------------------------------------------------
#[test]
fn test_nist_cbc_through_context() {
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let pt = hex::decode("6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51")
        .unwrap();

    let mut enc = create_cipher("AES-128-CBC", &key, &iv).unwrap();
    let mut ct = vec![0u8; pt.len()];
    enc.transform(&mut ct, &pt).unwrap();
    assert_eq!(
        hex::encode(&ct),
        "7649abac8119b246cee98e9b12e9197d5086cb9b507219ee95db113a917678b2"
    );
}

#[test]
fn test_sm4_ecb_known_answer() {
    let key = hex::decode("0123456789abcdeffedcba9876543210").unwrap();
    let mut enc = create_cipher("sm4-ecb", &key, &[]).unwrap();
    let mut ct = [0u8; 16];
    enc.transform(&mut ct, &key).unwrap();
    assert_eq!(hex::encode(ct), "681edf34d206965e86b3e94f536e4246");
}

// -------------------------------------------------------
// Long-lived encrypt/decrypt pair over growing chunks
// -------------------------------------------------------
#[test]
fn test_paired_contexts_over_many_writes() {
    let key = [b'K'; 32];
    let iv = [b'I'; 16];
    let mut c = create_cipher("aes-256-cbc", &key, &iv).unwrap();
    let mut d = create_decipher("aes-256-cbc", &key, &iv).unwrap();

    for size in [16usize, 32, 64, 128] {
        let mut chunk: Vec<u8> = (0..size).map(|i| (7 + 11 * i) as u8).collect();
        for _ in 0..16 {
            for b in chunk.iter_mut() {
                *b = 7u8.wrapping_add(11u8.wrapping_mul(*b));
            }
            let mut enc = vec![0u8; chunk.len()];
            c.transform(&mut enc, &chunk).unwrap();
            let mut dec = vec![0u8; chunk.len()];
            d.transform(&mut dec, &enc).unwrap();
            assert_eq!(hex::encode(&chunk), hex::encode(&dec));
        }
    }
}
