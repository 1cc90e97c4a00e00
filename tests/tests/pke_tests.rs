//! Integration tests for McEliece over Hamming(15,11) and BCH(15,7)

use eccrypt_api::{BlockPke, Error};
use eccrypt_params::{BCH_15_7, HAMMING_15_11};
use eccrypt_pke::{BchMcEliece, HammingMcEliece};
use eccrypt_tests::{random_bits, seeded_rng, weight};

#[test]
fn test_hamming_roundtrip_across_block_counts() {
    let mut rng = seeded_rng(100);
    for blocks in [1usize, 5, 10, 20] {
        let (pk, sk) = HammingMcEliece::keypair(&mut rng, blocks).unwrap();
        for _ in 0..10 {
            let message = random_bits(&mut rng, pk.message_len());
            let ciphertext = HammingMcEliece::encrypt(&mut rng, &pk, &message).unwrap();
            let recovered = HammingMcEliece::decrypt(&sk, &ciphertext).unwrap();
            assert_eq!(recovered, message, "L = {}", blocks);
        }
    }
}

#[test]
fn test_bch_roundtrip_across_block_counts() {
    let mut rng = seeded_rng(101);
    for blocks in [1usize, 5, 10, 20] {
        let (pk, sk) = BchMcEliece::keypair(&mut rng, blocks).unwrap();
        for _ in 0..10 {
            let message = random_bits(&mut rng, pk.message_len());
            let ciphertext = BchMcEliece::encrypt(&mut rng, &pk, &message).unwrap();
            let recovered = BchMcEliece::decrypt(&sk, &ciphertext).unwrap();
            assert_eq!(recovered, message, "L = {}", blocks);
        }
    }
}

#[test]
fn test_key_invariants() {
    let mut rng = seeded_rng(102);

    let (pk, sk) = HammingMcEliece::keypair(&mut rng, 4).unwrap();
    assert!(sk.scramble().mul(sk.scramble_inv()).unwrap().is_identity());
    assert!(sk
        .permutation()
        .mul(sk.permutation_inv())
        .unwrap()
        .is_identity());
    assert_eq!(pk.matrix().rank(), HAMMING_15_11.k);

    let (pk, sk) = BchMcEliece::keypair(&mut rng, 4).unwrap();
    assert!(sk.scramble().mul(sk.scramble_inv()).unwrap().is_identity());
    assert!(sk
        .permutation()
        .mul(sk.permutation_inv())
        .unwrap()
        .is_identity());
    assert_eq!(pk.matrix().rank(), BCH_15_7.k);
}

#[test]
fn test_expansion_ratio_is_exact() {
    let mut rng = seeded_rng(103);
    for blocks in [1usize, 5, 10, 20] {
        let (pk, _) = HammingMcEliece::keypair(&mut rng, blocks).unwrap();
        assert_eq!(pk.ciphertext_len() * HAMMING_15_11.k, pk.message_len() * HAMMING_15_11.n);
        assert_eq!(pk.expansion_ratio(), (15, 11));

        let (pk, _) = BchMcEliece::keypair(&mut rng, blocks).unwrap();
        assert_eq!(pk.ciphertext_len() * BCH_15_7.k, pk.message_len() * BCH_15_7.n);
        assert_eq!(pk.expansion_ratio(), (15, 7));
    }
}

#[test]
fn test_structure_is_deterministic_noise_is_not() {
    // Two encryptions of one message share their codewords: XOR-ing the
    // ciphertexts leaves only the two error vectors, weight <= 2t per block.
    let mut rng = seeded_rng(104);
    let (pk, _) = BchMcEliece::keypair(&mut rng, 6).unwrap();
    let message = random_bits(&mut rng, pk.message_len());
    let c1 = BchMcEliece::encrypt(&mut rng, &pk, &message).unwrap();
    let c2 = BchMcEliece::encrypt(&mut rng, &pk, &message).unwrap();
    assert_ne!(c1, c2);

    let n = BCH_15_7.n;
    let t = BCH_15_7.t;
    for (b1, b2) in c1.chunks(n).zip(c2.chunks(n)) {
        let diff: Vec<u8> = b1.iter().zip(b2.iter()).map(|(&x, &y)| x ^ y).collect();
        assert!(weight(&diff) <= 2 * t);
    }
}

#[test]
fn test_reference_vector_hamming() {
    // Reference 11-bit message, one block.
    // Encryption flips a single position; decryption must recover exactly.
    let mut rng = seeded_rng(105);
    let message = vec![1u8, 0, 1, 1, 0, 1, 1, 0, 1, 0, 1];
    for _ in 0..50 {
        let (pk, sk) = HammingMcEliece::keypair(&mut rng, 1).unwrap();
        let ciphertext = HammingMcEliece::encrypt(&mut rng, &pk, &message).unwrap();
        assert_eq!(ciphertext.len(), 15);
        assert_eq!(HammingMcEliece::decrypt(&sk, &ciphertext).unwrap(), message);
    }
}

#[test]
fn test_reference_vector_bch() {
    // Reference message: 7 bits, L = 1, exactly two flips per encryption;
    // recovery must succeed on every trial.
    let mut rng = seeded_rng(106);
    let message = vec![1u8, 1, 0, 0, 1, 1, 0];
    for _ in 0..50 {
        let (pk, sk) = BchMcEliece::keypair(&mut rng, 1).unwrap();
        let ciphertext = BchMcEliece::encrypt(&mut rng, &pk, &message).unwrap();
        assert_eq!(ciphertext.len(), 15);
        assert_eq!(BchMcEliece::decrypt(&sk, &ciphertext).unwrap(), message);
    }
}

#[test]
fn test_length_validation_surfaces_before_output() {
    let mut rng = seeded_rng(107);
    let (pk, sk) = HammingMcEliece::keypair(&mut rng, 3).unwrap();

    let msg = random_bits(&mut rng, 32);
    let err = HammingMcEliece::encrypt(&mut rng, &pk, &msg).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidMessageLength {
            expected: 33,
            actual: 32,
            ..
        }
    ));

    let err = HammingMcEliece::decrypt(&sk, &random_bits(&mut rng, 44)).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidMessageLength {
            expected: 45,
            actual: 44,
            ..
        }
    ));
}

#[test]
fn test_text_message_roundtrip() {
    // 88 bits = 11 bits * 8 blocks: one ASCII string through the Hamming
    // variant via the bit helpers
    let mut rng = seeded_rng(108);
    let text = "hello world";
    let bits = eccrypt_pke::bits::str_to_bits(text);
    assert_eq!(bits.len(), 88);
    let (pk, sk) = HammingMcEliece::keypair(&mut rng, 8).unwrap();
    let ciphertext = HammingMcEliece::encrypt(&mut rng, &pk, &bits).unwrap();
    let recovered = HammingMcEliece::decrypt(&sk, &ciphertext).unwrap();
    assert_eq!(eccrypt_pke::bits::bits_to_str(&recovered), text);
}
