//! Property tests for the McEliece round-trip and decoder boundaries

use eccrypt_algorithms::code::{bch::BchCode, hamming::HammingCode, LinearCode};
use eccrypt_api::BlockPke;
use eccrypt_pke::{BchMcEliece, HammingMcEliece};
use eccrypt_tests::seeded_rng;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_hamming_roundtrip(
        seed in any::<u64>(),
        message in proptest::collection::vec(0u8..=1, 33),
    ) {
        let mut rng = seeded_rng(seed);
        let (pk, sk) = HammingMcEliece::keypair(&mut rng, 3).unwrap();
        let ciphertext = HammingMcEliece::encrypt(&mut rng, &pk, &message).unwrap();
        prop_assert_eq!(HammingMcEliece::decrypt(&sk, &ciphertext).unwrap(), message);
    }

    #[test]
    fn prop_bch_roundtrip(
        seed in any::<u64>(),
        message in proptest::collection::vec(0u8..=1, 21),
    ) {
        let mut rng = seeded_rng(seed);
        let (pk, sk) = BchMcEliece::keypair(&mut rng, 3).unwrap();
        let ciphertext = BchMcEliece::encrypt(&mut rng, &pk, &message).unwrap();
        prop_assert_eq!(BchMcEliece::decrypt(&sk, &ciphertext).unwrap(), message);
    }

    #[test]
    fn prop_hamming_corrects_any_single_flip(
        message in proptest::collection::vec(0u8..=1, 11),
        position in 0usize..15,
    ) {
        let code = HammingCode::new();
        let codeword = code.encode(&message).unwrap();
        let mut received = codeword.clone();
        received[position] ^= 1;
        let decoded = code.decode(&received).unwrap();
        prop_assert_eq!(&decoded.codeword, &codeword);
        prop_assert_eq!(code.message_bits(&decoded.codeword).unwrap(), message);
    }

    #[test]
    fn prop_bch_corrects_any_double_flip(
        message in proptest::collection::vec(0u8..=1, 7),
        a in 0usize..15,
        b in 0usize..15,
    ) {
        prop_assume!(a != b);
        let code = BchCode::new();
        let codeword = code.encode(&message).unwrap();
        let mut received = codeword.clone();
        received[a] ^= 1;
        received[b] ^= 1;
        let decoded = code.decode(&received).unwrap();
        prop_assert_eq!(&decoded.codeword, &codeword);
        prop_assert_eq!(code.message_bits(&decoded.codeword).unwrap(), message);
    }

    #[test]
    fn prop_ciphertext_length_is_exact(
        seed in any::<u64>(),
        blocks in 1usize..8,
    ) {
        let mut rng = seeded_rng(seed);
        let (pk, _) = BchMcEliece::keypair(&mut rng, blocks).unwrap();
        let message = vec![0u8; pk.message_len()];
        let ciphertext = BchMcEliece::encrypt(&mut rng, &pk, &message).unwrap();
        prop_assert_eq!(ciphertext.len(), blocks * 15);
    }
}
