//! BCH(15,7) unit tests

use super::*;
use crate::gf2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn random_message(rng: &mut ChaCha20Rng) -> Vec<u8> {
    (0..7).map(|_| rng.gen_range(0..2u8)).collect()
}

#[test]
fn test_matrix_shapes() {
    let code = BchCode::new();
    assert_eq!(code.generator().rows(), 7);
    assert_eq!(code.generator().cols(), 15);
    assert_eq!(code.parity_check().rows(), 8);
    assert_eq!(code.parity_check().cols(), 15);
}

#[test]
fn test_generator_rows_are_codewords() {
    // Every row of G must be annihilated by H
    let code = BchCode::new();
    for row in 0..7 {
        let syndrome = code
            .parity_check()
            .right_mul(code.generator().row(row))
            .unwrap();
        assert!(gf2::is_zero(&syndrome), "generator row {}", row);
    }
}

#[test]
fn test_generator_is_systematic() {
    let code = BchCode::new();
    for i in 0..7 {
        for j in 0..7 {
            let expect = u8::from(i == j);
            assert_eq!(code.generator().get(i, j), expect);
        }
    }
}

#[test]
fn test_encode_prefix_is_message() {
    let code = BchCode::new();
    let message = vec![1u8, 1, 0, 0, 1, 1, 0];
    let codeword = code.encode(&message).unwrap();
    assert_eq!(&codeword[..7], message.as_slice());
    assert_eq!(code.message_bits(&codeword).unwrap(), message);
}

#[test]
fn test_clean_word_decodes_unchanged() {
    let mut rng = ChaCha20Rng::seed_from_u64(20);
    let code = BchCode::new();
    let codeword = code.encode(&random_message(&mut rng)).unwrap();
    let decoded = code.decode(&codeword).unwrap();
    assert_eq!(decoded.codeword, codeword);
    assert!(decoded.error_positions.is_empty());
}

#[test]
fn test_corrects_any_single_bit_flip() {
    let mut rng = ChaCha20Rng::seed_from_u64(21);
    let code = BchCode::new();
    let message = random_message(&mut rng);
    let codeword = code.encode(&message).unwrap();
    for pos in 0..15 {
        let mut received = codeword.clone();
        received[pos] ^= 1;
        let decoded = code.decode(&received).unwrap();
        assert_eq!(decoded.codeword, codeword, "flip at {}", pos);
        assert_eq!(decoded.error_positions, vec![pos]);
    }
}

#[test]
fn test_corrects_every_double_bit_flip() {
    let code = BchCode::new();
    let message = vec![1u8, 1, 0, 0, 1, 1, 0];
    let codeword = code.encode(&message).unwrap();
    for a in 0..15 {
        for b in (a + 1)..15 {
            let mut received = codeword.clone();
            received[a] ^= 1;
            received[b] ^= 1;
            let decoded = code.decode(&received).unwrap();
            assert_eq!(decoded.codeword, codeword, "flips at {} {}", a, b);
            assert_eq!(decoded.error_positions, vec![a, b]);
            assert_eq!(code.message_bits(&decoded.codeword).unwrap(), message);
        }
    }
}

#[test]
fn test_triple_flip_beyond_capacity() {
    // Three errors exceed t = 2. The decoder either reports the pattern
    // uncorrectable or lands on a valid but wrong codeword; both outcomes
    // are inherent to the code and neither is masked.
    let code = BchCode::new();
    let message = vec![0u8, 1, 0, 1, 1, 0, 1];
    let codeword = code.encode(&message).unwrap();
    let mut saw_miscorrection = false;
    let mut saw_failure = false;
    for a in 0..13 {
        for b in (a + 1)..14 {
            for c in (b + 1)..15 {
                let mut received = codeword.clone();
                received[a] ^= 1;
                received[b] ^= 1;
                received[c] ^= 1;
                match code.decode(&received) {
                    Ok(decoded) => {
                        // Whatever it decoded to is a valid codeword
                        let syndrome = code
                            .parity_check()
                            .right_mul(&decoded.codeword)
                            .unwrap();
                        assert!(gf2::is_zero(&syndrome));
                        if decoded.codeword != codeword {
                            saw_miscorrection = true;
                        }
                    }
                    Err(Error::Uncorrectable { .. }) => saw_failure = true,
                    Err(e) => panic!("unexpected error: {}", e),
                }
            }
        }
    }
    // With distance 5, weight-3 patterns can never return to the sent
    // codeword silently and correctly; both failure modes must appear.
    assert!(saw_miscorrection);
    assert!(saw_failure);
}

#[test]
fn test_reference_vector_double_error_roundtrip() {
    // Fixed 7-bit reference message, every pair of flip positions
    let code = BchCode::new();
    let message = vec![1u8, 1, 0, 0, 1, 1, 0];
    let codeword = code.encode(&message).unwrap();
    for a in 0..15 {
        for b in (a + 1)..15 {
            let mut received = codeword.clone();
            received[a] ^= 1;
            received[b] ^= 1;
            let decoded = code.decode(&received).unwrap();
            assert_eq!(code.message_bits(&decoded.codeword).unwrap(), message);
        }
    }
}

#[test]
fn test_decode_rejects_bad_input() {
    let code = BchCode::new();
    assert!(code.decode(&[0u8; 16]).is_err());
    let mut word = vec![0u8; 15];
    word[0] = 3;
    assert!(code.decode(&word).is_err());
}
