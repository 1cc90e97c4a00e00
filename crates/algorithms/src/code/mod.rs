// File: crates/algorithms/src/code/mod.rs

//! Binary linear block codes with syndrome decoders
//!
//! Both codes used by the McEliece construction live here: the
//! single-error-correcting Hamming(15,11) code and the double-error-
//! correcting BCH(15,7) code. Each exposes its generator and parity-check
//! matrices, encoding by generator-matrix multiplication, and a syndrome
//! decoder that reports which positions it flipped.

use alloc::vec::Vec;

use eccrypt_params::CodeParams;

use crate::error::{validate, Result};
use crate::gf2::BitMatrix;

pub mod bch;
pub mod hamming;

/// Outcome of a syndrome-decoding pass over one received word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The corrected codeword.
    pub codeword: Vec<u8>,
    /// Positions the decoder flipped, in ascending order. Empty when the
    /// received word was already a codeword.
    pub error_positions: Vec<usize>,
}

/// A binary linear block code with a bounded-distance syndrome decoder.
///
/// Decoders are only guaranteed correct for error patterns of weight at
/// most `params().t`. Heavier patterns may decode to the wrong codeword
/// without any indication; that silent miscorrection is a property of the
/// codes themselves and is deliberately not masked.
pub trait LinearCode {
    /// The code's (n, k, t) parameters.
    fn params(&self) -> CodeParams;

    /// Generator matrix G, k×n.
    fn generator(&self) -> &BitMatrix;

    /// Parity-check matrix H, (n−k)×n.
    fn parity_check(&self) -> &BitMatrix;

    /// Encodes a k-bit message into an n-bit codeword: `message * G`.
    fn encode(&self, message: &[u8]) -> Result<Vec<u8>> {
        let p = self.params();
        validate::length("block code encode", message.len(), p.k)?;
        validate::bits("block code encode", message)?;
        self.generator().left_mul(message)
    }

    /// Decodes a received n-bit word, correcting up to `params().t` errors.
    fn decode(&self, received: &[u8]) -> Result<Decoded>;

    /// Extracts the k message bits from a (corrected) codeword, per the
    /// code's systematic or data-position layout.
    fn message_bits(&self, codeword: &[u8]) -> Result<Vec<u8>>;
}
