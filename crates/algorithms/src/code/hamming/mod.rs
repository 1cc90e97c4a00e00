// File: crates/algorithms/src/code/hamming/mod.rs

//! The Hamming(15,11) single-error-correcting code
//!
//! The parity-check matrix H is the canonical one: column i (0-indexed) is
//! the 4-bit binary representation of i+1, least significant bit in row 0.
//! A nonzero syndrome therefore reads directly as the 1-based position of
//! a single flipped bit. Message bits occupy the eleven non-power-of-two
//! codeword positions; the four parity positions 1, 2, 4, 8 cover the data
//! positions whose binary labels contain them.

use alloc::vec::Vec;

use eccrypt_params::{
    CodeParams, HAMMING_15_11, HAMMING_DATA_POSITIONS, HAMMING_PARITY_POSITIONS,
};

use super::{Decoded, LinearCode};
use crate::error::{validate, Error, Result};
use crate::gf2::{self, BitMatrix};


/// The Hamming(15,11) code: fixed G (11×15) and H (4×15).
#[derive(Debug, Clone)]
pub struct HammingCode {
    generator: BitMatrix,
    parity_check: BitMatrix,
}

impl HammingCode {
    /// Builds the fixed generator and parity-check matrices.
    pub fn new() -> Self {
        let p = HAMMING_15_11;

        let mut parity_check = BitMatrix::zero(p.parity_bits(), p.n);
        for col in 0..p.n {
            let label = col + 1;
            for row in 0..p.parity_bits() {
                if (label >> row) & 1 == 1 {
                    parity_check.set(row, col, 1);
                }
            }
        }

        let mut generator = BitMatrix::zero(p.k, p.n);
        for (msg_bit, &data_pos) in HAMMING_DATA_POSITIONS.iter().enumerate() {
            generator.set(msg_bit, data_pos, 1);
            let label = data_pos + 1;
            for (parity_bit, &parity_pos) in HAMMING_PARITY_POSITIONS.iter().enumerate() {
                if (label >> parity_bit) & 1 == 1 {
                    generator.set(msg_bit, parity_pos, 1);
                }
            }
        }

        Self {
            generator,
            parity_check,
        }
    }
}

impl Default for HammingCode {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearCode for HammingCode {
    fn params(&self) -> CodeParams {
        HAMMING_15_11
    }

    fn generator(&self) -> &BitMatrix {
        &self.generator
    }

    fn parity_check(&self) -> &BitMatrix {
        &self.parity_check
    }

    /// Syndrome decoding with single-error correction.
    ///
    /// A weight-2 error within one block shifts the syndrome onto a third
    /// position and is silently "corrected" to the wrong codeword; the
    /// decoder cannot detect that case.
    fn decode(&self, received: &[u8]) -> Result<Decoded> {
        let p = self.params();
        validate::length("hamming decode", received.len(), p.n)?;
        validate::bits("hamming decode", received)?;

        let syndrome = self.parity_check.right_mul(received)?;
        let mut codeword = received.to_vec();
        let mut error_positions = Vec::new();

        if !gf2::is_zero(&syndrome) {
            let mut value = 0usize;
            for (row, &bit) in syndrome.iter().enumerate() {
                value |= (bit as usize) << row;
            }
            // Every nonzero 4-bit syndrome names a column of this H, but
            // the out-of-range branch is kept as a hard decoder failure.
            if value == 0 || value > p.n {
                return Err(Error::Uncorrectable {
                    code: HAMMING_15_11.name,
                });
            }
            let position = value - 1;
            codeword[position] ^= 1;
            error_positions.push(position);
        }

        Ok(Decoded {
            codeword,
            error_positions,
        })
    }

    fn message_bits(&self, codeword: &[u8]) -> Result<Vec<u8>> {
        let p = self.params();
        validate::length("hamming message extraction", codeword.len(), p.n)?;
        Ok(HAMMING_DATA_POSITIONS
            .iter()
            .map(|&pos| codeword[pos])
            .collect())
    }
}
