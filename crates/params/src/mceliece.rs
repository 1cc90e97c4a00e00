//! Constants for the McEliece cryptosystem over small block codes

/// Structure containing the parameters of a binary linear block code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CodeParams {
    /// Codeword length in bits
    pub n: usize,

    /// Message length in bits
    pub k: usize,

    /// Error correction capability per codeword
    pub t: usize,

    /// Human-readable code name
    pub name: &'static str,
}

impl CodeParams {
    /// Number of parity bits per codeword
    pub const fn parity_bits(&self) -> usize {
        self.n - self.k
    }

    /// Ciphertext expansion ratio as an exact (numerator, denominator) pair
    pub const fn expansion_ratio(&self) -> (usize, usize) {
        (self.n, self.k)
    }
}

/// Hamming(15,11) parameters: single-error-correcting, distance 3
pub const HAMMING_15_11: CodeParams = CodeParams {
    n: 15,
    k: 11,
    t: 1,
    name: "Hamming(15,11)",
};

/// BCH(15,7) parameters: double-error-correcting, design distance 5
pub const BCH_15_7: CodeParams = CodeParams {
    n: 15,
    k: 7,
    t: 2,
    name: "BCH(15,7)",
};

/// Parity bit positions of the Hamming(15,11) codeword (0-indexed).
///
/// These are the power-of-two positions 1, 2, 4, 8 in the conventional
/// 1-indexed numbering.
pub const HAMMING_PARITY_POSITIONS: [usize; 4] = [0, 1, 3, 7];

/// Data bit positions of the Hamming(15,11) codeword (0-indexed).
///
/// Message bit `i` is carried at codeword position `HAMMING_DATA_POSITIONS[i]`.
pub const HAMMING_DATA_POSITIONS: [usize; 11] = [2, 4, 5, 6, 8, 9, 10, 11, 12, 13, 14];

/// Primitive polynomial of GF(16): x^4 + x + 1.
///
/// Bit i is the coefficient of x^i.
pub const GF16_PRIMITIVE_POLY: u16 = 0b1_0011;

/// Generator polynomial of the BCH(15,7) code: x^8 + x^7 + x^6 + x^4 + 1.
///
/// The least common multiple of the minimal polynomials of alpha and alpha^3
/// over GF(2), giving design distance 5. Bit i is the coefficient of x^i.
pub const BCH_15_7_GENERATOR_POLY: u16 = 0b1_1101_0001;
