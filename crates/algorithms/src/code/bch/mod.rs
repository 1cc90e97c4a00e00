// File: crates/algorithms/src/code/bch/mod.rs

//! The BCH(15,7) double-error-correcting code
//!
//! Built from the generator polynomial g(x) = x^8 + x^7 + x^6 + x^4 + 1,
//! the product of the minimal polynomials of alpha and alpha^3 over GF(2).
//! Codewords are polynomial multiples of g(x).
//!
//! Bit convention: vector index i carries the coefficient of x^(n-1-i),
//! so the first bit is the highest-degree coefficient. Encoding is
//! systematic, message first: G = [I_k | A], with row i holding the
//! parity expansion of x^(n-1-i) mod g(x).

use alloc::vec::Vec;

use eccrypt_params::{CodeParams, BCH_15_7, BCH_15_7_GENERATOR_POLY};

use super::{Decoded, LinearCode};
use crate::error::{validate, Error, Result};
use crate::gf16::Gf16;
use crate::gf2::BitMatrix;

#[cfg(test)]
mod tests;

/// The BCH(15,7) code: fixed G (7×15) and H (8×15).
#[derive(Debug, Clone)]
pub struct BchCode {
    generator: BitMatrix,
    parity_check: BitMatrix,
}

/// Remainder of x^e modulo the generator polynomial, as a coefficient
/// bitmask (bit d = coefficient of x^d).
fn x_pow_mod(e: usize, modulus: u16, degree: usize) -> u16 {
    let mut rem: u32 = 1;
    for _ in 0..e {
        rem <<= 1;
        if rem & (1 << degree) != 0 {
            rem ^= modulus as u32;
        }
    }
    rem as u16
}

impl BchCode {
    /// Builds the fixed generator and parity-check matrices.
    pub fn new() -> Self {
        let p = BCH_15_7;
        let r = p.parity_bits();

        let mut generator = BitMatrix::zero(p.k, p.n);
        for i in 0..p.k {
            generator.set(i, i, 1);
            let rem = x_pow_mod(p.n - 1 - i, BCH_15_7_GENERATOR_POLY, r);
            for d in 0..r {
                if (rem >> d) & 1 == 1 {
                    generator.set(i, p.n - 1 - d, 1);
                }
            }
        }

        // Column i of H stacks the 4-bit expansions of alpha^d and
        // alpha^(3d), d = n - 1 - i, giving the two syndrome rows over
        // GF(16) in binary form.
        let mut parity_check = BitMatrix::zero(r, p.n);
        for col in 0..p.n {
            let d = p.n - 1 - col;
            let a1 = Gf16::alpha_pow(d).value();
            let a3 = Gf16::alpha_pow(3 * d).value();
            for bit in 0..4 {
                if (a1 >> bit) & 1 == 1 {
                    parity_check.set(bit, col, 1);
                }
                if (a3 >> bit) & 1 == 1 {
                    parity_check.set(4 + bit, col, 1);
                }
            }
        }

        Self {
            generator,
            parity_check,
        }
    }

    /// Evaluates the received word at alpha^j, yielding syndrome S_j.
    fn syndrome(&self, received: &[u8], j: usize) -> Gf16 {
        let n = self.params().n;
        let mut acc = Gf16::ZERO;
        for (i, &bit) in received.iter().enumerate() {
            if bit == 1 {
                acc = acc.add(Gf16::alpha_pow(j * (n - 1 - i)));
            }
        }
        acc
    }
}

impl Default for BchCode {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearCode for BchCode {
    fn params(&self) -> CodeParams {
        BCH_15_7
    }

    fn generator(&self) -> &BitMatrix {
        &self.generator
    }

    fn parity_check(&self) -> &BitMatrix {
        &self.parity_check
    }

    /// Syndrome decoding with up to two corrections.
    ///
    /// S1 = r(alpha) and S3 = r(alpha^3) determine the error locator.
    /// One error: S3 = S1^3, position log S1. Two errors: the locator
    /// sigma(x) = 1 + S1 x + sigma2 x^2 with sigma2 = (S3 + S1^3)/S1 is
    /// swept over the 15 nonzero field elements (Chien search); its two
    /// roots are the inverse error locators. Any other syndrome shape is
    /// uncorrectable. Three or more errors may still land on a consistent
    /// locator and miscorrect silently; that is a property of the code.
    fn decode(&self, received: &[u8]) -> Result<Decoded> {
        let p = self.params();
        validate::length("bch decode", received.len(), p.n)?;
        validate::bits("bch decode", received)?;

        let uncorrectable = Error::Uncorrectable { code: p.name };

        let s1 = self.syndrome(received, 1);
        let s3 = self.syndrome(received, 3);

        let mut codeword = received.to_vec();
        let mut error_positions = Vec::new();

        if s1.is_zero() && s3.is_zero() {
            return Ok(Decoded {
                codeword,
                error_positions,
            });
        }

        if s1.is_zero() {
            // S1 = 0 with S3 != 0 fits no weight-<=2 pattern
            return Err(uncorrectable);
        }

        if s3 == s1.pow(3) {
            // Single error at the degree named by S1
            let degree = match s1.log() {
                Some(d) => d,
                None => return Err(uncorrectable),
            };
            let position = p.n - 1 - degree;
            codeword[position] ^= 1;
            error_positions.push(position);
            return Ok(Decoded {
                codeword,
                error_positions,
            });
        }

        // Two-error locator coefficients
        let sigma2 = s3.add(s1.pow(3)).mul(s1.inv()?);
        if sigma2.is_zero() {
            return Err(uncorrectable);
        }

        // Chien search: roots of sigma are the inverse error locators
        let mut degrees = Vec::new();
        for e in 0..Gf16::GROUP_ORDER {
            let x = Gf16::alpha_pow(e);
            let value = Gf16::ONE.add(s1.mul(x)).add(sigma2.mul(x.pow(2)));
            if value.is_zero() {
                degrees.push((Gf16::GROUP_ORDER - e) % Gf16::GROUP_ORDER);
            }
        }

        if degrees.len() != 2 {
            return Err(uncorrectable);
        }

        for &degree in &degrees {
            let position = p.n - 1 - degree;
            codeword[position] ^= 1;
            error_positions.push(position);
        }
        error_positions.sort_unstable();

        Ok(Decoded {
            codeword,
            error_positions,
        })
    }

    fn message_bits(&self, codeword: &[u8]) -> Result<Vec<u8>> {
        let p = self.params();
        validate::length("bch message extraction", codeword.len(), p.n)?;
        Ok(codeword[..p.k].to_vec())
    }
}
