// File: crates/algorithms/src/gf2/sampling.rs

//! Random sampling of GF(2) matrices
//!
//! All samplers draw from a caller-supplied CSPRNG so runs are reproducible
//! from a seed. Invertible-matrix sampling is rejection-based: a uniform
//! square matrix over GF(2) is invertible with probability about 0.2887
//! (the limit of prod(1 - 2^-i)), so the retry loop terminates within a
//! handful of attempts for the small sizes used here. The loop is still
//! bounded; exhausting it is treated as a fatal sampling failure.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{CryptoRng, RngCore};

use super::BitMatrix;
use crate::error::{Error, Result};

/// Retry bound for rejection sampling of invertible matrices.
///
/// At 0.2887 success probability per draw, 256 consecutive rejections is a
/// ~1e-38 event.
pub const MAX_SAMPLING_ATTEMPTS: usize = 256;

/// Samples a uniformly random matrix over GF(2).
pub fn random_matrix<R: CryptoRng + RngCore>(rng: &mut R, rows: usize, cols: usize) -> BitMatrix {
    let mut m = BitMatrix::zero(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            m.set(i, j, (rng.next_u32() & 1) as u8);
        }
    }
    m
}

/// Samples a uniformly random invertible matrix over GF(2), returning the
/// matrix together with its inverse.
///
/// Rejection-samples uniform matrices until one has full rank, up to
/// [`MAX_SAMPLING_ATTEMPTS`] retries.
pub fn random_invertible<R: CryptoRng + RngCore>(
    rng: &mut R,
    size: usize,
) -> Result<(BitMatrix, BitMatrix)> {
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let candidate = random_matrix(rng, size, size);
        match candidate.inverse() {
            Ok(inverse) => return Ok((candidate, inverse)),
            Err(Error::Singular { .. }) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(Error::SamplingExhausted {
        operation: "random invertible matrix",
        attempts: MAX_SAMPLING_ATTEMPTS,
    })
}

/// Samples a uniformly random n×n permutation matrix.
///
/// Row i of the result has its single 1 at column perm[i], for a
/// Fisher-Yates shuffled permutation of 0..n.
pub fn random_permutation<R: CryptoRng + RngCore>(rng: &mut R, n: usize) -> BitMatrix {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    let mut m = BitMatrix::zero(n, n);
    for (row, &col) in perm.iter().enumerate() {
        m.set(row, col, 1);
    }
    m
}
