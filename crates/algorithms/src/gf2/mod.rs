// File: crates/algorithms/src/gf2/mod.rs

//! Dense linear algebra over GF(2)
//!
//! Matrices are rectangular, row-major, with one `u8` entry (0 or 1) per
//! bit. Addition is XOR and multiplication is AND. Every operation returns
//! a new value; inputs are never mutated, so expressions stay referentially
//! transparent for testing.

use alloc::vec;
use alloc::vec::Vec;

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

pub mod sampling;


/// A dense bit matrix over GF(2), stored row-major with one byte per entry.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitMatrix {
    rows: usize,
    cols: usize,
    bits: Vec<u8>,
}

impl BitMatrix {
    /// Creates an all-zero matrix of the given shape.
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            bits: vec![0; rows * cols],
        }
    }

    /// Creates the identity matrix of the given size.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zero(size, size);
        for i in 0..size {
            m.bits[i * size + i] = 1;
        }
        m
    }

    /// Creates a matrix from row slices. All rows must have equal length
    /// and hold only bit values.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        validate::parameter(!rows.is_empty(), "rows", "matrix must have at least one row")?;
        let cols = rows[0].len();
        let mut bits = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            validate::length("bit matrix row", row.len(), cols)?;
            validate::bits("bit matrix row", row)?;
            bits.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            bits,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at (row, col).
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.bits[row * self.cols + col]
    }

    /// Sets the entry at (row, col). Builder use only; public operations
    /// never mutate their inputs.
    pub(crate) fn set(&mut self, row: usize, col: usize, bit: u8) {
        self.bits[row * self.cols + col] = bit & 1;
    }

    /// The given row as a slice.
    pub fn row(&self, row: usize) -> &[u8] {
        &self.bits[row * self.cols..(row + 1) * self.cols]
    }

    /// Matrix product over GF(2).
    pub fn mul(&self, rhs: &BitMatrix) -> Result<BitMatrix> {
        if self.cols != rhs.rows {
            return Err(Error::Dimension {
                operation: "bit matrix multiply",
                expected: (self.cols, rhs.cols),
                actual: (rhs.rows, rhs.cols),
            });
        }
        let mut out = BitMatrix::zero(self.rows, rhs.cols);
        for i in 0..self.rows {
            for l in 0..self.cols {
                // XOR rhs row l into output row i wherever self[i][l] = 1
                if self.get(i, l) == 1 {
                    let rhs_row = rhs.row(l);
                    let out_row =
                        &mut out.bits[i * rhs.cols..(i + 1) * rhs.cols];
                    for (o, &r) in out_row.iter_mut().zip(rhs_row.iter()) {
                        *o ^= r;
                    }
                }
            }
        }
        Ok(out)
    }

    /// Row-vector times matrix: `v * M` for a 1×rows vector, yielding a
    /// 1×cols vector.
    pub fn left_mul(&self, v: &[u8]) -> Result<Vec<u8>> {
        validate::length("left vector multiply", v.len(), self.rows)?;
        let mut out = vec![0u8; self.cols];
        for (i, &bit) in v.iter().enumerate() {
            if bit == 1 {
                for (o, &m) in out.iter_mut().zip(self.row(i).iter()) {
                    *o ^= m;
                }
            }
        }
        Ok(out)
    }

    /// Matrix times column vector: `M * v^T` for a cols-length vector,
    /// yielding a rows-length vector.
    pub fn right_mul(&self, v: &[u8]) -> Result<Vec<u8>> {
        validate::length("right vector multiply", v.len(), self.cols)?;
        let mut out = vec![0u8; self.rows];
        for (i, o) in out.iter_mut().enumerate() {
            let mut acc = 0u8;
            for (&m, &b) in self.row(i).iter().zip(v.iter()) {
                acc ^= m & b;
            }
            *o = acc;
        }
        Ok(out)
    }

    /// Transposed copy.
    pub fn transpose(&self) -> BitMatrix {
        let mut out = BitMatrix::zero(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.bits[j * self.rows + i] = self.get(i, j);
            }
        }
        out
    }

    /// Rank over GF(2), by forward Gaussian elimination on a working copy.
    pub fn rank(&self) -> usize {
        let mut work = self.clone();
        let mut rank = 0;
        for col in 0..work.cols {
            if rank == work.rows {
                break;
            }
            let pivot = (rank..work.rows).find(|&r| work.get(r, col) == 1);
            let pivot = match pivot {
                Some(p) => p,
                None => continue,
            };
            work.swap_rows(pivot, rank);
            for r in 0..work.rows {
                if r != rank && work.get(r, col) == 1 {
                    work.xor_row_into(rank, r);
                }
            }
            rank += 1;
        }
        rank
    }

    /// Inverse over GF(2) by Gauss-Jordan elimination on `[A | I]`.
    ///
    /// Fails with [`Error::Singular`] when rank < size.
    pub fn inverse(&self) -> Result<BitMatrix> {
        validate::parameter(
            self.rows == self.cols,
            "matrix",
            "inverse requires a square matrix",
        )?;
        let size = self.rows;
        let mut work = self.clone();
        let mut inv = BitMatrix::identity(size);
        for col in 0..size {
            let pivot = (col..size)
                .find(|&r| work.get(r, col) == 1)
                .ok_or(Error::Singular {
                    operation: "bit matrix inverse",
                })?;
            if pivot != col {
                work.swap_rows(pivot, col);
                inv.swap_rows(pivot, col);
            }
            for r in 0..size {
                if r != col && work.get(r, col) == 1 {
                    work.xor_row_into(col, r);
                    inv.xor_row_into(col, r);
                }
            }
        }
        Ok(inv)
    }

    /// True when this is the identity matrix.
    pub fn is_identity(&self) -> bool {
        self.rows == self.cols && *self == BitMatrix::identity(self.rows)
    }

    /// True when this is a permutation matrix: square, with exactly one 1
    /// per row and per column.
    pub fn is_permutation(&self) -> bool {
        if self.rows != self.cols {
            return false;
        }
        let mut col_counts = vec![0usize; self.cols];
        for i in 0..self.rows {
            let mut row_count = 0;
            for j in 0..self.cols {
                if self.get(i, j) == 1 {
                    row_count += 1;
                    col_counts[j] += 1;
                }
            }
            if row_count != 1 {
                return false;
            }
        }
        col_counts.iter().all(|&c| c == 1)
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.bits.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    /// XORs row `src` into row `dst`.
    fn xor_row_into(&mut self, src: usize, dst: usize) {
        let cols = self.cols;
        for j in 0..cols {
            let bit = self.bits[src * cols + j];
            self.bits[dst * cols + j] ^= bit;
        }
    }
}

impl ConstantTimeEq for BitMatrix {
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.rows != other.rows || self.cols != other.cols {
            return Choice::from(0);
        }
        self.bits.ct_eq(&other.bits)
    }
}

/// XOR of two equal-length bit vectors.
pub fn xor_bits(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    validate::length("bit vector xor", b.len(), a.len())?;
    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| x ^ y).collect())
}

/// True when every entry of the vector is zero.
pub fn is_zero(v: &[u8]) -> bool {
    let zero = vec![0u8; v.len()];
    bool::from(v.ct_eq(&zero))
}
