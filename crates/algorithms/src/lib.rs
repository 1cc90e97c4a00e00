//! Coding-theory primitives with exact GF(2) arithmetic
//!
//! This crate provides the mathematical layer of the ECCRYPT library:
//! dense bit-matrix linear algebra over GF(2), arithmetic in the extension
//! field GF(16), and the two block codes the McEliece construction is
//! instantiated over, each with its syndrome decoder.
//!
//! All matrix and vector operations return new values; no operation mutates
//! its inputs. Every randomized operation takes a caller-supplied CSPRNG.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// GF(2) dense linear algebra
#[cfg(feature = "alloc")]
pub mod gf2;
#[cfg(feature = "alloc")]
pub use gf2::{sampling, BitMatrix};

// GF(16) extension field arithmetic
pub mod gf16;
pub use gf16::Gf16;

// Block codes and syndrome decoders
#[cfg(feature = "alloc")]
pub mod code;
#[cfg(feature = "alloc")]
pub use code::{bch::BchCode, hamming::HammingCode, Decoded, LinearCode};
