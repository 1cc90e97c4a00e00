//! McEliece public key encryption for the ECCRYPT library.
//!
//! Implements the McEliece construction over two small block codes: the
//! single-error-correcting Hamming(15,11) code and the double-error-
//! correcting BCH(15,7) code. A key pair hides a structured generator
//! matrix behind a random invertible scramble and a random column
//! permutation; encryption adds deliberate bit errors that only the
//! private decoder can strip.

#![cfg_attr(not(feature = "std"), no_std)]

// Required for Vec in no_std + alloc environments.
#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

pub mod bits;
pub mod error;
pub mod mceliece;

// Re-export key items
pub use error::{Error, Result};
pub use mceliece::{
    BchMcEliece, HammingMcEliece, McEliecePrivateKey, McEliecePublicKey,
};
