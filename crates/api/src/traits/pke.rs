// File: crates/api/src/traits/pke.rs

//! Trait definition for block-structured Public Key Encryption schemes.
//!
//! A `BlockPke` scheme encrypts a message of `blocks * k` bits into a
//! ciphertext of `blocks * n` bits, where (n, k) are the parameters of the
//! underlying error-correcting code. Every operation that consumes
//! randomness takes a caller-supplied CSPRNG so that tests can reproduce
//! runs deterministically from a seed.

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

// Ensure Vec is available for no_std + alloc, and other necessary imports
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Trait for block-structured public key encryption.
///
/// Messages and ciphertexts are bit vectors: slices of `u8` holding one bit
/// (0 or 1) per element. The block count is fixed at key generation and
/// scales message capacity linearly.
pub trait BlockPke {
    /// Public key type for the scheme. Safe to share.
    type PublicKey: Clone;

    /// Secret key type for the scheme.
    ///
    /// # Security Note
    /// Implements `Zeroize` for secure memory cleanup.
    type SecretKey: Clone + Zeroize;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Generates a new key pair for `blocks` independent code blocks.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
        blocks: usize,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a message of exactly `blocks * k` bits.
    ///
    /// Fresh error randomness is drawn per block, so two encryptions of the
    /// same message need not match bit-for-bit.
    fn encrypt<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
        message: &[u8],
    ) -> Result<Vec<u8>>;

    /// Decrypts a ciphertext of exactly `blocks * n` bits.
    ///
    /// A block whose error pattern exceeds the code's correction capability
    /// surfaces as [`crate::Error::Uncorrectable`] naming the failing block.
    fn decrypt(secret_key: &Self::SecretKey, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
