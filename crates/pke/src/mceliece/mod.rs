// File: crates/pke/src/mceliece/mod.rs

//! McEliece encryption over small block codes
//!
//! Key generation hides a structured generator matrix G behind a random
//! invertible scramble S and a random column permutation P, publishing
//! G_pub = S * G * P. Encryption splits the message into k-bit blocks,
//! multiplies each by G_pub and injects a fresh random error of weight t.
//! Decryption un-permutes each block, strips the error with the private
//! syndrome decoder, reads the scrambled message off the code's data
//! positions and un-scrambles it with S^-1.
//!
//! The same G_pub serves all of a key's blocks; the block count only
//! scales message capacity and the per-call work.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use rand::seq::index;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use eccrypt_algorithms::code::bch::BchCode;
use eccrypt_algorithms::code::hamming::HammingCode;
use eccrypt_algorithms::code::LinearCode;
use eccrypt_algorithms::error::Error as PrimitiveError;
use eccrypt_algorithms::gf2::{sampling, BitMatrix};
use eccrypt_api::error::Error as ApiError;
use eccrypt_api::traits::BlockPke;
use eccrypt_params::CodeParams;

use crate::error::{Error, Result};


/// Public key: the disguised generator matrix and the block layout.
///
/// Safe to share; everything needed to encrypt and nothing that helps
/// decrypt beyond the public construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct McEliecePublicKey {
    matrix: BitMatrix,
    blocks: usize,
    params: CodeParams,
}

impl McEliecePublicKey {
    /// The public generator matrix G_pub = S * G * P (k×n).
    pub fn matrix(&self) -> &BitMatrix {
        &self.matrix
    }

    /// Number of independent code blocks per message.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Parameters of the underlying code.
    pub fn params(&self) -> CodeParams {
        self.params
    }

    /// Message capacity in bits: blocks * k.
    pub fn message_len(&self) -> usize {
        self.blocks * self.params.k
    }

    /// Ciphertext size in bits: blocks * n.
    pub fn ciphertext_len(&self) -> usize {
        self.blocks * self.params.n
    }

    /// Exact ciphertext expansion ratio (n, k).
    pub fn expansion_ratio(&self) -> (usize, usize) {
        self.params.expansion_ratio()
    }
}

/// Private key: the scramble and permutation with their inverses, plus the
/// structured code whose decoder strips injected errors.
///
/// Never serialized; matrix material is wiped on drop.
#[derive(Debug, Clone)]
pub struct McEliecePrivateKey<C: LinearCode> {
    scramble: BitMatrix,
    scramble_inv: BitMatrix,
    permutation: BitMatrix,
    permutation_inv: BitMatrix,
    code: C,
    blocks: usize,
}

impl<C: LinearCode> McEliecePrivateKey<C> {
    /// The scrambling matrix S (k×k, invertible).
    pub fn scramble(&self) -> &BitMatrix {
        &self.scramble
    }

    /// S^-1.
    pub fn scramble_inv(&self) -> &BitMatrix {
        &self.scramble_inv
    }

    /// The permutation matrix P (n×n).
    pub fn permutation(&self) -> &BitMatrix {
        &self.permutation
    }

    /// P^-1 (the transpose of P).
    pub fn permutation_inv(&self) -> &BitMatrix {
        &self.permutation_inv
    }

    /// The private structured code.
    pub fn code(&self) -> &C {
        &self.code
    }

    /// Number of independent code blocks per message.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Parameters of the underlying code.
    pub fn params(&self) -> CodeParams {
        self.code.params()
    }
}

impl<C: LinearCode> Zeroize for McEliecePrivateKey<C> {
    fn zeroize(&mut self) {
        self.scramble.zeroize();
        self.scramble_inv.zeroize();
        self.permutation.zeroize();
        self.permutation_inv.zeroize();
    }
}

impl<C: LinearCode> Drop for McEliecePrivateKey<C> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<C: LinearCode> ZeroizeOnDrop for McEliecePrivateKey<C> {}

/// Generates a McEliece key pair over the given code for `blocks`
/// independent blocks.
///
/// Singular scramble candidates are rejected and resampled internally; the
/// only sampling failure that surfaces is the retry bound being exhausted.
pub fn generate_keypair<C: LinearCode, R: CryptoRng + RngCore>(
    rng: &mut R,
    code: C,
    blocks: usize,
) -> Result<(McEliecePublicKey, McEliecePrivateKey<C>)> {
    if blocks == 0 {
        return Err(Error::Primitive(PrimitiveError::Parameter {
            name: "blocks",
            reason: "block count must be at least 1",
        }));
    }
    let params = code.params();
    let (scramble, scramble_inv) = sampling::random_invertible(rng, params.k)?;
    let permutation = sampling::random_permutation(rng, params.n);
    let permutation_inv = permutation.transpose();
    let matrix = scramble.mul(code.generator())?.mul(&permutation)?;

    let public_key = McEliecePublicKey {
        matrix,
        blocks,
        params,
    };
    let private_key = McEliecePrivateKey {
        scramble,
        scramble_inv,
        permutation,
        permutation_inv,
        code,
        blocks,
    };
    Ok((public_key, private_key))
}

/// Encrypts a message of exactly `blocks * k` bits, injecting exactly t
/// errors per block (the reference behavior).
pub fn encrypt<R: CryptoRng + RngCore>(
    rng: &mut R,
    public_key: &McEliecePublicKey,
    message: &[u8],
) -> Result<Vec<u8>> {
    encrypt_with_weight(rng, public_key, message, public_key.params.t)
}

/// Encrypts with a chosen per-block error weight in 0..=t.
///
/// The knob exists for capacity-boundary testing; weights above t are
/// rejected because the matching decoder could not strip them.
pub fn encrypt_with_weight<R: CryptoRng + RngCore>(
    rng: &mut R,
    public_key: &McEliecePublicKey,
    message: &[u8],
    weight: usize,
) -> Result<Vec<u8>> {
    let params = public_key.params;
    if weight > params.t {
        return Err(Error::ErrorWeight {
            requested: weight,
            max: params.t,
        });
    }
    let expected = public_key.message_len();
    if message.len() != expected {
        return Err(Error::MessageLength {
            expected,
            actual: message.len(),
        });
    }
    eccrypt_algorithms::validate::bits("mceliece encrypt", message)?;

    let mut ciphertext = Vec::with_capacity(public_key.ciphertext_len());
    for block in message.chunks(params.k) {
        let mut codeword = public_key.matrix.left_mul(block)?;
        // Fresh error vector per block: `weight` distinct positions
        for position in index::sample(rng, params.n, weight).iter() {
            codeword[position] ^= 1;
        }
        ciphertext.extend_from_slice(&codeword);
    }
    Ok(ciphertext)
}

fn decrypt_block<C: LinearCode>(
    private_key: &McEliecePrivateKey<C>,
    index: usize,
    block: &[u8],
) -> Result<Vec<u8>> {
    // c * P^-1 = m * S * G + e * P^-1, so the decoder sees the structured
    // code with a weight-preserving permuted error
    let unpermuted = private_key.permutation_inv.left_mul(block)?;
    let decoded = match private_key.code.decode(&unpermuted) {
        Ok(decoded) => decoded,
        Err(PrimitiveError::Uncorrectable { .. }) => {
            return Err(Error::BlockDecode { block: index })
        }
        Err(e) => return Err(Error::Primitive(e)),
    };
    let scrambled = private_key.code.message_bits(&decoded.codeword)?;
    Ok(private_key.scramble_inv.left_mul(&scrambled)?)
}

/// Decrypts a ciphertext of exactly `blocks * n` bits, failing fast on the
/// first uncorrectable block.
///
/// The error always names the failing block. Callers that want partial
/// results use [`decrypt_blocks`] instead.
pub fn decrypt<C: LinearCode>(
    private_key: &McEliecePrivateKey<C>,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    let params = private_key.code.params();
    let expected = private_key.blocks * params.n;
    if ciphertext.len() != expected {
        return Err(Error::CiphertextLength {
            expected,
            actual: ciphertext.len(),
        });
    }
    eccrypt_algorithms::validate::bits("mceliece decrypt", ciphertext)?;

    let mut message = Vec::with_capacity(private_key.blocks * params.k);
    for (i, block) in ciphertext.chunks(params.n).enumerate() {
        message.extend_from_slice(&decrypt_block(private_key, i, block)?);
    }
    Ok(message)
}

/// Decrypts block by block, collecting a per-block outcome instead of
/// aborting on the first failure.
///
/// The outer error covers malformed input (wrong total length, non-bit
/// entries); each inner entry is one block's recovered k bits or its
/// decode failure.
pub fn decrypt_blocks<C: LinearCode>(
    private_key: &McEliecePrivateKey<C>,
    ciphertext: &[u8],
) -> Result<Vec<Result<Vec<u8>>>> {
    let params = private_key.code.params();
    let expected = private_key.blocks * params.n;
    if ciphertext.len() != expected {
        return Err(Error::CiphertextLength {
            expected,
            actual: ciphertext.len(),
        });
    }
    eccrypt_algorithms::validate::bits("mceliece decrypt", ciphertext)?;

    Ok(ciphertext
        .chunks(params.n)
        .enumerate()
        .map(|(i, block)| decrypt_block(private_key, i, block))
        .collect())
}

/// McEliece over the Hamming(15,11) code: one injected error per block.
pub struct HammingMcEliece;

impl BlockPke for HammingMcEliece {
    type PublicKey = McEliecePublicKey;
    type SecretKey = McEliecePrivateKey<HammingCode>;

    fn name() -> &'static str {
        "McEliece-Hamming(15,11)"
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
        blocks: usize,
    ) -> eccrypt_api::Result<(Self::PublicKey, Self::SecretKey)> {
        self::generate_keypair(rng, HammingCode::new(), blocks).map_err(ApiError::from)
    }

    fn encrypt<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
        message: &[u8],
    ) -> eccrypt_api::Result<Vec<u8>> {
        self::encrypt(rng, public_key, message).map_err(ApiError::from)
    }

    fn decrypt(
        secret_key: &Self::SecretKey,
        ciphertext: &[u8],
    ) -> eccrypt_api::Result<Vec<u8>> {
        self::decrypt(secret_key, ciphertext).map_err(ApiError::from)
    }
}

/// McEliece over the BCH(15,7) code: two injected errors per block.
pub struct BchMcEliece;

impl BlockPke for BchMcEliece {
    type PublicKey = McEliecePublicKey;
    type SecretKey = McEliecePrivateKey<BchCode>;

    fn name() -> &'static str {
        "McEliece-BCH(15,7)"
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
        blocks: usize,
    ) -> eccrypt_api::Result<(Self::PublicKey, Self::SecretKey)> {
        self::generate_keypair(rng, BchCode::new(), blocks).map_err(ApiError::from)
    }

    fn encrypt<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
        message: &[u8],
    ) -> eccrypt_api::Result<Vec<u8>> {
        self::encrypt(rng, public_key, message).map_err(ApiError::from)
    }

    fn decrypt(
        secret_key: &Self::SecretKey,
        ciphertext: &[u8],
    ) -> eccrypt_api::Result<Vec<u8>> {
        self::decrypt(secret_key, ciphertext).map_err(ApiError::from)
    }
}
