//! # eccrypt
//!
//! A modular implementation of the McEliece code-based public-key
//! cryptosystem over two small error-correcting codes.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! eccrypt = "0.4"
//! ```
//!
//! ## Features
//!
//! - `pke` (default): the McEliece encryption schemes
//! - `algorithms`: GF(2) linear algebra, GF(16) and the block codes
//! - `serde`: serde derives on public value types
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`eccrypt-api`]: Public traits and the error taxonomy
//! - [`eccrypt-params`]: Code parameter constants
//! - [`eccrypt-algorithms`]: GF(2)/GF(16) arithmetic and syndrome decoders
//! - [`eccrypt-pke`]: McEliece key generation, encryption and decryption

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use eccrypt_api as api;
pub use eccrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use eccrypt_algorithms as algorithms;

#[cfg(feature = "pke")]
pub use eccrypt_pke as pke;

/// Convenience imports for the common case
pub mod prelude {
    pub use crate::api::{BlockPke, Error, Result};
    pub use crate::params::{BCH_15_7, HAMMING_15_11};

    #[cfg(feature = "pke")]
    pub use crate::pke::{BchMcEliece, HammingMcEliece};
}
