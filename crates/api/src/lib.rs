//! Public API traits and types for the ECCRYPT library
//!
//! This crate provides the public API surface for the ECCRYPT ecosystem,
//! including trait definitions and the error taxonomy shared by the
//! algorithm and scheme crates.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::BlockPke;

// Re-export trait modules for direct access
pub use traits::pke;
