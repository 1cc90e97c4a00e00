//! Parameter constants for the ECCRYPT library
//!
//! Every value here is a compile-time constant: code parameters for the two
//! supported block codes and the polynomial constants their constructions
//! are built from. The crate carries no logic and is always `no_std`.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod mceliece;

pub use mceliece::{
    CodeParams, BCH_15_7, BCH_15_7_GENERATOR_POLY, GF16_PRIMITIVE_POLY, HAMMING_15_11,
    HAMMING_DATA_POSITIONS, HAMMING_PARITY_POSITIONS,
};
