//! Trait definitions for the eccrypt public API

pub mod pke;

pub use pke::BlockPke;
