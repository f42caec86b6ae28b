//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, a fixed-size 256-bit unsigned
//! integer built from eight 32-bit words.
//!
//! `U256` is a low-level primitive rather than a full big-integer
//! abstraction: it offers construction, hexadecimal text conversion,
//! wrapping addition, subtraction and negation, and bit rotation, with
//! explicit semantics and predictable behavior.
//!
//! The internal representation is little-endian by word and remains stable
//! across all operations and conversions.

mod conv;
mod core;
mod error;
mod hex;
mod ops;
#[cfg(feature = "serde")]
mod serde;

/// Fixed-size 256-bit unsigned integer.
pub use self::core::U256;
pub use error::U256Error;
