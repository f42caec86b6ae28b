//! Fixed-width 256-bit unsigned integer arithmetic
//!
//! This crate provides [`U256`], a 256-bit unsigned integer with value
//! semantics, for code that needs wraparound arithmetic wider than a
//! native machine word (hashing, cryptographic primitives, big-number
//! demonstrations).
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a general big-integer API.
//!
//! # Module overview
//!
//! - `primitives`  
//!   The `U256` type and its error type. A value is eight 32-bit words,
//!   least significant first, and supports:
//!   - construction from `u32`, word arrays, bytes and hexadecimal text
//!   - minimal hexadecimal formatting
//!   - addition, subtraction and two's-complement negation modulo 2²⁵⁶
//!   - left and right rotation by any number of bits
//!
//! # Design goals
//!
//! - No heap allocations in arithmetic; only text formatting allocates
//! - Every operation takes its operands by value and returns a new value
//! - Fallible boundaries (text, word index, narrowing) return
//!   [`U256Error`] instead of panicking
//!
//! # Example
//!
//! ```
//! use uint256::U256;
//!
//! let a = U256::from_hex("a5500").unwrap();
//! assert_eq!(a.word(0), Ok(0xA5500));
//!
//! let b = a - U256::from_u32(0x500);
//! assert_eq!(b.to_hex(), "a5000");
//!
//! assert_eq!(U256::ZERO - U256::ONE, U256::MAX);
//! assert_eq!(U256::MAX.rotate_left(17), U256::MAX);
//! ```

pub mod primitives;

pub use primitives::{U256, U256Error};
