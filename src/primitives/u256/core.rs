//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type (`U256`)
//! with plain value semantics.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Its primary use cases include:
//! - wraparound arithmetic wider than a native word
//! - hash state and digest manipulation
//! - rotations and bit mixing in cryptographic primitives
//!
//! The internal representation is eight 32-bit words in little-endian
//! word order: index 0 holds the least significant 32 bits.

use std::cmp::Ordering;

use super::U256Error;

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 8 words of 32 bits, **least significant word
/// first**. Every operation takes its operands by value and returns a new
/// `U256`; arithmetic wraps modulo 2²⁵⁶.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct U256(pub(crate) [u32; 8]);

impl U256 {
    /// Width of the integer in bits.
    pub const BITS: u32 = 256;

    /// Number of 32-bit words in the representation.
    pub const WORDS: usize = 8;

    /// The value zero.
    pub const ZERO: Self = Self([0u32; 8]);

    /// The value one.
    pub const ONE: Self = Self::from_u32(1);

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([u32::MAX; 8]);

    /// Creates a value whose least significant word is `value` and whose
    /// upper 224 bits are zero.
    pub const fn from_u32(value: u32) -> Self {
        let mut out = [0u32; 8];
        out[0] = value;

        U256(out)
    }

    /// Creates a value from eight 32-bit words.
    ///
    /// `words[0]` is the least significant word and `words[7]` the most
    /// significant one.
    pub const fn from_words(words: [u32; 8]) -> Self {
        U256(words)
    }

    /// Returns a copy of the eight words, least significant first.
    pub const fn words(&self) -> [u32; 8] {
        self.0
    }

    /// Returns the 32-bit word at `index`.
    ///
    /// Index 0 is the least significant word, index 7 the most significant.
    ///
    /// # Errors
    /// Returns [`U256Error::IndexOutOfRange`] if `index` is not in `0..=7`.
    pub fn word(&self, index: usize) -> Result<u32, U256Error> {
        self.0
            .get(index)
            .copied()
            .ok_or(U256Error::IndexOutOfRange { index })
    }

    /// Returns `true` if every bit is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// This method scans the integer from the most significant word and
    /// returns the number of zero bits before the first one bit is encountered.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &word in self.0.iter().rev() {
            if word == 0 {
                count += 32;
            } else {
                count += word.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Counts the number of trailing zero bits, in the range `0..=256`.
    pub fn trailing_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &word in self.0.iter() {
            if word == 0 {
                count += 32;
            } else {
                count += word.trailing_zeros();
                return count;
            }
        }

        count
    }

    /// Number of bits set to one.
    pub fn count_ones(&self) -> u32 {
        self.0.iter().map(|w| w.count_ones()).sum()
    }
}

/// Numeric ordering: words are compared from the most significant down.
impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
