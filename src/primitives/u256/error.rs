//! Errors reported by `U256` construction, access and conversion.

use thiserror::Error;

/// Errors that may occur when building, reading or narrowing a `U256`.
///
/// Arithmetic and rotation never fail; only operations that cross a
/// boundary (text, word index, narrower integer) can.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum U256Error {
    /// A character outside `[0-9a-fA-F]` was found in hexadecimal input.
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Byte offset of the character in the input string.
        position: usize,
    },

    /// A word index outside `0..=7` was requested.
    #[error("word index {index} out of range (expected 0..=7)")]
    IndexOutOfRange { index: usize },

    /// The value has bits set above the width of the target integer.
    #[error("value does not fit in {bits} bits")]
    DoesNotFit { bits: u32 },
}
