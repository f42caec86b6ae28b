//! Conversions between `U256` and `u32` (and arrays of 32-bit words).

use crate::primitives::{U256, U256Error};

/// Splits a `U256` into its 8 words, least significant first.
impl From<U256> for [u32; 8] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Builds a `U256` from 8 words, least significant first.
impl From<[u32; 8]> for U256 {
    fn from(value: [u32; 8]) -> Self {
        U256::from_words(value)
    }
}

/// Attempts to convert a `U256` into a `u32`.
///
/// The conversion succeeds only if the upper 224 bits of the value are zero.
impl TryFrom<U256> for u32 {
    type Error = U256Error;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[1..].iter().any(|&w| w != 0) {
            return Err(U256Error::DoesNotFit { bits: 32 });
        }

        Ok(value.0[0])
    }
}

/// Converts a `u32` into a `U256`.
///
/// The value is placed in the least significant word, with all higher
/// words set to zero.
impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        U256::from_u32(value)
    }
}
