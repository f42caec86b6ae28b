//! Conversions between `U256` and 128-bit integer representations
//!
//! These conversions are mostly useful to build test vectors and to
//! interoperate with native integer types, without implicit truncation.

use crate::primitives::{U256, U256Error};

/// Attempts to convert a `U256` into a `u128`.
///
/// The conversion succeeds only if the upper 128 bits of the value are zero.
/// Otherwise, an error is returned to signal that the value does not fit
/// into a 128-bit integer.
impl TryFrom<U256> for u128 {
    type Error = U256Error;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        let (low, high) = value.0.split_at(4);

        if high.iter().any(|&w| w != 0) {
            return Err(U256Error::DoesNotFit { bits: 128 });
        }

        Ok(low
            .iter()
            .rev()
            .fold(0u128, |acc, &w| (acc << 32) | w as u128))
    }
}

/// Converts a `u128` into a `U256`.
///
/// The value is placed in the least significant 128 bits of the 256-bit
/// integer, with the upper bits set to zero.
impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        let mut out = [0u32; 8];

        for (i, word) in out.iter_mut().take(4).enumerate() {
            *word = (value >> (32 * i)) as u32;
        }

        U256(out)
    }
}
