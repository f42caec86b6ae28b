//! Conversions between `U256` and 64-bit integer representations

use crate::primitives::{U256, U256Error};

/// Attempts to convert a `U256` into a `u64`.
///
/// The conversion succeeds only if the upper 192 bits of the value are zero.
impl TryFrom<U256> for u64 {
    type Error = U256Error;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        let (low, high) = value.0.split_at(2);

        if high.iter().any(|&w| w != 0) {
            return Err(U256Error::DoesNotFit { bits: 64 });
        }

        Ok(((low[1] as u64) << 32) | low[0] as u64)
    }
}

/// Converts a `u64` into a `U256`.
///
/// The value occupies words 0 and 1, with all higher words set to zero.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        let mut out = [0u32; 8];
        out[0] = value as u32;
        out[1] = (value >> 32) as u32;

        U256(out)
    }
}
