//! Conversions between `U256` and byte representations
//!
//! These conversions are fundamental for:
//! - hashing and cryptographic operations
//! - interoperability with low-level APIs
//!
//! `From<[u8; 32]>` and `From<U256> for [u8; 32]` use big-endian byte
//! order, which matches the hexadecimal text form digit for digit.

use crate::primitives::U256;

impl U256 {
    /// Returns the value as 32 bytes, most significant byte first.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];

        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter().rev()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        out
    }

    /// Returns the value as 32 bytes, least significant byte first.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];

        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }

        out
    }

    /// Builds a value from 32 bytes, most significant byte first.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut out = [0u32; 8];

        for (word, chunk) in out.iter_mut().rev().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        U256(out)
    }

    /// Builds a value from 32 bytes, least significant byte first.
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut out = [0u32; 8];

        for (word, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        U256(out)
    }
}

/// Converts a `U256` into a 32-byte big-endian array.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.to_be_bytes()
    }
}

/// Converts a 32-byte big-endian array into a `U256`.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256::from_be_bytes(value)
    }
}

/// Converts a `u8` into a `U256`.
impl From<u8> for U256 {
    fn from(value: u8) -> Self {
        U256::from_u32(value as u32)
    }
}
