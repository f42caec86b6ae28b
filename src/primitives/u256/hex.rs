//! Hexadecimal text codec for `U256`
//!
//! The text form is the only serialization boundary of the type, so its
//! rules are fixed:
//!
//! - parsing takes bare hex digits (no `0x`), case-insensitive, most
//!   significant digit first; inputs longer than 64 digits keep only the
//!   last 64 digits
//! - formatting is lowercase and minimal: the most significant non-zero
//!   word is printed without leading zeros, every word below it is printed
//!   as a full 8-digit group, and zero prints as `"0"`
//!
//! Parsing then formatting any value yields the same value back.

use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};
use std::str::FromStr;

use tracing::{debug, trace};

use super::{U256, U256Error};

/// Maximum number of significant hex digits (256 / 4).
const MAX_DIGITS: usize = 64;

/// Hex digits per 32-bit word.
const WORD_DIGITS: usize = 8;

const LOWER: &[u8; 16] = b"0123456789abcdef";
const UPPER: &[u8; 16] = b"0123456789ABCDEF";

impl U256 {
    /// Parses a string of hexadecimal digits.
    ///
    /// The input carries no `0x` prefix and is read most significant digit
    /// first. An empty string parses as zero. When the input is longer than
    /// 64 digits, the leading excess digits are discarded, which keeps the
    /// low-order 256 bits of the literal.
    ///
    /// # Errors
    /// Returns [`U256Error::InvalidDigit`] if any character (including one in
    /// a discarded prefix) is not in `[0-9a-fA-F]`.
    pub fn from_hex(text: &str) -> Result<Self, U256Error> {
        if let Some((position, digit)) = text.char_indices().find(|(_, c)| !c.is_ascii_hexdigit())
        {
            debug!(position, ?digit, "rejecting hex input");
            return Err(U256Error::InvalidDigit { digit, position });
        }

        // Every character is an ASCII hex digit from here on.
        let bytes = text.as_bytes();

        let significant = if bytes.len() > MAX_DIGITS {
            trace!(
                len = bytes.len(),
                discarded = bytes.len() - MAX_DIGITS,
                "truncating overlong hex input to its low-order digits"
            );
            &bytes[bytes.len() - MAX_DIGITS..]
        } else {
            bytes
        };

        let mut out = [0u32; 8];

        for (word, chunk) in out.iter_mut().zip(significant.rchunks(WORD_DIGITS)) {
            *word = chunk
                .iter()
                .fold(0u32, |acc, &byte| (acc << 4) | nibble(byte));
        }

        Ok(U256(out))
    }

    /// Formats the value as minimal lowercase hexadecimal.
    ///
    /// Zero formats as `"0"`. Only the most significant printed word is
    /// stripped of leading zeros; all lower words are zero-padded to 8
    /// digits, so `[0xAB, 0, 0, 0, 0, 0, 0, 0xCD000000]` formats as
    /// `cd000000` followed by 48 zeros and `000000ab`.
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }

    /// Writes the hex digits into `buf` and returns how many were written.
    fn encode_hex(&self, alphabet: &[u8; 16], buf: &mut [u8; MAX_DIGITS]) -> usize {
        let Some(top) = self.0.iter().rposition(|&w| w != 0) else {
            buf[0] = b'0';
            return 1;
        };

        let mut len = 0;
        let mut push = |word: u32, digits: usize| {
            for d in (0..digits).rev() {
                buf[len] = alphabet[((word >> (4 * d)) & 0xF) as usize];
                len += 1;
            }
        };

        let first = self.0[top];
        push(first, (32 - first.leading_zeros()).div_ceil(4) as usize);

        for &word in self.0[..top].iter().rev() {
            push(word, WORD_DIGITS);
        }

        len
    }

    fn fmt_hex(&self, f: &mut Formatter<'_>, alphabet: &[u8; 16]) -> fmt::Result {
        let mut buf = [0u8; MAX_DIGITS];
        let len = self.encode_hex(alphabet, &mut buf);
        let digits = std::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?;

        f.pad_integral(true, "0x", digits)
    }
}

/// Value of an ASCII hex digit. Callers validate their input first.
const fn nibble(byte: u8) -> u32 {
    match byte {
        b'0'..=b'9' => (byte - b'0') as u32,
        b'a'..=b'f' => (byte - b'a' + 10) as u32,
        b'A'..=b'F' => (byte - b'A' + 10) as u32,
        _ => 0,
    }
}

impl FromStr for U256 {
    type Err = U256Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_hex(s)
    }
}

/// Lowercase minimal hex; `{:#x}` adds a `0x` prefix.
impl LowerHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, LOWER)
    }
}

/// Uppercase minimal hex; `{:#X}` adds a `0x` prefix.
impl UpperHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, UPPER)
    }
}

impl Display for U256 {
    /// Formats the value exactly as [`U256::to_hex`] does.
    ///
    /// Example:
    /// `a5500`
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}
