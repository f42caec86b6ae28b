//! Arithmetic, rotation and bitwise operations for `U256`
//!
//! All operations work word by word on the fixed `[u32; 8]` array, with:
//! - no heap allocation
//! - wrapping semantics modulo 2²⁵⁶
//! - carries computed in a widened `u64` accumulator
//!
//! The operator traits (`+`, `-`, unary `-`) are thin aliases for the
//! `wrapping_*` methods. Multiplication and division are not provided.

use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Neg, Not, Shl, Shr, Sub, SubAssign,
};

use crate::primitives::u256::U256;

/// Adds `a + b + carry` over all eight words.
///
/// Returns the wrapped sum and the carry out of the most significant word.
#[inline(always)]
const fn add_with_carry(a: &[u32; 8], b: &[u32; 8], carry_in: u32) -> ([u32; 8], bool) {
    let mut out = [0u32; 8];
    let mut carry = carry_in as u64;
    let mut i = 0;

    while i < 8 {
        let sum = a[i] as u64 + b[i] as u64 + carry;
        out[i] = sum as u32;
        carry = sum >> 32;
        i += 1;
    }

    (out, carry != 0)
}

/// Bitwise complement of every word.
#[inline(always)]
const fn complement(a: &[u32; 8]) -> [u32; 8] {
    let mut out = [0u32; 8];
    let mut i = 0;

    while i < 8 {
        out[i] = !a[i];
        i += 1;
    }

    out
}

impl U256 {
    /// Addition modulo 2²⁵⁶.
    pub const fn wrapping_add(self, rhs: U256) -> U256 {
        U256(add_with_carry(&self.0, &rhs.0, 0).0)
    }

    /// Addition returning the wrapped sum and whether a carry left word 7.
    pub const fn overflowing_add(self, rhs: U256) -> (U256, bool) {
        let (out, carry) = add_with_carry(&self.0, &rhs.0, 0);
        (U256(out), carry)
    }

    /// Two's-complement negation: `!self + 1` modulo 2²⁵⁶.
    ///
    /// The `+ 1` enters as a carry into word 0 and ripples through every
    /// word, so `0` maps to `0` and `1` maps to [`U256::MAX`].
    pub const fn wrapping_neg(self) -> U256 {
        U256(add_with_carry(&complement(&self.0), &[0u32; 8], 1).0)
    }

    /// Subtraction modulo 2²⁵⁶, computed as `self + (-rhs)`.
    pub const fn wrapping_sub(self, rhs: U256) -> U256 {
        // a - b = a + !b + 1
        U256(add_with_carry(&self.0, &complement(&rhs.0), 1).0)
    }

    /// Subtraction returning the wrapped difference and whether it borrowed.
    pub const fn overflowing_sub(self, rhs: U256) -> (U256, bool) {
        // With the complement form, a missing carry out means a borrow.
        let (out, carry) = add_with_carry(&self.0, &complement(&rhs.0), 1);
        (U256(out), !carry)
    }

    /// Rotates the 256-bit pattern left by `n` bits.
    ///
    /// `n` is taken modulo 256. Bits leaving the most significant end
    /// re-enter at the least significant end.
    pub const fn rotate_left(self, n: u32) -> U256 {
        let n = n % U256::BITS;
        let word_shift = (n / 32) as usize;
        let bit_shift = n % 32;

        let mut words = [0u32; 8];
        let mut i = 0;
        while i < 8 {
            words[(i + word_shift) % 8] = self.0[i];
            i += 1;
        }

        if bit_shift == 0 {
            return U256(words);
        }

        let mut out = [0u32; 8];
        let mut i = 0;
        while i < 8 {
            // Word i receives the high bits of the word just below it.
            out[i] = (words[i] << bit_shift) | (words[(i + 7) % 8] >> (32 - bit_shift));
            i += 1;
        }

        U256(out)
    }

    /// Rotates the 256-bit pattern right by `n` bits.
    ///
    /// `n` is taken modulo 256. Bits leaving the least significant end
    /// re-enter at the most significant end.
    pub const fn rotate_right(self, n: u32) -> U256 {
        let n = n % U256::BITS;
        let word_shift = (n / 32) as usize;
        let bit_shift = n % 32;

        let mut words = [0u32; 8];
        let mut i = 0;
        while i < 8 {
            words[i] = self.0[(i + word_shift) % 8];
            i += 1;
        }

        if bit_shift == 0 {
            return U256(words);
        }

        let mut out = [0u32; 8];
        let mut i = 0;
        while i < 8 {
            // Word i receives the low bits of the word just above it.
            out[i] = (words[i] >> bit_shift) | (words[(i + 1) % 8] << (32 - bit_shift));
            i += 1;
        }

        U256(out)
    }
}

impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl AddAssign for U256 {
    fn add_assign(&mut self, rhs: U256) {
        *self = self.wrapping_add(rhs);
    }
}

impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign for U256 {
    fn sub_assign(&mut self, rhs: U256) {
        *self = self.wrapping_sub(rhs);
    }
}

impl Neg for U256 {
    type Output = U256;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl Not for U256 {
    type Output = U256;

    fn not(self) -> Self::Output {
        U256(complement(&self.0))
    }
}

impl BitXor<U256> for U256 {
    type Output = U256;

    fn bitxor(self, rhs: U256) -> Self::Output {
        let mut out = [0u32; 8];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l ^ r);

        U256(out)
    }
}

impl BitAnd<U256> for U256 {
    type Output = U256;

    fn bitand(self, rhs: U256) -> Self::Output {
        let mut out = [0u32; 8];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l & r);

        U256(out)
    }
}

impl BitOr<U256> for U256 {
    type Output = U256;

    fn bitor(self, rhs: U256) -> Self::Output {
        let mut out = [0u32; 8];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l | r);

        U256(out)
    }
}

/// Logical left shift by `shift` bits.
///
/// Unlike [`U256::rotate_left`], bits shifted past the most significant
/// end are discarded, and shifts of 256 or more yield zero.
impl Shl<u32> for U256 {
    type Output = U256;

    fn shl(self, shift: u32) -> Self::Output {
        if shift == 0 {
            return self;
        }
        if shift >= U256::BITS {
            return U256::ZERO;
        }

        let word_shift = (shift / 32) as usize;
        let bit_shift = shift % 32;

        let mut tmp = [0u32; 8];
        tmp[word_shift..].copy_from_slice(&self.0[..(8 - word_shift)]);

        if bit_shift == 0 {
            return U256(tmp);
        }

        let mut out = [0u32; 8];
        let mut carry = 0u32;

        for i in 0..8 {
            let val = tmp[i];

            out[i] = (val << bit_shift) | carry;
            carry = val >> (32 - bit_shift);
        }

        U256(out)
    }
}

/// Logical right shift by `shift` bits.
///
/// Shifts of 256 or more yield zero.
impl Shr<u32> for U256 {
    type Output = U256;

    fn shr(self, shift: u32) -> Self::Output {
        if shift == 0 {
            return self;
        }
        if shift >= U256::BITS {
            return U256::ZERO;
        }

        let word_shift = (shift / 32) as usize;
        let bit_shift = shift % 32;

        let mut tmp = [0u32; 8];
        tmp[..(8 - word_shift)].copy_from_slice(&self.0[word_shift..]);

        if bit_shift == 0 {
            return U256(tmp);
        }

        let mut out = [0u32; 8];
        let mut carry = 0u32;

        for i in (0..8).rev() {
            let val = tmp[i];

            out[i] = (val >> bit_shift) | carry;
            carry = val << (32 - bit_shift);
        }

        U256(out)
    }
}
