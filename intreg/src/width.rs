// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Register widths and two's-complement helpers.
//!
//! Register values are carried as `i128` throughout the crate: every 64-bit pattern, signed or
//! unsigned, has an exact representation, and so do the intermediate results of arithmetic on
//! them. A [`Width`] knows how to move a value between its signed reading and its raw bit pattern.

use core::fmt;

/// Width of a register in bits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    /// 8-bit register.
    W8,
    /// 16-bit register.
    W16,
    /// 32-bit register.
    W32,
    /// 64-bit register.
    W64,
}

impl Width {
    /// Every supported width, narrowest first.
    pub const ALL: [Self; 4] = [Self::W8, Self::W16, Self::W32, Self::W64];

    /// Number of bits in the register.
    #[must_use]
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Returns the width with exactly `bits` bits, if supported.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::W8),
            16 => Some(Self::W16),
            32 => Some(Self::W32),
            64 => Some(Self::W64),
            _ => None,
        }
    }

    /// Number of binary digits in a full-width rendering.
    #[must_use]
    #[inline]
    pub const fn binary_digits(self) -> usize {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Number of hexadecimal digits in a full-width rendering (`bits / 4`).
    #[must_use]
    #[inline]
    pub const fn hex_digits(self) -> usize {
        match self {
            Self::W8 => 2,
            Self::W16 => 4,
            Self::W32 => 8,
            Self::W64 => 16,
        }
    }

    /// `2^bits`: the number of distinct patterns the register holds.
    #[must_use]
    #[inline]
    pub const fn modulus(self) -> i128 {
        1_i128 << self.bits()
    }

    /// `2^bits - 1`: every bit of the register set.
    #[must_use]
    #[inline]
    pub const fn mask(self) -> i128 {
        self.modulus() - 1
    }

    /// `2^(bits - 1)`: the sign bit of the register.
    #[must_use]
    #[inline]
    pub const fn sign_bit(self) -> i128 {
        1_i128 << (self.bits() - 1)
    }

    /// Coerces a negative value to its unsigned two's-complement pattern by adding `2^bits`.
    ///
    /// Non-negative values are returned unchanged; no masking is applied.
    #[must_use]
    #[inline]
    pub const fn to_pattern(self, value: i128) -> i128 {
        if value < 0 {
            value + self.modulus()
        } else {
            value
        }
    }

    /// Keeps only the low `bits` bits of `value`.
    #[must_use]
    #[inline]
    pub const fn truncate(self, value: i128) -> i128 {
        value & self.mask()
    }

    /// Reads a pattern with its top bit set as negative by subtracting `2^bits`.
    #[must_use]
    #[inline]
    pub const fn sign_extend(self, pattern: i128) -> i128 {
        if pattern >= self.sign_bit() {
            pattern - self.modulus()
        } else {
            pattern
        }
    }

    /// Reduces a shift or rotate amount modulo the register width.
    #[must_use]
    #[inline]
    pub const fn reduce_shift(self, amount: u32) -> u32 {
        amount % self.bits()
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_follow_bit_count() {
        for w in Width::ALL {
            assert_eq!(w.modulus(), 1_i128 << w.bits(), "modulus for {w}");
            assert_eq!(w.mask() + 1, w.modulus(), "mask for {w}");
            assert_eq!(w.sign_bit() * 2, w.modulus(), "sign bit for {w}");
            assert_eq!(w.hex_digits() * 4, w.binary_digits(), "digits for {w}");
            assert_eq!(Width::from_bits(w.bits()), Some(w), "round trip for {w}");
        }
        assert_eq!(Width::from_bits(12), None);
    }

    #[test]
    fn pattern_and_sign_extension() {
        assert_eq!(Width::W8.to_pattern(-1), 255);
        assert_eq!(Width::W8.to_pattern(5), 5);
        assert_eq!(Width::W8.sign_extend(255), -1);
        assert_eq!(Width::W8.sign_extend(127), 127);
        assert_eq!(Width::W64.to_pattern(-1), i128::from(u64::MAX));
        assert_eq!(Width::W64.sign_extend(i128::from(u64::MAX)), -1);
        assert_eq!(Width::W16.truncate(0x1_2345), 0x2345);
    }

    #[test]
    fn shift_amounts_wrap() {
        assert_eq!(Width::W32.reduce_shift(32), 0);
        assert_eq!(Width::W32.reduce_shift(33), 1);
        assert_eq!(Width::W8.reduce_shift(7), 7);
    }
}
