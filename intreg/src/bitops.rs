// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bitwise operations on fixed-width registers.
//!
//! Every operation reads its operand as a register pattern: a negative value is first coerced to
//! its unsigned two's-complement pattern (`value + 2^bits`). The operation runs on that pattern,
//! the result is masked to the register width, and operations that take a `signed` flag then
//! sign-extend the masked result.
//!
//! Shift and rotate amounts are reduced modulo the register width before use, so shifting a
//! 32-bit register by 32 is the same as shifting it by 0.
//!
//! All functions are pure.

use crate::width::Width;

#[inline]
fn finish(pattern: i128, width: Width, signed: bool) -> i128 {
    if signed {
        width.sign_extend(pattern)
    } else {
        pattern
    }
}

/// Bitwise AND of the two patterns, masked. Never sign-extended.
#[must_use]
pub fn and(a: i128, b: i128, width: Width) -> i128 {
    (width.to_pattern(a) & width.to_pattern(b)) & width.mask()
}

/// Bitwise OR of the two patterns, masked. Never sign-extended.
#[must_use]
pub fn or(a: i128, b: i128, width: Width) -> i128 {
    (width.to_pattern(a) | width.to_pattern(b)) & width.mask()
}

/// Bitwise XOR of the two patterns, masked. Never sign-extended.
#[must_use]
pub fn xor(a: i128, b: i128, width: Width) -> i128 {
    (width.to_pattern(a) ^ width.to_pattern(b)) & width.mask()
}

/// Bitwise complement of the pattern.
#[must_use]
pub fn not(a: i128, width: Width, signed: bool) -> i128 {
    finish(!width.to_pattern(a) & width.mask(), width, signed)
}

/// Shifts the pattern left by `amount mod bits`, discarding bits shifted past the top.
#[must_use]
pub fn left_shift(a: i128, amount: u32, width: Width, signed: bool) -> i128 {
    let shift = width.reduce_shift(amount);
    finish((width.to_pattern(a) << shift) & width.mask(), width, signed)
}

/// Shifts the pattern right by `amount mod bits`.
///
/// A negative operand with `signed` set is shifted arithmetically: the vacated high bits are
/// filled with ones. Otherwise the shift is logical, and the masked result is still sign-extended
/// when `signed` is set.
#[must_use]
pub fn right_shift(a: i128, amount: u32, width: Width, signed: bool) -> i128 {
    let shift = width.reduce_shift(amount);
    let pattern = width.to_pattern(a);
    if signed && a < 0 {
        let fill = ((1_i128 << shift) - 1) << (width.bits() - shift);
        width.sign_extend(((pattern >> shift) | fill) & width.mask())
    } else {
        finish((pattern >> shift) & width.mask(), width, signed)
    }
}

/// Logical right shift by `amount mod bits`. The result is never sign-extended.
#[must_use]
pub fn unsigned_right_shift(a: i128, amount: u32, width: Width) -> i128 {
    width.to_pattern(a) >> width.reduce_shift(amount)
}

/// Rotates the pattern left by `amount mod bits`.
#[must_use]
pub fn rotate_left(a: i128, amount: u32, width: Width) -> i128 {
    let shift = width.reduce_shift(amount);
    let pattern = width.to_pattern(a);
    let high = (pattern << shift) & width.mask();
    let low = pattern >> (width.bits() - shift);
    (high | low) & width.mask()
}

/// Rotates the pattern right by `amount mod bits`.
#[must_use]
pub fn rotate_right(a: i128, amount: u32, width: Width) -> i128 {
    let shift = width.reduce_shift(amount);
    let pattern = width.to_pattern(a);
    let low = pattern >> shift;
    let high = (pattern << (width.bits() - shift)) & width.mask();
    (high | low) & width.mask()
}

/// Number of set bits among the register's `bits` positions.
#[must_use]
pub fn pop_count(a: i128, width: Width) -> u32 {
    (width.to_pattern(a) & width.mask()).count_ones()
}

/// The bit at `index` (0 is least significant), as `0` or `1`.
#[must_use]
pub fn get_bit(a: i128, index: u32, width: Width) -> u8 {
    let pattern = width.to_pattern(a);
    // Past the top of `i128` every bit is a copy of the sign.
    let shifted = pattern.checked_shr(index).unwrap_or(pattern >> 127);
    u8::from(shifted & 1 == 1)
}

/// Sets (`bit = true`) or clears the bit at `index`.
#[must_use]
pub fn set_bit(a: i128, index: u32, bit: bool, width: Width, signed: bool) -> i128 {
    let pattern = width.to_pattern(a);
    let select = 1_i128.checked_shl(index).unwrap_or(0);
    let updated = if bit {
        pattern | select
    } else {
        pattern & !select
    };
    finish(updated & width.mask(), width, signed)
}
