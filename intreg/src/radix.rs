// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between register values and their base 2, 10, and 16 spellings.
//!
//! Parsing honours two's-complement interpretation, but the two non-decimal bases detect the sign
//! differently:
//!
//! - **Binary** literals are read as negative only when they spell out exactly `bits` digits and
//!   the first one is `1`. Shorter literals are always non-negative.
//! - **Hexadecimal** literals are read as negative whenever their unsigned value reaches
//!   `2^(bits-1)`, whatever their length.
//!
//! Rendering never reports overflow: output is silently truncated to the requested width. Callers
//! that want a warning check the value with [`IntType::check_overflow`](crate::IntType::check_overflow)
//! first.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::width::Width;

/// A supported numeral base.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    /// Base 2.
    Binary,
    /// Base 10.
    Decimal,
    /// Base 16.
    Hexadecimal,
}

impl Base {
    /// Every supported base.
    pub const ALL: [Self; 3] = [Self::Binary, Self::Decimal, Self::Hexadecimal];

    /// The base a fresh calculator starts in.
    pub const DEFAULT: Self = Self::Decimal;

    /// Numeric radix.
    #[must_use]
    #[inline]
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// Returns the base for a numeric radix, if supported.
    #[must_use]
    pub const fn from_radix(radix: u32) -> Option<Self> {
        match radix {
            2 => Some(Self::Binary),
            10 => Some(Self::Decimal),
            16 => Some(Self::Hexadecimal),
            _ => None,
        }
    }

    /// Short display label: `BIN`, `DEC`, or `HEX`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Binary => "BIN",
            Self::Decimal => "DEC",
            Self::Hexadecimal => "HEX",
        }
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors produced while parsing a literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The literal contained no digits.
    Empty,
    /// A character that is not a digit of the base.
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Base the literal was parsed in.
        base: Base,
    },
    /// The literal's magnitude does not fit in the 128-bit working range.
    OutOfRange,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty literal"),
            Self::InvalidDigit { ch, base } => {
                write!(f, "invalid {base} digit: {ch:?}")
            }
            Self::OutOfRange => write!(f, "literal out of range"),
        }
    }
}

impl core::error::Error for ParseError {}

struct Digits {
    value: u128,
    len: usize,
    first: Option<char>,
}

fn read_digits<I>(chars: I, base: Base) -> Result<Digits, ParseError>
where
    I: Iterator<Item = char>,
{
    let radix = base.radix();
    let mut digits = Digits {
        value: 0,
        len: 0,
        first: None,
    };
    for ch in chars {
        let d = ch
            .to_digit(radix)
            .ok_or(ParseError::InvalidDigit { ch, base })?;
        digits.value = digits
            .value
            .checked_mul(u128::from(radix))
            .and_then(|v| v.checked_add(u128::from(d)))
            .ok_or(ParseError::OutOfRange)?;
        digits.len += 1;
        digits.first.get_or_insert(ch);
    }
    if digits.len == 0 {
        return Err(ParseError::Empty);
    }
    Ok(digits)
}

/// Separator characters skipped inside binary and hexadecimal literals: ASCII whitespace, the
/// Unicode space separators, U+2028, U+2029, and U+FEFF. Unlike [`char::is_whitespace`] this
/// includes U+FEFF and excludes U+0085.
fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn unsigned(value: u128) -> Result<i128, ParseError> {
    i128::try_from(value).map_err(|_| ParseError::OutOfRange)
}

/// Parses `text` in `base` into a register value.
///
/// - Decimal accepts `-?[0-9]+` and ignores `signed` and `width`.
/// - Binary ignores whitespace; with `signed`, a literal of exactly `width` digits starting with
///   `1` is read in two's complement.
/// - Hexadecimal accepts an optional leading `0x`/`0X` and ignores whitespace; with `signed`, any
///   value at or above `2^(bits-1)` is read in two's complement.
pub fn to_decimal(text: &str, base: Base, signed: bool, width: Width) -> Result<i128, ParseError> {
    match base {
        Base::Decimal => parse_decimal(text),
        Base::Binary => parse_binary(text, signed, width),
        Base::Hexadecimal => parse_hex(text, signed, width),
    }
}

fn parse_decimal(text: &str) -> Result<i128, ParseError> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let magnitude = read_digits(body.chars(), Base::Decimal)?.value;
    if negative {
        0_i128
            .checked_sub_unsigned(magnitude)
            .ok_or(ParseError::OutOfRange)
    } else {
        unsigned(magnitude)
    }
}

fn parse_binary(text: &str, signed: bool, width: Width) -> Result<i128, ParseError> {
    let digits = read_digits(text.chars().filter(|&c| !is_separator(c)), Base::Binary)?;
    let value = unsigned(digits.value)?;
    if signed && digits.len == width.binary_digits() && digits.first == Some('1') {
        return Ok(value - width.modulus());
    }
    Ok(value)
}

fn parse_hex(text: &str, signed: bool, width: Width) -> Result<i128, ParseError> {
    let body = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let digits = read_digits(body.chars().filter(|&c| !is_separator(c)), Base::Hexadecimal)?;
    let value = unsigned(digits.value)?;
    if signed && value >= width.sign_bit() {
        return Ok(value - width.modulus());
    }
    Ok(value)
}

/// Renders `value` as exactly `width` binary digits.
///
/// Negative values render as their two's-complement pattern; values wider than the register keep
/// only their low bits.
#[must_use]
pub fn dec_to_bin(value: i128, width: Width) -> String {
    let pattern = width.truncate(value);
    let digits = width.binary_digits();
    format!("{pattern:0digits$b}")
}

/// Renders `value` as `0x` followed by exactly `bits / 4` upper-case hex digits.
///
/// Negative values and wide values are handled as in [`dec_to_bin`].
#[must_use]
pub fn dec_to_hex(value: i128, width: Width) -> String {
    let pattern = width.truncate(value);
    let digits = width.hex_digits();
    format!("0x{pattern:0digits$X}")
}

/// Splits a binary string into space-separated groups of four, counting from the left.
#[must_use]
pub fn format_binary(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Normalizes a hex string to an upper-case body with a single `0x` prefix.
#[must_use]
pub fn format_hex(text: &str) -> String {
    let body = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    format!("0x{}", body.to_uppercase())
}

/// Whether `text` is lexically valid input for `base`.
///
/// Binary accepts `[01\s]+`, decimal `-?[0-9]+`, and hexadecimal `(0x)?[0-9A-Fa-f\s]+`, where
/// `\s` also covers U+FEFF but not U+0085.
#[must_use]
pub fn is_valid_input(text: &str, base: Base) -> bool {
    match base {
        Base::Binary => {
            !text.is_empty() && text.chars().all(|c| c == '0' || c == '1' || is_separator(c))
        }
        Base::Decimal => {
            let body = text.strip_prefix('-').unwrap_or(text);
            !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit())
        }
        Base::Hexadecimal => {
            let body = text.strip_prefix("0x").unwrap_or(text);
            !body.is_empty() && body.chars().all(|c| c.is_ascii_hexdigit() || is_separator(c))
        }
    }
}
