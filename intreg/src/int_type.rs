// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer type registry.
//!
//! The catalogue of supported integer types is a fixed table built at compile time and never
//! mutated, so it can be shared freely between threads. Lookups by name never fail: unknown names
//! resolve to [`IntType::DEFAULT`].
//!
//! Out-of-range values are handled per type: signed types saturate to their bounds, unsigned types
//! wrap modulo `2^bits`. Both readings are always reported in an [`OverflowResult`] so callers can
//! show either one.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::radix::{self, Base, ParseError};
use crate::width::Width;

/// A supported fixed-width integer type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntType {
    /// Signed 8-bit.
    Int8,
    /// Unsigned 8-bit.
    UInt8,
    /// Signed 16-bit.
    Int16,
    /// Unsigned 16-bit.
    UInt16,
    /// Signed 32-bit.
    Int32,
    /// Unsigned 32-bit.
    UInt32,
    /// Signed 64-bit.
    Int64,
    /// Unsigned 64-bit.
    UInt64,
}

/// Static description of an [`IntType`].
///
/// Invariant: `max - min + 1 == 2^bits`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    /// Canonical upper-case name, e.g. `"UINT16"`.
    pub name: &'static str,
    /// Register width.
    pub width: Width,
    /// Whether the top bit is read as a sign.
    pub signed: bool,
    /// Smallest representable value.
    pub min: i128,
    /// Largest representable value.
    pub max: i128,
}

impl TypeDescriptor {
    const fn new(name: &'static str, width: Width, signed: bool) -> Self {
        let (min, max) = if signed {
            (-width.sign_bit(), width.sign_bit() - 1)
        } else {
            (0, width.mask())
        };
        Self {
            name,
            width,
            signed,
            min,
            max,
        }
    }

    /// Number of bits in the type.
    #[must_use]
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.width.bits()
    }

    /// Number of representable values, `max - min + 1`.
    #[must_use]
    #[inline]
    pub const fn span(&self) -> i128 {
        self.max - self.min + 1
    }
}

// Indexed by `IntType as usize`.
static TYPES: [TypeDescriptor; 8] = [
    TypeDescriptor::new("INT8", Width::W8, true),
    TypeDescriptor::new("UINT8", Width::W8, false),
    TypeDescriptor::new("INT16", Width::W16, true),
    TypeDescriptor::new("UINT16", Width::W16, false),
    TypeDescriptor::new("INT32", Width::W32, true),
    TypeDescriptor::new("UINT32", Width::W32, false),
    TypeDescriptor::new("INT64", Width::W64, true),
    TypeDescriptor::new("UINT64", Width::W64, false),
];

/// Result of checking a value against a type's range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OverflowResult {
    /// Whether the original value was outside `[min, max]`.
    pub overflow: bool,
    /// Policy-adjusted value: saturated for signed types, wrapped for unsigned types.
    pub value: i128,
    /// The value wrapped modulo `2^bits` into `[min, max]`, regardless of policy.
    pub wrapped_value: i128,
    /// The value before any adjustment.
    pub original_value: i128,
}

/// A type name that is not in the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownType {
    /// The rejected name.
    pub name: Box<str>,
}

impl fmt::Display for UnknownType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown integer type: {}", self.name)
    }
}

impl core::error::Error for UnknownType {}

impl IntType {
    /// Every registered type, in catalogue order.
    pub const ALL: [Self; 8] = [
        Self::Int8,
        Self::UInt8,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
    ];

    /// The type unknown names resolve to.
    pub const DEFAULT: Self = Self::Int32;

    /// Resolves a type by name, falling back to [`IntType::DEFAULT`] for unknown names.
    #[must_use]
    pub fn lookup(name: &str) -> Self {
        Self::by_name(name).unwrap_or(Self::DEFAULT)
    }

    fn by_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Returns the type with the given width and signedness.
    #[must_use]
    pub const fn of(width: Width, signed: bool) -> Self {
        match (width, signed) {
            (Width::W8, true) => Self::Int8,
            (Width::W8, false) => Self::UInt8,
            (Width::W16, true) => Self::Int16,
            (Width::W16, false) => Self::UInt16,
            (Width::W32, true) => Self::Int32,
            (Width::W32, false) => Self::UInt32,
            (Width::W64, true) => Self::Int64,
            (Width::W64, false) => Self::UInt64,
        }
    }

    /// The static descriptor for this type.
    #[must_use]
    #[inline]
    pub fn descriptor(self) -> &'static TypeDescriptor {
        &TYPES[self as usize]
    }

    /// Canonical name, e.g. `"INT8"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Register width.
    #[must_use]
    pub fn width(self) -> Width {
        self.descriptor().width
    }

    /// Number of bits.
    #[must_use]
    pub fn bits(self) -> u32 {
        self.descriptor().bits()
    }

    /// Whether the top bit is read as a sign.
    #[must_use]
    pub fn is_signed(self) -> bool {
        self.descriptor().signed
    }

    /// Smallest representable value.
    #[must_use]
    pub fn min(self) -> i128 {
        self.descriptor().min
    }

    /// Largest representable value.
    #[must_use]
    pub fn max(self) -> i128 {
        self.descriptor().max
    }

    /// `(min, max)`.
    #[must_use]
    pub fn range(self) -> (i128, i128) {
        let d = self.descriptor();
        (d.min, d.max)
    }

    /// Human-readable range, e.g. `"-128 ~ 127"`.
    #[must_use]
    pub fn range_string(self) -> String {
        let d = self.descriptor();
        format!("{} ~ {}", d.min, d.max)
    }

    /// Whether `min <= value <= max`.
    #[must_use]
    pub fn is_in_range(self, value: i128) -> bool {
        let d = self.descriptor();
        (d.min..=d.max).contains(&value)
    }

    /// Checks `value` against the type's range and applies the type's overflow policy.
    ///
    /// In range, the value passes through untouched. Out of range, signed types saturate to the
    /// nearest bound and unsigned types wrap; [`OverflowResult::wrapped_value`] is always the
    /// wrapped reading.
    #[must_use]
    pub fn check_overflow(self, value: i128) -> OverflowResult {
        let d = self.descriptor();
        if self.is_in_range(value) {
            return OverflowResult {
                overflow: false,
                value,
                wrapped_value: value,
                original_value: value,
            };
        }
        let wrapped_value = self.wrap(value);
        let adjusted = if !d.signed {
            wrapped_value
        } else if value > d.max {
            d.max
        } else {
            d.min
        };
        OverflowResult {
            overflow: true,
            value: adjusted,
            wrapped_value,
            original_value: value,
        }
    }

    /// Saturates `value` to `[min, max]`.
    #[must_use]
    pub fn clamp(self, value: i128) -> i128 {
        let d = self.descriptor();
        value.clamp(d.min, d.max)
    }

    /// Wraps `value` modulo the type's span into `[min, max]`.
    #[must_use]
    pub fn wrap(self, value: i128) -> i128 {
        let d = self.descriptor();
        let span = d.span();
        // Reduce both terms first so `value - min` cannot leave `i128`.
        let offset = (value.rem_euclid(span) - d.min.rem_euclid(span)).rem_euclid(span);
        offset + d.min
    }

    /// Reinterprets the low `bits` bits of `value` as this type.
    ///
    /// The value is masked to the register width and, for signed types, sign-extended.
    #[must_use]
    pub fn convert(self, value: i128) -> i128 {
        let d = self.descriptor();
        let masked = d.width.truncate(value);
        if d.signed {
            d.width.sign_extend(masked)
        } else {
            masked
        }
    }

    /// Parses a decimal literal and checks it against this type.
    pub fn validate_and_convert(self, text: &str) -> Result<OverflowResult, ParseError> {
        let value = radix::to_decimal(text, Base::Decimal, self.is_signed(), self.width())?;
        Ok(self.check_overflow(value))
    }
}

impl Default for IntType {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntType {
    type Err = UnknownType;

    /// Strict lookup; see [`IntType::lookup`] for the lenient form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_name(s).ok_or_else(|| UnknownType { name: s.into() })
    }
}

/// Resolves a descriptor by name; unknown names resolve to INT32.
#[must_use]
pub fn lookup(name: &str) -> &'static TypeDescriptor {
    IntType::lookup(name).descriptor()
}

/// Names of every registered type, in catalogue order.
#[must_use]
pub fn all_type_names() -> [&'static str; 8] {
    IntType::ALL.map(IntType::name)
}
