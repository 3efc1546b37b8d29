// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A logical value bound to an integer type.
//!
//! [`Register`] is what a front end holds as its "current value": one number, checked against
//! the active type, from which the hexadecimal, decimal, and binary panes are all derived.

use alloc::string::{String, ToString};
use core::fmt;

use crate::int_type::IntType;
use crate::radix::{self, Base, ParseError};

/// A value checked against an [`IntType`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Register {
    value: i128,
    int_type: IntType,
    overflow: bool,
}

impl Register {
    /// Binds `value` to `int_type`, applying the type's overflow policy.
    #[must_use]
    pub fn new(value: i128, int_type: IntType) -> Self {
        let checked = int_type.check_overflow(value);
        Self {
            value: checked.value,
            int_type,
            overflow: checked.overflow,
        }
    }

    /// Parses `text` in `base` and binds the result to `int_type`.
    pub fn parse(text: &str, base: Base, int_type: IntType) -> Result<Self, ParseError> {
        let value = radix::to_decimal(text, base, int_type.is_signed(), int_type.width())?;
        Ok(Self::new(value, int_type))
    }

    /// The held value.
    #[must_use]
    pub fn value(&self) -> i128 {
        self.value
    }

    /// The bound type.
    #[must_use]
    pub fn int_type(&self) -> IntType {
        self.int_type
    }

    /// Whether the value had to be adjusted to fit the type.
    #[must_use]
    pub fn overflowed(&self) -> bool {
        self.overflow
    }

    /// Re-checks the held value against another type.
    #[must_use]
    pub fn retype(self, int_type: IntType) -> Self {
        Self::new(self.value, int_type)
    }

    /// Hexadecimal pane, e.g. `0x00FF`.
    #[must_use]
    pub fn hex(&self) -> String {
        radix::format_hex(&radix::dec_to_hex(self.value, self.int_type.width()))
    }

    /// Decimal pane.
    #[must_use]
    pub fn dec(&self) -> String {
        self.value.to_string()
    }

    /// Binary pane, grouped in fours, e.g. `0000 1111`.
    #[must_use]
    pub fn bin(&self) -> String {
        radix::format_binary(&radix::dec_to_bin(self.value, self.int_type.width()))
    }

    /// The pane for `base`.
    #[must_use]
    pub fn text(&self, base: Base) -> String {
        match base {
            Base::Binary => self.bin(),
            Base::Decimal => self.dec(),
            Base::Hexadecimal => self.hex(),
        }
    }

    /// Range of the bound type, e.g. `-128 ~ 127`.
    #[must_use]
    pub fn range_string(&self) -> String {
        self.int_type.range_string()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.int_type)
    }
}
