// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Operator tokens.
//!
//! Operator symbols are resolved to an [`Op`] once, at the boundary. Anything downstream matches
//! on the enum, so an unrecognized token can never reach the arithmetic or bitwise engines.

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;

/// A calculator operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// `a + b`.
    Add,
    /// `a - b`.
    Sub,
    /// `a * b`.
    Mul,
    /// `a / b`, truncating toward zero.
    Div,
    /// `a % b`, with the sign of `a`.
    Rem,
    /// `a & b`.
    And,
    /// `a | b`.
    Or,
    /// `a ^ b`.
    Xor,
    /// `~a`.
    Not,
    /// `a << b`.
    Shl,
    /// `a >> b`: arithmetic for negative signed operands, logical otherwise.
    Shr,
    /// `a >>> b`: always logical.
    UShr,
    /// Rotate `a` left by `b`.
    Rotl,
    /// Rotate `a` right by `b`.
    Rotr,
}

impl Op {
    /// Every operator.
    pub const ALL: [Self; 14] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Rem,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Not,
        Self::Shl,
        Self::Shr,
        Self::UShr,
        Self::Rotl,
        Self::Rotr,
    ];

    /// The token this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Not => "~",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::UShr => ">>>",
            Self::Rotl => "rol",
            Self::Rotr => "ror",
        }
    }

    /// A stable lower-case name, suitable for labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Rem => "rem",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Not => "not",
            Self::Shl => "shl",
            Self::Shr => "shr",
            Self::UShr => "ushr",
            Self::Rotl => "rotl",
            Self::Rotr => "rotr",
        }
    }

    /// Resolves an operator token.
    pub fn from_symbol(token: &str) -> Result<Self, UnknownOperator> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == token)
            .ok_or_else(|| UnknownOperator {
                token: token.into(),
            })
    }

    /// Whether the operator takes a single operand.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Not)
    }

    /// Whether the operator is handled by the bitwise engine rather than plain arithmetic.
    #[must_use]
    pub const fn is_bitwise(self) -> bool {
        !matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Rem
        )
    }

    /// Whether the right operand is a shift or rotate amount.
    #[must_use]
    pub const fn takes_amount(self) -> bool {
        matches!(
            self,
            Self::Shl | Self::Shr | Self::UShr | Self::Rotl | Self::Rotr
        )
    }

    /// Whether the bitwise engine returns a raw unsigned pattern for this operator, rather than
    /// a value already read in the register's signedness.
    #[must_use]
    pub const fn yields_pattern(self) -> bool {
        matches!(
            self,
            Self::And | Self::Or | Self::Xor | Self::UShr | Self::Rotl | Self::Rotr
        )
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Op {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

/// An operator token that does not name any [`Op`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownOperator {
    /// The rejected token.
    pub token: Box<str>,
}

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operator: {:?}", self.token)
    }
}

impl core::error::Error for UnknownOperator {}
