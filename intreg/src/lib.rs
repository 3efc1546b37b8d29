// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact fixed-width integer register arithmetic.
//!
//! `intreg` is the computational core of a programmer's calculator. It covers three concerns,
//! each parameterized by an integer type (8, 16, 32, or 64 bits; signed or unsigned):
//!
//! - [`int_type`]: the registry of supported types and their overflow policy (signed types
//!   saturate, unsigned types wrap), plus explicit clamp, wrap, and bit reinterpretation.
//! - [`radix`]: parsing and rendering in base 2, 10, and 16 with two's-complement interpretation.
//! - [`bitops`]: logic, shift, rotate, and bit query operations on a register pattern.
//!
//! On top of these, [`op`] and [`eval`] resolve operator tokens once and evaluate them under an
//! active type, and [`value::Register`] derives the three synchronized text panes a front end shows.
//!
//! Values are carried as `i128`, so every 64-bit pattern (including `u64::MAX`) and the exact
//! result of arithmetic on two such values is represented without loss.
//!
//! Everything here is a pure function of its arguments; the type catalogue is immutable static
//! data. The crate is `no_std` and only needs `alloc` for rendered strings.
//!
//! ## Example
//! ```
//! use intreg::{Base, IntType, Register, bitops, radix};
//!
//! let ty = IntType::lookup("INT8");
//! let v = radix::to_decimal("11111111", Base::Binary, ty.is_signed(), ty.width()).unwrap();
//! assert_eq!(v, -1);
//!
//! let not5 = bitops::not(5, ty.width(), ty.is_signed());
//! assert_eq!(not5, -6);
//!
//! let r = Register::new(not5, ty);
//! assert_eq!(r.hex(), "0xFA");
//! assert_eq!(r.bin(), "1111 1010");
//!
//! assert_eq!(IntType::Int8.check_overflow(128).value, 127);
//! assert_eq!(IntType::UInt8.check_overflow(256).value, 0);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bitops;
pub mod eval;
pub mod int_type;
pub mod op;
pub mod radix;
pub mod trace;
pub mod value;
pub mod width;

pub use eval::{EvalConfig, EvalError, Evaluation, Evaluator, OverflowMode};
pub use int_type::{IntType, OverflowResult, TypeDescriptor, UnknownType};
pub use op::{Op, UnknownOperator};
pub use radix::{Base, ParseError};
pub use trace::{EvalSink, TraceMask};
pub use value::Register;
pub use width::Width;
