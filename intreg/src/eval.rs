// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-operator evaluation over register values.
//!
//! An [`Evaluator`] applies one [`Op`] to one or two register values under the active
//! [`IntType`]. Arithmetic runs in the 128-bit working range; bitwise operators go through
//! [`crate::bitops`] with the type's width and signedness. The raw result is then passed through
//! the configured [`OverflowMode`]. Overflow is reported on the [`Evaluation`], never raised.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::bitops;
use crate::int_type::{IntType, OverflowResult};
use crate::op::Op;
use crate::trace::{EvalSink, TraceMask};
use crate::width::Width;

/// How an out-of-range raw result is brought back into the active type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverflowMode {
    /// Saturate signed types, wrap unsigned types ([`IntType::check_overflow`]).
    ///
    /// Under a signed type the pattern results of [`Op::yields_pattern`] operators have already
    /// been re-read as signed, so they never saturate.
    #[default]
    Policy,
    /// Always saturate ([`IntType::clamp`]).
    Saturate,
    /// Always wrap ([`IntType::wrap`]).
    Wrap,
    /// Keep the low bits and re-read them in the type's signedness ([`IntType::convert`]).
    Reinterpret,
}

impl OverflowMode {
    /// Applies this mode to `raw` under `int_type`.
    #[must_use]
    pub fn apply(self, int_type: IntType, raw: i128) -> OverflowResult {
        let checked = int_type.check_overflow(raw);
        let value = match self {
            Self::Policy => checked.value,
            Self::Saturate => int_type.clamp(raw),
            Self::Wrap => checked.wrapped_value,
            Self::Reinterpret => int_type.convert(raw),
        };
        OverflowResult { value, ..checked }
    }
}

/// Evaluation settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalConfig {
    /// Type results are checked against.
    pub int_type: IntType,
    /// Treatment of out-of-range results.
    pub overflow: OverflowMode,
}

/// Reasons an evaluation produces no value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// `/` or `%` with a zero divisor.
    DivisionByZero,
    /// The exact arithmetic result does not fit the 128-bit working range.
    Unrepresentable {
        /// Operator that overflowed.
        op: Op,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::Unrepresentable { op } => {
                write!(f, "result of {op} exceeds the 128-bit working range")
            }
        }
    }
}

impl core::error::Error for EvalError {}

/// A completed evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Operator applied.
    pub op: Op,
    /// Type the result was checked against.
    pub int_type: IntType,
    /// Left (or only) operand.
    pub lhs: i128,
    /// Right operand; `None` for unary operators.
    pub rhs: Option<i128>,
    /// Result before overflow handling.
    ///
    /// For [`Op::yields_pattern`] operators under a signed type this is the engine's unsigned
    /// pattern already re-read as signed ([`IntType::convert`]), e.g. `-1` rather than `255` for
    /// INT8 `-1 & -1`.
    pub raw: i128,
    /// Result after overflow handling.
    pub result: OverflowResult,
}

impl Evaluation {
    /// Final value.
    #[must_use]
    pub fn value(&self) -> i128 {
        self.result.value
    }

    /// Whether the raw result was outside the type's range.
    #[must_use]
    pub fn overflowed(&self) -> bool {
        self.result.overflow
    }

    /// The expression as entered, e.g. `"12 & 10"` or `"~5"`.
    #[must_use]
    pub fn expression(&self) -> String {
        match self.rhs {
            Some(rhs) => format!("{} {} {rhs}", self.lhs, self.op),
            None => format!("{}{}", self.op, self.lhs),
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression(), self.value())
    }
}

/// Evaluates operators under an [`EvalConfig`].
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    /// Creates an evaluator with the given settings.
    #[must_use]
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// Creates an evaluator for `int_type` with the default overflow mode.
    #[must_use]
    pub fn for_type(int_type: IntType) -> Self {
        Self::new(EvalConfig {
            int_type,
            ..EvalConfig::default()
        })
    }

    /// Current settings.
    #[must_use]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Switches the active type.
    pub fn set_int_type(&mut self, int_type: IntType) {
        self.config.int_type = int_type;
    }

    /// Switches the overflow mode.
    pub fn set_overflow_mode(&mut self, overflow: OverflowMode) {
        self.config.overflow = overflow;
    }

    /// Evaluates `lhs op rhs`. `rhs` is ignored for unary operators.
    pub fn eval(&self, op: Op, lhs: i128, rhs: i128) -> Result<Evaluation, EvalError> {
        self.eval_with_sink(op, lhs, rhs, None)
    }

    /// Like [`Evaluator::eval`], reporting to `sink` as selected by its mask.
    pub fn eval_with_sink(
        &self,
        op: Op,
        lhs: i128,
        rhs: i128,
        mut sink: Option<&mut dyn EvalSink>,
    ) -> Result<Evaluation, EvalError> {
        let int_type = self.config.int_type;
        let mask = sink.as_ref().map_or(TraceMask::NONE, |s| s.mask());

        if mask.contains(TraceMask::EVAL)
            && let Some(s) = sink.as_mut()
        {
            s.eval_enter(op, int_type);
        }

        let outcome = raw_result(op, lhs, rhs, int_type).map(|raw| Evaluation {
            op,
            int_type,
            lhs,
            rhs: (!op.is_unary()).then_some(rhs),
            raw,
            result: self.config.overflow.apply(int_type, raw),
        });

        if let Some(s) = sink.as_mut() {
            match &outcome {
                Ok(evaluation) if evaluation.overflowed() && mask.contains(TraceMask::OVERFLOW) => {
                    s.overflow(evaluation);
                }
                Err(error) if mask.contains(TraceMask::ERROR) => s.error(op, int_type, error),
                _ => {}
            }
            if mask.contains(TraceMask::EVAL) {
                s.eval_exit(op, int_type);
            }
        }
        outcome
    }
}

fn shift_amount(rhs: i128, width: Width) -> u32 {
    // Always in `0..bits`, so the conversion cannot fail.
    u32::try_from(rhs.rem_euclid(i128::from(width.bits()))).unwrap_or(0)
}

fn raw_result(op: Op, lhs: i128, rhs: i128, int_type: IntType) -> Result<i128, EvalError> {
    let width = int_type.width();
    let signed = int_type.is_signed();
    let unrepresentable = EvalError::Unrepresentable { op };

    let raw = match op {
        Op::Add => lhs.checked_add(rhs).ok_or(unrepresentable)?,
        Op::Sub => lhs.checked_sub(rhs).ok_or(unrepresentable)?,
        Op::Mul => lhs.checked_mul(rhs).ok_or(unrepresentable)?,
        Op::Div | Op::Rem if rhs == 0 => return Err(EvalError::DivisionByZero),
        Op::Div => lhs.checked_div(rhs).ok_or(unrepresentable)?,
        Op::Rem => lhs.checked_rem(rhs).ok_or(unrepresentable)?,
        Op::And => bitops::and(lhs, rhs, width),
        Op::Or => bitops::or(lhs, rhs, width),
        Op::Xor => bitops::xor(lhs, rhs, width),
        Op::Not => bitops::not(lhs, width, signed),
        Op::Shl => bitops::left_shift(lhs, shift_amount(rhs, width), width, signed),
        Op::Shr => bitops::right_shift(lhs, shift_amount(rhs, width), width, signed),
        Op::UShr => bitops::unsigned_right_shift(lhs, shift_amount(rhs, width), width),
        Op::Rotl => bitops::rotate_left(lhs, shift_amount(rhs, width), width),
        Op::Rotr => bitops::rotate_right(lhs, shift_amount(rhs, width), width),
    };

    // Unsigned patterns are re-read in the register's signedness so that, say, `-1 & -1` stays
    // `-1` under INT8 instead of saturating from 255.
    if op.yields_pattern() && signed {
        return Ok(int_type.convert(raw));
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::vec::Vec;

    fn int8() -> Evaluator {
        Evaluator::for_type(IntType::Int8)
    }

    #[test]
    fn arithmetic_applies_policy() {
        let e = int8().eval(Op::Add, 127, 1).unwrap();
        assert!(e.overflowed());
        assert_eq!(e.raw, 128);
        assert_eq!(e.value(), 127);
        assert_eq!(e.result.wrapped_value, -128);

        let e = Evaluator::for_type(IntType::UInt8)
            .eval(Op::Sub, 0, 1)
            .unwrap();
        assert_eq!(e.value(), 255);
    }

    #[test]
    fn division_truncates_and_guards_zero() {
        assert_eq!(int8().eval(Op::Div, -7, 2).unwrap().value(), -3);
        assert_eq!(int8().eval(Op::Rem, -7, 2).unwrap().value(), -1);
        assert_eq!(int8().eval(Op::Div, 1, 0), Err(EvalError::DivisionByZero));
        assert_eq!(int8().eval(Op::Rem, 1, 0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn unrepresentable_products_are_errors() {
        let max = i128::from(u64::MAX);
        assert_eq!(
            Evaluator::for_type(IntType::UInt64).eval(Op::Mul, max, max),
            Err(EvalError::Unrepresentable { op: Op::Mul })
        );
        let e = Evaluator::for_type(IntType::Int64)
            .eval(Op::Mul, i128::from(i64::MIN), i128::from(i64::MIN))
            .unwrap();
        assert_eq!(e.value(), i128::from(i64::MAX));
    }

    #[test]
    fn bitwise_results_follow_signedness() {
        assert_eq!(int8().eval(Op::And, 12, 10).unwrap().value(), 8);
        assert_eq!(int8().eval(Op::Not, 5, 0).unwrap().value(), -6);
        assert_eq!(int8().eval(Op::Rotl, -128, 1).unwrap().value(), 1);

        let and = int8().eval(Op::And, -1, -1).unwrap();
        assert_eq!(and.raw, -1);
        assert_eq!(and.value(), -1);
        assert!(!and.overflowed());
        assert_eq!(int8().eval(Op::Xor, 0x7F, -1).unwrap().raw, -128);

        let u8e = Evaluator::for_type(IntType::UInt8);
        assert_eq!(u8e.eval(Op::And, -1, -1).unwrap().value(), 255);
        assert_eq!(u8e.eval(Op::UShr, 255, 4).unwrap().value(), 15);
    }

    #[test]
    fn shift_amounts_reduce_euclidean() {
        let e = Evaluator::for_type(IntType::Int32);
        assert_eq!(e.eval(Op::Shl, 1, 31).unwrap().value(), -2_147_483_648);
        assert_eq!(e.eval(Op::Shl, 1, 32).unwrap().value(), 1);
        assert_eq!(e.eval(Op::Shl, 1, -1).unwrap().value(), -2_147_483_648);
        assert_eq!(e.eval(Op::Shr, -8, 1).unwrap().value(), -4);
    }

    #[test]
    fn overflow_modes() {
        let mut e = Evaluator::for_type(IntType::Int8);
        assert_eq!(e.eval(Op::Add, 100, 100).unwrap().value(), 127);
        e.set_overflow_mode(OverflowMode::Wrap);
        assert_eq!(e.eval(Op::Add, 100, 100).unwrap().value(), -56);
        e.set_overflow_mode(OverflowMode::Reinterpret);
        assert_eq!(e.eval(Op::Add, 100, 100).unwrap().value(), -56);
        e.set_int_type(IntType::UInt8);
        e.set_overflow_mode(OverflowMode::Saturate);
        let r = e.eval(Op::Add, 200, 100).unwrap();
        assert!(r.overflowed());
        assert_eq!(r.value(), 255);
        assert_eq!(r.result.wrapped_value, 44);
    }

    #[test]
    fn expressions_render() {
        let e = int8().eval(Op::Xor, 12, 10).unwrap();
        assert_eq!(e.expression(), "12 ^ 10");
        assert_eq!(std::format!("{e}"), "12 ^ 10 = 6");
        let e = int8().eval(Op::Not, -3, 99).unwrap();
        assert_eq!(e.rhs, None);
        assert_eq!(e.expression(), "~-3");
    }

    #[derive(Default)]
    struct Recorder {
        mask: Option<TraceMask>,
        events: Vec<&'static str>,
    }

    impl EvalSink for Recorder {
        fn mask(&self) -> TraceMask {
            self.mask.unwrap_or(TraceMask::ALL)
        }
        fn eval_enter(&mut self, _op: Op, _int_type: IntType) {
            self.events.push("enter");
        }
        fn eval_exit(&mut self, _op: Op, _int_type: IntType) {
            self.events.push("exit");
        }
        fn overflow(&mut self, _evaluation: &Evaluation) {
            self.events.push("overflow");
        }
        fn error(&mut self, _op: Op, _int_type: IntType, _error: &EvalError) {
            self.events.push("error");
        }
    }

    #[test]
    fn sink_sees_events_in_order() {
        let mut rec = Recorder::default();
        int8()
            .eval_with_sink(Op::Add, 127, 1, Some(&mut rec))
            .unwrap();
        assert_eq!(rec.events, ["enter", "overflow", "exit"]);

        let mut rec = Recorder::default();
        let _ = int8().eval_with_sink(Op::Div, 1, 0, Some(&mut rec));
        assert_eq!(rec.events, ["enter", "error", "exit"]);

        let mut rec = Recorder {
            mask: Some(TraceMask::OVERFLOW),
            ..Recorder::default()
        };
        int8().eval_with_sink(Op::Add, 1, 1, Some(&mut rec)).unwrap();
        int8()
            .eval_with_sink(Op::Sub, -128, 1, Some(&mut rec))
            .unwrap();
        assert_eq!(rec.events, ["overflow"]);
    }
}
