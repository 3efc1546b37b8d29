// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evaluation tracing hooks.
//!
//! The core never logs on its own. Embedders that want visibility pass an [`EvalSink`] to
//! [`Evaluator::eval_with_sink`](crate::eval::Evaluator::eval_with_sink); the sink's
//! [`TraceMask`] selects which callbacks fire.

use core::ops::BitOr;

use crate::eval::{EvalError, Evaluation};
use crate::int_type::IntType;
use crate::op::Op;

/// Bitmask selecting which [`EvalSink`] callbacks are delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceMask(u8);

impl TraceMask {
    /// No callbacks.
    pub const NONE: Self = Self(0);
    /// `eval_enter` / `eval_exit` around every evaluation.
    pub const EVAL: Self = Self(1 << 0);
    /// `overflow` when a result left the active type's range.
    pub const OVERFLOW: Self = Self(1 << 1);
    /// `error` when an evaluation was rejected.
    pub const ERROR: Self = Self(1 << 2);
    /// Every callback.
    pub const ALL: Self = Self(Self::EVAL.0 | Self::OVERFLOW.0 | Self::ERROR.0);

    /// Returns `true` if this mask contains every bit in `other`.
    #[must_use]
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns `true` if no bits are set.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for TraceMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Receiver for evaluation events.
pub trait EvalSink {
    /// Callbacks this sink wants.
    fn mask(&self) -> TraceMask;

    /// An evaluation of `op` under `int_type` is starting.
    fn eval_enter(&mut self, _op: Op, _int_type: IntType) {}

    /// The evaluation of `op` finished, successfully or not.
    fn eval_exit(&mut self, _op: Op, _int_type: IntType) {}

    /// The raw result of `evaluation` did not fit the active type.
    fn overflow(&mut self, _evaluation: &Evaluation) {}

    /// The evaluation of `op` was rejected.
    fn error(&mut self, _op: Op, _int_type: IntType, _error: &EvalError) {}
}
