// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Profiling adapters for `intreg` (currently Tracy).
//!
//! This crate is `std`-only and keeps `intreg` itself free of profiling dependencies. It listens
//! for evaluation enter/exit callbacks and emits matching profiling spans, and forwards overflow
//! and error events as Tracy messages.
//!
//! ## Backend
//! This crate currently supports the Tracy backend via `tracy-client`.
//!
//! ## Example
//! ```ignore
//! use intreg::{Evaluator, IntType, Op};
//! use intreg_profiling::ProfilingEvalSink;
//!
//! let mut sink = ProfilingEvalSink::new();
//! let evaluator = Evaluator::for_type(IntType::Int8);
//! let e = evaluator.eval_with_sink(Op::Add, 127, 1, Some(&mut sink))?;
//! # Ok::<(), intreg::EvalError>(())
//! ```

mod resolver;
mod sink;

pub use resolver::{DefaultLabelResolver, LabelResolver, SymbolLabelResolver};
pub use sink::ProfilingEvalSink;
