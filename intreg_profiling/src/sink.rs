// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::resolver::{DefaultLabelResolver, LabelResolver, default_eval_label};
use intreg::{EvalError, EvalSink, Evaluation, IntType, Op, TraceMask};
use std::string::String;

type BackendGuard = tracy_client::Span;

struct ScopeEntry {
    op: Op,
    int_type: IntType,
    // Keep the label alive for backends that may borrow it.
    _label: String,
    _guard: Option<BackendGuard>,
}

/// An `EvalSink` that emits Tracy spans and messages via `tracy-client`.
///
/// Evaluations never nest, so at most one span is open at a time.
pub struct ProfilingEvalSink<R = DefaultLabelResolver> {
    resolver: R,
    open: Option<ScopeEntry>,
}

impl ProfilingEvalSink<DefaultLabelResolver> {
    /// Create a new sink with name-based labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: LabelResolver> ProfilingEvalSink<R> {
    /// Create a new sink with a custom label resolver.
    #[must_use]
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            resolver,
            open: None,
        }
    }

    /// Whether an evaluation span is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    fn on_eval_enter(&mut self, op: Op, int_type: IntType) {
        // A span left open by an unmatched enter is closed before the new one starts.
        self.open = None;
        let label = self
            .resolver
            .eval_label(op, int_type)
            .unwrap_or_else(|| default_eval_label(op, int_type));
        let guard = Self::start_span(&label);
        self.open = Some(ScopeEntry {
            op,
            int_type,
            _label: label,
            _guard: guard,
        });
    }

    fn on_eval_exit(&mut self, op: Op, int_type: IntType) {
        // The open span is closed either way; a mismatch is only reported.
        if let Some(entry) = self.open.take()
            && (entry.op != op || entry.int_type != int_type)
        {
            Self::emit_message(&format!(
                "unbalanced exit: {} as {int_type} closed {} as {}",
                op.name(),
                entry.op.name(),
                entry.int_type
            ));
        }
    }

    fn start_span(label: &str) -> Option<BackendGuard> {
        let client = tracy_client::Client::running()?;
        Some(client.span_alloc(Some(label), "intreg.eval", "intreg", 0, 0))
    }

    fn emit_message(text: &str) {
        if let Some(client) = tracy_client::Client::running() {
            client.message(text, 0);
        }
    }
}

impl<R: LabelResolver> EvalSink for ProfilingEvalSink<R> {
    fn mask(&self) -> TraceMask {
        TraceMask::ALL
    }

    fn eval_enter(&mut self, op: Op, int_type: IntType) {
        self.on_eval_enter(op, int_type);
    }

    fn eval_exit(&mut self, op: Op, int_type: IntType) {
        self.on_eval_exit(op, int_type);
    }

    fn overflow(&mut self, evaluation: &Evaluation) {
        Self::emit_message(&format!(
            "overflow: {} -> {} (wrapped {}) as {}",
            evaluation.expression(),
            evaluation.value(),
            evaluation.result.wrapped_value,
            evaluation.int_type
        ));
    }

    fn error(&mut self, op: Op, int_type: IntType, error: &EvalError) {
        Self::emit_message(&format!("error: {} as {int_type}: {error}", op.name()));
    }
}

impl<R> Default for ProfilingEvalSink<R>
where
    R: LabelResolver + Default,
{
    fn default() -> Self {
        Self::with_resolver(R::default())
    }
}

impl<R> std::fmt::Debug for ProfilingEvalSink<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfilingEvalSink")
            .field("open", &self.open.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::ProfilingEvalSink;
    use crate::SymbolLabelResolver;
    use intreg::{EvalError, Evaluator, IntType, Op};

    #[test]
    fn evaluating_without_tracy_client_does_not_panic() {
        let mut sink = ProfilingEvalSink::new();
        let e = Evaluator::for_type(IntType::Int8)
            .eval_with_sink(Op::Add, 127, 1, Some(&mut sink))
            .unwrap();
        assert_eq!(e.value(), 127);
        assert!(!sink.is_open());
    }

    #[test]
    fn errors_close_their_span() {
        let mut sink = ProfilingEvalSink::with_resolver(SymbolLabelResolver::default());
        let r = Evaluator::for_type(IntType::UInt32).eval_with_sink(
            Op::Rem,
            5,
            0,
            Some(&mut sink),
        );
        assert_eq!(r, Err(EvalError::DivisionByZero));
        assert!(!sink.is_open());
    }

    #[test]
    fn mismatched_exit_closes_the_open_span() {
        let mut sink = ProfilingEvalSink::new();
        sink.on_eval_enter(Op::Add, IntType::Int8);
        assert!(sink.is_open());
        sink.on_eval_exit(Op::Add, IntType::Int16);
        assert!(!sink.is_open());
        sink.on_eval_exit(Op::Add, IntType::Int8);
        assert!(!sink.is_open());
    }

    #[test]
    fn enter_replaces_an_unclosed_span() {
        let mut sink = ProfilingEvalSink::new();
        sink.on_eval_enter(Op::Add, IntType::Int8);
        sink.on_eval_enter(Op::Mul, IntType::Int8);
        sink.on_eval_exit(Op::Mul, IntType::Int8);
        assert!(!sink.is_open());
    }
}
