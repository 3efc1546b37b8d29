// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use intreg::{IntType, Op};
use std::collections::HashMap;
use std::string::String;

/// Optional label resolver for profiling spans.
///
/// Return `None` to fall back to the default name-based labels.
pub trait LabelResolver {
    /// Resolve a label for an evaluation span.
    fn eval_label(&mut self, _op: Op, _int_type: IntType) -> Option<String> {
        None
    }
}

/// Default resolver that keeps stable name-based labels.
#[derive(Default, Debug)]
pub struct DefaultLabelResolver;

impl LabelResolver for DefaultLabelResolver {}

/// Resolver that labels spans with the operator symbol, e.g. `INT8 <<`.
#[derive(Default, Debug)]
pub struct SymbolLabelResolver {
    cache: HashMap<(Op, IntType), String>,
}

impl LabelResolver for SymbolLabelResolver {
    fn eval_label(&mut self, op: Op, int_type: IntType) -> Option<String> {
        let label = self
            .cache
            .entry((op, int_type))
            .or_insert_with(|| format!("{int_type} {}", op.symbol()));
        Some(label.clone())
    }
}

pub(crate) fn default_eval_label(op: Op, int_type: IntType) -> String {
    format!("op:{}@{}", op.name(), int_type.name())
}
