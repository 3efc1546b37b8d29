// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use intreg::{Base, Evaluator, IntType, Op, Register, bitops, radix};

/// Entry point for `intreg` wind-tunnel benchmarks.
///
/// Every operation is bounded by the register width, so these mostly track the constant factors
/// of the 128-bit working representation and of string rendering.
fn bench_ops(c: &mut Criterion) {
    bench_render_panes(c);
    bench_parse(c);
    bench_bitops(c);
    bench_eval(c);
}

/// Rendering all three panes for one value, per type.
fn bench_render_panes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_panes");
    for t in IntType::ALL {
        let r = Register::new(t.min() + 1, t);
        group.bench_with_input(BenchmarkId::from_parameter(t), &r, |b, r| {
            b.iter(|| {
                let r = black_box(r);
                (r.hex(), r.dec(), r.bin())
            });
        });
    }
    group.finish();
}

/// Parsing full-width literals in each base.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_full_width");
    let t = IntType::Int64;
    let v = i128::from(i64::MIN) + 12_345;
    let inputs = [
        (Base::Binary, radix::format_binary(&radix::dec_to_bin(v, t.width()))),
        (Base::Decimal, v.to_string()),
        (Base::Hexadecimal, radix::dec_to_hex(v, t.width())),
    ];
    for (base, text) in &inputs {
        group.bench_with_input(BenchmarkId::from_parameter(base), text, |b, text| {
            b.iter(|| {
                radix::to_decimal(black_box(text), *base, t.is_signed(), t.width()).unwrap()
            });
        });
    }
    group.finish();
}

/// Shift, rotate, and population count across widths.
fn bench_bitops(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitops");
    for t in [IntType::Int8, IntType::Int32, IntType::UInt64] {
        let w = t.width();
        group.bench_with_input(BenchmarkId::new("shift_rotate", t), &w, |b, &w| {
            let mut x = -3_i128;
            let mut n = 0_u32;
            b.iter(|| {
                n = n.wrapping_add(1);
                x = bitops::rotate_left(black_box(x), n, w);
                x = bitops::right_shift(x, n, w, true);
                x = bitops::left_shift(x, 1, w, false) | 1;
            });
        });
        group.bench_with_input(BenchmarkId::new("pop_count", t), &w, |b, &w| {
            b.iter(|| bitops::pop_count(black_box(-1), w));
        });
    }
    group.finish();
}

/// Operator evaluation including overflow handling.
fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");
    for op in [Op::Add, Op::Mul, Op::Xor, Op::Shr] {
        let e = Evaluator::for_type(IntType::Int32);
        group.bench_with_input(BenchmarkId::from_parameter(op.name()), &op, |b, &op| {
            let mut acc = 1_i128;
            b.iter(|| {
                acc = e.eval(op, black_box(acc), 7).map_or(0, |r| r.value());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ops);
criterion_main!(benches);
