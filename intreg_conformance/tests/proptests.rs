// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Randomized checks of the round-trip and bit-operation properties on 32- and 64-bit types.

use intreg::{Base, IntType, bitops, radix};
use proptest::prelude::*;

fn wide_type() -> impl Strategy<Value = IntType> {
    prop_oneof![
        Just(IntType::Int32),
        Just(IntType::UInt32),
        Just(IntType::Int64),
        Just(IntType::UInt64),
    ]
}

fn typed_value() -> impl Strategy<Value = (IntType, i128)> {
    wide_type().prop_flat_map(|t| {
        let (min, max) = t.range();
        (Just(t), min..=max)
    })
}

proptest! {
    #[test]
    fn text_round_trips((t, v) in typed_value()) {
        let (w, signed) = (t.width(), t.is_signed());
        prop_assert_eq!(radix::to_decimal(&radix::dec_to_bin(v, w), Base::Binary, signed, w), Ok(v));
        prop_assert_eq!(radix::to_decimal(&radix::dec_to_hex(v, w), Base::Hexadecimal, signed, w), Ok(v));
    }

    #[test]
    fn rotations_invert((t, v) in typed_value(), k in 0_u32..64) {
        let w = t.width();
        let k = k % w.bits();
        prop_assert_eq!(bitops::rotate_right(bitops::rotate_left(v, k, w), k, w), w.to_pattern(v));
    }

    #[test]
    fn logic_stays_masked((t, a) in typed_value(), b in any::<i64>()) {
        let w = t.width();
        let b = i128::from(b);
        for r in [bitops::and(a, b, w), bitops::or(a, b, w), bitops::xor(a, b, w)] {
            prop_assert!((0..=w.mask()).contains(&r));
        }
    }

    #[test]
    fn shift_amounts_wrap((t, v) in typed_value()) {
        let (w, signed) = (t.width(), t.is_signed());
        prop_assert_eq!(bitops::left_shift(v, w.bits(), w, signed), bitops::left_shift(v, 0, w, signed));
    }

    #[test]
    fn policy_matches_sign((t, v) in typed_value(), delta in 1_i128..1_000_000) {
        let above = t.check_overflow(t.max() + delta);
        prop_assert!(above.overflow);
        prop_assert_eq!(above.wrapped_value, t.wrap(t.max() + delta));
        if t.is_signed() {
            prop_assert_eq!(above.value, t.max());
        } else {
            prop_assert_eq!(above.value, above.wrapped_value);
        }
        prop_assert!(!t.check_overflow(v).overflow);
    }
}
