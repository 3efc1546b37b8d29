// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conformance and regression tests for `intreg`.
//!
//! The tests live under `tests/`. This library only provides the shared value generators they
//! use.

use intreg::IntType;

/// A handful of values per type that sit on or next to its boundaries.
#[must_use]
pub fn boundary_values(int_type: IntType) -> Vec<i128> {
    let (min, max) = int_type.range();
    let mut values = vec![min, min + 1, -1, 0, 1, max - 1, max];
    if int_type.is_signed() {
        values.push(int_type.width().sign_bit() - 1);
    } else {
        values.push(int_type.width().sign_bit());
    }
    values.retain(|v| int_type.is_in_range(*v));
    values.sort_unstable();
    values.dedup();
    values
}

/// Every value of an 8- or 16-bit type; boundary values for wider ones.
#[must_use]
pub fn sample_values(int_type: IntType) -> Vec<i128> {
    if int_type.bits() <= 16 {
        let (min, max) = int_type.range();
        (min..=max).collect()
    } else {
        boundary_values(int_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_range() {
        for t in IntType::ALL {
            let values = sample_values(t);
            assert!(!values.is_empty(), "no samples for {t}");
            assert!(
                values.iter().all(|v| t.is_in_range(*v)),
                "sample out of range for {t}"
            );
        }
        assert_eq!(sample_values(IntType::UInt8).len(), 256);
        assert_eq!(boundary_values(IntType::UInt8), [0, 1, 128, 254, 255]);
    }
}
