// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Numeric Helpers for Sampling Kernels*
//!
//! Small numeric building blocks shared across the generator, distribution
//! and arrival-process kernels: interval clamping, interpolation, running
//! sums and cumulative-table search.

use num_traits::Float;

/// Clamps `x` into the closed interval `[lo, hi]`.
///
/// Precondition: `lo <= hi` (debug-asserted).
#[inline(always)]
pub fn clamp<T: Float>(x: T, lo: T, hi: T) -> T {
    debug_assert!(lo <= hi, "clamp: lo must not exceed hi");
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Sign of `x`: -1, 0 or +1 with the same float type.
///
/// NaN maps to 0 so downstream arithmetic stays finite.
#[inline(always)]
pub fn sign<T: Float>(x: T) -> T {
    if x > T::zero() {
        T::one()
    } else if x < T::zero() {
        -T::one()
    } else {
        T::zero()
    }
}

/// Linear interpolation between `a` and `b` at parameter `t`.
///
/// `t` outside `[0, 1]` extrapolates.
#[inline(always)]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Sum of a slice.
#[inline(always)]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Running (inclusive) cumulative sum of a slice.
#[inline]
pub fn cumsum(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut acc = 0.0;
    for &v in values {
        acc += v;
        out.push(acc);
    }
    out
}

/// Linear search over an ascending cumulative table.
///
/// Returns the first index whose cumulative value strictly exceeds `target`,
/// or the last index when `target` lands at or beyond the final entry
/// (floating-point slack at the top of the table).
///
/// Zero-width segments (equal consecutive cumulative values) can never be
/// selected because the strict comparison matches the earlier index first.
///
/// Precondition: `cum` is non-empty (debug-asserted).
#[inline]
pub fn search_cumulative(cum: &[f64], target: f64) -> usize {
    debug_assert!(!cum.is_empty(), "search_cumulative: empty table");
    for (idx, &c) in cum.iter().enumerate() {
        if target < c {
            return idx;
        }
    }
    cum.len() - 1
}
