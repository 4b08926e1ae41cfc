// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Global configuration constants controlling kernel behaviour and numerical
//! tolerances. These values are compile-time constants chosen for typical
//! double-precision workloads.

/// Absolute tolerance for generator-matrix row sums.
///
/// A Markovian arrival process requires each row of `Q = D0 + D1` to sum to
/// zero. Rows within this tolerance of zero are accepted at construction;
/// anything beyond it is rejected as an invalid generator matrix.
pub const GENERATOR_ROW_SUM_TOLERANCE: f64 = 1e-9;

/// Smallest admissible phase exit rate for a Markovian arrival process.
///
/// A phase whose total exit rate falls at or below this value would produce
/// unbounded sojourn times (an absorbing phase), so such matrices are rejected
/// at construction rather than discovered mid-sampling.
pub const MIN_PHASE_EXIT_RATE: f64 = 0.0;
