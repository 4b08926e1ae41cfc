// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for kernel operations with structured error reporting.
//!
//! ## Error Categories
//! - **Argument Errors**: Distribution or generator parameters outside their
//!   mathematical domain, malformed generator matrices
//! - **Dimension Errors**: Matrix/permutation length mismatches
//! - **Boundary Errors**: Out-of-range phase or index access through the public API
//!
//! All errors include contextual message space for debugging. Parameter errors
//! are raised eagerly at construction time; sampling on a successfully
//! constructed object never fails.

use core::fmt;
use std::error::Error;

/// Comprehensive error type for all kernel operations.
///
/// Each variant includes a contextual message string providing specific details
/// about the error condition, enabling precise debugging and error reporting.
#[derive(Debug, Clone)]
pub enum KernelError {
    /// Invalid arguments provided to a constructor or kernel function.
    InvalidArguments(String),

    /// Length mismatch between paired sequences (matrix rows, permutations).
    LengthMismatch(String),

    /// Index or phase access out of bounds.
    OutOfBounds(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for length mismatches between left-hand side (LHS) and right-hand side (RHS) sequences.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the left-hand side sequence
/// * `rhs` - Length of the right-hand side sequence
///
/// # Returns
/// A formatted error message string
pub fn log_length_mismatch(fname: String, lhs: usize, rhs: usize) -> String {
    return format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs);
}
