// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Order Kernels** - *Index Permutations and Reordering*
//!
//! Argsort-style helpers: compute the stable index permutation that would
//! sort a slice, and apply a permutation to a slice either by copy or in
//! place. Used to rank sampled variates without disturbing the originals.

use std::cmp::Ordering;

use crate::errors::{log_length_mismatch, KernelError};

/// Stable index permutation that would sort `data` ascending.
#[inline]
pub fn order<T: Ord>(data: &[T]) -> Vec<usize> {
    order_by(data, T::cmp)
}

/// Stable index permutation under a caller-supplied comparator.
pub fn order_by<T, F>(data: &[T], mut cmp: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut indices: Vec<usize> = (0..data.len()).collect();
    indices.sort_by(|&a, &b| cmp(&data[a], &data[b]));
    indices
}

/// Stable index permutation for floats under IEEE total ordering, so NaN
/// sorts after every finite value instead of poisoning the comparator.
#[inline]
pub fn order_float(data: &[f64]) -> Vec<usize> {
    order_by(data, |a, b| a.total_cmp(b))
}

/// Applies the permutation `indices` to `data`, returning the reordered copy
/// `out[i] = data[indices[i]]`.
///
/// `indices` must be a permutation of `0..data.len()`: a length mismatch is a
/// recoverable error, while out-of-range or duplicate entries are programmer
/// errors (debug-asserted).
pub fn reorder_copy<T: Clone>(indices: &[usize], data: &[T]) -> Result<Vec<T>, KernelError> {
    if indices.len() != data.len() {
        return Err(KernelError::LengthMismatch(log_length_mismatch(
            "reorder".into(),
            indices.len(),
            data.len(),
        )));
    }
    debug_assert_is_permutation(indices);
    Ok(indices.iter().map(|&i| data[i].clone()).collect())
}

/// Applies the permutation `indices` to `data` in place, via a temporary
/// buffer. Same contract as [`reorder_copy`].
pub fn reorder_in_place<T: Clone>(indices: &[usize], data: &mut [T]) -> Result<(), KernelError> {
    let reordered = reorder_copy(indices, data)?;
    data.clone_from_slice(&reordered);
    Ok(())
}

#[inline]
fn debug_assert_is_permutation(indices: &[usize]) {
    #[cfg(debug_assertions)]
    {
        let mut seen = vec![false; indices.len()];
        for &i in indices {
            assert!(i < indices.len(), "reorder: index {i} out of range");
            assert!(!seen[i], "reorder: duplicate index {i}");
            seen[i] = true;
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = indices;
}
