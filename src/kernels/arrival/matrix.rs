// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Small dense square matrix over a row-major flat buffer.
//!
//! Just enough linear algebra for building and validating CTMC generator
//! matrices: element access, diagonal extraction, row sums and elementwise
//! add/sub. Not a general matrix library.

use crate::errors::KernelError;

/// Dense `n x n` matrix, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    /// Builds from a flat row-major buffer of length `n * n`.
    pub fn from_flat(n: usize, data: Vec<f64>) -> Result<Self, KernelError> {
        if data.len() != n * n {
            return Err(KernelError::LengthMismatch(format!(
                "SquareMatrix: expected {} elements for a {n}x{n} matrix, got {}",
                n * n,
                data.len()
            )));
        }
        Ok(Self { n, data })
    }

    /// Builds from row slices. Ragged input is rejected.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self, KernelError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(KernelError::LengthMismatch(format!(
                    "SquareMatrix: row {r} has {} entries, expected {n}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    /// Diagonal matrix with `values` on the main diagonal.
    pub fn diag(values: &[f64]) -> Self {
        let n = values.len();
        let mut data = vec![0.0; n * n];
        for (i, &v) in values.iter().enumerate() {
            data[i * n + i] = v;
        }
        Self { n, data }
    }

    /// Dimension (rows == cols).
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Element at `(row, col)`. Out-of-range access is a programmer error.
    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.n && col < self.n, "SquareMatrix: index out of range");
        self.data[row * self.n + col]
    }

    /// Main diagonal as a vector.
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.n).map(|i| self.data[i * self.n + i]).collect()
    }

    /// Sum of one row.
    pub fn row_sum(&self, row: usize) -> f64 {
        assert!(row < self.n, "SquareMatrix: row out of range");
        self.data[row * self.n..(row + 1) * self.n].iter().sum()
    }

    /// Elementwise sum. Dimensions must agree.
    pub fn add(&self, other: &Self) -> Result<Self, KernelError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference. Dimensions must agree.
    pub fn sub(&self, other: &Self) -> Result<Self, KernelError> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<Self, KernelError> {
        if self.n != other.n {
            return Err(KernelError::LengthMismatch(format!(
                "SquareMatrix: dimension mismatch ({} vs {})",
                self.n, other.n
            )));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self { n: self.n, data })
    }
}
