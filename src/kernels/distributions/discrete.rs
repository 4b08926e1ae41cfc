// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Weighted discrete distribution over indices `0..n`.
//!
//! Samples by linear search over an unnormalised cumulative weight table -
//! the same competing-rates selection the Markovian arrival process engine
//! uses for its transition choice.

use crate::errors::KernelError;
use crate::kernels::generators::adaptor::unit_variate;
use crate::kernels::generators::UniformGenerator;
use crate::utils::search_cumulative;

use super::VariateSampler;

/// Discrete distribution over `0..n` with probabilities proportional to the
/// supplied weights.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteWeighted {
    cumulative: Vec<f64>,
    total: f64,
}

impl DiscreteWeighted {
    /// Builds the cumulative table from `weights`.
    ///
    /// Fails unless the weights are non-empty, finite, non-negative and sum
    /// to a positive total. Zero-weight entries are kept in the table but
    /// can never be drawn.
    pub fn new(weights: &[f64]) -> Result<Self, KernelError> {
        if weights.is_empty() {
            return Err(KernelError::InvalidArguments(
                "DiscreteWeighted: weights must be non-empty".into(),
            ));
        }
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(KernelError::InvalidArguments(
                "DiscreteWeighted: weights must be finite and non-negative".into(),
            ));
        }
        let cumulative = crate::utils::cumsum(weights);
        let total = *cumulative.last().unwrap_or(&0.0);
        if total <= 0.0 {
            return Err(KernelError::InvalidArguments(
                "DiscreteWeighted: total weight must be positive".into(),
            ));
        }
        Ok(Self { cumulative, total })
    }

    /// Number of categories.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// True when the table has no categories (never holds after `new`).
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// One index draw in `0..len()`.
    #[inline]
    pub fn sample_index<G: UniformGenerator + ?Sized>(&self, g: &mut G) -> usize {
        let target = unit_variate(g) * self.total;
        search_cumulative(&self.cumulative, target)
    }

    /// One draw widened to f64 (the sampler capability's variate type).
    #[inline(always)]
    pub fn sample<G: UniformGenerator + ?Sized>(&self, g: &mut G) -> f64 {
        self.sample_index(g) as f64
    }
}

impl VariateSampler for DiscreteWeighted {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.sample(g)
    }
}

#[cfg(test)]
mod discrete_tests {
    use super::*;
    use crate::kernels::generators::engines::MinStd;

    #[test]
    fn invalid_weights_rejected() {
        assert!(DiscreteWeighted::new(&[]).is_err());
        assert!(DiscreteWeighted::new(&[0.0, 0.0]).is_err());
        assert!(DiscreteWeighted::new(&[0.5, -0.1]).is_err());
        assert!(DiscreteWeighted::new(&[f64::NAN]).is_err());
    }

    #[test]
    fn frequencies_track_weights() {
        let d = DiscreteWeighted::new(&[0.2, 0.5, 0.3]).unwrap();
        let mut g = MinStd::new(345);
        let mut counts = [0usize; 3];
        let n = 10_000;
        for _ in 0..n {
            counts[d.sample_index(&mut g)] += 1;
        }
        let f1 = counts[1] as f64 / n as f64;
        assert!((f1 - 0.5).abs() < 0.05, "weight-0.5 frequency off: {f1}");
        assert!(counts.iter().all(|&c| c > 0));
    }

    #[test]
    fn zero_weight_categories_never_drawn() {
        let d = DiscreteWeighted::new(&[0.5, 0.0, 0.5]).unwrap();
        let mut g = MinStd::new(987);
        for _ in 0..10_000 {
            assert_ne!(d.sample_index(&mut g), 1);
        }
    }
}
