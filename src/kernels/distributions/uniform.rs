// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Continuous and discrete uniform distributions.
//!
//! Both samplers are a single linear rescaling of one `[0,1)` draw; the
//! discrete variant shares the accepted rescaling bias of the bounded
//! integer adaptor (see `kernels::generators::adaptor`).

use crate::errors::KernelError;
use crate::kernels::generators::adaptor::unit_variate;
use crate::kernels::generators::UniformGenerator;

use super::VariateSampler;

/// Continuous uniform over `[a, b)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousUniform {
    a: f64,
    b: f64,
}

impl ContinuousUniform {
    /// Uniform over `[a, b)`. Fails unless `a < b` and both are finite.
    pub fn new(a: f64, b: f64) -> Result<Self, KernelError> {
        if !a.is_finite() || !b.is_finite() || a >= b {
            return Err(KernelError::InvalidArguments(format!(
                "ContinuousUniform: interval [{}, {}) must be finite and non-empty",
                a, b
            )));
        }
        Ok(Self { a, b })
    }

    /// One uniform draw: `a + u * (b - a)`.
    #[inline(always)]
    pub fn sample<G: UniformGenerator + ?Sized>(&self, g: &mut G) -> f64 {
        self.a + unit_variate(g) * (self.b - self.a)
    }
}

impl VariateSampler for ContinuousUniform {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.sample(g)
    }
}

/// Discrete uniform over the integers `lo..=hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscreteUniform {
    lo: i64,
    hi: i64,
}

impl DiscreteUniform {
    /// Uniform over `lo..=hi`. Fails when `lo > hi`; a single-point range
    /// (`lo == hi`) is allowed and degenerates to that value.
    pub fn new(lo: i64, hi: i64) -> Result<Self, KernelError> {
        if lo > hi {
            return Err(KernelError::InvalidArguments(format!(
                "DiscreteUniform: lo ({}) must not exceed hi ({})",
                lo, hi
            )));
        }
        Ok(Self { lo, hi })
    }

    /// One integer draw from `lo..=hi`.
    #[inline]
    pub fn sample_int<G: UniformGenerator + ?Sized>(&self, g: &mut G) -> i64 {
        let u = unit_variate(g);
        let span = (self.hi as i128 - self.lo as i128 + 1) as f64;
        let value = self.lo as i128 + (u * span) as i128;
        value.min(self.hi as i128) as i64
    }

    /// One draw widened to f64 (the sampler capability's variate type).
    #[inline(always)]
    pub fn sample<G: UniformGenerator + ?Sized>(&self, g: &mut G) -> f64 {
        self.sample_int(g) as f64
    }
}

impl VariateSampler for DiscreteUniform {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.sample(g)
    }
}
