// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Gamma and Erlang distributions.
//!
//! `Gamma` samples with Marsaglia-Tsang (variable draw count, rejection
//! based); `Erlang` keeps the fixed-draw-count summation-of-exponentials
//! form for integer shape, which matters when callers rely on deterministic
//! generator consumption.

use crate::errors::KernelError;
use crate::kernels::generators::UniformGenerator;

use super::exponential::exponential_variate;
use super::{gamma_variate, VariateSampler};

/// Gamma distribution with shape `k` and scale `theta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma {
    shape: f64,
    scale: f64,
}

impl Gamma {
    /// Gamma(shape, scale). Fails unless both are positive and finite.
    pub fn new(shape: f64, scale: f64) -> Result<Self, KernelError> {
        if !(shape.is_finite() && shape > 0.0) || !(scale.is_finite() && scale > 0.0) {
            return Err(KernelError::InvalidArguments(
                "Gamma: shape and scale must be positive and finite".into(),
            ));
        }
        Ok(Self { shape, scale })
    }

    /// Marsaglia-Tsang draw.
    #[inline(always)]
    pub fn sample<G: UniformGenerator + ?Sized>(&self, g: &mut G) -> f64 {
        gamma_variate(g, self.shape, self.scale)
    }
}

impl VariateSampler for Gamma {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.sample(g)
    }
}

/// Erlang distribution: sum of `k` iid Exponential(rate) stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Erlang {
    stages: u32,
    rate: f64,
}

impl Erlang {
    /// Erlang(k, rate). Fails unless `k >= 1` and `rate` is positive and finite.
    pub fn new(stages: u32, rate: f64) -> Result<Self, KernelError> {
        if stages == 0 {
            return Err(KernelError::InvalidArguments(
                "Erlang: stage count k must be at least 1".into(),
            ));
        }
        if !(rate.is_finite() && rate > 0.0) {
            return Err(KernelError::InvalidArguments(
                "Erlang: rate must be positive and finite".into(),
            ));
        }
        Ok(Self { stages, rate })
    }

    /// Sum of `k` exponential inversion draws (exactly `k` uniforms).
    #[inline]
    pub fn sample<G: UniformGenerator + ?Sized>(&self, g: &mut G) -> f64 {
        let mut acc = 0.0;
        for _ in 0..self.stages {
            acc += exponential_variate(g, self.rate);
        }
        acc
    }
}

impl VariateSampler for Erlang {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.sample(g)
    }
}
