// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Exponential distribution sampled by inversion: `-ln(1 - u) / lambda`.
//!
//! One uniform draw per variate. This is the workhorse sojourn-time sampler
//! of the Markovian arrival process engine, so the draw count and the exact
//! inversion form are part of the reproducibility contract.

use crate::errors::KernelError;
use crate::kernels::generators::adaptor::unit_variate;
use crate::kernels::generators::UniformGenerator;

use super::VariateSampler;

/// Exponential distribution with rate `lambda`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    lambda: f64,
}

impl Exponential {
    /// Exponential with rate `lambda`. Fails unless `lambda` is positive and finite.
    pub fn new(lambda: f64) -> Result<Self, KernelError> {
        if !(lambda.is_finite() && lambda > 0.0) {
            return Err(KernelError::InvalidArguments(
                "Exponential: λ must be positive and finite".into(),
            ));
        }
        Ok(Self { lambda })
    }

    /// Rate parameter λ.
    #[inline(always)]
    pub fn rate(&self) -> f64 {
        self.lambda
    }

    /// One inversion draw: `-ln(1 - u) / λ`.
    #[inline(always)]
    pub fn sample<G: UniformGenerator + ?Sized>(&self, g: &mut G) -> f64 {
        exponential_variate(g, self.lambda)
    }
}

impl VariateSampler for Exponential {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.sample(g)
    }
}

/// Inversion sampler shared with the arrival-process engine.
/// Precondition: `rate > 0` (validated by the calling constructor).
#[inline(always)]
pub fn exponential_variate<G: UniformGenerator + ?Sized>(g: &mut G, rate: f64) -> f64 {
    debug_assert!(rate > 0.0, "rate must be > 0");
    -(1.0 - unit_variate(g)).ln() / rate
}
