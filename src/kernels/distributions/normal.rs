// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Normal distribution via the Box-Muller transform.
//!
//! Exactly two uniform draws per variate; no cached spare value, keeping the
//! draw count deterministic for reproducible simulation.

use crate::errors::KernelError;
use crate::kernels::generators::UniformGenerator;

use super::{standard_normal_variate, VariateSampler};

/// Normal distribution N(mu, sigma^2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// N(mu, sigma^2). Fails unless `sigma` is positive and both are finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, KernelError> {
        if !mu.is_finite() || !(sigma.is_finite() && sigma > 0.0) {
            return Err(KernelError::InvalidArguments(
                "Normal: μ must be finite and σ positive and finite".into(),
            ));
        }
        Ok(Self { mu, sigma })
    }

    /// One Box-Muller draw rescaled to N(mu, sigma^2).
    #[inline(always)]
    pub fn sample<G: UniformGenerator + ?Sized>(&self, g: &mut G) -> f64 {
        self.mu + self.sigma * standard_normal_variate(g)
    }
}

impl VariateSampler for Normal {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.sample(g)
    }
}
