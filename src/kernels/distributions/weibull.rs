// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Weibull distribution sampled by inversion: `scale * (-ln(1 - u))^(1/shape)`.

use crate::errors::KernelError;
use crate::kernels::generators::adaptor::unit_variate;
use crate::kernels::generators::UniformGenerator;

use super::VariateSampler;

/// Weibull distribution with shape `k` and scale `lambda`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weibull {
    shape: f64,
    scale: f64,
}

impl Weibull {
    /// Weibull(shape, scale). Fails unless both are positive and finite.
    pub fn new(shape: f64, scale: f64) -> Result<Self, KernelError> {
        if !(shape.is_finite() && shape > 0.0) || !(scale.is_finite() && scale > 0.0) {
            return Err(KernelError::InvalidArguments(
                "Weibull: shape and scale must be positive and finite".into(),
            ));
        }
        Ok(Self { shape, scale })
    }

    /// One inversion draw.
    #[inline(always)]
    pub fn sample<G: UniformGenerator + ?Sized>(&self, g: &mut G) -> f64 {
        let u = unit_variate(g);
        self.scale * (-(1.0 - u).ln()).powf(1.0 / self.shape)
    }
}

impl VariateSampler for Weibull {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.sample(g)
    }
}
