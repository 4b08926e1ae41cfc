// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Degenerate (point-mass) distribution: every draw returns the same constant.

use crate::errors::KernelError;
use crate::kernels::generators::UniformGenerator;

use super::VariateSampler;

/// Point mass at `k`. Useful as a deterministic stand-in wherever a sampler
/// is expected, e.g. fixed service times in a simulation model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Degenerate {
    k: f64,
}

impl Degenerate {
    /// Point mass at `k`. Fails if `k` is not finite.
    pub fn new(k: f64) -> Result<Self, KernelError> {
        if !k.is_finite() {
            return Err(KernelError::InvalidArguments(
                "Degenerate: k must be finite".into(),
            ));
        }
        Ok(Self { k })
    }

    /// The constant returned by every draw.
    #[inline(always)]
    pub fn value(&self) -> f64 {
        self.k
    }

    /// Draws the constant. The generator is not advanced.
    #[inline(always)]
    pub fn sample<G: UniformGenerator + ?Sized>(&self, _g: &mut G) -> f64 {
        self.k
    }
}

impl VariateSampler for Degenerate {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.sample(g)
    }
}
