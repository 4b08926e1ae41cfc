// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Student's t distribution: `Z * sqrt(df / Chi²(df))` with Z standard normal.

use crate::errors::KernelError;
use crate::kernels::generators::UniformGenerator;

use super::{gamma_variate, standard_normal_variate, VariateSampler};

/// Student's t distribution with `df` degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentsT {
    df: f64,
}

impl StudentsT {
    /// t(df). Fails unless `df` is positive and finite.
    pub fn new(df: f64) -> Result<Self, KernelError> {
        if !(df.is_finite() && df > 0.0) {
            return Err(KernelError::InvalidArguments(
                "StudentsT: df must be positive and finite".into(),
            ));
        }
        Ok(Self { df })
    }

    /// One ratio draw: normal numerator over scaled chi-squared denominator.
    #[inline]
    pub fn sample<G: UniformGenerator + ?Sized>(&self, g: &mut G) -> f64 {
        let z = standard_normal_variate(g);
        let chi2 = gamma_variate(g, self.df * 0.5, 2.0);
        z * (self.df / chi2).sqrt()
    }
}

impl VariateSampler for StudentsT {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.sample(g)
    }
}
