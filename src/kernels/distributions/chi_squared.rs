// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Chi-squared distribution: Chi²(df) == Gamma(df/2, 2).

use crate::errors::KernelError;
use crate::kernels::generators::UniformGenerator;

use super::{gamma_variate, VariateSampler};

/// Chi-squared distribution with `df` degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquared {
    df: f64,
}

impl ChiSquared {
    /// Chi²(df). Fails unless `df` is positive and finite.
    pub fn new(df: f64) -> Result<Self, KernelError> {
        if !(df.is_finite() && df > 0.0) {
            return Err(KernelError::InvalidArguments(
                "ChiSquared: df must be positive and finite".into(),
            ));
        }
        Ok(Self { df })
    }

    /// Degrees of freedom.
    #[inline(always)]
    pub fn df(&self) -> f64 {
        self.df
    }

    /// Gamma(df/2, 2) draw.
    #[inline(always)]
    pub fn sample<G: UniformGenerator + ?Sized>(&self, g: &mut G) -> f64 {
        gamma_variate(g, self.df * 0.5, 2.0)
    }
}

impl VariateSampler for ChiSquared {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.sample(g)
    }
}

#[cfg(test)]
mod chi_squared_tests {
    use super::*;
    use crate::kernels::generators::engines::MinStd;

    #[test]
    fn invalid_df_rejected() {
        assert!(ChiSquared::new(0.0).is_err());
        assert!(ChiSquared::new(-4.0).is_err());
        assert!(ChiSquared::new(f64::NAN).is_err());
    }

    #[test]
    fn mean_matches_df() {
        let mut d = ChiSquared::new(4.0).unwrap();
        let mut g = MinStd::new(321);
        let n = 10_000;
        let mut acc = 0.0;
        for _ in 0..n {
            let x = d.rand(&mut g);
            assert!(x >= 0.0 && x.is_finite());
            acc += x;
        }
        let mean = acc / n as f64;
        assert!((mean - 4.0).abs() < 0.3, "mean too far from df: {mean}");
    }

    #[test]
    fn matches_equivalent_gamma() {
        use super::super::gamma::Gamma;
        let mut c = ChiSquared::new(6.0).unwrap();
        let mut gm = Gamma::new(3.0, 2.0).unwrap();
        let mut g1 = MinStd::new(808);
        let mut g2 = MinStd::new(808);
        for _ in 0..32 {
            assert_eq!(c.rand(&mut g1), gm.rand(&mut g2));
        }
    }
}
