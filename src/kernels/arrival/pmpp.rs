// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Bursty two-phase traffic model (regular/bursty Poisson phases).
//!
//! A convenience parameterization over [`Mmpp`]: the process alternates
//! between a regular phase and a bursty phase, with phase holding times whose
//! mean matches a Pareto(shape, min_duration) sojourn,
//! `m = shape * min_duration / (shape - 1)`. Both modulating transitions run
//! at rate `1/m`; arrivals tick at `regular_rate` or `bursty_rate` depending
//! on the current phase.

use crate::errors::KernelError;
use crate::kernels::distributions::VariateSampler;
use crate::kernels::generators::UniformGenerator;

use super::matrix::SquareMatrix;
use super::mmpp::Mmpp;

/// Two-phase bursty arrival process.
#[derive(Debug, Clone, PartialEq)]
pub struct Pmpp {
    engine: Mmpp,
}

impl Pmpp {
    /// Builds the process, starting in the regular phase (phase 0).
    ///
    /// `shape` must exceed 1 (the matched Pareto mean is infinite otherwise)
    /// and `min_duration` must be positive; the two arrival rates must be
    /// finite and non-negative with at least one positive.
    pub fn new(
        regular_rate: f64,
        bursty_rate: f64,
        shape: f64,
        min_duration: f64,
    ) -> Result<Self, KernelError> {
        if !(shape.is_finite() && shape > 1.0) {
            return Err(KernelError::InvalidArguments(
                "Pmpp: shape must be finite and greater than 1".into(),
            ));
        }
        if !(min_duration.is_finite() && min_duration > 0.0) {
            return Err(KernelError::InvalidArguments(
                "Pmpp: min_duration must be positive and finite".into(),
            ));
        }
        let mean_sojourn = shape * min_duration / (shape - 1.0);
        let switch_rate = 1.0 / mean_sojourn;
        let q = SquareMatrix::from_rows(&[
            &[-switch_rate, switch_rate],
            &[switch_rate, -switch_rate],
        ])?;
        Ok(Self {
            engine: Mmpp::new(&[regular_rate, bursty_rate], &q)?,
        })
    }

    /// Current phase: 0 = regular, 1 = bursty.
    #[inline(always)]
    pub fn phase(&self) -> usize {
        self.engine.phase()
    }

    /// Restarts in `phase` (0 = regular, 1 = bursty).
    pub fn reset(&mut self, phase: usize) -> Result<(), KernelError> {
        self.engine.reset(phase)
    }

    /// One inter-arrival interval, mutating the phase.
    #[inline(always)]
    pub fn sample<G: UniformGenerator + ?Sized>(&mut self, g: &mut G) -> f64 {
        self.engine.sample(g)
    }
}

impl VariateSampler for Pmpp {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.engine.sample(g)
    }
}
