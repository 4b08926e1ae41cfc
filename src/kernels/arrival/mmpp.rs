// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Markov-modulated Poisson process.
//!
//! A MAP whose arrival matrix is diagonal: arrivals never change phase, they
//! only tick at the current phase's Poisson rate, while hidden transitions of
//! the modulating chain switch the rate. Construction translates the
//! `(rates, q)` parameterization into `D1 = diag(rates)`, `D0 = Q - diag(rates)`
//! and delegates sampling to [`MarkovArrivalProcess`], so an MMPP and its
//! equivalent MAP consume identical draws and produce identical intervals.

use crate::errors::KernelError;
use crate::kernels::distributions::VariateSampler;
use crate::kernels::generators::UniformGenerator;

use super::map::MarkovArrivalProcess;
use super::matrix::SquareMatrix;

/// Markov-modulated Poisson process over per-phase arrival `rates` and a
/// modulating generator matrix `q`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mmpp {
    engine: MarkovArrivalProcess,
}

impl Mmpp {
    /// Builds the process, starting in phase 0.
    ///
    /// Fails unless `rates` matches the dimension of `q`, every rate is
    /// finite and non-negative with at least one positive, and the derived
    /// `(D0, D1)` pair passes the arrival-process validation (generator row
    /// sums, positive exit rates).
    pub fn new(rates: &[f64], q: &SquareMatrix) -> Result<Self, KernelError> {
        if rates.len() != q.dim() {
            return Err(KernelError::LengthMismatch(format!(
                "Mmpp: {} rates for a {}-phase modulating chain",
                rates.len(),
                q.dim()
            )));
        }
        if rates.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(KernelError::InvalidArguments(
                "Mmpp: arrival rates must be finite and non-negative".into(),
            ));
        }
        if !rates.iter().any(|r| *r > 0.0) {
            return Err(KernelError::InvalidArguments(
                "Mmpp: at least one arrival rate must be positive".into(),
            ));
        }
        let d1 = SquareMatrix::diag(rates);
        let d0 = q.sub(&d1)?;
        Ok(Self {
            engine: MarkovArrivalProcess::new(&d0, &d1)?,
        })
    }

    /// Number of phases.
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.engine.dim()
    }

    /// Current phase of the modulating chain.
    #[inline(always)]
    pub fn phase(&self) -> usize {
        self.engine.phase()
    }

    /// Restarts the modulating chain in `phase`.
    pub fn reset(&mut self, phase: usize) -> Result<(), KernelError> {
        self.engine.reset(phase)
    }

    /// One inter-arrival interval, mutating the phase.
    #[inline(always)]
    pub fn sample<G: UniformGenerator + ?Sized>(&mut self, g: &mut G) -> f64 {
        self.engine.sample(g)
    }
}

impl VariateSampler for Mmpp {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.engine.sample(g)
    }
}
