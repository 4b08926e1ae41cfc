// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Markovian arrival process engine.
//!
//! A continuous-time Markov chain whose transitions are split into hidden
//! (`D0`) and arrival-signaling (`D1`) kinds. Each `rand` call advances the
//! chain until the next arrival transition and returns the elapsed time,
//! leaving the phase mutated for the next call. Phase correlation across
//! successive intervals is the point of the model, so batch sampling never
//! resets the trajectory.

use crate::config::{GENERATOR_ROW_SUM_TOLERANCE, MIN_PHASE_EXIT_RATE};
use crate::errors::KernelError;
use crate::kernels::distributions::exponential::exponential_variate;
use crate::kernels::distributions::VariateSampler;
use crate::kernels::generators::adaptor::unit_variate;
use crate::kernels::generators::UniformGenerator;
use crate::utils::search_cumulative;

use super::matrix::SquareMatrix;

/// One competing transition out of a phase.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    next_phase: usize,
    arrival: bool,
}

/// Precomputed sampling table for one phase: total exit rate plus the
/// cumulative-rate table of its positive-rate transitions, hidden (D0)
/// entries first in column order, then arrival (D1) entries in column order.
#[derive(Debug, Clone, PartialEq)]
struct PhaseTable {
    exit_rate: f64,
    cumulative: Vec<f64>,
    transitions: Vec<Transition>,
}

/// Markovian arrival process over phase matrices `(D0, D1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkovArrivalProcess {
    tables: Vec<PhaseTable>,
    phase: usize,
    // false until the chain has been advanced to an arrival epoch, so the
    // first returned value is a full interval between two arrivals
    aligned: bool,
}

impl MarkovArrivalProcess {
    /// Builds the engine from hidden-transition matrix `d0` and
    /// arrival-transition matrix `d1`, starting in phase 0.
    ///
    /// Fails unless the matrices have equal positive dimension, all D0
    /// off-diagonals and all D1 entries are finite and non-negative, every
    /// phase has a positive exit rate `-D0[i][i]`, and every row of
    /// `Q = D0 + D1` sums to zero within [`GENERATOR_ROW_SUM_TOLERANCE`].
    pub fn new(d0: &SquareMatrix, d1: &SquareMatrix) -> Result<Self, KernelError> {
        let n = d0.dim();
        if n == 0 {
            return Err(KernelError::InvalidArguments(
                "MarkovArrivalProcess: matrices must be non-empty".into(),
            ));
        }
        if d1.dim() != n {
            return Err(KernelError::LengthMismatch(format!(
                "MarkovArrivalProcess: D0 is {n}x{n} but D1 is {m}x{m}",
                m = d1.dim()
            )));
        }

        let mut tables = Vec::with_capacity(n);
        for i in 0..n {
            let exit_rate = -d0.at(i, i);
            if !(exit_rate.is_finite() && exit_rate > MIN_PHASE_EXIT_RATE) {
                return Err(KernelError::InvalidArguments(format!(
                    "MarkovArrivalProcess: phase {i} exit rate {exit_rate} must be positive"
                )));
            }
            let residual = d0.row_sum(i) + d1.row_sum(i);
            if !(residual.is_finite() && residual.abs() <= GENERATOR_ROW_SUM_TOLERANCE) {
                return Err(KernelError::InvalidArguments(format!(
                    "MarkovArrivalProcess: row {i} of D0+D1 sums to {residual}, expected 0"
                )));
            }

            let mut cumulative = Vec::new();
            let mut transitions = Vec::new();
            let mut acc = 0.0;
            for k in 0..n {
                if k == i {
                    continue;
                }
                let rate = d0.at(i, k);
                if !(rate.is_finite() && rate >= 0.0) {
                    return Err(KernelError::InvalidArguments(format!(
                        "MarkovArrivalProcess: D0[{i}][{k}] = {rate} must be non-negative"
                    )));
                }
                if rate > 0.0 {
                    acc += rate;
                    cumulative.push(acc);
                    transitions.push(Transition {
                        next_phase: k,
                        arrival: false,
                    });
                }
            }
            for k in 0..n {
                let rate = d1.at(i, k);
                if !(rate.is_finite() && rate >= 0.0) {
                    return Err(KernelError::InvalidArguments(format!(
                        "MarkovArrivalProcess: D1[{i}][{k}] = {rate} must be non-negative"
                    )));
                }
                if rate > 0.0 {
                    acc += rate;
                    cumulative.push(acc);
                    transitions.push(Transition {
                        next_phase: k,
                        arrival: true,
                    });
                }
            }
            if transitions.is_empty() {
                return Err(KernelError::InvalidArguments(format!(
                    "MarkovArrivalProcess: phase {i} has no outgoing transitions"
                )));
            }

            tables.push(PhaseTable {
                exit_rate,
                cumulative,
                transitions,
            });
        }

        Ok(Self {
            tables,
            phase: 0,
            aligned: false,
        })
    }

    /// Number of phases.
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.tables.len()
    }

    /// Current phase of the underlying chain.
    #[inline(always)]
    pub fn phase(&self) -> usize {
        self.phase
    }

    /// Restarts the chain in `phase` and re-arms the arrival-epoch warm-up,
    /// as if the engine had been freshly constructed there.
    pub fn reset(&mut self, phase: usize) -> Result<(), KernelError> {
        if phase >= self.tables.len() {
            return Err(KernelError::OutOfBounds(format!(
                "MarkovArrivalProcess: phase {phase} out of range 0..{}",
                self.tables.len()
            )));
        }
        self.phase = phase;
        self.aligned = false;
        Ok(())
    }

    /// Advances the chain to its next arrival and returns the elapsed time.
    ///
    /// Two uniforms per chain step: one inversion draw for the sojourn, one
    /// scaled against the cumulative rate table for the competing-transition
    /// choice. Hidden transitions accumulate and loop; O(1) stack regardless
    /// of how many occur before the arrival.
    fn time_to_next_arrival<G: UniformGenerator + ?Sized>(&mut self, g: &mut G) -> f64 {
        let mut elapsed = 0.0;
        loop {
            let (tau, chosen) = {
                let table = &self.tables[self.phase];
                let tau = exponential_variate(g, table.exit_rate);
                let target = unit_variate(g) * table.exit_rate;
                let idx = search_cumulative(&table.cumulative, target);
                (tau, table.transitions[idx])
            };
            elapsed += tau;
            self.phase = chosen.next_phase;
            if chosen.arrival {
                return elapsed;
            }
        }
    }

    /// One inter-arrival interval, mutating the phase.
    ///
    /// The first call after construction or [`reset`](Self::reset) first
    /// advances the chain to an arrival epoch and discards that warm-up
    /// segment, so every returned value measures arrival-to-arrival time.
    pub fn sample<G: UniformGenerator + ?Sized>(&mut self, g: &mut G) -> f64 {
        if !self.aligned {
            let _ = self.time_to_next_arrival(g);
            self.aligned = true;
        }
        self.time_to_next_arrival(g)
    }
}

impl VariateSampler for MarkovArrivalProcess {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.sample(g)
    }
}
