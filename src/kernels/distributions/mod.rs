// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Distribution Sampling Kernels** - *Closed-Form Random Variate Generation*
//!
//! Samplers for the standard distribution families used as building blocks in
//! discrete-event simulation: uniform, exponential, normal, gamma/Erlang,
//! Weibull, Pareto and bounded Pareto, chi-squared, Student's t, plus the
//! degenerate and weighted-discrete distributions.
//!
//! ## Capability
//! Every sampler implements [`VariateSampler`]: `rand` draws one variate from
//! a caller-supplied [`UniformGenerator`]. Concrete samplers also expose a
//! generic monomorphised `sample` path so tight loops avoid dynamic dispatch;
//! any `&mut ConcreteEngine` unsizes to `&mut dyn UniformGenerator` without
//! heap allocation.
//!
//! ## Parameter validation
//! Constructors validate parameters eagerly and fail with
//! `KernelError::InvalidArguments` outside the mathematical domain (negative
//! scale, zero degrees of freedom, empty intervals). Parameters are immutable
//! afterwards, so sampling on a constructed object never fails.
//!
//! ## Determinism
//! Draw counts are part of the contract: inversion samplers consume one
//! uniform per variate, the Box-Muller normal consumes two (no cached spare),
//! Marsaglia-Tsang consumes a variable number. For a fixed seed and fixed
//! parameters, repeated construction plus sampling is bit-for-bit identical.

use std::f64::consts::PI;

use crate::kernels::generators::adaptor::unit_variate;
use crate::kernels::generators::UniformGenerator;

pub mod chi_squared;
pub mod degenerate;
pub mod discrete;
pub mod exponential;
pub mod gamma;
pub mod normal;
pub mod pareto;
pub mod student_t;
pub mod uniform;
pub mod weibull;

/// Polymorphic random-variate sampling capability.
///
/// `rand` takes `&mut self` because some samplers carry mutable state across
/// calls (the Markov arrival process mutates its current phase); the
/// closed-form samplers are stateless and simply ignore the exclusivity.
pub trait VariateSampler {
    /// Draws one variate, advancing the generator.
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64;

    /// Draws `n` variates along one continuous trajectory.
    ///
    /// Stateful samplers must not reset between draws, so correlation across
    /// samples is preserved.
    fn rand_n(&mut self, g: &mut dyn UniformGenerator, n: usize) -> Vec<f64> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.rand(g));
        }
        out
    }
}

/// Owning type-erased sampler handle.
///
/// Allows heterogeneous palettes of distribution models (selected at
/// configuration time) to live in one collection while dispatching to each
/// concrete `rand`. `AnyVariate` itself satisfies `VariateSampler`.
pub struct AnyVariate {
    inner: Box<dyn VariateSampler>,
}

impl AnyVariate {
    /// Erases a concrete sampler behind an owning handle.
    pub fn new<S: VariateSampler + 'static>(sampler: S) -> Self {
        Self {
            inner: Box::new(sampler),
        }
    }
}

impl VariateSampler for AnyVariate {
    #[inline(always)]
    fn rand(&mut self, g: &mut dyn UniformGenerator) -> f64 {
        self.inner.rand(g)
    }

    fn rand_n(&mut self, g: &mut dyn UniformGenerator, n: usize) -> Vec<f64> {
        self.inner.rand_n(g, n)
    }
}

// Box-Muller to get one N(0,1)
/// Generates a single sample from the standard normal distribution N(0,1).
#[inline]
pub fn standard_normal_variate<G: UniformGenerator + ?Sized>(g: &mut G) -> f64 {
    // U1 in (0,1], U2 in [0,1)
    let u1 = unit_variate(g).max(f64::MIN_POSITIVE); // avoid log(0)
    let u2 = unit_variate(g);
    let r = (-2.0 * u1.ln()).sqrt();
    r * (2.0 * PI * u2).cos()
}

/// Generates a single sample from the Gamma distribution using the
/// Marsaglia-Tsang algorithm. Preconditions: shape > 0, scale > 0
/// (validated by the calling constructor).
pub fn gamma_variate<G: UniformGenerator + ?Sized>(g: &mut G, shape: f64, scale: f64) -> f64 {
    debug_assert!(shape.is_finite() && shape > 0.0, "shape must be finite and > 0");
    debug_assert!(scale.is_finite() && scale > 0.0, "scale must be finite and > 0");

    // Handle 0 < shape < 1 by boosting to shape+1, then apply a power-law correction.
    if shape < 1.0 {
        let u = unit_variate(g);
        return gamma_variate(g, shape + 1.0, scale) * u.powf(1.0 / shape);
    }

    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();

    loop {
        let x = standard_normal_variate(g);
        let one_plus_cx = 1.0 + c * x;
        if one_plus_cx <= 0.0 {
            continue;
        }
        let v = one_plus_cx * one_plus_cx * one_plus_cx; // (1 + c x)^3
        let u = unit_variate(g);

        // Squeeze step
        if u < 1.0 - 0.0331 * (x * x) * (x * x) {
            return d * v * scale;
        }
        // Log acceptance step
        if u.ln() < 0.5 * x * x + d * (1.0 - v + v.ln()) {
            return d * v * scale;
        }
    }
}
