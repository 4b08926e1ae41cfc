// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Generator Adaptors** - *Range Transformation and Ecosystem Binding*
//!
//! Adaptors that reshape a raw `UniformGenerator` stream:
//!
//! - **`EngineAdaptor`**: compile-time binding of any `rand`-ecosystem engine
//!   (`RngCore + SeedableRng`) to the `UniformGenerator` capability.
//! - **`unit_variate` / `UnitUniform`**: rescale raw output into `[0,1)`.
//! - **`BoundedIntUniform` / `BoundedRealUniform`**: rescale the `[0,1)`
//!   stream into a closed integer interval `[lo,hi]` or half-open real
//!   interval `[lo,hi)`.
//!
//! The bounded adaptors use direct linear rescaling rather than rejection
//! sampling. For ranges that do not evenly divide the engine's period this
//! introduces slight non-uniformity; the behaviour is kept verbatim because
//! downstream statistical code depends on the exact sequences it produces.

use rand::{RngCore, SeedableRng};

use super::UniformGenerator;
use crate::errors::KernelError;

/// Binds a `rand`-ecosystem engine to the `UniformGenerator` capability.
///
/// Raw output is the engine's 32-bit stream, so the adapted range is
/// `[0, 2^32 - 1]`. Reseeding goes through `SeedableRng::seed_from_u64`,
/// which is deterministic per engine type but need not match the engine's
/// native seeding convention.
#[derive(Debug, Clone)]
pub struct EngineAdaptor<R> {
    engine: R,
}

impl<R: RngCore + SeedableRng> EngineAdaptor<R> {
    /// Wraps an already-constructed engine.
    pub fn new(engine: R) -> Self {
        Self { engine }
    }

    /// Constructs the engine from a 64-bit seed and wraps it.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            engine: R::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore + SeedableRng> UniformGenerator for EngineAdaptor<R> {
    #[inline(always)]
    fn next(&mut self) -> u64 {
        u64::from(self.engine.next_u32())
    }

    #[inline(always)]
    fn min_value(&self) -> u64 {
        0
    }

    #[inline(always)]
    fn max_value(&self) -> u64 {
        u64::from(u32::MAX)
    }

    fn reseed(&mut self, seed: u64) {
        self.engine = R::seed_from_u64(seed);
    }
}

/// Draws one `[0,1)` variate by linear rescaling of the raw output range.
///
/// The mapping is `(raw - min) / (max - min + 1)`, with the span computed in
/// f64 so a full 64-bit range cannot overflow. The `+ 1` keeps the upper
/// bound strictly open: the result is never negative and never reaches 1.0.
///
/// # Panics
/// A degenerate output range (`max == min`) is a precondition violation of
/// the `UniformGenerator` contract and aborts rather than returning an error.
#[inline(always)]
pub fn unit_variate<G: UniformGenerator + ?Sized>(g: &mut G) -> f64 {
    let lo = g.min_value();
    let hi = g.max_value();
    assert!(
        hi > lo,
        "unit_variate: generator output range must be non-degenerate"
    );
    let span = (hi - lo) as f64 + 1.0;
    (g.next() - lo) as f64 / span
}

/// Adaptor producing doubles in `[0,1)` from a wrapped generator.
///
/// Holds the generator by value: pass an owned engine for an independent
/// copy, or a `&mut` borrow to share one underlying sequence with other
/// consumers.
#[derive(Debug, Clone)]
pub struct UnitUniform<G> {
    inner: G,
}

impl<G: UniformGenerator> UnitUniform<G> {
    /// Wraps a generator (owned copy or `&mut` borrow).
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    /// Draws the next `[0,1)` variate.
    #[inline(always)]
    pub fn next(&mut self) -> f64 {
        unit_variate(&mut self.inner)
    }

    /// Releases the wrapped generator.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

/// Adaptor producing integers uniformly in the closed interval `[lo, hi]`.
///
/// Rescales the `[0,1)` stream as `lo + floor(u * (hi - lo + 1))`. Linear
/// rescaling bias for spans that do not divide the engine period is accepted
/// (see module docs).
#[derive(Debug, Clone)]
pub struct BoundedIntUniform<G> {
    inner: G,
    lo: i64,
    hi: i64,
}

impl<G: UniformGenerator> BoundedIntUniform<G> {
    /// Wraps a generator with target interval `[lo, hi]`.
    ///
    /// Fails with `InvalidArguments` when `lo > hi`.
    pub fn new(inner: G, lo: i64, hi: i64) -> Result<Self, KernelError> {
        if lo > hi {
            return Err(KernelError::InvalidArguments(format!(
                "BoundedIntUniform: lo ({}) must not exceed hi ({})",
                lo, hi
            )));
        }
        Ok(Self { inner, lo, hi })
    }

    /// Draws the next integer in `[lo, hi]`.
    #[inline]
    pub fn next(&mut self) -> i64 {
        let u = unit_variate(&mut self.inner);
        let span = (self.hi as i128 - self.lo as i128 + 1) as f64;
        let offset = (u * span) as i128;
        let value = self.lo as i128 + offset;
        // u < 1 keeps offset below span; min() guards the rounding edge
        value.min(self.hi as i128) as i64
    }

    /// Releases the wrapped generator.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

/// Adaptor producing reals uniformly in the half-open interval `[lo, hi)`.
#[derive(Debug, Clone)]
pub struct BoundedRealUniform<G> {
    inner: G,
    lo: f64,
    hi: f64,
}

impl<G: UniformGenerator> BoundedRealUniform<G> {
    /// Wraps a generator with target interval `[lo, hi)`.
    ///
    /// Fails with `InvalidArguments` unless `lo < hi` and both are finite.
    pub fn new(inner: G, lo: f64, hi: f64) -> Result<Self, KernelError> {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(KernelError::InvalidArguments(format!(
                "BoundedRealUniform: interval [{}, {}) must be finite and non-empty",
                lo, hi
            )));
        }
        Ok(Self { inner, lo, hi })
    }

    /// Draws the next real in `[lo, hi)`.
    #[inline]
    pub fn next(&mut self) -> f64 {
        let u = unit_variate(&mut self.inner);
        let x = self.lo + u * (self.hi - self.lo);
        // rounding can land exactly on hi when lo dominates the span
        if x < self.hi { x } else { self.hi.next_down() }
    }

    /// Releases the wrapped generator.
    pub fn into_inner(self) -> G {
        self.inner
    }
}
