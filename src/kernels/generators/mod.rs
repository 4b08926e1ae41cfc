// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Uniform Generator Kernels** - *Seedable Pseudorandom Engine Capability*
//!
//! The capability contract every pseudorandom engine in this crate satisfies,
//! plus the adaptors that bind concrete engines to it:
//!
//! - **`UniformGenerator`**: a seedable, deterministic integer stream with a
//!   fixed inclusive output range. Same seed, same sequence - the correctness
//!   requirement for reproducible simulation runs.
//! - **`engines`**: concrete engines (minstd_rand0 linear-congruential,
//!   MT19937 Mersenne Twister).
//! - **`adaptor`**: compile-time binding of `rand`-ecosystem engines, and
//!   range-transforming adaptors producing `[0,1)` reals, bounded integers
//!   and bounded reals.
//!
//! ## Concurrency
//! Generator state is owned exclusively by the calling thread. Instances are
//! not synchronised internally; sharing one across threads requires external
//! synchronisation.

pub mod adaptor;
pub mod engines;

/// Seedable uniform pseudorandom generator capability.
///
/// The contract mirrors the classic engine interface: `next` advances the
/// internal state and returns the next raw output, `min_value`/`max_value`
/// give the inclusive output range (stable for the engine's lifetime, with
/// `max_value > min_value`), and `reseed` deterministically restarts the
/// sequence. Given identical prior state, `next` is fully deterministic.
pub trait UniformGenerator {
    /// Advances the engine and returns the next raw output.
    fn next(&mut self) -> u64;

    /// Smallest value `next` can return (inclusive).
    fn min_value(&self) -> u64;

    /// Largest value `next` can return (inclusive).
    fn max_value(&self) -> u64;

    /// Deterministically restarts the sequence from `seed`.
    ///
    /// The same seed always reproduces the same sequence.
    fn reseed(&mut self, seed: u64);

    /// Advances the engine by `n` steps, discarding the outputs.
    ///
    /// Equivalent to calling `next` n times and dropping the results.
    fn discard(&mut self, n: u64) {
        for _ in 0..n {
            self.next();
        }
    }
}

// A mutable borrow of a generator is itself a generator, so samplers and
// adaptors can hold either an owned engine (wrapped copy) or a shared
// `&mut` borrow (wrapped reference) through the same API. With a shared
// borrow, advancing one consumer advances the underlying sequence for all.
impl<G: UniformGenerator + ?Sized> UniformGenerator for &mut G {
    #[inline(always)]
    fn next(&mut self) -> u64 {
        (**self).next()
    }

    #[inline(always)]
    fn min_value(&self) -> u64 {
        (**self).min_value()
    }

    #[inline(always)]
    fn max_value(&self) -> u64 {
        (**self).max_value()
    }

    #[inline(always)]
    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed)
    }

    #[inline(always)]
    fn discard(&mut self, n: u64) {
        (**self).discard(n)
    }
}

/// Owning type-erased generator handle.
///
/// Wraps any concrete engine behind a uniform polymorphic interface so
/// heterogeneous engines can be selected at configuration time and stored
/// in one collection. `AnyGenerator` itself satisfies `UniformGenerator`,
/// so erased and concrete engines are interchangeable at every call site.
pub struct AnyGenerator {
    inner: Box<dyn UniformGenerator>,
}

impl AnyGenerator {
    /// Erases a concrete engine behind an owning handle.
    pub fn new<G: UniformGenerator + 'static>(engine: G) -> Self {
        Self {
            inner: Box::new(engine),
        }
    }
}

impl UniformGenerator for AnyGenerator {
    #[inline(always)]
    fn next(&mut self) -> u64 {
        self.inner.next()
    }

    #[inline(always)]
    fn min_value(&self) -> u64 {
        self.inner.min_value()
    }

    #[inline(always)]
    fn max_value(&self) -> u64 {
        self.inner.max_value()
    }

    #[inline(always)]
    fn reseed(&mut self, seed: u64) {
        self.inner.reseed(seed)
    }

    #[inline(always)]
    fn discard(&mut self, n: u64) {
        self.inner.discard(n)
    }
}
