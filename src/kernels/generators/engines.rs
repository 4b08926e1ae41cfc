// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Concrete Generator Engines** - *Reference Pseudorandom Recurrences*
//!
//! Two reference engines behind the `UniformGenerator` capability:
//!
//! - **`MinStd`**: the minstd_rand0 linear-congruential recurrence
//!   `x_{n+1} = 16807 * x_n mod (2^31 - 1)`. Fast, tiny state, and the
//!   classic reproducibility baseline for simulation regression tests.
//! - **`Mt19937`**: the 32-bit Mersenne Twister, delegated to the `rand_mt`
//!   crate. Seeding with 5489 reproduces the canonical default sequence
//!   (first output 3499211612).
//!
//! Neither engine is cryptographically secure.

use rand_mt::Mt;

use super::UniformGenerator;

/// Modulus of the minstd recurrence, the Mersenne prime 2^31 - 1.
const MINSTD_MODULUS: u64 = 2_147_483_647;

/// Multiplier of the minstd_rand0 recurrence.
const MINSTD_MULTIPLIER: u64 = 16_807;

/// minstd_rand0 linear-congruential engine.
///
/// Output range is `[1, 2^31 - 2]`. Seeds congruent to 0 modulo 2^31 - 1
/// would collapse the recurrence to all zeros, so they normalise to 1 -
/// the same rule the reference recurrence applies.
#[derive(Debug, Clone)]
pub struct MinStd {
    state: u64,
}

impl MinStd {
    /// Creates a minstd_rand0 engine seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: normalise_minstd_seed(seed),
        }
    }
}

#[inline(always)]
fn normalise_minstd_seed(seed: u64) -> u64 {
    let s = seed % MINSTD_MODULUS;
    if s == 0 { 1 } else { s }
}

impl UniformGenerator for MinStd {
    #[inline(always)]
    fn next(&mut self) -> u64 {
        // 16807 * (2^31 - 2) < 2^46, no overflow in u64
        self.state = (self.state * MINSTD_MULTIPLIER) % MINSTD_MODULUS;
        self.state
    }

    #[inline(always)]
    fn min_value(&self) -> u64 {
        1
    }

    #[inline(always)]
    fn max_value(&self) -> u64 {
        MINSTD_MODULUS - 1
    }

    fn reseed(&mut self, seed: u64) {
        self.state = normalise_minstd_seed(seed);
    }
}

/// 32-bit Mersenne Twister engine (MT19937).
///
/// Wraps `rand_mt::Mt`, whose seeding and tempering match the reference
/// algorithm bit for bit. Output range is `[0, 2^32 - 1]`. Reseeding takes
/// the low 32 bits of the provided seed.
#[derive(Debug, Clone)]
pub struct Mt19937 {
    engine: Mt,
}

impl Mt19937 {
    /// Canonical default seed of the reference MT19937 algorithm.
    pub const DEFAULT_SEED: u32 = 5489;

    /// Creates an MT19937 engine seeded with `seed`.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            engine: Mt::new(seed),
        }
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl UniformGenerator for Mt19937 {
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
        self.engine = Mt::new(seed as u32);
    }
}
