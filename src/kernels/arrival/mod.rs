// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Markovian Arrival Processes** - *Correlated Inter-Arrival Streams*
//!
//! Engines producing inter-arrival-time streams from a continuous-time
//! Markov chain: the general [`MarkovArrivalProcess`] over `(D0, D1)` phase
//! matrices, the Markov-modulated Poisson specialization [`Mmpp`], and the
//! bursty two-phase convenience parameterization [`Pmpp`]. The chain's
//! current phase is the only mutable state and persists across calls, so one
//! engine instance models one continuing stochastic process.

pub mod map;
pub mod matrix;
pub mod mmpp;
pub mod pmpp;

pub use map::MarkovArrivalProcess;
pub use matrix::SquareMatrix;
pub use mmpp::Mmpp;
pub use pmpp::Pmpp;
