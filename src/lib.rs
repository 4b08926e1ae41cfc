// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

pub mod kernels {
    pub mod order;
    pub mod arrival;
    pub mod distributions;
    pub mod generators;
}

pub mod config;

pub mod errors;

pub mod utils;
