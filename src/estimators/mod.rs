// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod decomposition;
pub mod entropy;

pub use entropy::{EntropyEstimate, EntropyMethod, naive_entropy};
