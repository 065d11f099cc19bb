// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

use crate::containers::ContainerKind;

/// Errors raised by container construction and the estimation routines.
///
/// Every variant is terminal for the offending call; nothing is retried or
/// silently downgraded. An empty container is not an error: its entropy is
/// the NaN sentinel of [`crate::estimators::entropy::EntropyEstimate::undefined`]
/// and propagates arithmetically through every downstream measure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InfoError {
    /// Probability vector fed to the entropy estimator does not sum to 1
    /// within tolerance.
    #[error("distribution is not normalized (sums to {sum})")]
    NotNormalized { sum: f64 },

    /// Bias-corrected (NSB) entropy estimation was requested, or implied by
    /// automatic selection with too few samples per possible state.
    #[error("NSB entropy estimates are not yet implemented")]
    UnsupportedEstimator,

    /// Two inputs that must be aligned trial-by-trial have different lengths.
    #[error("inputs must have equal numbers of trials ({left} vs {right})")]
    DimensionMismatch { left: usize, right: usize },

    /// Binary input contains a value outside {0, 1}.
    #[error("binary data is not in a recognized binary format (found {value})")]
    InvalidEncoding { value: i32 },

    /// A state index addressed a code outside the container's alphabet.
    #[error("state index {state} is outside the alphabet of size {max_val}")]
    StateOutOfRange { state: usize, max_val: usize },

    /// A decomposition measure was applied to a container it does not
    /// support (only discrete containers spanning their full alphabet are
    /// accepted).
    #[error("decomposition requires discrete containers, found {found} container")]
    UnsupportedContainer { found: ContainerKind },
}
