// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Encoded distribution containers.
//!
//! Every variant (binary, discrete, continuous-binned, joint, conditional)
//! is represented by the same immutable [`InfoContainer`] carrying canonical
//! integer codes, so the estimation routines never special-case per variant.

pub mod encoding;
pub mod frequency;

use std::fmt;
use std::ops::Range;
use std::sync::OnceLock;

use ndarray::{Array1, Array2};

use crate::errors::InfoError;
use crate::estimators::entropy::{self, EntropyEstimate, EntropyMethod};

/// Which encoding produced a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Binary,
    Discrete,
    ContinuousBinned,
    Joint,
    Conditional,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerKind::Binary => "binary",
            ContainerKind::Discrete => "discrete",
            ContainerKind::ContinuousBinned => "continuous-binned",
            ContainerKind::Joint => "joint",
            ContainerKind::Conditional => "conditional",
        };
        f.write_str(name)
    }
}

/// An encoded empirical distribution.
///
/// Holds one canonical code per trial, the exclusive alphabet bound
/// `max_val`, and the derived frequency vector over realized (plus
/// declared-possible) codes. Immutable after construction; the entropy
/// estimate is memoized on first computation.
#[derive(Debug)]
pub struct InfoContainer {
    kind: ContainerKind,
    trial_values: Array1<usize>,
    max_val: usize,
    n_vec: Array1<usize>,
    cached_entropy: OnceLock<EntropyEstimate>,
}

impl InfoContainer {
    fn from_codes(
        kind: ContainerKind,
        trial_values: Array1<usize>,
        max_val: usize,
        possible_values: Option<Range<usize>>,
    ) -> Self {
        let codes = trial_values
            .as_slice()
            .expect("trial values should be contiguous");
        let n_vec = frequency::run_length_counts(codes, possible_values);
        Self {
            kind,
            trial_values,
            max_val,
            n_vec,
            cached_entropy: OnceLock::new(),
        }
    }

    fn empty(kind: ContainerKind) -> Self {
        Self::from_codes(kind, Array1::from(Vec::new()), 0, None)
    }

    /// Build a container from a (trials x bits) matrix of 0/1 values.
    ///
    /// Each trial's bit vector is converted big-endian to a decimal state
    /// code. `max_val` defaults to `2^bits`. A matrix without elements
    /// yields the empty container.
    pub fn binary(data: &Array2<i32>, max_val: Option<usize>) -> Result<Self, InfoError> {
        if data.is_empty() {
            return Ok(Self::empty(ContainerKind::Binary));
        }
        let codes = encoding::binary_to_decimal(data)?;
        let max_val = max_val.unwrap_or(1usize << data.ncols());
        Ok(Self::from_codes(ContainerKind::Binary, codes, max_val, None))
    }

    /// Build a container from a sequence of arbitrary ordered labels.
    ///
    /// Codes are the ranks of the distinct labels in sorted order;
    /// `max_val` defaults to the number of distinct labels observed.
    pub fn discrete<T: Ord + Clone>(data: &[T], max_val: Option<usize>) -> Self {
        Self::discrete_with_labels(data, max_val).0
    }

    /// Like [`InfoContainer::discrete`], additionally returning the sorted
    /// distinct labels so codes can be mapped back.
    pub fn discrete_with_labels<T: Ord + Clone>(
        data: &[T],
        max_val: Option<usize>,
    ) -> (Self, Vec<T>) {
        if data.is_empty() {
            return (Self::empty(ContainerKind::Discrete), Vec::new());
        }
        let (codes, labels) = encoding::rank_encode(data);
        let max_val = max_val.unwrap_or(labels.len());
        let container = Self::from_codes(ContainerKind::Discrete, codes, max_val, None);
        (container, labels)
    }

    /// Build a container from real-valued samples binned into `num_bins`
    /// equal-width bins spanning `[min, max]` of the data.
    pub fn continuous(data: &Array1<f64>, num_bins: usize) -> Self {
        if data.is_empty() {
            return Self::empty(ContainerKind::ContinuousBinned);
        }
        let codes = encoding::bin_encode(data, num_bins);
        Self::from_codes(ContainerKind::ContinuousBinned, codes, num_bins, None)
    }

    /// Build the joint distribution over two containers observed on the
    /// same trials.
    ///
    /// Per trial, `code = a.max_val * b_code + a_code`; downstream state
    /// indexing relies on exactly this encoding. Fails when the trial
    /// counts differ.
    pub fn joint(a: &InfoContainer, b: &InfoContainer) -> Result<Self, InfoError> {
        if a.num_trials() != b.num_trials() {
            return Err(InfoError::DimensionMismatch {
                left: a.num_trials(),
                right: b.num_trials(),
            });
        }
        let codes: Vec<usize> = a
            .trial_values
            .iter()
            .zip(b.trial_values.iter())
            .map(|(&code_a, &code_b)| a.max_val * code_b + code_a)
            .collect();
        Ok(Self::from_codes(
            ContainerKind::Joint,
            Array1::from(codes),
            a.max_val * b.max_val,
            None,
        ))
    }

    /// Build the conditional distribution over `x` given that `y` realized
    /// the state `state_y`.
    ///
    /// Keeps only the trials where `y`'s code equals `state_y`. The
    /// alphabet is unchanged (`max_val = x.max_val`), and the frequency
    /// vector is built over the full alphabet so unrealized states keep a
    /// zero entry at their absolute index.
    pub fn conditional(
        x: &InfoContainer,
        y: &InfoContainer,
        state_y: usize,
    ) -> Result<Self, InfoError> {
        if x.num_trials() != y.num_trials() {
            return Err(InfoError::DimensionMismatch {
                left: x.num_trials(),
                right: y.num_trials(),
            });
        }
        let codes: Vec<usize> = x
            .trial_values
            .iter()
            .zip(y.trial_values.iter())
            .filter(|&(_, &code_y)| code_y == state_y)
            .map(|(&code_x, _)| code_x)
            .collect();
        Ok(Self::from_codes(
            ContainerKind::Conditional,
            Array1::from(codes),
            x.max_val,
            Some(0..x.max_val),
        ))
    }

    /// Which encoding produced this container.
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Canonical code per trial.
    pub fn trial_values(&self) -> &Array1<usize> {
        &self.trial_values
    }

    /// Exclusive upper bound on codes (alphabet size).
    pub fn max_val(&self) -> usize {
        self.max_val
    }

    /// Number of trials.
    pub fn num_trials(&self) -> usize {
        self.trial_values.len()
    }

    /// Frequency vector over realized (plus declared-possible) codes,
    /// ordered by code value.
    pub fn n_vec(&self) -> &Array1<usize> {
        &self.n_vec
    }

    /// Frequency vector normalized to probabilities.
    pub fn probabilities(&self) -> Array1<f64> {
        let total = self.n_vec.sum() as f64;
        self.n_vec.mapv(|count| count as f64 / total)
    }

    /// Naive plug-in entropy estimate in bits, memoized per container.
    pub fn entropy(&self) -> Result<EntropyEstimate, InfoError> {
        self.entropy_with(EntropyMethod::Naive)
    }

    /// Entropy estimate with an explicit method choice.
    ///
    /// A zero-trial container yields [`EntropyEstimate::undefined`] (never
    /// cached) so that downstream measures propagate the NaN sentinel
    /// instead of failing. The first successful estimate is cached; the
    /// cache is keyed only by "has been computed", so a single container
    /// must not be queried with mixed methods.
    pub fn entropy_with(&self, method: EntropyMethod) -> Result<EntropyEstimate, InfoError> {
        if let Some(saved) = self.cached_entropy.get() {
            return Ok(*saved);
        }
        if self.num_trials() == 0 {
            return Ok(EntropyEstimate::undefined());
        }
        let method = match method {
            // threshold taken over from the original selection heuristic
            EntropyMethod::Auto => {
                if self.n_vec.iter().all(|&count| count > 10) {
                    EntropyMethod::Naive
                } else {
                    EntropyMethod::Nsb
                }
            }
            chosen => chosen,
        };
        match method {
            EntropyMethod::Naive => {
                let value = entropy::naive_entropy(&self.probabilities())?;
                let estimate = EntropyEstimate {
                    value,
                    std_err: 0.0,
                };
                let _ = self.cached_entropy.set(estimate);
                Ok(estimate)
            }
            EntropyMethod::Nsb => Err(InfoError::UnsupportedEstimator),
            EntropyMethod::Auto => unreachable!("auto resolves to a concrete method above"),
        }
    }
}
