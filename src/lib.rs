// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infodecomp
//!
//! Information-theoretic decomposition of empirical samples of discrete (or
//! discretized) random variables: entropy, mutual information, and the
//! redundancy/unique/synergy partial information decomposition of Williams &
//! Beer, in the formulation of Timme et al. 2014.
//!
//! ## Quick Start
//!
//! ```rust
//! use infodecomp::containers::InfoContainer;
//! use infodecomp::estimators::decomposition;
//!
//! // Mutual information between two discrete variables
//! let a = InfoContainer::discrete(&[0, 0, 1, 1], None);
//! let b = InfoContainer::discrete(&[0, 1, 0, 1], None);
//! let mi = decomposition::mutual_info(&a, &b).unwrap();
//! assert!(mi.abs() < 1e-12);
//!
//! // XOR target: all of the sources' information is synergistic
//! let syn = decomposition::synergy(&[0, 1, 1, 0], &[0, 0, 1, 1], &[0, 1, 0, 1]).unwrap();
//! assert!((syn - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Architecture
//!
//! The library follows a strictly layered design:
//!
//! 1. **Containers** ([`containers`]): encoded distributions over canonical
//!    integer codes — binary, discrete, continuous-binned, joint, and
//!    conditional variants share one immutable container type.
//! 2. **Frequency counting** ([`containers::frequency`]): run-length count
//!    vectors over sorted codes, O(n log n) in the trial count.
//! 3. **Estimators** ([`estimators`]): naive plug-in entropy (memoized per
//!    container) and the pairwise decomposition measures composed from it.
//!
//! Joint and conditional distributions are themselves containers, so the
//! decomposition algorithms never special-case per variable type.
//!
//! ## Estimation scope
//!
//! Only the naive plug-in entropy estimator is implemented. The
//! bias-corrected (NSB) estimator is a deliberate open gap and fails with an
//! explicit error whenever selected, directly or through automatic method
//! selection. Entropy of a zero-trial container is the NaN "undefined"
//! sentinel and propagates arithmetically through every measure.

pub mod containers;
pub mod errors;
pub mod estimators;
