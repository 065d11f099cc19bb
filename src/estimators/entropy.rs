use ndarray::Array1;

use crate::errors::InfoError;

/// Tolerance for the normalization check of probability vectors.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-6;

/// Entropy estimation method.
///
/// `Naive` is the plug-in estimator; `Nsb` is the bias-corrected estimator,
/// which is a deliberate open gap and always fails with
/// [`InfoError::UnsupportedEstimator`]. `Auto` picks `Naive` when every
/// possible-state count exceeds 10 and otherwise delegates to `Nsb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntropyMethod {
    #[default]
    Naive,
    Nsb,
    Auto,
}

/// A bits-valued entropy estimate with its standard error.
///
/// The naive estimator carries no analytic error term, so its `std_err` is
/// always zero. A zero-trial container produces the undefined sentinel
/// (NaN value and error), which propagates arithmetically through every
/// downstream measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyEstimate {
    pub value: f64,
    pub std_err: f64,
}

impl EntropyEstimate {
    /// The sentinel for entropy of a zero-trial container.
    pub fn undefined() -> Self {
        Self {
            value: f64::NAN,
            std_err: f64::NAN,
        }
    }

    pub fn is_undefined(&self) -> bool {
        self.value.is_nan()
    }
}

/// Naive plug-in Shannon entropy of a normalized probability vector, in bits.
///
/// `H = -Σ p_i log2(p_i)` with the convention `0 * log2(0) = 0`. Fails with
/// [`InfoError::NotNormalized`] when the vector does not sum to 1 within
/// [`NORMALIZATION_TOLERANCE`].
pub fn naive_entropy(dist: &Array1<f64>) -> Result<f64, InfoError> {
    let sum = dist.sum();
    if (1.0 - sum).abs() > NORMALIZATION_TOLERANCE {
        return Err(InfoError::NotNormalized { sum });
    }
    let mut h = 0.0_f64;
    for &p in dist.iter() {
        if p > 0.0 {
            h -= p * p.log2();
        }
    }
    Ok(h)
}
