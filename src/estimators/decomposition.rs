//! Pairwise partial information decomposition after Williams & Beer,
//! following the formulation of Timme et al. 2014.
//!
//! Container-level measures (`*_of`) operate on prebuilt
//! [`InfoContainer`]s; the slice-level counterparts build discrete
//! containers internally. Undefined entropies (empty containers)
//! propagate as NaN through every measure instead of failing.

use crate::containers::{ContainerKind, InfoContainer};
use crate::errors::InfoError;
use crate::estimators::entropy::EntropyMethod;

fn check_equal_lengths(left: usize, right: usize) -> Result<(), InfoError> {
    if left != right {
        return Err(InfoError::DimensionMismatch { left, right });
    }
    Ok(())
}

/// Specific information and redundancy index frequency vectors by absolute
/// state, so only discrete containers whose frequency vector spans the full
/// alphabet are accepted. Empty discrete containers pass and are handled by
/// NaN propagation.
fn require_discrete(container: &InfoContainer) -> Result<(), InfoError> {
    if container.kind() != ContainerKind::Discrete {
        return Err(InfoError::UnsupportedContainer {
            found: container.kind(),
        });
    }
    if container.num_trials() > 0 && container.n_vec().len() != container.max_val() {
        return Err(InfoError::UnsupportedContainer {
            found: container.kind(),
        });
    }
    Ok(())
}

/// Mutual information `I(A;B) = H(A) + H(B) - H(A,B)` in bits, using the
/// naive entropy estimator.
pub fn mutual_info(a: &InfoContainer, b: &InfoContainer) -> Result<f64, InfoError> {
    mutual_info_with(a, b, EntropyMethod::Naive)
}

/// Mutual information with an explicit entropy method choice.
pub fn mutual_info_with(
    a: &InfoContainer,
    b: &InfoContainer,
    method: EntropyMethod,
) -> Result<f64, InfoError> {
    let (mi, _stds) = mutual_info_with_stds(a, b, method)?;
    Ok(mi)
}

/// Mutual information together with the standard errors of the three
/// component entropies (always zero under the naive estimator).
pub fn mutual_info_with_stds(
    a: &InfoContainer,
    b: &InfoContainer,
    method: EntropyMethod,
) -> Result<(f64, (f64, f64, f64)), InfoError> {
    let both = InfoContainer::joint(a, b)?;
    let s1 = a.entropy_with(method)?;
    let s2 = b.entropy_with(method)?;
    let s12 = both.entropy_with(method)?;
    let mi = s1.value + s2.value - s12.value;
    Ok((mi, (s1.std_err, s2.std_err, s12.std_err)))
}

/// Mutual information between two sequences of discrete labels sampled
/// simultaneously, with optional alphabet-size overrides.
pub fn discrete_mutual_info<T: Ord + Clone>(
    data1: &[T],
    data2: &[T],
    max_val1: Option<usize>,
    max_val2: Option<usize>,
) -> Result<f64, InfoError> {
    check_equal_lengths(data1.len(), data2.len())?;
    let info1 = InfoContainer::discrete(data1, max_val1);
    let info2 = InfoContainer::discrete(data2, max_val2);
    mutual_info(&info1, &info2)
}

/// Mutual information between the first variable and the joint distribution
/// of the last two, `I(X1; X2,X3)`, from three simultaneous label sequences.
pub fn discrete_joint_info<T: Ord + Clone>(
    data1: &[T],
    data2: &[T],
    data3: &[T],
    max_val1: Option<usize>,
    max_val2: Option<usize>,
    max_val3: Option<usize>,
) -> Result<f64, InfoError> {
    check_equal_lengths(data1.len(), data2.len())?;
    check_equal_lengths(data1.len(), data3.len())?;
    let info1 = InfoContainer::discrete(data1, max_val1);
    let info2 = InfoContainer::discrete(data2, max_val2);
    let info3 = InfoContainer::discrete(data3, max_val3);
    let joint23 = InfoContainer::joint(&info2, &info3)?;
    mutual_info(&info1, &joint23)
}

/// State-specific information that knowing `x` provides about the state
/// `state_y` of `y`, Timme et al. 2014 eq. (29):
///
/// `Σ_x p(x|stateY) * ( -log2 p(stateY) + log2 p(stateY|x) )`
///
/// Computed from naive frequency ratios of conditional containers;
/// zero-probability terms contribute 0. A `state_y` outside `y`'s alphabet
/// fails with [`InfoError::StateOutOfRange`].
pub fn specific_info(
    y: &InfoContainer,
    x: &InfoContainer,
    state_y: usize,
) -> Result<f64, InfoError> {
    require_discrete(y)?;
    require_discrete(x)?;
    if y.num_trials() == 0 || x.num_trials() == 0 {
        return Ok(f64::NAN);
    }
    if state_y >= y.max_val() {
        return Err(InfoError::StateOutOfRange {
            state: state_y,
            max_val: y.max_val(),
        });
    }
    let p_state_y = y.probabilities()[state_y];

    // p(x | stateY), indexed by absolute X state; all-NaN when stateY was
    // never realized, in which case every term below is skipped
    let x_given_state_y = InfoContainer::conditional(x, y, state_y)?;
    let p_x_given_state_y = x_given_state_y.probabilities();

    let mut si = 0.0_f64;
    for state_x in 0..x.max_val() {
        let p_here = p_x_given_state_y[state_x];
        if !(p_here > 0.0) {
            continue;
        }
        let y_given_state_x = InfoContainer::conditional(y, x, state_x)?;
        let p_state_y_given_x = y_given_state_x.probabilities()[state_y];
        if !(p_state_y_given_x > 0.0) {
            continue;
        }
        si += p_here * (p_state_y_given_x.log2() - p_state_y.log2());
    }
    Ok(si)
}

/// Redundant information both sources provide about the target, Timme et
/// al. 2014 eq. (31): the minimum specific information, averaged over the
/// target's states.
pub fn redundancy_of(
    y: &InfoContainer,
    x1: &InfoContainer,
    x2: &InfoContainer,
) -> Result<f64, InfoError> {
    require_discrete(y)?;
    require_discrete(x1)?;
    require_discrete(x2)?;
    if y.num_trials() == 0 || x1.num_trials() == 0 || x2.num_trials() == 0 {
        return Ok(f64::NAN);
    }
    let p_y = y.probabilities();
    let mut i_min = 0.0_f64;
    for state_y in 0..y.max_val() {
        let si1 = specific_info(y, x1, state_y)?;
        let si2 = specific_info(y, x2, state_y)?;
        i_min += p_y[state_y] * si1.min(si2);
    }
    Ok(i_min)
}

/// Redundant information from three simultaneous label sequences.
pub fn redundancy<T: Ord + Clone>(
    data_y: &[T],
    data_x1: &[T],
    data_x2: &[T],
) -> Result<f64, InfoError> {
    check_equal_lengths(data_y.len(), data_x1.len())?;
    check_equal_lengths(data_y.len(), data_x2.len())?;
    let y = InfoContainer::discrete(data_y, None);
    let x1 = InfoContainer::discrete(data_x1, None);
    let x2 = InfoContainer::discrete(data_x2, None);
    redundancy_of(&y, &x1, &x2)
}

/// Unique information each source provides about the target beyond the
/// other, Timme et al. 2014 eqs. (33)-(34): `(I(Y;X1) - R, I(Y;X2) - R)`.
pub fn unique_of(
    y: &InfoContainer,
    x1: &InfoContainer,
    x2: &InfoContainer,
) -> Result<(f64, f64), InfoError> {
    let r = redundancy_of(y, x1, x2)?;
    let u1 = mutual_info(y, x1)? - r;
    let u2 = mutual_info(y, x2)? - r;
    Ok((u1, u2))
}

/// Unique information from three simultaneous label sequences.
pub fn unique<T: Ord + Clone>(
    data_y: &[T],
    data_x1: &[T],
    data_x2: &[T],
) -> Result<(f64, f64), InfoError> {
    check_equal_lengths(data_y.len(), data_x1.len())?;
    check_equal_lengths(data_y.len(), data_x2.len())?;
    let y = InfoContainer::discrete(data_y, None);
    let x1 = InfoContainer::discrete(data_x1, None);
    let x2 = InfoContainer::discrete(data_x2, None);
    unique_of(&y, &x1, &x2)
}

/// Synergistic information available only from the joint observation of
/// both sources, Timme et al. 2014 eq. (32):
/// `I(Y;X1,X2) - I(Y;X1) - I(Y;X2) + R`.
pub fn synergy_of(
    y: &InfoContainer,
    x1: &InfoContainer,
    x2: &InfoContainer,
) -> Result<f64, InfoError> {
    let sources = InfoContainer::joint(x1, x2)?;
    let joint_mi = mutual_info(y, &sources)?;
    let mi1 = mutual_info(y, x1)?;
    let mi2 = mutual_info(y, x2)?;
    let r = redundancy_of(y, x1, x2)?;
    Ok(joint_mi - mi1 - mi2 + r)
}

/// Synergistic information from three simultaneous label sequences.
pub fn synergy<T: Ord + Clone>(
    data_y: &[T],
    data_x1: &[T],
    data_x2: &[T],
) -> Result<f64, InfoError> {
    check_equal_lengths(data_y.len(), data_x1.len())?;
    check_equal_lengths(data_y.len(), data_x2.len())?;
    let y = InfoContainer::discrete(data_y, None);
    let x1 = InfoContainer::discrete(data_x1, None);
    let x2 = InfoContainer::discrete(data_x2, None);
    synergy_of(&y, &x1, &x2)
}
