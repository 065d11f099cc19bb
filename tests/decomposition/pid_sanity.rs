// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::array;

use infodecomp::containers::InfoContainer;
use infodecomp::errors::InfoError;
use infodecomp::estimators::decomposition::{
    discrete_joint_info, discrete_mutual_info, redundancy, redundancy_of, specific_info, synergy,
    unique,
};

// Import test helper functions
use crate::test_helpers::generate_random_labels;

#[test]
fn specific_info_of_copied_source_equals_surprisal() {
    // Y == X1 exactly: knowing X1 resolves each Y state completely,
    // so the specific information is -log2 p(stateY) = 1 bit
    let y = InfoContainer::discrete(&[0, 0, 1, 1], None);
    let x1 = InfoContainer::discrete(&[0, 0, 1, 1], None);
    assert_abs_diff_eq!(specific_info(&y, &x1, 0).unwrap(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(specific_info(&y, &x1, 1).unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn specific_info_of_independent_source_is_zero() {
    let y = InfoContainer::discrete(&[0, 0, 1, 1], None);
    let x2 = InfoContainer::discrete(&[0, 1, 0, 1], None);
    assert_abs_diff_eq!(specific_info(&y, &x2, 0).unwrap(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(specific_info(&y, &x2, 1).unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn copied_source_and_independent_source() {
    // Y == X1 exactly, X2 independent of Y: everything X1 knows is unique
    // to X1 (the independent source contributes no specific information,
    // so the minimum is zero for every target state)
    let data_y = vec![0, 0, 1, 1];
    let data_x1 = vec![0, 0, 1, 1];
    let data_x2 = vec![0, 1, 0, 1];

    let r = redundancy(&data_y, &data_x1, &data_x2).unwrap();
    assert_abs_diff_eq!(r, 0.0, epsilon = 1e-12);

    let (u1, u2) = unique(&data_y, &data_x1, &data_x2).unwrap();
    assert_abs_diff_eq!(u1, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(u2, 0.0, epsilon = 1e-12);

    let s = synergy(&data_y, &data_x1, &data_x2).unwrap();
    assert_abs_diff_eq!(s, 0.0, epsilon = 1e-12);
}

#[test]
fn two_copied_sources_are_fully_redundant() {
    // X1 == X2 == Y: both sources carry the same 1 bit, all of it redundant
    let data_y = vec![0, 0, 1, 1];

    let r = redundancy(&data_y, &data_y, &data_y).unwrap();
    let h_y = InfoContainer::discrete(&data_y, None).entropy().unwrap().value;
    assert_abs_diff_eq!(r, h_y, epsilon = 1e-12);
    assert_abs_diff_eq!(r, 1.0, epsilon = 1e-12);

    let (u1, u2) = unique(&data_y, &data_y, &data_y).unwrap();
    assert_abs_diff_eq!(u1, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(u2, 0.0, epsilon = 1e-12);

    let s = synergy(&data_y, &data_y, &data_y).unwrap();
    assert_abs_diff_eq!(s, 0.0, epsilon = 1e-12);
}

#[test]
fn xor_target_is_purely_synergistic() {
    let data_x1 = vec![0, 0, 1, 1];
    let data_x2 = vec![0, 1, 0, 1];
    let data_y = vec![0, 1, 1, 0]; // X1 XOR X2

    assert_abs_diff_eq!(
        discrete_mutual_info(&data_y, &data_x1, None, None).unwrap(),
        0.0,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        discrete_mutual_info(&data_y, &data_x2, None, None).unwrap(),
        0.0,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(redundancy(&data_y, &data_x1, &data_x2).unwrap(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(synergy(&data_y, &data_x1, &data_x2).unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn four_terms_sum_to_joint_mutual_information() {
    // U1 + U2 + R + S == I(Y; X1,X2), exactly, for arbitrary samples
    let data_y = generate_random_labels(200, 3, 11);
    let data_x1 = generate_random_labels(200, 3, 12);
    let data_x2 = generate_random_labels(200, 2, 13);

    let r = redundancy(&data_y, &data_x1, &data_x2).unwrap();
    let (u1, u2) = unique(&data_y, &data_x1, &data_x2).unwrap();
    let s = synergy(&data_y, &data_x1, &data_x2).unwrap();
    let joint_mi =
        discrete_joint_info(&data_y, &data_x1, &data_x2, None, None, None).unwrap();

    assert_abs_diff_eq!(u1 + u2 + r + s, joint_mi, epsilon = 1e-10);
}

#[test]
fn triple_measures_require_equal_lengths() {
    let err = redundancy(&[0, 1, 0], &[0, 1], &[0, 1, 0]).unwrap_err();
    assert_eq!(err, InfoError::DimensionMismatch { left: 3, right: 2 });
    let err = unique(&[0, 1], &[0, 1], &[0, 1, 1]).unwrap_err();
    assert_eq!(err, InfoError::DimensionMismatch { left: 2, right: 3 });
    let err = synergy(&[0, 1, 0], &[0, 1, 1], &[0]).unwrap_err();
    assert_eq!(err, InfoError::DimensionMismatch { left: 3, right: 1 });
}

#[test]
fn decomposition_rejects_non_discrete_containers() {
    let y = InfoContainer::discrete(&[0, 0, 1, 1], None);
    let x1 = InfoContainer::discrete(&[0, 1, 0, 1], None);
    let binned = InfoContainer::continuous(&array![0.1, 0.9, 0.2, 0.8], 2);
    let err = redundancy_of(&y, &x1, &binned).unwrap_err();
    assert!(matches!(err, InfoError::UnsupportedContainer { .. }));

    let bits = InfoContainer::binary(&array![[0], [1], [0], [1]], None).unwrap();
    let err = specific_info(&y, &bits, 0).unwrap_err();
    assert!(matches!(err, InfoError::UnsupportedContainer { .. }));
}

#[test]
fn specific_info_rejects_out_of_range_state() {
    let y = InfoContainer::discrete(&[0, 0, 1, 1], None);
    let x = InfoContainer::discrete(&[0, 1, 0, 1], None);
    let err = specific_info(&y, &x, 2).unwrap_err();
    assert_eq!(err, InfoError::StateOutOfRange { state: 2, max_val: 2 });
}

#[test]
fn empty_inputs_propagate_undefined_redundancy() {
    let empty: Vec<i32> = Vec::new();
    assert!(redundancy(&empty, &empty, &empty).unwrap().is_nan());
}
