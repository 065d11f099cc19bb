use std::ops::Range;

use ndarray::Array1;

/// Run-length count vector over sorted codes.
///
/// Counts the occurrences of each distinct code, ordered by code value.
/// When `possible_values` is supplied, one synthetic occurrence of every
/// declared code is merged in before sorting and subtracted from each run
/// afterwards, so every declared code appears in the result with its real
/// count (possibly zero) even if never observed. O(n log n) in the number
/// of codes; no per-state branching.
pub fn run_length_counts(values: &[usize], possible_values: Option<Range<usize>>) -> Array1<usize> {
    let extra = possible_values.as_ref().map_or(0, |range| range.len());
    let mut merged: Vec<usize> = Vec::with_capacity(values.len() + extra);
    merged.extend_from_slice(values);
    let has_possible = possible_values.is_some();
    if let Some(range) = possible_values {
        merged.extend(range);
    }
    if merged.is_empty() {
        // zero-sample placeholder: a single run of length zero
        return Array1::from(vec![0]);
    }
    merged.sort_unstable();

    // run lengths between boundaries of distinct sorted values
    let mut counts: Vec<usize> = Vec::new();
    let mut run_start = 0;
    for i in 1..merged.len() {
        if merged[i] != merged[i - 1] {
            counts.push(i - run_start);
            run_start = i;
        }
    }
    counts.push(merged.len() - run_start);

    if has_possible {
        // remove the synthetic occurrence inserted for each declared code
        for count in counts.iter_mut() {
            *count -= 1;
        }
    }
    Array1::from(counts)
}
