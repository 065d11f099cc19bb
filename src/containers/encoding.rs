use ndarray::{Array1, Array2};

use crate::errors::InfoError;

/// Big-endian binary-to-decimal conversion of each trial's bit row.
///
/// Input is a (trials x bits) matrix of 0/1 values; each row becomes one
/// state code in `[0, 2^bits)`. Any other value fails with
/// [`InfoError::InvalidEncoding`].
pub fn binary_to_decimal(bits: &Array2<i32>) -> Result<Array1<usize>, InfoError> {
    if bits.ncols() >= usize::BITS as usize {
        panic!("Binary words of {} or more bits do not fit the state code type.", usize::BITS);
    }
    let mut codes = Vec::with_capacity(bits.nrows());
    for row in bits.rows() {
        let mut code = 0usize;
        for &bit in row.iter() {
            match bit {
                0 => code <<= 1,
                1 => code = (code << 1) | 1,
                value => return Err(InfoError::InvalidEncoding { value }),
            }
        }
        codes.push(code);
    }
    Ok(Array1::from(codes))
}

/// Rank-encode arbitrary ordered labels.
///
/// Returns one code per trial (the rank of the trial's label among the
/// sorted distinct labels) together with the sorted distinct labels
/// themselves, so callers can map codes back to labels.
pub fn rank_encode<T: Ord + Clone>(data: &[T]) -> (Array1<usize>, Vec<T>) {
    let mut distinct: Vec<T> = data.to_vec();
    distinct.sort();
    distinct.dedup();
    let codes: Vec<usize> = data
        .iter()
        .map(|label| {
            distinct
                .binary_search(label)
                .expect("every label is present in its own distinct set")
        })
        .collect();
    (Array1::from(codes), distinct)
}

/// Partition `[min, max]` into `num_bins` equal-width bins and code each
/// value by its bin index.
///
/// Bins are left-closed/right-open except the last, which is closed at the
/// maximum so the maximal value lands in bin `num_bins - 1`.
pub fn bin_encode(data: &Array1<f64>, num_bins: usize) -> Array1<usize> {
    if num_bins < 1 {
        panic!("The number of bins must be a positive integer.");
    }
    let mn = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let mx = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let edges: Vec<f64> = (0..=num_bins)
        .map(|i| mn + (mx - mn) * (i as f64) / (num_bins as f64))
        .collect();
    data.mapv(|v| {
        // number of edges <= v; the maximum lands past the last edge and is
        // pulled back into the last bin
        let d = edges.partition_point(|&edge| edge <= v).min(num_bins);
        d - 1
    })
}
