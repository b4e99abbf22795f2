//! Leaf statistics shared by the bin-edge resolver and the bin-count rules

use crate::error::{Error, Result};
use crate::numeric::Numeric;
use num_traits::{Float, NumCast, One, Zero};

/// Find the minimum and maximum in a single scan.
///
/// # Examples
///
/// ```rust
/// use binner_core::stats::min_max;
///
/// let data = [3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(min_max(&data).unwrap(), (1.0, 5.0));
/// ```
pub fn min_max<T: Numeric>(values: &[T]) -> Result<(T, T)> {
    let first = *values.first().ok_or(Error::EmptyInput("min_max"))?;
    let mut min = first;
    let mut max = first;
    for &v in &values[1..] {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    Ok((min, max))
}

/// Mean and sample standard deviation in one pass over the data.
///
/// Accumulates sum and sum-of-squares, then divides the centered square sum
/// by `n - 1` (by `1` when there is a single value, giving a deviation of 0).
///
/// # Examples
///
/// ```rust
/// use binner_core::stats::sample_stats;
///
/// let (mean, sd) = sample_stats::<f64>(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(mean, 3.0);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn sample_stats<T: Numeric>(values: &[T]) -> Result<(T::Float, T::Float)> {
    if values.is_empty() {
        return Err(Error::EmptyInput("sample_stats"));
    }
    let mut sum = T::Float::zero();
    let mut sum_sq = T::Float::zero();
    for &v in values {
        let f = v.to_float();
        sum += f;
        sum_sq += f * f;
    }
    let n = <T::Float as NumCast>::from(values.len()).unwrap();
    let denom = if values.len() > 1 {
        n - T::Float::one()
    } else {
        T::Float::one()
    };
    // Centered square sum can dip below zero from rounding on constant data
    let variance = ((sum_sq - sum * sum / n) / denom).max(T::Float::zero());
    Ok((sum / n, variance.sqrt()))
}

/// Sort values into a fresh floating-point vector, ascending.
pub fn sorted_copy<T: Numeric>(values: &[T]) -> Vec<T::Float> {
    let mut sorted: Vec<T::Float> = values.iter().map(|&v| v.to_float()).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Interquartile range by index arithmetic on the sorted data.
///
/// Quartiles are taken directly from sorted elements, never interpolated:
/// the sequence is split at its middle and each half is split again, with
/// `dist = (mid + 1) / 2` positions on either side of the center. Sequences
/// too short to reach both quartile positions (for example two values) fail
/// with [`Error::QuartileRange`] rather than extrapolating.
///
/// # Examples
///
/// ```rust
/// use binner_core::stats::iqrange;
///
/// let data = [3.0, 7.0, 1.0, 9.0, 5.0, 2.0, 8.0, 6.0, 4.0];
/// assert_eq!(iqrange(&data).unwrap(), 4.0);
/// ```
pub fn iqrange<T: Numeric>(values: &[T]) -> Result<T::Float> {
    if values.is_empty() {
        return Err(Error::EmptyInput("iqrange"));
    }
    let sorted = sorted_copy(values);
    let len = sorted.len() as isize;
    let (first, third) = if len % 2 == 0 {
        let hi = len / 2;
        let lo = hi - 1;
        let dist = (hi + 1) / 2;
        (lo - dist, hi + dist)
    } else {
        let mid = len / 2;
        let dist = (mid + 1) / 2;
        (mid - dist, mid + dist)
    };
    Ok(quartile_at(&sorted, third)? - quartile_at(&sorted, first)?)
}

fn quartile_at<F: Copy>(sorted: &[F], index: isize) -> Result<F> {
    if index < 0 || index as usize >= sorted.len() {
        return Err(Error::QuartileRange {
            index,
            len: sorted.len(),
        });
    }
    Ok(sorted[index as usize])
}
