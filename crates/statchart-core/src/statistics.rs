//! Numeric primitives over sequences of samples.
//!
//! Every function borrows its input and never reorders it; when sorting is
//! requested a private working copy is made and dropped on return.

use crate::error::StatsError;
use crate::regression::LinearFit;
use crate::sample::{is_missing, required, sorted_copy, MissingPolicy, Sample};

/// Arithmetic mean of `values` under the given missing-value policy.
///
/// An empty slice, or a slice whose values are all skipped, yields `NaN`.
pub fn calculate_mean<T: Sample>(values: &[T], policy: MissingPolicy) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for sample in values {
        if is_missing(sample) {
            match policy {
                MissingPolicy::Propagate => return f64::NAN,
                MissingPolicy::Skip => {}
                MissingPolicy::TreatAsZero => count += 1,
            }
        } else if let Some(v) = sample.value() {
            total += v;
            count += 1;
        }
    }
    total / count as f64
}

/// Median of `values`.
///
/// With `copy_and_sort` the median is taken over a sorted copy; otherwise
/// the slice must already be ascending. An empty slice yields `NaN`.
pub fn calculate_median<T: Sample>(values: &[T], copy_and_sort: bool) -> Result<f64, StatsError> {
    match values.len() {
        0 => Ok(f64::NAN),
        len => calculate_median_range(values, 0, len - 1, copy_and_sort),
    }
}

/// Median of the inclusive sub-range `values[start..=end]`.
///
/// With `copy_and_sort` only the sub-range is copied and sorted. A range
/// with `end < start` is empty and yields `NaN`.
pub fn calculate_median_range<T: Sample>(
    values: &[T],
    start: usize,
    end: usize,
    copy_and_sort: bool,
) -> Result<f64, StatsError> {
    if end < start {
        return Ok(f64::NAN);
    }
    if end >= values.len() {
        return Err(StatsError::IndexOutOfRange {
            index: end,
            len: values.len(),
        });
    }
    if copy_and_sort {
        let working = sorted_copy(values, start, end)?;
        return median_of_sorted(&working, 0, working.len() - 1);
    }
    median_of_sorted(values, start, end)
}

// Caller guarantees start <= end < values.len().
fn median_of_sorted<T: Sample>(values: &[T], start: usize, end: usize) -> Result<f64, StatsError> {
    let count = end - start + 1;
    let middle = start + count / 2;
    if count % 2 == 1 {
        required(values, middle)
    } else {
        let lower = required(values, middle - 1)?;
        let upper = required(values, middle)?;
        Ok((lower + upper) / 2.0)
    }
}

/// Sample standard deviation (Bessel's correction, `n - 1` divisor).
///
/// A single value yields `NaN`.
pub fn std_dev<T: Sample>(values: &[T]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput { name: "data" });
    }
    let mean = calculate_mean(values, MissingPolicy::Propagate);
    let mut sum = 0.0;
    for index in 0..values.len() {
        let diff = required(values, index)? - mean;
        sum += diff * diff;
    }
    Ok((sum / (values.len() - 1) as f64).sqrt())
}

/// Least-squares line through the points `(xs[i], ys[i])`.
pub fn linear_fit<X: Sample, Y: Sample>(xs: &[X], ys: &[Y]) -> Result<LinearFit, StatsError> {
    let slope = slope(xs, ys)?;
    let intercept = calculate_mean(ys, MissingPolicy::Propagate)
        - slope * calculate_mean(xs, MissingPolicy::Propagate);
    Ok(LinearFit::new(intercept, slope))
}

/// Least-squares slope of `ys` against `xs`.
///
/// ```text
///     sum(x * y) - sum(x) * sum(y) / n
/// b = ---------------------------------
///       sum(x^2) - sum(x)^2 / n
/// ```
pub fn slope<X: Sample, Y: Sample>(xs: &[X], ys: &[Y]) -> Result<f64, StatsError> {
    check_lengths(xs.len(), ys.len())?;

    let (mut sx, mut sxx, mut sxy, mut sy) = (0.0, 0.0, 0.0, 0.0);
    for index in 0..xs.len() {
        let x = required(xs, index)?;
        let y = required(ys, index)?;
        sx += x;
        sxx += x * x;
        sxy += x * y;
        sy += y;
    }
    let n = xs.len() as f64;
    Ok((sxy - (sx * sy) / n) / (sxx - (sx * sx) / n))
}

/// Pearson correlation coefficient of two parallel sequences.
///
/// Absent values count as `0.0` rather than being skipped.
pub fn correlation<X: Sample, Y: Sample>(data1: &[X], data2: &[Y]) -> Result<f64, StatsError> {
    check_lengths(data1.len(), data2.len())?;

    let (mut sum_x, mut sum_y, mut sum_x2, mut sum_y2, mut sum_xy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (a, b) in data1.iter().zip(data2) {
        let x = a.value().unwrap_or(0.0);
        let y = b.value().unwrap_or(0.0);
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
        sum_y2 += y * y;
    }
    let n = data1.len() as f64;
    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();
    Ok(numerator / denominator)
}

/// Trailing moving average.
///
/// For each `i` in `0..len - period` emits `(xs[i + period], mean(ys[i..i + period]))`,
/// so the result holds `len - period` points.
pub fn moving_average<X: Sample, Y: Sample>(
    xs: &[X],
    ys: &[Y],
    period: usize,
) -> Result<Vec<(f64, f64)>, StatsError> {
    check_lengths(xs.len(), ys.len())?;
    if period == 0 {
        return Err(StatsError::invalid("period", "must be at least 1"));
    }
    if period > xs.len() {
        return Err(StatsError::invalid(
            "period",
            format!("{period} is longer than the {} data points", xs.len()),
        ));
    }

    (0..xs.len() - period)
        .map(|i| {
            let x = required(xs, i + period)?;
            let mut sum = 0.0;
            for j in i..i + period {
                sum += required(ys, j)?;
            }
            Ok((x, sum / period as f64))
        })
        .collect()
}

fn check_lengths(left: usize, right: usize) -> Result<(), StatsError> {
    if left == right {
        Ok(())
    } else {
        Err(StatsError::LengthMismatch { left, right })
    }
}
