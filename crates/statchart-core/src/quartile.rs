//! Tukey-hinge quartiles.
//!
//! The sorted sample is split in half and each quartile is the median of
//! its half. For an odd count the middle element belongs to both halves:
//!
//! ```text
//! n = 5:  [a b c d e]   Q1 = median(a b c)   Q3 = median(c d e)
//! n = 4:  [a b c d]     Q1 = median(a b)     Q3 = median(c d)
//! ```
//!
//! This is not a percentile interpolation and gives different values for
//! small samples.
//!
//! The halves are taken by position and each is sorted before its median is
//! read, so unsorted input gives the hinges of its positional halves.

use crate::error::StatsError;
use crate::sample::Sample;
use crate::statistics::calculate_median_range;

/// First quartile (lower hinge).
///
/// Empty → `NaN`; one value → that value.
pub fn calculate_q1<T: Sample>(values: &[T]) -> Result<f64, StatsError> {
    lower_hinge(values, true)
}

/// Third quartile (upper hinge).
///
/// Empty → `NaN`; one value → that value.
pub fn calculate_q3<T: Sample>(values: &[T]) -> Result<f64, StatsError> {
    upper_hinge(values, true)
}

/// Lower hinge; with `copy_and_sort = false` the slice must be ascending.
pub(crate) fn lower_hinge<T: Sample>(values: &[T], copy_and_sort: bool) -> Result<f64, StatsError> {
    let n = values.len();
    match n {
        0 => Ok(f64::NAN),
        1 => calculate_median_range(values, 0, 0, copy_and_sort),
        _ if n % 2 == 1 => calculate_median_range(values, 0, n / 2, copy_and_sort),
        _ => calculate_median_range(values, 0, n / 2 - 1, copy_and_sort),
    }
}

/// Upper hinge; with `copy_and_sort = false` the slice must be ascending.
pub(crate) fn upper_hinge<T: Sample>(values: &[T], copy_and_sort: bool) -> Result<f64, StatsError> {
    let n = values.len();
    match n {
        0 => Ok(f64::NAN),
        1 => calculate_median_range(values, 0, 0, copy_and_sort),
        // Odd and even counts share the upper bound; only the lower half
        // differs in whether it takes the middle element.
        _ => calculate_median_range(values, n / 2, n - 1, copy_and_sort),
    }
}
