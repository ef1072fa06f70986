//! Sample values and missing-value handling.
//!
//! A data point may be absent (`None`) or not-a-number. Both count as
//! "missing"; what an operation does with them is chosen explicitly through
//! [`MissingPolicy`] instead of scattered null checks.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// A numeric data point that may be missing.
pub trait Sample {
    /// The numeric value, or `None` when the data point is absent.
    ///
    /// A present `NaN` is returned as `Some(f64::NAN)`.
    fn value(&self) -> Option<f64>;
}

impl Sample for f64 {
    #[inline]
    fn value(&self) -> Option<f64> {
        Some(*self)
    }
}

impl Sample for f32 {
    #[inline]
    fn value(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl Sample for i32 {
    #[inline]
    fn value(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl Sample for u32 {
    #[inline]
    fn value(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl Sample for i64 {
    #[inline]
    fn value(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl<T: Sample> Sample for Option<T> {
    #[inline]
    fn value(&self) -> Option<f64> {
        self.as_ref().and_then(Sample::value)
    }
}

impl<T: Sample + ?Sized> Sample for &T {
    #[inline]
    fn value(&self) -> Option<f64> {
        (**self).value()
    }
}

/// How an aggregate treats missing (`None` or `NaN`) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Any missing value makes the result `NaN`.
    #[default]
    Propagate,
    /// Missing values are left out of both the sum and the count.
    Skip,
    /// Missing values contribute `0.0` and still count.
    TreatAsZero,
}

impl MissingPolicy {
    /// Maps an "include null and NaN" flag onto a policy: including them
    /// propagates `NaN`, excluding them skips.
    #[must_use]
    pub const fn from_include_flag(include_missing: bool) -> Self {
        if include_missing {
            Self::Propagate
        } else {
            Self::Skip
        }
    }
}

/// True when the sample is absent or `NaN`.
#[inline]
pub fn is_missing<T: Sample>(sample: &T) -> bool {
    sample.value().map_or(true, f64::is_nan)
}

/// Reads the value at `index`, failing if the slot is absent.
#[inline]
pub(crate) fn required<T: Sample>(values: &[T], index: usize) -> Result<f64, StatsError> {
    values
        .get(index)
        .ok_or(StatsError::IndexOutOfRange {
            index,
            len: values.len(),
        })?
        .value()
        .ok_or(StatsError::MissingValue { index })
}

/// Ascending order with `NaN` after every number.
#[inline]
pub(crate) fn ascending(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Copies `values[start..=end]` into an owned, ascending vector.
///
/// Fails on the first absent slot, since absent values have no order.
pub(crate) fn sorted_copy<T: Sample>(
    values: &[T],
    start: usize,
    end: usize,
) -> Result<Vec<f64>, StatsError> {
    let mut working = Vec::with_capacity(end + 1 - start);
    for index in start..=end {
        working.push(required(values, index)?);
    }
    working.sort_by(ascending);
    Ok(working)
}
