//! Box-and-whisker summaries.
//!
//! A summary holds the mean, median, Tukey-hinge quartiles, the range of
//! regular (non-outlier) values and the outliers of a sample:
//!
//! ```text
//!   far out   outlier      regular range       outlier   far out
//!  ----x-------o----|------[  Q1 | Q3  ]------|----o---------x----
//!            lower fence               upper fence
//! ```
//!
//! A value strictly beyond `Q1 - k * IQR` or `Q3 + k * IQR` (k = 1.5 by
//! default) is an outlier; past `2.0 * IQR` it is also far out.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::WhiskerConfig;
use crate::error::{ConfigError, StatsError};
use crate::quartile::{lower_hinge, upper_hinge};
use crate::sample::{ascending, is_missing, required, MissingPolicy, Sample};
use crate::statistics::{calculate_mean, calculate_median};

/// Immutable box-and-whisker statistics for one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxAndWhiskerItem {
    mean: f64,
    median: f64,
    q1: f64,
    q3: f64,
    min_regular_value: f64,
    max_regular_value: f64,
    min_outlier: f64,
    max_outlier: f64,
    outliers: Vec<f64>,
}

impl BoxAndWhiskerItem {
    /// Assemble a summary from precomputed statistics.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        mean: f64,
        median: f64,
        q1: f64,
        q3: f64,
        min_regular_value: f64,
        max_regular_value: f64,
        min_outlier: f64,
        max_outlier: f64,
        outliers: Vec<f64>,
    ) -> Self {
        Self {
            mean,
            median,
            q1,
            q3,
            min_regular_value,
            max_regular_value,
            min_outlier,
            max_outlier,
            outliers,
        }
    }

    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    #[must_use]
    pub const fn median(&self) -> f64 {
        self.median
    }

    /// First quartile (lower hinge).
    #[must_use]
    pub const fn q1(&self) -> f64 {
        self.q1
    }

    /// Third quartile (upper hinge).
    #[must_use]
    pub const fn q3(&self) -> f64 {
        self.q3
    }

    /// Smallest value inside the outlier fences.
    #[must_use]
    pub const fn min_regular_value(&self) -> f64 {
        self.min_regular_value
    }

    /// Largest value inside the outlier fences.
    #[must_use]
    pub const fn max_regular_value(&self) -> f64 {
        self.max_regular_value
    }

    /// Smallest low outlier that is not far out, or the regular minimum
    /// when there is none.
    #[must_use]
    pub const fn min_outlier(&self) -> f64 {
        self.min_outlier
    }

    /// Largest high outlier that is not far out, or the regular maximum
    /// when there is none.
    #[must_use]
    pub const fn max_outlier(&self) -> f64 {
        self.max_outlier
    }

    /// All outliers, far-out ones included, in ascending order.
    #[must_use]
    pub fn outliers(&self) -> &[f64] {
        &self.outliers
    }

    /// `q3 - q1`.
    #[must_use]
    pub fn interquartile_range(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes [`BoxAndWhiskerItem`]s under a [`WhiskerConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxAndWhiskerCalculator {
    config: WhiskerConfig,
}

impl BoxAndWhiskerCalculator {
    /// Create a calculator from a validated config.
    pub fn new(config: WhiskerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            "box-and-whisker calculator: outlier_factor={} farout_factor={} strip_missing={}",
            config.outlier_factor, config.farout_factor, config.strip_missing
        );
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &WhiskerConfig {
        &self.config
    }

    /// Summarize `values`, which need not be sorted.
    ///
    /// When the config keeps missing values, an absent entry is an error
    /// and `NaN` entries propagate into the regular range.
    pub fn calculate<T: Sample>(&self, values: &[T]) -> Result<BoxAndWhiskerItem, StatsError> {
        let sorted = working_list(values, self.config.strip_missing)?;
        self.summarize(&sorted)
    }

    fn summarize(&self, sorted: &[f64]) -> Result<BoxAndWhiskerItem, StatsError> {
        let mean = calculate_mean(sorted, MissingPolicy::Skip);
        let median = calculate_median(sorted, false)?;
        let q1 = lower_hinge(sorted, false)?;
        let q3 = upper_hinge(sorted, false)?;

        let iqr = q3 - q1;
        let upper_outlier = q3 + iqr * self.config.outlier_factor;
        let lower_outlier = q1 - iqr * self.config.outlier_factor;
        let upper_farout = q3 + iqr * self.config.farout_factor;
        let lower_farout = q1 - iqr * self.config.farout_factor;
        trace!(
            "fences: outlier [{lower_outlier}, {upper_outlier}] \
             farout [{lower_farout}, {upper_farout}]"
        );

        let mut min_regular = f64::INFINITY;
        let mut max_regular = f64::NEG_INFINITY;
        let mut min_outlier = f64::INFINITY;
        let mut max_outlier = f64::NEG_INFINITY;
        let mut outliers = Vec::new();

        for &value in sorted {
            if value > upper_outlier {
                outliers.push(value);
                if value > max_outlier && value <= upper_farout {
                    max_outlier = value;
                }
            } else if value < lower_outlier {
                outliers.push(value);
                if value < min_outlier && value >= lower_farout {
                    min_outlier = value;
                }
            } else {
                min_regular = propagating_min(min_regular, value);
                max_regular = propagating_max(max_regular, value);
            }
        }

        // With no qualifying outlier on a side, fall back to the regular edge.
        let min_outlier = propagating_min(min_outlier, min_regular);
        let max_outlier = propagating_max(max_outlier, max_regular);

        Ok(BoxAndWhiskerItem::new(
            mean,
            median,
            q1,
            q3,
            min_regular,
            max_regular,
            min_outlier,
            max_outlier,
            outliers,
        ))
    }
}

/// Summarize `values` with the default fences, stripping missing values.
pub fn calculate_box_and_whisker_statistics<T: Sample>(
    values: &[T],
) -> Result<BoxAndWhiskerItem, StatsError> {
    calculate_box_and_whisker_statistics_with(values, true)
}

/// Summarize `values` with the default fences.
///
/// With `strip_missing = false` the input is used as-is: an absent entry
/// is an error and `NaN` entries propagate into the regular range.
pub fn calculate_box_and_whisker_statistics_with<T: Sample>(
    values: &[T],
    strip_missing: bool,
) -> Result<BoxAndWhiskerItem, StatsError> {
    let calculator = BoxAndWhiskerCalculator {
        config: WhiskerConfig::default().with_strip_missing(strip_missing),
    };
    calculator.calculate(values)
}

fn working_list<T: Sample>(values: &[T], strip_missing: bool) -> Result<Vec<f64>, StatsError> {
    let mut working = Vec::with_capacity(values.len());
    if strip_missing {
        working.extend(
            values
                .iter()
                .filter(|s| !is_missing(*s))
                .filter_map(|s| s.value()),
        );
        let stripped = values.len() - working.len();
        if stripped > 0 {
            debug!("stripped {stripped} missing values from {} samples", values.len());
        }
    } else {
        for index in 0..values.len() {
            working.push(required(values, index)?);
        }
    }
    working.sort_by(ascending);
    Ok(working)
}

// IEEE min/max that return NaN if either side is NaN, unlike f64::min/max.
fn propagating_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn propagating_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_value() {
        let item = calculate_box_and_whisker_statistics(&[7.5]).unwrap();
        assert_eq!(item.mean(), 7.5);
        assert_eq!(item.median(), 7.5);
        assert_eq!(item.q1(), 7.5);
        assert_eq!(item.q3(), 7.5);
        assert_eq!(item.min_regular_value(), 7.5);
        assert_eq!(item.max_regular_value(), 7.5);
        assert_eq!(item.min_outlier(), 7.5);
        assert_eq!(item.max_outlier(), 7.5);
        assert!(item.outliers().is_empty());
    }

    #[test]
    fn test_four_values() {
        let item = calculate_box_and_whisker_statistics(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(item.mean(), 2.5);
        assert_eq!(item.median(), 2.5);
        assert_eq!(item.q1(), 1.5);
        assert_eq!(item.q3(), 3.5);
        assert_eq!(item.interquartile_range(), 2.0);
    }

    #[test]
    fn test_nan_is_stripped() {
        let item = calculate_box_and_whisker_statistics(&[1.0, 2.0, f64::NAN, 3.0, 4.0]).unwrap();
        assert_eq!(item.min_regular_value(), 1.0);
        assert_eq!(item.max_regular_value(), 4.0);
        assert_eq!(item.q1(), 1.5);
        assert_eq!(item.q3(), 3.5);
    }

    #[test]
    fn test_absent_values_are_stripped() {
        let values = [Some(4.0), None, Some(1.0), Some(3.0), None, Some(2.0)];
        let item = calculate_box_and_whisker_statistics(&values).unwrap();
        assert_eq!(item.mean(), 2.5);
        assert_eq!(item.median(), 2.5);
    }

    #[test]
    fn test_unstripped_absent_value_is_error() {
        let values = [Some(1.0), None, Some(3.0)];
        assert_eq!(
            calculate_box_and_whisker_statistics_with(&values, false),
            Err(StatsError::MissingValue { index: 1 })
        );
    }

    #[test]
    fn test_unstripped_nan_propagates_into_regular_range() {
        let item =
            calculate_box_and_whisker_statistics_with(&[3.0, f64::NAN, 1.0, 2.0], false).unwrap();
        assert_eq!(item.mean(), 2.0);
        assert_eq!(item.median(), 2.5);
        assert_eq!(item.q1(), 1.5);
        assert!(item.q3().is_nan());
        assert!(item.max_regular_value().is_nan());
        assert!(item.outliers().is_empty());
    }

    #[test]
    fn test_high_outliers() {
        // Q1 = 3, Q3 = 8, IQR = 5: outlier fence 15.5, far-out fence 18.
        let values = [30.0, 1.0, 2.0, 3.0, 17.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let item = calculate_box_and_whisker_statistics(&values).unwrap();
        assert_eq!(item.q1(), 3.0);
        assert_eq!(item.q3(), 8.0);
        assert_eq!(item.outliers(), &[17.0, 30.0]);
        assert_eq!(item.max_outlier(), 17.0);
        assert_eq!(item.max_regular_value(), 8.0);
        assert_eq!(item.min_regular_value(), 1.0);
        assert_eq!(item.min_outlier(), 1.0);
    }

    #[test]
    fn test_only_far_out_high_outlier_falls_back_to_regular_max() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 14.0, 30.0];
        let item = calculate_box_and_whisker_statistics(&values).unwrap();
        assert_eq!(item.outliers(), &[30.0]);
        assert_eq!(item.max_regular_value(), 14.0);
        assert_eq!(item.max_outlier(), 14.0);
    }

    #[test]
    fn test_low_outliers() {
        // Q1 = 10, Q3 = 15: outlier fence 2.5, far-out fence 0.
        let values = [-20.0, 1.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0];
        let item = calculate_box_and_whisker_statistics(&values).unwrap();
        assert_eq!(item.q1(), 10.0);
        assert_eq!(item.q3(), 15.0);
        assert_eq!(item.outliers(), &[-20.0, 1.0]);
        assert_eq!(item.min_outlier(), 1.0);
        assert_eq!(item.min_regular_value(), 10.0);
        assert_eq!(item.max_outlier(), 17.0);
    }

    #[test]
    fn test_empty_input() {
        let empty: [f64; 0] = [];
        let item = calculate_box_and_whisker_statistics(&empty).unwrap();
        assert!(item.mean().is_nan());
        assert!(item.median().is_nan());
        assert!(item.q1().is_nan());
        assert_eq!(item.min_regular_value(), f64::INFINITY);
        assert_eq!(item.max_regular_value(), f64::NEG_INFINITY);
        assert!(item.outliers().is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let values = vec![5.0, 1.0, 4.0];
        let _ = calculate_box_and_whisker_statistics(&values).unwrap();
        assert_eq!(values, vec![5.0, 1.0, 4.0]);
    }

    #[test]
    fn test_calculator_with_wider_fences() {
        let config = WhiskerConfig::default()
            .with_outlier_factor(3.0)
            .with_farout_factor(4.0);
        let calculator = BoxAndWhiskerCalculator::new(config).unwrap();
        let values = [30.0, 1.0, 2.0, 3.0, 17.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let item = calculator.calculate(&values).unwrap();
        assert_eq!(item.outliers(), &[30.0]);
        assert_eq!(item.max_regular_value(), 17.0);
        assert_eq!(item.max_outlier(), 17.0);
    }

    #[test]
    fn test_calculator_rejects_invalid_config() {
        let config = WhiskerConfig::default().with_farout_factor(1.0);
        assert!(BoxAndWhiskerCalculator::new(config).is_err());
    }

    #[test]
    fn test_calculator_default_matches_free_function() {
        let values = [9.0, 3.0, 2.0, 2.0, 40.0];
        assert_eq!(
            BoxAndWhiskerCalculator::default().calculate(&values),
            calculate_box_and_whisker_statistics(&values)
        );
    }

    #[test]
    fn test_item_serde_roundtrip() {
        let item = calculate_box_and_whisker_statistics(&[1.0, 2.0, 3.0, 4.0, 50.0]).unwrap();
        let json = serde_json::to_string(&item).unwrap();
        let parsed: BoxAndWhiskerItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_propagating_min_max() {
        assert!(propagating_min(1.0, f64::NAN).is_nan());
        assert!(propagating_max(f64::NAN, 1.0).is_nan());
        assert_eq!(propagating_min(1.0, 2.0), 1.0);
        assert_eq!(propagating_max(1.0, 2.0), 2.0);
    }

    proptest! {
        #[test]
        fn prop_idempotent(values in prop::collection::vec(-1e3f64..1e3, 1..50)) {
            let first = calculate_box_and_whisker_statistics(&values).unwrap();
            let second = calculate_box_and_whisker_statistics(&values).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_outliers_are_outside_fences(values in prop::collection::vec(-1e3f64..1e3, 1..50)) {
            let item = calculate_box_and_whisker_statistics(&values).unwrap();
            let iqr = item.interquartile_range();
            let lower = item.q1() - 1.5 * iqr;
            let upper = item.q3() + 1.5 * iqr;
            let expected = values.iter().filter(|&&v| v < lower || v > upper).count();
            prop_assert_eq!(item.outliers().len(), expected);
            prop_assert!(item.min_regular_value() <= item.max_regular_value());
            prop_assert!(item.q1() <= item.median() && item.median() <= item.q3());
        }
    }
}
