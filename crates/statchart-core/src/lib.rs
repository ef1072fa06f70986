//! Statistics engine for statistical charts.
//!
//! This crate computes the numbers a box-and-whisker, regression or
//! histogram chart is drawn from:
//! - Descriptive statistics: [`calculate_mean`], [`calculate_median`],
//!   [`std_dev`], [`correlation`], [`moving_average`]
//! - Tukey-hinge quartiles: [`calculate_q1`], [`calculate_q3`]
//! - Box-and-whisker summaries: [`BoxAndWhiskerItem`], [`BoxAndWhiskerCalculator`]
//! - Regression: [`linear_fit`], [`ols_regression`], [`power_regression`],
//!   [`polynomial_regression`]
//! - Histogram binning: [`Histogram`]
//!
//! Inputs are borrowed slices of any [`Sample`] type, so `f64`, integers and
//! `Option<f64>` (with `None` as a missing value) all work. Nothing here
//! mutates its input or keeps state between calls.
//!
//! # Example
//!
//! ```
//! use statchart_core::calculate_box_and_whisker_statistics;
//!
//! let item = calculate_box_and_whisker_statistics(&[1.0, 2.0, f64::NAN, 3.0, 4.0, 40.0])?;
//! assert_eq!(item.q1(), 2.0);
//! assert_eq!(item.q3(), 4.0);
//! assert_eq!(item.outliers(), &[40.0]);
//! # Ok::<(), statchart_core::StatsError>(())
//! ```

mod box_whisker;
mod config;
mod error;
mod histogram;
mod quartile;
mod regression;
mod sample;
mod statistics;

pub use box_whisker::{
    calculate_box_and_whisker_statistics, calculate_box_and_whisker_statistics_with,
    BoxAndWhiskerCalculator, BoxAndWhiskerItem,
};
pub use config::WhiskerConfig;
pub use error::{ConfigError, StatsError};
pub use histogram::{Histogram, HistogramBin, HistogramType};
pub use quartile::{calculate_q1, calculate_q3};
pub use regression::{
    ols_regression, polynomial_regression, power_regression, LinearFit, PolynomialFit, PowerFit,
};
pub use sample::{is_missing, MissingPolicy, Sample};
pub use statistics::{
    calculate_mean, calculate_median, calculate_median_range, correlation, linear_fit,
    moving_average, slope, std_dev,
};
