//! Equal-width histogram binning.

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// How bin heights are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistogramType {
    /// Raw count per bin.
    #[default]
    Frequency,
    /// Count divided by the number of values.
    RelativeFrequency,
    /// Count scaled so the bar areas sum to 1.
    ScaleAreaToOne,
}

/// A single bin `[start, end)`; the last bin of a histogram also holds its
/// upper boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            count: 0,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Values counted into equal-width bins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total: usize,
    bin_width: f64,
}

impl Histogram {
    /// Bin `values` over their own range.
    pub fn new(values: &[f64], bins: usize) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptyInput { name: "values" });
        }
        let minimum = values.iter().copied().fold(f64::MAX, |m, v| if v < m { v } else { m });
        let maximum = values.iter().copied().fold(-f64::MAX, |m, v| if v > m { v } else { m });
        Self::with_range(values, bins, minimum, maximum)
    }

    /// Bin `values` over `[minimum, maximum]`.
    ///
    /// Values below the range land in the first bin; values at or above
    /// `maximum`, and `NaN`, land in the last.
    pub fn with_range(
        values: &[f64],
        bins: usize,
        minimum: f64,
        maximum: f64,
    ) -> Result<Self, StatsError> {
        if bins == 0 {
            return Err(StatsError::invalid("bins", "must be at least 1"));
        }

        let bin_width = (maximum - minimum) / bins as f64;
        // Unfused so each edge is exactly `minimum + i * bin_width`.
        #[allow(clippy::suboptimal_flops)]
        let mut bin_list: Vec<HistogramBin> = (0..bins)
            .map(|i| {
                let lower = minimum + i as f64 * bin_width;
                // Pin the last edge to `maximum` so rounding cannot leave a gap.
                let upper = if i == bins - 1 {
                    maximum
                } else {
                    minimum + (i + 1) as f64 * bin_width
                };
                HistogramBin::new(lower, upper)
            })
            .collect();

        for &value in values {
            let index = if value < maximum {
                let fraction = ((value - minimum) / (maximum - minimum)).max(0.0);
                ((fraction * bins as f64) as usize).min(bins - 1)
            } else {
                bins - 1
            };
            bin_list[index].count += 1;
        }

        Ok(Self {
            bins: bin_list,
            total: values.len(),
            bin_width,
        })
    }

    /// Number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    #[must_use]
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    #[must_use]
    pub fn bin(&self, index: usize) -> Option<&HistogramBin> {
        self.bins.get(index)
    }

    /// Number of values binned.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Centre of bin `index`.
    #[must_use]
    pub fn x_value(&self, index: usize) -> Option<f64> {
        self.bin(index).map(HistogramBin::center)
    }

    /// Height of bin `index` under `kind`.
    #[must_use]
    pub fn y_value(&self, index: usize, kind: HistogramType) -> Option<f64> {
        let count = self.bin(index)?.count as f64;
        let total = self.total as f64;
        Some(match kind {
            HistogramType::Frequency => count,
            HistogramType::RelativeFrequency => count / total,
            HistogramType::ScaleAreaToOne => count / (self.bin_width * total),
        })
    }
}
