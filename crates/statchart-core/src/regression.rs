//! Regression fits over `(x, y)` points.
//!
//! Three models: straight line (ordinary least squares), power curve
//! `y = a * x^b` fitted in log space, and polynomial of a chosen order
//! with an R² goodness-of-fit.

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Straight line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    intercept: f64,
    slope: f64,
}

impl LinearFit {
    /// Create a line from its intercept and slope.
    #[must_use]
    pub const fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Value at `x = 0`.
    #[must_use]
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Change in `y` per unit of `x`.
    #[must_use]
    pub const fn slope(&self) -> f64 {
        self.slope
    }

    /// Evaluate the line at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Power curve `y = a * x^b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerFit {
    a: f64,
    b: f64,
}

impl PowerFit {
    /// Create a curve from its scale `a` and exponent `b`.
    #[must_use]
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Scale factor.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Exponent.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Evaluate the curve at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x.powf(self.b)
    }
}

/// Polynomial `c0 + c1*x + c2*x^2 + ...` with its coefficient of determination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialFit {
    coefficients: Vec<f64>,
    r_squared: f64,
}

impl PolynomialFit {
    /// Coefficients in ascending powers of `x`.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// R², the explained share of the variance in `y`.
    #[must_use]
    pub const fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Degree of the polynomial.
    #[must_use]
    pub fn order(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluate the polynomial at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc.mul_add(x, c))
    }
}

/// Ordinary least-squares line through `data`.
pub fn ols_regression(data: &[(f64, f64)]) -> Result<LinearFit, StatsError> {
    least_squares(data.iter().copied())
}

/// Power curve through `data`, fitted as a line through `(ln x, ln y)`.
///
/// Points with non-positive coordinates have no logarithm and drive the
/// result to `NaN`.
pub fn power_regression(data: &[(f64, f64)]) -> Result<PowerFit, StatsError> {
    let line = least_squares(data.iter().map(|&(x, y)| (x.ln(), y.ln())))?;
    Ok(PowerFit::new(line.intercept.exp(), line.slope))
}

fn least_squares<I>(points: I) -> Result<LinearFit, StatsError>
where
    I: ExactSizeIterator<Item = (f64, f64)>,
{
    let n = points.len();
    if n < 2 {
        return Err(StatsError::NotEnoughData {
            required: 2,
            actual: n,
        });
    }

    let (mut sum_x, mut sum_y, mut sum_xx, mut sum_xy) = (0.0, 0.0, 0.0, 0.0);
    for (x, y) in points {
        sum_x += x;
        sum_y += y;
        sum_xx += x * x;
        sum_xy += x * y;
    }
    let n = n as f64;
    let sxx = sum_xx - (sum_x * sum_x) / n;
    let sxy = sum_xy - (sum_x * sum_y) / n;
    let slope = sxy / sxx;
    Ok(LinearFit::new(sum_y / n - slope * (sum_x / n), slope))
}

/// Least-squares polynomial of the given `order` through `data`.
///
/// Points with a `NaN` coordinate are ignored. A singular system (for
/// example, fewer distinct `x` values than coefficients) is not an error;
/// its coefficients come out non-finite.
pub fn polynomial_regression(
    data: &[(f64, f64)],
    order: usize,
) -> Result<PolynomialFit, StatsError> {
    let terms = order + 1;
    let points: Vec<(f64, f64)> = data
        .iter()
        .copied()
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
        .collect();
    if points.len() < terms {
        return Err(StatsError::NotEnoughData {
            required: terms,
            actual: points.len(),
        });
    }

    // Normal equations: row i is sum(x^(i+j)) * c_j = sum(y * x^i).
    let mut matrix = vec![vec![0.0; terms + 1]; terms];
    for &(x, y) in &points {
        let mut powers = vec![1.0; 2 * terms - 1];
        for k in 1..powers.len() {
            powers[k] = powers[k - 1] * x;
        }
        for (i, row) in matrix.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().take(terms).enumerate() {
                *cell += powers[i + j];
            }
            row[terms] += y * powers[i];
        }
    }
    let coefficients = solve(matrix);

    let fit = PolynomialFit {
        coefficients,
        r_squared: 0.0,
    };
    let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / points.len() as f64;
    let (mut reg_square, mut obs_square) = (0.0, 0.0);
    for &(x, y) in &points {
        reg_square += (fit.evaluate(x) - mean_y).powi(2);
        obs_square += (y - mean_y).powi(2);
    }
    Ok(PolynomialFit {
        r_squared: reg_square / obs_square,
        ..fit
    })
}

/// Gaussian elimination with partial pivoting on an augmented `n x (n+1)` matrix.
fn solve(mut matrix: Vec<Vec<f64>>) -> Vec<f64> {
    let n = matrix.len();
    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&a, &b| matrix[a][col].abs().total_cmp(&matrix[b][col].abs()))
            .unwrap_or(col);
        matrix.swap(col, pivot);

        for row in col + 1..n {
            let factor = matrix[row][col] / matrix[col][col];
            for k in col..=n {
                let delta = factor * matrix[col][k];
                matrix[row][k] -= delta;
            }
        }
    }

    let mut result = vec![0.0; n];
    for row in (0..n).rev() {
        let mut value = matrix[row][n];
        for k in row + 1..n {
            value -= matrix[row][k] * result[k];
        }
        result[row] = value / matrix[row][row];
    }
    result
}
