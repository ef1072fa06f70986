//! Error types for statchart-core.

use thiserror::Error;

/// Errors returned by the statistics functions.
///
/// Every variant except [`StatsError::MissingValue`] is a bad argument from
/// the caller. Numeric degeneracy (division by a zero count, a zero
/// denominator in a fit) is not an error: it surfaces as `NaN` or infinity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// A sequence that must hold at least one item was empty.
    #[error("'{name}' must not be empty")]
    EmptyInput {
        /// Name of the offending argument.
        name: &'static str,
    },

    /// Two parallel sequences have different lengths.
    #[error("array lengths must be equal: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A scalar parameter is out of its valid domain.
    #[error("invalid '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// An index range reaches past the end of the sequence.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Too few usable data points for the requested fit.
    #[error("not enough data: need at least {required} items, got {actual}")]
    NotEnoughData { required: usize, actual: usize },

    /// A missing value was read where a number is required.
    ///
    /// Callers that may hold missing values must strip them first.
    #[error("missing value at index {index}")]
    MissingValue { index: usize },
}

impl StatsError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// True for every variant caused by an invalid argument, i.e. all but
    /// [`StatsError::MissingValue`].
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::MissingValue { .. })
    }
}

/// Errors raised while loading or validating a [`crate::WhiskerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Failed to parse TOML.
    #[error("parse error: {0}")]
    Parse(String),

    /// Failed to read or write the config file.
    #[error("IO error: {0}")]
    Io(String),

    /// A value is outside its allowed range.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}
