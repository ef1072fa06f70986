//! Box-and-whisker calculator configuration.
//!
//! The defaults reproduce the classic Tukey fences: outliers beyond
//! 1.5 × IQR, far-out values beyond 2.0 × IQR, missing values stripped.
//!
//! ```toml
//! outlier_factor = 1.5
//! farout_factor = 2.0
//! strip_missing = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings for [`crate::BoxAndWhiskerCalculator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhiskerConfig {
    /// Multiple of the interquartile range beyond which a value is an outlier.
    pub outlier_factor: f64,
    /// Multiple of the interquartile range beyond which an outlier is far out.
    pub farout_factor: f64,
    /// Drop absent and `NaN` values before computing.
    pub strip_missing: bool,
}

impl Default for WhiskerConfig {
    fn default() -> Self {
        Self {
            outlier_factor: 1.5,
            farout_factor: 2.0,
            strip_missing: true,
        }
    }
}

impl WhiskerConfig {
    /// Set the outlier factor.
    #[must_use]
    pub fn with_outlier_factor(mut self, factor: f64) -> Self {
        self.outlier_factor = factor;
        self
    }

    /// Set the far-out factor.
    #[must_use]
    pub fn with_farout_factor(mut self, factor: f64) -> Self {
        self.farout_factor = factor;
        self
    }

    /// Keep or drop missing values.
    #[must_use]
    pub fn with_strip_missing(mut self, strip: bool) -> Self {
        self.strip_missing = strip;
        self
    }

    /// Check the factors are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a factor is negative or not
    /// finite, or if the far-out fence sits inside the outlier fence.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, factor) in [
            ("outlier_factor", self.outlier_factor),
            ("farout_factor", self.farout_factor),
        ] {
            if !factor.is_finite() || factor < 0.0 {
                return Err(ConfigError::InvalidValue(format!(
                    "{name} must be a finite, non-negative number (got {factor})"
                )));
            }
        }
        if self.farout_factor < self.outlier_factor {
            return Err(ConfigError::InvalidValue(format!(
                "farout_factor ({}) must not be less than outlier_factor ({})",
                self.farout_factor, self.outlier_factor
            )));
        }
        Ok(())
    }

    /// Parse and validate a config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if TOML is invalid or values are out of range.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to a TOML string.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Load a config from a file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Save the config to a file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be written.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml()).map_err(|e| ConfigError::Io(e.to_string()))
    }
}
