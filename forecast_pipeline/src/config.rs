//! Pipeline configuration

use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};

/// Tunable parameters shared by every pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Field delimiter of uploaded tables
    pub delimiter: char,
    /// Length of the trailing mean window (`_ma{n}` features)
    pub rolling_window: usize,
    /// Shift applied to lag features (`_lag{n}` features)
    pub lag_periods: usize,
    /// Outlier band half-width, in standard deviations
    pub outlier_threshold: f64,
    /// Share of rows held out by the evaluator
    pub test_fraction: f64,
    /// Seed of the evaluator's train/test shuffle
    pub split_seed: u64,
    /// Largest accepted forecast horizon
    pub max_horizon: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            rolling_window: 5,
            lag_periods: 1,
            outlier_threshold: 3.0,
            test_fraction: 0.2,
            split_seed: 42,
            max_horizon: 30,
        }
    }
}

impl PipelineConfig {
    /// Parse and validate a configuration from JSON. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every parameter is usable
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(PipelineError::ConfigError(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }
        if self.rolling_window == 0 {
            return Err(PipelineError::ConfigError(
                "rolling_window must be positive".to_string(),
            ));
        }
        if self.lag_periods == 0 {
            return Err(PipelineError::ConfigError(
                "lag_periods must be positive".to_string(),
            ));
        }
        if self.outlier_threshold.is_nan() || self.outlier_threshold <= 0.0 {
            return Err(PipelineError::ConfigError(
                "outlier_threshold must be positive".to_string(),
            ));
        }
        if self.test_fraction.is_nan() || self.test_fraction <= 0.0 || self.test_fraction >= 1.0 {
            return Err(PipelineError::ConfigError(
                "test_fraction must be between 0 and 1".to_string(),
            ));
        }
        if self.max_horizon == 0 {
            return Err(PipelineError::ConfigError(
                "max_horizon must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> u8 {
        // validate() guarantees ASCII; anything else falls back to a comma
        u8::try_from(self.delimiter).unwrap_or(b',')
    }

    /// Suffix of rolling-mean features, e.g. `_ma5`
    pub fn rolling_suffix(&self) -> String {
        format!("_ma{}", self.rolling_window)
    }

    /// Suffix of lag features, e.g. `_lag1`
    pub fn lag_suffix(&self) -> String {
        format!("_lag{}", self.lag_periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.rolling_suffix(), "_ma5");
        assert_eq!(config.lag_suffix(), "_lag1");
        assert_eq!(config.delimiter_byte(), b',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config =
            PipelineConfig::from_json_str(r#"{"split_seed": 7, "delimiter": ";"}"#).unwrap();
        assert_eq!(config.split_seed, 7);
        assert_eq!(config.delimiter_byte(), b';');
        assert_eq!(config.rolling_window, 5);
    }

    #[test]
    fn test_invalid_values() {
        assert!(PipelineConfig::from_json_str(r#"{"test_fraction": 1.0}"#).is_err());
        assert!(PipelineConfig::from_json_str(r#"{"rolling_window": 0}"#).is_err());
        assert!(PipelineConfig::from_json_str(r#"{"delimiter": "é"}"#).is_err());
        assert!(PipelineConfig::from_json_str("not json").is_err());
    }
}
