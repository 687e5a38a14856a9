//! Error types for the forecast_pipeline crate

use thiserror::Error;

/// How an error should be surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The stage failed; the user has to supply different input
    Error,
    /// Non-fatal; the user may adjust the selection and retry
    Warning,
}

/// Custom error types for the forecast_pipeline crate
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The uploaded table could not be read
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Modeling needs at least one predictor and one target
    #[error("Please select at least one feature and a target ({selected} selected)")]
    InsufficientFeatures { selected: usize },

    /// A selected feature is not in the feature catalog
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    /// A column name is not present in the dataset
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// A column holds text where numbers are required
    #[error("Column '{0}' is not numeric")]
    NonNumericColumn(String),

    /// Not enough rows survive filtering for the requested stage
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input shape does not match the trained model
    #[error("Shape mismatch: expected {expected} predictors, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Error related to input validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A stage was invoked before any dataset was loaded
    #[error("No dataset loaded")]
    NoDataset,

    /// Invalid pipeline configuration
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Error from the numeric kernels
    #[error("Math error: {0}")]
    MathError(#[from] series_math::MathError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PipelineError {
    /// Classify the error for display
    pub fn severity(&self) -> Severity {
        match self {
            PipelineError::InsufficientFeatures { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl From<csv::Error> for PipelineError {
    fn from(err: csv::Error) -> Self {
        PipelineError::ParseError(err.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::ConfigError(err.to_string())
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, PipelineError>;
