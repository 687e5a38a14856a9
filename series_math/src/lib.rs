//! # Series Math
//!
//! Numeric kernels shared by the forecasting pipeline.
//! Series are slices of `Option<f64>` where `None` marks an undefined
//! observation (a missing input value or a window/shift artifact).

use thiserror::Error;

pub mod least_squares;
pub mod moving_averages;
pub mod shift;

pub use least_squares::{fit_ols, LeastSquaresFit};
pub use moving_averages::{rolling_mean, RollingMean};
pub use shift::lag;

/// Errors that can occur in series calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),
}

/// Result type for series math operations
pub type Result<T> = std::result::Result<T, MathError>;
