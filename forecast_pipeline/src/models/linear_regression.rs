//! Ordinary least squares linear regression

use crate::error::{PipelineError, Result};
use crate::frame::ModelFrame;
use crate::models::{RegressionModel, TrainedRegressionModel};
use series_math::fit_ols;

/// Linear regression with an intercept term
#[derive(Debug, Clone)]
pub struct LinearRegression {
    /// Name of the model
    name: String,
}

/// Trained linear regression model
#[derive(Debug, Clone)]
pub struct TrainedLinearRegression {
    /// Name of the model
    name: String,
    /// Predictor names, in weight order
    predictors: Vec<String>,
    /// Target name
    target: String,
    /// One weight per predictor
    coefficients: Vec<f64>,
    /// Intercept
    intercept: f64,
    /// Number of independent predictors
    rank: usize,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    /// Create a new linear regression model
    pub fn new() -> Self {
        Self {
            name: "Linear Regression".to_string(),
        }
    }
}

impl RegressionModel for LinearRegression {
    type Trained = TrainedLinearRegression;

    fn fit(&self, frame: &ModelFrame) -> Result<Self::Trained> {
        if frame.is_empty() {
            return Err(PipelineError::InsufficientData(format!(
                "No complete rows for target '{}'",
                frame.target()
            )));
        }

        let fit = fit_ols(frame.x(), frame.y(), true)?;
        tracing::debug!(
            rows = frame.len(),
            predictors = frame.predictors().len(),
            rank = fit.rank,
            "Least squares solved"
        );

        Ok(TrainedLinearRegression {
            name: self.name.clone(),
            predictors: frame.predictors().to_vec(),
            target: frame.target().to_string(),
            coefficients: fit.coefficients,
            intercept: fit.intercept,
            rank: fit.rank,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedLinearRegression {
    /// Predict the target for a single predictor row
    pub fn predict_one(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.coefficients.len() {
            return Err(PipelineError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: row.len(),
            });
        }

        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(row)
                .map(|(w, x)| w * x)
                .sum::<f64>())
    }

    /// Predictor names
    pub fn predictors(&self) -> &[String] {
        &self.predictors
    }

    /// Target name
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Fitted weights, one per predictor
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Fitted intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Number of linearly independent predictors
    pub fn rank(&self) -> usize {
        self.rank
    }
}

impl TrainedRegressionModel for TrainedLinearRegression {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        rows.iter().map(|row| self.predict_one(row)).collect()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
