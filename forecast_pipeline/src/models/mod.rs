//! Regression models fitted on a [`ModelFrame`]

use crate::error::Result;
use crate::frame::ModelFrame;
use std::fmt::Debug;

/// Fitted model that maps predictor rows to target values
pub trait TrainedRegressionModel: Debug {
    /// Predict one target value per predictor row
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Regression model that can be fitted on a model frame
pub trait RegressionModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedRegressionModel;

    /// Fit the model on every row of the frame
    fn fit(&self, frame: &ModelFrame) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub mod linear_regression;

pub use linear_regression::{LinearRegression, TrainedLinearRegression};
