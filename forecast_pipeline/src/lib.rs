//! # Forecast Pipeline
//!
//! Feature engineering and linear forecasting over an uploaded price table.
//!
//! ## Stages
//!
//! - **Load**: parse a delimited table with a header row ([`DataLoader`])
//! - **Clean**: drop incomplete rows, then rows outside `mean ± 3·std` per numeric column
//! - **Engineer**: add a trailing 5-row mean (`_ma5`) and a one-row lag (`_lag1`)
//!   per numeric column
//! - **Train**: least squares fit of the last selected feature on the others
//! - **Evaluate**: seeded 80/20 split, R², MAE and MSE on the held-out rows
//! - **Forecast**: predict n steps from the last observed predictor row and export as CSV
//!
//! Each modeling stage re-derives features from the raw dataset, so stages can
//! be invoked in any order once a dataset is loaded. [`PipelineSession`] keeps
//! the per-user state between calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use forecast_pipeline::{FeatureSelection, PipelineSession};
//!
//! let csv = "price\n1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n";
//!
//! let mut session = PipelineSession::default();
//! session.load_bytes(csv.as_bytes())?;
//!
//! // Predict price from its previous value
//! session.select_features(FeatureSelection::new(["price_lag1", "price"]))?;
//! let model = session.train()?;
//! assert!((model.coefficients()[0] - 1.0).abs() < 1e-9);
//!
//! let forecast = session.forecast(3)?;
//! assert_eq!(forecast.values().len(), 3);
//! # Ok::<(), forecast_pipeline::PipelineError>(())
//! ```

pub mod cleaning;
pub mod config;
pub mod data;
pub mod error;
pub mod evaluation;
pub mod features;
pub mod forecast;
pub mod frame;
pub mod metrics;
pub mod models;
pub mod session;
pub mod training;

// Re-export commonly used types
pub use crate::cleaning::{clean, CleaningOutcome, CleaningReport};
pub use crate::config::PipelineConfig;
pub use crate::data::{DataLoader, Dataset, Value};
pub use crate::error::{PipelineError, Severity};
pub use crate::evaluation::{evaluate, Evaluation};
pub use crate::features::{engineer_features, FeatureSelection, FeatureTable};
pub use crate::forecast::{forecast, Forecast};
pub use crate::frame::ModelFrame;
pub use crate::models::{
    LinearRegression, RegressionModel, TrainedLinearRegression, TrainedRegressionModel,
};
pub use crate::session::{PipelineSession, PipelineStage};
pub use crate::training::train;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
