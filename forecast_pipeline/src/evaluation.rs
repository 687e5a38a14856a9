//! Hold-out evaluation with a seeded train/test split

use crate::config::PipelineConfig;
use crate::data::Dataset;
use crate::error::{PipelineError, Result};
use crate::features::{FeatureSelection, FeatureTable};
use crate::frame::ModelFrame;
use crate::metrics::{mean_absolute_error, mean_squared_error, r2_score};
use crate::models::{LinearRegression, RegressionModel, TrainedRegressionModel};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Fit quality on the held-out rows, with the series for an actual-vs-predicted plot
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Target column
    pub target: String,
    /// Coefficient of determination on the test rows
    pub r2: f64,
    /// Mean absolute error on the test rows
    pub mae: f64,
    /// Mean squared error on the test rows
    pub mse: f64,
    /// Actual test targets, in split order
    pub y_test: Vec<f64>,
    /// Predictions for `y_test`
    pub y_pred: Vec<f64>,
    /// Rows used for fitting
    pub train_size: usize,
}

impl Evaluation {
    /// Rows held out for scoring
    pub fn test_size(&self) -> usize {
        self.y_test.len()
    }
}

/// Shuffle `0..n` with a fixed seed and cut off `ceil(n · test_fraction)` test rows
///
/// Returns `(train, test)` row positions.
pub fn train_test_split(
    n: usize,
    test_fraction: f64,
    seed: u64,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(PipelineError::InvalidParameter(format!(
            "test_fraction must be between 0 and 1, got {}",
            test_fraction
        )));
    }

    let n_test = (n as f64 * test_fraction).ceil() as usize;
    let n_train = n.saturating_sub(n_test);
    if n_test == 0 || n_train == 0 {
        return Err(PipelineError::InsufficientData(format!(
            "{} complete rows cannot be split into train and test sets",
            n
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let train = indices.split_off(n_test);
    Ok((train, indices))
}

/// Fit on a seeded 80/20 split of the selected features and score the test rows
pub fn evaluate(
    dataset: &Dataset,
    selection: &FeatureSelection,
    config: &PipelineConfig,
) -> Result<Evaluation> {
    selection.ensure_modelable()?;

    let table = FeatureTable::from_dataset(dataset, config)?;
    let frame = ModelFrame::from_selection(&table, selection)?;
    let (train_rows, test_rows) =
        train_test_split(frame.len(), config.test_fraction, config.split_seed)?;

    let train_frame = frame.subset(&train_rows);
    let test_frame = frame.subset(&test_rows);

    let model = LinearRegression::new().fit(&train_frame)?;
    let y_pred = model.predict(test_frame.x())?;
    let y_test = test_frame.y().to_vec();

    let evaluation = Evaluation {
        target: frame.target().to_string(),
        r2: r2_score(&y_test, &y_pred)?,
        mae: mean_absolute_error(&y_test, &y_pred)?,
        mse: mean_squared_error(&y_test, &y_pred)?,
        y_test,
        y_pred,
        train_size: train_frame.len(),
    };

    tracing::info!(
        r2 = evaluation.r2,
        mae = evaluation.mae,
        mse = evaluation.mse,
        train = evaluation.train_size,
        test = evaluation.test_size(),
        "Evaluation complete"
    );
    Ok(evaluation)
}
