//! Model training on the full selected-feature table

use crate::config::PipelineConfig;
use crate::data::Dataset;
use crate::error::Result;
use crate::features::{FeatureSelection, FeatureTable};
use crate::frame::ModelFrame;
use crate::models::{LinearRegression, RegressionModel, TrainedLinearRegression};

/// Fit a fresh linear regression of the last selected feature on the others
///
/// Features are re-derived from the raw dataset on every call.
pub fn train(
    dataset: &Dataset,
    selection: &FeatureSelection,
    config: &PipelineConfig,
) -> Result<TrainedLinearRegression> {
    selection.ensure_modelable()?;

    let table = FeatureTable::from_dataset(dataset, config)?;
    let frame = ModelFrame::from_selection(&table, selection)?;
    let model = LinearRegression::new().fit(&frame)?;

    tracing::info!(
        target_column = %model.target(),
        predictors = model.predictors().len(),
        rows = frame.len(),
        "Model trained"
    );
    Ok(model)
}
