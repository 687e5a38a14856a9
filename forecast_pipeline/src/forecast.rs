//! n-step forecasting from the last observed predictor row
//!
//! The seed row is never updated between steps, so every step predicts from
//! the same inputs and all values of a forecast are equal.

use crate::config::PipelineConfig;
use crate::data::Dataset;
use crate::error::{PipelineError, Result};
use crate::features::{FeatureSelection, FeatureTable};
use crate::frame::ModelFrame;
use crate::models::{LinearRegression, RegressionModel};
use csv::Writer;
use std::io::Write;

/// Column header of exported forecasts
pub const FORECAST_COLUMN: &str = "Forecast";

/// Forecast values positioned after the observed target series
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// Target column
    target: String,
    /// Observed target values the model was fitted on
    observed: Vec<f64>,
    /// Predicted values, one per step
    values: Vec<f64>,
    /// Predictor row every step was predicted from
    seed_row: Vec<f64>,
}

impl Forecast {
    /// Get the forecasted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of steps forecasted
    pub fn horizon(&self) -> usize {
        self.values.len()
    }

    /// Row positions of the forecast, continuing after the observed series
    pub fn index(&self) -> Vec<usize> {
        let start = self.observed.len();
        (start..start + self.values.len()).collect()
    }

    /// Observed target series
    pub fn observed(&self) -> &[f64] {
        &self.observed
    }

    /// Target column name
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Predictor values used for every step
    pub fn seed_row(&self) -> &[f64] {
        &self.seed_row
    }

    /// Write the forecast as a single `Forecast` column, no index
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = Writer::from_writer(writer);
        writer.write_record([FORECAST_COLUMN])?;
        for value in &self.values {
            writer.write_record([format_float(*value)])?;
        }
        writer.flush()?;
        Ok(())
    }

    /// UTF-8 CSV export of the forecast
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(buffer)
    }
}

/// Shortest round-trip form, keeping a `.0` on integral values
///
/// Exponents carry a sign and at least two digits (`1e-05`, `1e+16`); NaN is
/// written as an empty cell.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// Fit on every complete row and predict `horizon` steps from the last one
pub fn forecast(
    dataset: &Dataset,
    selection: &FeatureSelection,
    horizon: usize,
    config: &PipelineConfig,
) -> Result<Forecast> {
    selection.ensure_modelable()?;
    if horizon == 0 || horizon > config.max_horizon {
        return Err(PipelineError::InvalidParameter(format!(
            "Forecast horizon must be between 1 and {}, got {}",
            config.max_horizon, horizon
        )));
    }

    let table = FeatureTable::from_dataset(dataset, config)?;
    let frame = ModelFrame::from_selection(&table, selection)?;
    let model = LinearRegression::new().fit(&frame)?;

    let seed_row = frame
        .last_predictor_row()
        .ok_or_else(|| {
            PipelineError::InsufficientData("No predictor row to forecast from".to_string())
        })?
        .to_vec();

    let values = (0..horizon)
        .map(|_| model.predict_one(&seed_row))
        .collect::<Result<Vec<f64>>>()?;

    tracing::info!(
        target_column = %frame.target(),
        horizon,
        observed = frame.len(),
        "Forecast complete"
    );

    Ok(Forecast {
        target: frame.target().to_string(),
        observed: frame.y().to_vec(),
        values,
        seed_row,
    })
}
