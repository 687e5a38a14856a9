//! Per-session pipeline state
//!
//! A [`PipelineSession`] owns one uploaded dataset and the user's feature
//! selection. Every stage is a pure function of that state plus its
//! parameters; the session only records which stage ran last and what it
//! returned. A failing stage leaves the dataset, selection and stage as they
//! were.

use crate::cleaning::{clean, CleaningOutcome};
use crate::config::PipelineConfig;
use crate::data::{DataLoader, Dataset};
use crate::error::{PipelineError, Result};
use crate::evaluation::{evaluate, Evaluation};
use crate::features::{FeatureSelection, FeatureTable};
use crate::forecast::{forecast, Forecast};
use crate::models::TrainedLinearRegression;
use crate::training::train;
use std::io::Read;

/// Stage the session reached most recently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Unloaded,
    Loaded,
    Cleaned,
    FeatureSelected,
    Trained,
    Evaluated,
    Forecasted,
}

/// One user's dataset, selection and latest stage outputs
#[derive(Debug, Clone)]
pub struct PipelineSession {
    config: PipelineConfig,
    stage: PipelineStage,
    dataset: Option<Dataset>,
    selection: Option<FeatureSelection>,
    cleaned: Option<CleaningOutcome>,
    model: Option<TrainedLinearRegression>,
    evaluation: Option<Evaluation>,
    forecast: Option<Forecast>,
}

impl Default for PipelineSession {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl PipelineSession {
    /// Create an empty session
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            stage: PipelineStage::Unloaded,
            dataset: None,
            selection: None,
            cleaned: None,
            model: None,
            evaluation: None,
            forecast: None,
        }
    }

    /// Current stage
    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Session configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Loaded dataset, if any
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Explicit feature selection, if the user made one
    pub fn selection(&self) -> Option<&FeatureSelection> {
        self.selection.as_ref()
    }

    /// Output of the last cleaning run
    pub fn cleaned(&self) -> Option<&CleaningOutcome> {
        self.cleaned.as_ref()
    }

    /// Model of the last training run
    pub fn model(&self) -> Option<&TrainedLinearRegression> {
        self.model.as_ref()
    }

    /// Result of the last evaluation
    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    /// Result of the last forecast
    pub fn last_forecast(&self) -> Option<&Forecast> {
        self.forecast.as_ref()
    }

    /// Replace the dataset with a freshly uploaded table
    ///
    /// On failure the previous dataset and selection are kept.
    pub fn load_reader<R: Read>(&mut self, reader: R) -> Result<&Dataset> {
        let dataset = DataLoader::from_reader(reader, &self.config)?;

        self.dataset = Some(dataset);
        self.selection = None;
        self.cleaned = None;
        self.model = None;
        self.evaluation = None;
        self.forecast = None;
        self.stage = PipelineStage::Loaded;

        self.require_dataset()
    }

    /// Replace the dataset with an in-memory upload
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<&Dataset> {
        self.load_reader(bytes)
    }

    /// Run missing-value and outlier removal on the loaded dataset
    pub fn clean(&mut self) -> Result<&CleaningOutcome> {
        let outcome = clean(self.require_dataset()?, &self.config)?;
        self.stage = PipelineStage::Cleaned;
        Ok(self.cleaned.insert(outcome))
    }

    /// Derive the feature table from the raw dataset
    ///
    /// Without an explicit selection, the whole catalog becomes the selection.
    pub fn engineer_features(&mut self) -> Result<FeatureTable> {
        let table = FeatureTable::from_dataset(self.require_dataset()?, &self.config)?;
        let selection = match &self.selection {
            Some(selection) if selection.features().iter().all(|f| table.contains(f)) => {
                selection.clone()
            }
            _ => table.default_selection(),
        };

        self.selection = Some(selection);
        self.stage = PipelineStage::FeatureSelected;
        Ok(table)
    }

    /// Choose the modeling features; the last one is the target
    pub fn select_features(&mut self, selection: FeatureSelection) -> Result<&FeatureSelection> {
        let table = FeatureTable::from_dataset(self.require_dataset()?, &self.config)?;
        if let Some(unknown) = selection.features().iter().find(|f| !table.contains(f)) {
            return Err(PipelineError::UnknownFeature(unknown.clone()));
        }

        self.stage = PipelineStage::FeatureSelected;
        Ok(self.selection.insert(selection))
    }

    /// Fit a model on the current selection
    pub fn train(&mut self) -> Result<&TrainedLinearRegression> {
        let selection = self.effective_selection()?;
        let model = train(self.require_dataset()?, &selection, &self.config)?;
        self.stage = PipelineStage::Trained;
        Ok(self.model.insert(model))
    }

    /// Score the current selection on a held-out split
    pub fn evaluate(&mut self) -> Result<&Evaluation> {
        let selection = self.effective_selection()?;
        let evaluation = evaluate(self.require_dataset()?, &selection, &self.config)?;
        self.stage = PipelineStage::Evaluated;
        Ok(self.evaluation.insert(evaluation))
    }

    /// Forecast `horizon` steps past the observed target series
    pub fn forecast(&mut self, horizon: usize) -> Result<&Forecast> {
        let selection = self.effective_selection()?;
        let result = forecast(self.require_dataset()?, &selection, horizon, &self.config)?;
        self.stage = PipelineStage::Forecasted;
        Ok(self.forecast.insert(result))
    }

    fn require_dataset(&self) -> Result<&Dataset> {
        self.dataset.as_ref().ok_or(PipelineError::NoDataset)
    }

    /// Explicit selection, or the full catalog when none was made
    fn effective_selection(&self) -> Result<FeatureSelection> {
        match &self.selection {
            Some(selection) => Ok(selection.clone()),
            None => {
                let table = FeatureTable::from_dataset(self.require_dataset()?, &self.config)?;
                Ok(table.default_selection())
            }
        }
    }
}
