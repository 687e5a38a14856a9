//! Predictor/target matrices built from a feature selection

use crate::error::{PipelineError, Result};
use crate::features::{FeatureSelection, FeatureTable};

/// Complete rows of the selected features, split into predictors and target
#[derive(Debug, Clone, PartialEq)]
pub struct ModelFrame {
    predictors: Vec<String>,
    target: String,
    x: Vec<Vec<f64>>,
    y: Vec<f64>,
}

impl ModelFrame {
    /// Keep the rows where every selected feature is defined; the last
    /// selected feature becomes the target.
    pub fn from_selection(table: &FeatureTable, selection: &FeatureSelection) -> Result<Self> {
        selection.ensure_modelable()?;

        if let Some(unknown) = selection.features().iter().find(|f| !table.contains(f)) {
            return Err(PipelineError::UnknownFeature(unknown.clone()));
        }

        let columns = selection
            .features()
            .iter()
            .map(|f| table.dataset().numeric_values(f))
            .collect::<Result<Vec<_>>>()?;

        let mut x = Vec::new();
        let mut y = Vec::new();
        for row in 0..table.dataset().len() {
            let values: Option<Vec<f64>> = columns.iter().map(|c| c[row]).collect();
            if let Some(mut values) = values {
                if let Some(target) = values.pop() {
                    y.push(target);
                    x.push(values);
                }
            }
        }

        let target = selection
            .target()
            .map(str::to_string)
            .ok_or(PipelineError::InsufficientFeatures { selected: 0 })?;

        Ok(Self {
            predictors: selection.predictors().to_vec(),
            target,
            x,
            y,
        })
    }

    /// Predictor column names
    pub fn predictors(&self) -> &[String] {
        &self.predictors
    }

    /// Target column name
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Predictor rows
    pub fn x(&self) -> &[Vec<f64>] {
        &self.x
    }

    /// Target values
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of complete rows
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Check if no complete row remains
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Rows at the given positions, in the given order
    pub fn subset(&self, indices: &[usize]) -> Self {
        Self {
            predictors: self.predictors.clone(),
            target: self.target.clone(),
            x: indices.iter().map(|&i| self.x[i].clone()).collect(),
            y: indices.iter().map(|&i| self.y[i]).collect(),
        }
    }

    /// Predictors of the last complete row
    pub fn last_predictor_row(&self) -> Option<&[f64]> {
        self.x.last().map(Vec::as_slice)
    }
}
