//! Rolling-mean and lag feature engineering
//!
//! Features are always derived from the raw, uncleaned dataset. Every stage
//! that needs them calls [`FeatureTable::from_dataset`] again.

use crate::config::PipelineConfig;
use crate::data::{Dataset, Value};
use crate::error::{PipelineError, Result};
use series_math::{lag, rolling_mean};

/// Dataset augmented with engineered features, plus the feature catalog
#[derive(Debug, Clone)]
pub struct FeatureTable {
    dataset: Dataset,
    catalog: Vec<String>,
}

impl FeatureTable {
    /// Engineer features for every numeric column of the dataset
    pub fn from_dataset(dataset: &Dataset, config: &PipelineConfig) -> Result<Self> {
        engineer_features(dataset, &dataset.numeric_columns(), config)
    }

    /// Augmented dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Candidate feature names: raw numeric columns first, then one
    /// rolling/lag pair per column
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Whether a feature is part of the catalog
    pub fn contains(&self, feature: &str) -> bool {
        self.catalog.iter().any(|f| f == feature)
    }

    /// Selection used when the user has not picked one: the whole catalog
    pub fn default_selection(&self) -> FeatureSelection {
        FeatureSelection::new(self.catalog.clone())
    }
}

/// Add a trailing mean and a lag copy of each listed numeric column
///
/// The catalog lists every name once, in first-seen order.
pub fn engineer_features(
    dataset: &Dataset,
    numeric_columns: &[String],
    config: &PipelineConfig,
) -> Result<FeatureTable> {
    let rolling_suffix = config.rolling_suffix();
    let lag_suffix = config.lag_suffix();

    let mut catalog: Vec<String> = numeric_columns.to_vec();
    let mut augmented = dataset.clone();

    // Columns are read back from the augmented table, so an uploaded column
    // named like an engineered one is overwritten before its own features
    for column in numeric_columns {
        let values = augmented.numeric_values(column)?;

        let means = rolling_mean(&values, config.rolling_window)?;
        let lagged = lag(&values, config.lag_periods);

        let rolling_name = format!("{}{}", column, rolling_suffix);
        let lag_name = format!("{}{}", column, lag_suffix);

        augmented = augmented
            .with_column(&rolling_name, means.into_iter().map(Value::from).collect())?
            .with_column(&lag_name, lagged.into_iter().map(Value::from).collect())?;

        for name in [rolling_name, lag_name] {
            if !catalog.contains(&name) {
                catalog.push(name);
            }
        }
    }

    tracing::info!(
        numeric_columns = numeric_columns.len(),
        features = catalog.len(),
        "Feature engineering complete"
    );

    Ok(FeatureTable {
        dataset: augmented,
        catalog,
    })
}

/// Ordered feature names chosen for modeling. The last entry is the target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureSelection {
    features: Vec<String>,
}

impl FeatureSelection {
    /// Create a selection from feature names, keeping their order
    pub fn new<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            features: features.into_iter().map(Into::into).collect(),
        }
    }

    /// All selected names, in order
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Number of selected features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Fail unless there is at least one predictor and a target
    pub fn ensure_modelable(&self) -> Result<()> {
        if self.features.len() < 2 {
            return Err(PipelineError::InsufficientFeatures {
                selected: self.features.len(),
            });
        }
        Ok(())
    }

    /// Every entry but the last
    pub fn predictors(&self) -> &[String] {
        match self.features.split_last() {
            Some((_, predictors)) => predictors,
            None => &[],
        }
    }

    /// The last entry
    pub fn target(&self) -> Option<&str> {
        self.features.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_split() {
        let selection = FeatureSelection::new(["a", "b", "c"]);
        assert_eq!(selection.predictors(), ["a".to_string(), "b".to_string()]);
        assert_eq!(selection.target(), Some("c"));
        assert!(selection.ensure_modelable().is_ok());
    }

    #[test]
    fn test_single_feature_not_modelable() {
        let selection = FeatureSelection::new(["a"]);
        assert!(matches!(
            selection.ensure_modelable(),
            Err(PipelineError::InsufficientFeatures { selected: 1 })
        ));
        assert!(FeatureSelection::default().predictors().is_empty());
    }
}
