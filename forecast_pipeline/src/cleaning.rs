//! Missing-value and outlier removal
//!
//! Outlier bands are computed column by column over the rows that survived the
//! previous columns, so the declaration order of numeric columns changes which
//! rows are kept.

use crate::config::PipelineConfig;
use crate::data::{Dataset, Value};
use crate::error::Result;
use statrs::statistics::Statistics;

/// Row and missing-cell counts before and after cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleaningReport {
    pub missing_before: usize,
    pub rows_before: usize,
    pub missing_after: usize,
    pub rows_after: usize,
}

/// Cleaned dataset together with its report
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    pub dataset: Dataset,
    pub report: CleaningReport,
}

/// Drop incomplete rows, then drop rows outside each numeric column's
/// `mean ± k·std` band.
pub fn clean(dataset: &Dataset, config: &PipelineConfig) -> Result<CleaningOutcome> {
    let mut cleaned = dataset.retain_rows(|row| !row.iter().any(Value::is_missing));

    for column in dataset.numeric_columns() {
        let values: Vec<f64> = cleaned
            .numeric_values(&column)?
            .into_iter()
            .flatten()
            .collect();

        // Sample standard deviation; NaN with fewer than two rows, which drops them
        let mean = Statistics::mean(&values);
        let std_dev = Statistics::std_dev(&values);
        let lower = mean - config.outlier_threshold * std_dev;
        let upper = mean + config.outlier_threshold * std_dev;

        let col = match cleaned.column_index(&column) {
            Some(col) => col,
            None => continue,
        };
        let before = cleaned.len();
        cleaned = cleaned.retain_rows(|row| match row[col] {
            Value::Number(v) => v >= lower && v <= upper,
            _ => false,
        });

        tracing::debug!(
            column = %column,
            mean,
            std_dev,
            dropped = before - cleaned.len(),
            "Outlier filter applied"
        );
    }

    let report = CleaningReport {
        missing_before: dataset.missing_count(),
        rows_before: dataset.len(),
        missing_after: cleaned.missing_count(),
        rows_after: cleaned.len(),
    };
    tracing::info!(
        rows_before = report.rows_before,
        rows_after = report.rows_after,
        missing_before = report.missing_before,
        "Preprocessing complete"
    );

    Ok(CleaningOutcome {
        dataset: cleaned,
        report,
    })
}
