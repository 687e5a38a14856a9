//! Tabular dataset handling
//!
//! A [`Dataset`] is an ordered table whose row order carries meaning: rolling
//! and lag features are computed along it. Column types are not fixed at load
//! time; every stage asks [`Dataset::numeric_columns`] for the columns that
//! currently hold only numbers.

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use csv::ReaderBuilder;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Tokens read as a missing cell
const MISSING_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-nan", "null", "NULL", "None", "#N/A",
];

/// A single cell of a dataset
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Numeric cell
    Number(f64),
    /// Any other text
    Text(String),
    /// Empty or NA-like cell
    Missing,
}

impl Value {
    /// Infer a cell value from raw text
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim();
        if MISSING_TOKENS.contains(&token) {
            return Value::Missing;
        }

        match token.parse::<f64>() {
            Ok(number) if number.is_nan() => Value::Missing,
            Ok(number) => Value::Number(number),
            Err(_) => Value::Text(token.to_string()),
        }
    }

    /// Whether the cell is missing
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl From<Option<f64>> for Value {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if !v.is_nan() => Value::Number(v),
            _ => Value::Missing,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "{}", s),
            Value::Missing => Ok(()),
        }
    }
}

/// An ordered table of rows keyed by column name
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Create a dataset, checking that every row matches the header
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(PipelineError::ParseError(format!(
                    "Duplicate column name '{}'",
                    name
                )));
            }
        }

        if let Some(bad) = rows.iter().position(|row| row.len() != columns.len()) {
            return Err(PipelineError::ParseError(format!(
                "Row {} has {} fields, expected {}",
                bad + 1,
                rows[bad].len(),
                columns.len()
            )));
        }

        Ok(Self { columns, rows })
    }

    /// Build a dataset from named numeric series of equal length
    pub fn from_numeric_columns(columns: Vec<(&str, Vec<Option<f64>>)>) -> Result<Self> {
        let height = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        if let Some((name, _)) = columns.iter().find(|(_, v)| v.len() != height) {
            return Err(PipelineError::ValidationError(format!(
                "Column '{}' length differs from the first column",
                name
            )));
        }

        let names = columns.iter().map(|(n, _)| n.to_string()).collect();
        let rows = (0..height)
            .map(|i| columns.iter().map(|(_, v)| Value::from(v[i])).collect())
            .collect();

        Self::new(names, rows)
    }

    /// Get the column names in declaration order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Get a cell by row index and column name
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[col])
    }

    /// Get the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether every non-missing value of the column is a number
    pub fn is_numeric_column(&self, name: &str) -> bool {
        match self.column_index(name) {
            Some(col) => self
                .rows
                .iter()
                .all(|r| matches!(r[col], Value::Number(_) | Value::Missing)),
            None => false,
        }
    }

    /// Names of the numeric columns, in declaration order
    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| self.is_numeric_column(c))
            .cloned()
            .collect()
    }

    /// Values of a numeric column, `None` where missing
    pub fn numeric_values(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let col = self
            .column_index(name)
            .ok_or_else(|| PipelineError::UnknownColumn(name.to_string()))?;

        self.rows
            .iter()
            .map(|r| match &r[col] {
                Value::Number(v) => Ok(Some(*v)),
                Value::Missing => Ok(None),
                Value::Text(_) => Err(PipelineError::NonNumericColumn(name.to_string())),
            })
            .collect()
    }

    /// Total number of missing cells
    pub fn missing_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.iter())
            .filter(|v| v.is_missing())
            .count()
    }

    /// Keep only the rows matching the predicate, preserving order
    pub fn retain_rows<F>(&self, mut keep: F) -> Dataset
    where
        F: FnMut(&[Value]) -> bool,
    {
        Dataset {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|r| keep(r.as_slice()))
                .cloned()
                .collect(),
        }
    }

    /// Add a column, or overwrite an existing one of the same name
    pub fn with_column(mut self, name: &str, values: Vec<Value>) -> Result<Dataset> {
        if values.len() != self.rows.len() {
            return Err(PipelineError::ValidationError(format!(
                "Column '{}' has {} values, dataset has {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }

        match self.column_index(name) {
            Some(col) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[col] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }

        Ok(self)
    }
}

/// Data loader for delimited text tables
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a dataset from a delimited file on disk
    pub fn from_csv<P: AsRef<Path>>(path: P, config: &PipelineConfig) -> Result<Dataset> {
        let file = File::open(path)?;
        Self::from_reader(file, config)
    }

    /// Load a dataset from an in-memory upload
    pub fn from_bytes(bytes: &[u8], config: &PipelineConfig) -> Result<Dataset> {
        Self::from_reader(bytes, config)
    }

    /// Load a dataset from any byte stream with a header row
    pub fn from_reader<R: Read>(reader: R, config: &PipelineConfig) -> Result<Dataset> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .delimiter(config.delimiter_byte())
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(PipelineError::ParseError(
                "No columns to parse from file".to_string(),
            ));
        }
        let columns: Vec<String> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if h.trim().is_empty() {
                    format!("Unnamed: {}", i)
                } else {
                    h.to_string()
                }
            })
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(Value::parse).collect());
        }

        let dataset = Dataset::new(columns, rows)?;
        tracing::info!(
            rows = dataset.len(),
            columns = dataset.columns().len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }
}
