//! Trailing moving averages over series with gaps
//!
//! A window only yields a mean once it is full and every value in it is
//! defined, so the first `window - 1` outputs are always `None`.

use crate::{MathError, Result};
use std::collections::VecDeque;

/// Trailing arithmetic mean over a fixed number of observations
#[derive(Debug, Clone)]
pub struct RollingMean {
    window: usize,
    values: VecDeque<Option<f64>>,
}

impl RollingMean {
    /// Create a new rolling mean over `window` observations
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(MathError::InvalidInput(
                "Window must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            window,
            values: VecDeque::with_capacity(window),
        })
    }

    /// Push the next observation and return the mean of the current window
    pub fn update(&mut self, value: Option<f64>) -> Option<f64> {
        self.values.push_back(value);
        if self.values.len() > self.window {
            self.values.pop_front();
        }

        self.value()
    }

    /// Mean of the current window, if it is full and has no gaps
    pub fn value(&self) -> Option<f64> {
        if self.values.len() < self.window {
            return None;
        }

        // Summing over the window each time keeps results exact for short windows
        let sum: Option<f64> = self.values.iter().copied().sum();
        sum.map(|s| s / self.window as f64)
    }

    /// Get the window length
    pub fn window(&self) -> usize {
        self.window
    }

    /// Reset the rolling mean, clearing all values
    pub fn reset(&mut self) {
        self.values.clear();
    }
}

/// Trailing mean of `window` observations for every position of `values`
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Result<Vec<Option<f64>>> {
    let mut mean = RollingMean::new(window)?;
    Ok(values.iter().map(|v| mean.update(*v)).collect())
}
