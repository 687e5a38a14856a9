//! Ordinary least squares via the normal equations
//!
//! Predictors are centered before the Gram matrix is formed and each column
//! is scaled to unit norm, so prices next to volumes in the millions stay
//! well conditioned. The system is solved with Gauss-Jordan elimination and
//! partial pivoting. A column whose pivot vanishes is linearly dependent on
//! the earlier ones; its weight is fixed at zero, so rank-deficient designs
//! still produce a least squares solution.

use crate::{MathError, Result};

/// Pivot tolerance of the unit-diagonal system
const PIVOT_TOLERANCE: f64 = 1e-10;

/// Result of a least squares fit
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquaresFit {
    /// One weight per predictor column
    pub coefficients: Vec<f64>,
    /// Intercept term (zero when not fitted)
    pub intercept: f64,
    /// Number of linearly independent predictor columns
    pub rank: usize,
}

impl LeastSquaresFit {
    /// Predict the response for a single row of predictors
    pub fn predict_row(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.coefficients.len() {
            return Err(MathError::DimensionMismatch(format!(
                "expected {} predictors, got {}",
                self.coefficients.len(),
                row.len()
            )));
        }

        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(row)
                .map(|(w, x)| w * x)
                .sum::<f64>())
    }
}

/// Fit `y ≈ x · w + b` by ordinary least squares
///
/// `x` holds one row per observation. Every row must have the same length.
pub fn fit_ols(x: &[Vec<f64>], y: &[f64], fit_intercept: bool) -> Result<LeastSquaresFit> {
    if y.is_empty() {
        return Err(MathError::InsufficientData(
            "At least one observation is required".to_string(),
        ));
    }
    if x.len() != y.len() {
        return Err(MathError::DimensionMismatch(format!(
            "{} predictor rows but {} responses",
            x.len(),
            y.len()
        )));
    }

    let n_features = x[0].len();
    if let Some(bad) = x.iter().position(|row| row.len() != n_features) {
        return Err(MathError::DimensionMismatch(format!(
            "row {} has {} predictors, expected {}",
            bad,
            x[bad].len(),
            n_features
        )));
    }

    let n = y.len() as f64;
    let (x_mean, y_mean) = if fit_intercept {
        let mut x_mean = vec![0.0; n_features];
        for row in x {
            for (m, v) in x_mean.iter_mut().zip(row) {
                *m += v;
            }
        }
        x_mean.iter_mut().for_each(|m| *m /= n);
        (x_mean, y.iter().sum::<f64>() / n)
    } else {
        (vec![0.0; n_features], 0.0)
    };

    // Gram matrix and right-hand side of the centered system
    let mut gram = vec![vec![0.0; n_features]; n_features];
    let mut rhs = vec![0.0; n_features];
    for (row, target) in x.iter().zip(y) {
        let centered: Vec<f64> = row.iter().zip(&x_mean).map(|(v, m)| v - m).collect();
        let yc = target - y_mean;
        for i in 0..n_features {
            rhs[i] += centered[i] * yc;
            for j in i..n_features {
                gram[i][j] += centered[i] * centered[j];
            }
        }
    }
    for i in 0..n_features {
        for j in 0..i {
            gram[i][j] = gram[j][i];
        }
    }

    // Unit-norm columns; a constant column keeps a zero row and column
    let norms: Vec<f64> = (0..n_features).map(|i| gram[i][i].sqrt()).collect();
    for i in 0..n_features {
        for j in 0..n_features {
            gram[i][j] = if norms[i] > 0.0 && norms[j] > 0.0 {
                gram[i][j] / (norms[i] * norms[j])
            } else {
                0.0
            };
        }
        rhs[i] = if norms[i] > 0.0 { rhs[i] / norms[i] } else { 0.0 };
    }

    let (scaled, rank) = solve_normal_equations(gram, rhs);
    let coefficients: Vec<f64> = scaled
        .iter()
        .zip(&norms)
        .map(|(w, norm)| if *norm > 0.0 { w / norm } else { 0.0 })
        .collect();

    let intercept = if fit_intercept {
        y_mean
            - coefficients
                .iter()
                .zip(&x_mean)
                .map(|(w, m)| w * m)
                .sum::<f64>()
    } else {
        0.0
    };

    Ok(LeastSquaresFit {
        coefficients,
        intercept,
        rank,
    })
}

/// Solve the symmetric unit-diagonal system `a · w = b`, zeroing dependent columns
fn solve_normal_equations(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> (Vec<f64>, usize) {
    let n = b.len();

    let mut pivots: Vec<(usize, usize)> = Vec::with_capacity(n);
    let mut row = 0;

    for col in 0..n {
        if row == n {
            break;
        }

        let mut max_row = row;
        for r in row + 1..n {
            if a[r][col].abs() > a[max_row][col].abs() {
                max_row = r;
            }
        }

        if a[max_row][col].abs() <= PIVOT_TOLERANCE {
            // dependent column
            continue;
        }

        a.swap(row, max_row);
        b.swap(row, max_row);

        let pivot = a[row][col];
        for j in col..n {
            a[row][j] /= pivot;
        }
        b[row] /= pivot;

        for r in 0..n {
            if r != row {
                let factor = a[r][col];
                if factor != 0.0 {
                    for j in col..n {
                        a[r][j] -= factor * a[row][j];
                    }
                    b[r] -= factor * b[row];
                }
            }
        }

        pivots.push((row, col));
        row += 1;
    }

    let mut solution = vec![0.0; n];
    for &(r, c) in &pivots {
        solution[c] = b[r];
    }

    (solution, pivots.len())
}
