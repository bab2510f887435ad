//! Single-feature ordinary least squares.
//!
//! Fits y = slope·x + intercept on the full sample and evaluates in-sample:
//! fitted values, mean squared error, and the coefficient of determination.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RegressionError {
    #[error("x has {x} values but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("regression needs at least 2 observations, got {0}")]
    InsufficientData(usize),

    #[error("explanatory variable has zero variance; slope is undefined")]
    DegenerateInput,

    #[error("non-finite value at observation {0}")]
    NonFinite(usize),
}

/// Fitted line coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Least-squares fit of `y` on `x`.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self, RegressionError> {
        validate(x, y)?;

        let n = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / n;
        let y_mean = y.iter().sum::<f64>() / n;

        let (sxx, sxy) = x
            .iter()
            .zip(y)
            .fold((0.0, 0.0), |(sxx, sxy), (&xi, &yi)| {
                let dx = xi - x_mean;
                (sxx + dx * dx, sxy + dx * (yi - y_mean))
            });

        if sxx <= 0.0 {
            return Err(RegressionError::DegenerateInput);
        }

        let slope = sxy / sxx;
        Ok(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    pub fn predict_one(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn predict(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&xi| self.predict_one(xi)).collect()
    }
}

/// A fit together with its in-sample diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub fit: LinearFit,
    /// Predicted y for each input x, in input order.
    pub fitted: Vec<f64>,
    pub mse: f64,
    pub r_squared: f64,
}

impl RegressionResult {
    pub fn compute(x: &[f64], y: &[f64]) -> Result<Self, RegressionError> {
        let fit = LinearFit::fit(x, y)?;
        let fitted = fit.predict(x);
        Ok(Self {
            fit,
            mse: mean_squared_error(y, &fitted)?,
            r_squared: r2_score(y, &fitted)?,
            fitted,
        })
    }
}

/// mean((y - ŷ)²)
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64, RegressionError> {
    check_pair(actual, predicted)?;
    Ok(sum_squared_residuals(actual, predicted) / actual.len() as f64)
}

/// 1 - SS_res / SS_tot.
///
/// A constant `actual` has SS_tot = 0: the score is 1.0 if the prediction is
/// exact and 0.0 otherwise.
pub fn r2_score(actual: &[f64], predicted: &[f64]) -> Result<f64, RegressionError> {
    check_pair(actual, predicted)?;

    let mean = actual.iter().sum::<f64>() / actual.len() as f64;
    let ss_tot: f64 = actual.iter().map(|&a| (a - mean).powi(2)).sum();
    let ss_res = sum_squared_residuals(actual, predicted);

    if ss_tot == 0.0 {
        return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
    }
    Ok(1.0 - ss_res / ss_tot)
}

fn sum_squared_residuals(actual: &[f64], predicted: &[f64]) -> f64 {
    actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum()
}

fn check_pair(a: &[f64], b: &[f64]) -> Result<(), RegressionError> {
    if a.len() != b.len() {
        return Err(RegressionError::LengthMismatch {
            x: a.len(),
            y: b.len(),
        });
    }
    if a.is_empty() {
        return Err(RegressionError::InsufficientData(0));
    }
    Ok(())
}

fn validate(x: &[f64], y: &[f64]) -> Result<(), RegressionError> {
    check_pair(x, y)?;
    if x.len() < 2 {
        return Err(RegressionError::InsufficientData(x.len()));
    }
    if let Some(i) = x
        .iter()
        .zip(y)
        .position(|(a, b)| !a.is_finite() || !b.is_finite())
    {
        return Err(RegressionError::NonFinite(i));
    }
    Ok(())
}
