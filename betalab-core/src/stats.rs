//! Return statistics — pure functions over in-memory series.
//!
//! Slice functions do the arithmetic; `SeriesSummary::compute` bundles them for
//! one price series. Empty or too-short input is an error, never a silent zero.

use crate::series::{DailyReturn, PriceSeries, ReturnSeries};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("cannot compute {what} of an empty series")]
    EmptySeries { what: &'static str },

    #[error("{what} needs at least {needed} values, got {got}")]
    InsufficientData {
        what: &'static str,
        needed: usize,
        got: usize,
    },

    #[error("price at position {index} is {value}; returns need a positive previous price")]
    NonPositivePrice { index: usize, value: f64 },
}

/// Descriptive statistics of one price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub average: f64,
    pub returns: ReturnSeries,
    /// Sample standard deviation of the daily returns.
    pub volatility: f64,
    pub annualized_volatility: f64,
}

impl SeriesSummary {
    pub fn compute(series: &PriceSeries, trading_days_per_year: u32) -> Result<Self, StatsError> {
        let average = mean(&series.closes())?;
        let returns = daily_returns(series)?;
        let volatility = volatility(&returns.values())?;
        Ok(Self {
            average,
            returns,
            volatility,
            annualized_volatility: annualized_volatility(volatility, trading_days_per_year),
        })
    }
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptySeries { what: "mean" });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Percent change between consecutive values: `(p[t] - p[t-1]) / p[t-1]`.
///
/// Returns one element fewer than the input.
pub fn pct_change(prices: &[f64]) -> Result<Vec<f64>, StatsError> {
    if prices.is_empty() {
        return Err(StatsError::EmptySeries {
            what: "daily returns",
        });
    }
    prices
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            if w[0] <= 0.0 {
                return Err(StatsError::NonPositivePrice {
                    index: i,
                    value: w[0],
                });
            }
            Ok((w[1] - w[0]) / w[0])
        })
        .collect()
}

/// Daily returns of a price series, each stamped with the later day's date.
pub fn daily_returns(series: &PriceSeries) -> Result<ReturnSeries, StatsError> {
    let values = pct_change(&series.closes())?;
    let returns = series
        .points
        .iter()
        .skip(1)
        .zip(values)
        .map(|(p, value)| DailyReturn {
            date: p.date,
            value,
        })
        .collect();

    Ok(ReturnSeries {
        symbol: series.symbol.clone(),
        returns,
    })
}

/// Sample standard deviation (n - 1 denominator).
pub fn sample_std_dev(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptySeries {
            what: "standard deviation",
        });
    }
    if values.len() < 2 {
        return Err(StatsError::InsufficientData {
            what: "sample standard deviation",
            needed: 2,
            got: values.len(),
        });
    }
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Ok(variance.sqrt())
}

/// Daily volatility: sample standard deviation of daily returns.
pub fn volatility(returns: &[f64]) -> Result<f64, StatsError> {
    sample_std_dev(returns)
}

/// Scale daily volatility by √(trading days per year).
pub fn annualized_volatility(daily_volatility: f64, trading_days_per_year: u32) -> f64 {
    daily_volatility * f64::from(trading_days_per_year).sqrt()
}
