//! Fixed analysis parameters.
//!
//! The ticker pair and the date window are constants. `AnalysisConfig::default()`
//! is the only place they are turned into values the pipeline reads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Equity whose price is explained.
pub const EQUITY_SYMBOL: &str = "JPM";

/// Market index used as the explanatory variable.
pub const INDEX_SYMBOL: &str = "^GSPC";

/// Display name of the index in labels and the plot.
pub const INDEX_LABEL: &str = "SnP500";

/// First day of the window (inclusive), as (year, month, day).
pub const START_DATE: (i32, u32, u32) = (2015, 4, 1);

/// Last day of the window (exclusive), as (year, month, day).
pub const END_DATE: (i32, u32, u32) = (2015, 6, 25);

/// Trading days per year used to annualize daily volatility.
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Parameters of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub equity_symbol: String,
    pub index_symbol: String,
    /// Human-readable index name; the raw Yahoo symbol (`^GSPC`) reads badly in labels.
    pub index_label: String,
    /// Window start (inclusive).
    pub start: NaiveDate,
    /// Window end (exclusive).
    pub end: NaiveDate,
    pub trading_days_per_year: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            equity_symbol: EQUITY_SYMBOL.to_string(),
            index_symbol: INDEX_SYMBOL.to_string(),
            index_label: INDEX_LABEL.to_string(),
            start: literal_date(START_DATE),
            end: literal_date(END_DATE),
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
        }
    }
}

impl AnalysisConfig {
    /// Label used for the equity in report lines and the plot.
    pub fn equity_label(&self) -> &str {
        &self.equity_symbol
    }
}

fn literal_date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("hard-coded calendar date is valid")
}
