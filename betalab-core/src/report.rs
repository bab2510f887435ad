//! Labelled text report and its serializable snapshot.
//!
//! Each scalar renders as one `"<Label>: <value>"` line. The daily return
//! series renders its label line followed by one dated line per return.

use crate::config::AnalysisConfig;
use crate::data::{AlignedPair, DataSource};
use crate::regression::RegressionResult;
use crate::stats::SeriesSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything one run computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub config: AnalysisConfig,
    /// Where the equity prices came from.
    pub source: DataSource,
    pub summary: SeriesSummary,
    /// Index/equity closes the regression was fitted on.
    pub observations: AlignedPair,
    pub regression: RegressionResult,
}

impl AnalysisReport {
    /// `(label, value)` pairs for every scalar line, in print order.
    pub fn scalar_lines(&self) -> Vec<(String, f64)> {
        let equity = self.config.equity_label();
        vec![
            (format!("Average Stock Value of {equity}"), self.summary.average),
            (format!("Stock Volatility of {equity}"), self.summary.volatility),
            (
                format!("Annualized Stock Volatility of {equity}"),
                self.summary.annualized_volatility,
            ),
            ("Coefficients".to_string(), self.regression.fit.slope),
            ("Intercept".to_string(), self.regression.fit.intercept),
            ("Mean Squared Error".to_string(), self.regression.mse),
            ("Variance Score".to_string(), self.regression.r_squared),
        ]
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.scalar_lines();
        let equity = self.config.equity_label();

        let (label, value) = &lines[0];
        writeln!(f, "{label}: {value}")?;

        writeln!(
            f,
            "Daily Returns of {equity}: {} observations",
            self.summary.returns.len()
        )?;
        for r in &self.summary.returns.returns {
            writeln!(f, "  {}  {:>10.6}", r.date, r.value)?;
        }

        for (label, value) in &lines[1..] {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}
