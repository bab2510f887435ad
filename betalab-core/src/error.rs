//! Top-level error for the analysis pipeline.

use crate::data::DataError;
use crate::regression::RegressionError;
use crate::stats::StatsError;
use thiserror::Error;

/// Any failure between fetching prices and producing the report.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("statistics failed: {0}")]
    Stats(#[from] StatsError),

    #[error("regression failed: {0}")]
    Regression(#[from] RegressionError),
}
