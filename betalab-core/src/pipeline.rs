//! The analysis pipeline: fetch → statistics → regression → report.
//!
//! Runs once, top to bottom. Nothing is printed here; the caller renders the
//! returned report, so a failure at any stage yields no partial output.

use crate::config::AnalysisConfig;
use crate::data::{align_closes, canonicalize, DataProvider, DataSource};
use crate::error::AnalysisError;
use crate::regression::RegressionResult;
use crate::report::AnalysisReport;
use crate::series::PriceSeries;
use crate::stats::SeriesSummary;

/// Fetch one symbol and canonicalize it into a price series.
///
/// Also returns where the prices came from.
pub fn load_series(
    provider: &dyn DataProvider,
    symbol: &str,
    config: &AnalysisConfig,
) -> Result<(PriceSeries, DataSource), AnalysisError> {
    log::debug!(
        "Fetching {symbol} from {} ({} to {})",
        provider.name(),
        config.start,
        config.end
    );
    let fetched = provider.fetch(symbol, config.start, config.end)?;
    let series = canonicalize(&fetched.symbol, fetched.bars, config.start, config.end)?;
    log::debug!("{symbol}: {} trading days", series.len());
    Ok((series, fetched.source))
}

/// Run the full analysis of `config.equity_symbol` against `config.index_symbol`.
pub fn run_analysis(
    provider: &dyn DataProvider,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, AnalysisError> {
    let (equity, source) = load_series(provider, &config.equity_symbol, config)?;
    let summary = SeriesSummary::compute(&equity, config.trading_days_per_year)?;

    let (index, _) = load_series(provider, &config.index_symbol, config)?;
    let observations = align_closes(&equity, &index)?;
    let regression = RegressionResult::compute(&observations.x, &observations.y)?;
    log::debug!(
        "fit: slope={} intercept={} r2={}",
        regression.fit.slope,
        regression.fit.intercept,
        regression.r_squared
    );

    Ok(AnalysisReport {
        config: config.clone(),
        source,
        summary,
        observations,
        regression,
    })
}
