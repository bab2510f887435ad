//! Canonicalization: provider bars → validated, date-ascending price series.

use super::provider::{DataError, RawBar};
use crate::series::{PricePoint, PriceSeries};
use chrono::NaiveDate;

/// Turn raw provider bars into a `PriceSeries`.
///
/// Uses the adjusted close (falling back to the raw close), drops bars with
/// neither, sorts by date, and rejects duplicate dates and prices that are
/// non-finite or not strictly positive. An empty result is an error.
pub fn canonicalize(
    symbol: &str,
    mut bars: Vec<RawBar>,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<PriceSeries, DataError> {
    bars.sort_by_key(|b| b.date);

    let mut points: Vec<PricePoint> = Vec::with_capacity(bars.len());
    let mut fallbacks = 0usize;

    for bar in &bars {
        let Some(close) = bar.adjusted_close() else {
            log::debug!("{symbol}: no close on {}, skipping", bar.date);
            continue;
        };
        if bar.adj_close.is_none() {
            fallbacks += 1;
        }

        if !close.is_finite() || close <= 0.0 {
            return Err(DataError::InvalidPrice {
                symbol: symbol.to_string(),
                date: bar.date,
                value: close,
            });
        }

        if points.last().is_some_and(|p| p.date == bar.date) {
            return Err(DataError::DuplicateDate {
                symbol: symbol.to_string(),
                date: bar.date,
            });
        }

        points.push(PricePoint {
            date: bar.date,
            close,
        });
    }

    if fallbacks > 0 {
        log::warn!("{symbol}: {fallbacks} bar(s) had no adjusted close, used raw close");
    }

    if points.is_empty() {
        return Err(DataError::EmptySeries {
            symbol: symbol.to_string(),
            start,
            end,
        });
    }

    Ok(PriceSeries::new(symbol, points))
}
