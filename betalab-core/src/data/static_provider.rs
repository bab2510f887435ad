//! In-memory provider serving fixed closes.
//!
//! Used for offline runs and tests: each symbol maps to a list of bars and
//! `fetch` returns the ones inside the requested window.

use super::provider::{DataError, DataProvider, DataSource, FetchResult, RawBar};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct StaticProvider {
    bars: HashMap<String, Vec<RawBar>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register explicit bars for `symbol`.
    pub fn with_bars(mut self, symbol: impl Into<String>, bars: Vec<RawBar>) -> Self {
        self.bars.insert(symbol.into(), bars);
        self
    }

    /// Register `closes` for `symbol` on consecutive weekdays starting at `first`.
    pub fn with_closes(self, symbol: impl Into<String>, first: NaiveDate, closes: &[f64]) -> Self {
        let bars = weekdays_from(first)
            .zip(closes)
            .map(|(date, &close)| RawBar {
                date,
                close: Some(close),
                adj_close: Some(close),
            })
            .collect();
        self.with_bars(symbol, bars)
    }
}

impl DataProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, DataError> {
        let bars = self
            .bars
            .get(symbol)
            .ok_or_else(|| DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            })?
            .iter()
            .filter(|b| b.date >= start && b.date < end)
            .cloned()
            .collect();

        Ok(FetchResult {
            symbol: symbol.to_string(),
            bars,
            source: DataSource::Static,
        })
    }
}

fn weekdays_from(first: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    first
        .iter_days()
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn closes_land_on_weekdays() {
        // 2015-04-03 is a Friday
        let provider = StaticProvider::new().with_closes("JPM", date("2015-04-03"), &[1.0, 2.0]);
        let result = provider
            .fetch("JPM", date("2015-04-01"), date("2015-05-01"))
            .unwrap();

        assert_eq!(result.bars[0].date, date("2015-04-03"));
        assert_eq!(result.bars[1].date, date("2015-04-06"));
    }

    #[test]
    fn window_end_is_exclusive() {
        let provider =
            StaticProvider::new().with_closes("JPM", date("2015-04-01"), &[1.0, 2.0, 3.0]);
        let result = provider
            .fetch("JPM", date("2015-04-01"), date("2015-04-03"))
            .unwrap();

        assert_eq!(result.bars.len(), 2);
    }

    #[test]
    fn unknown_symbol_is_not_found() {
        let provider = StaticProvider::new();
        assert!(matches!(
            provider.fetch("JPM", date("2015-04-01"), date("2015-05-01")),
            Err(DataError::SymbolNotFound { .. })
        ));
    }
}
