//! CSV import provider.
//!
//! Reads files in Yahoo's historical-download layout
//! (`Date,Open,High,Low,Close,Adj Close,Volume`). Only `Date` and `Close`
//! are required; `Adj Close` is used when present. Yahoo writes `null` for
//! missing values, which is read as absent.

use super::provider::{DataError, DataProvider, DataSource, FetchResult, RawBar};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Close", deserialize_with = "csv::invalid_option")]
    close: Option<f64>,
    #[serde(
        rename = "Adj Close",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    adj_close: Option<f64>,
}

/// Provider that serves each symbol from its own CSV file.
#[derive(Debug, Default)]
pub struct CsvProvider {
    files: HashMap<String, PathBuf>,
}

impl CsvProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the file that holds `symbol`'s history.
    pub fn with_file(mut self, symbol: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.files.insert(symbol.into(), path.into());
        self
    }

    /// Parse all rows from a reader, keeping those dated within `[start, end)`.
    pub fn read_bars<R: Read>(
        reader: R,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawBar>, DataError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut bars = Vec::new();
        for row in rdr.deserialize::<CsvRow>() {
            let row = row?;
            if row.date < start || row.date >= end {
                continue;
            }
            if row.close.is_none() && row.adj_close.is_none() {
                continue;
            }
            bars.push(RawBar {
                date: row.date,
                close: row.close,
                adj_close: row.adj_close,
            });
        }
        Ok(bars)
    }

    fn path_for(&self, symbol: &str) -> Result<&Path, DataError> {
        self.files
            .get(symbol)
            .map(PathBuf::as_path)
            .ok_or_else(|| DataError::NoCsvForSymbol {
                symbol: symbol.to_string(),
            })
    }
}

impl DataProvider for CsvProvider {
    fn name(&self) -> &str {
        "csv_import"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, DataError> {
        let path = self.path_for(symbol)?;
        log::debug!("reading {symbol} from {}", path.display());
        let file = std::fs::File::open(path)?;
        let bars = Self::read_bars(file, start, end)?;

        Ok(FetchResult {
            symbol: symbol.to_string(),
            bars,
            source: DataSource::CsvImport,
        })
    }
}
