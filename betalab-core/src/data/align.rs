//! Two-symbol date alignment.
//!
//! The regression pairs the index close and the equity close of the same
//! trading day. Dates present in only one series are dropped (inner join).

use super::provider::DataError;
use crate::series::PriceSeries;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Paired closes on the common trading days of two series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedPair {
    /// Common dates, ascending.
    pub dates: Vec<NaiveDate>,
    /// Index closes (explanatory variable), one per date.
    pub x: Vec<f64>,
    /// Equity closes (explained variable), one per date.
    pub y: Vec<f64>,
}

impl AlignedPair {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Inner-join `equity` and `index` on date.
pub fn align_closes(equity: &PriceSeries, index: &PriceSeries) -> Result<AlignedPair, DataError> {
    let index_by_date: HashMap<NaiveDate, f64> =
        index.points.iter().map(|p| (p.date, p.close)).collect();

    let mut dates = Vec::with_capacity(equity.len());
    let mut x = Vec::with_capacity(equity.len());
    let mut y = Vec::with_capacity(equity.len());

    for point in &equity.points {
        if let Some(&index_close) = index_by_date.get(&point.date) {
            dates.push(point.date);
            x.push(index_close);
            y.push(point.close);
        }
    }

    if dates.is_empty() {
        return Err(DataError::NoOverlap {
            equity: equity.symbol.clone(),
            index: index.symbol.clone(),
        });
    }

    let matched: HashSet<NaiveDate> = dates.iter().copied().collect();
    let unmatched_equity = equity.len() - dates.len();
    let unmatched_index = index
        .points
        .iter()
        .filter(|p| !matched.contains(&p.date))
        .count();
    let dropped = unmatched_equity + unmatched_index;
    if dropped > 0 {
        log::warn!(
            "{} / {}: dropped {dropped} unmatched trading day(s) before regression",
            equity.symbol,
            index.symbol
        );
    }

    Ok(AlignedPair { dates, x, y })
}
