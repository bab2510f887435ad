//! End-to-end pipeline tests against in-memory providers.

use betalab_core::data::{DataError, DataSource, RawBar, StaticProvider};
use betalab_core::{run_analysis, AnalysisConfig, AnalysisError};
use chrono::NaiveDate;

const EQUITY: [f64; 5] = [100.0, 101.0, 102.0, 101.0, 103.0];
const INDEX: [f64; 5] = [2000.0, 2010.0, 2005.0, 2015.0, 2020.0];

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn five_day_provider() -> StaticProvider {
    let first = date("2015-04-01");
    StaticProvider::new()
        .with_closes("JPM", first, &EQUITY)
        .with_closes("^GSPC", first, &INDEX)
}

#[test]
fn five_day_scenario() {
    let report = run_analysis(&five_day_provider(), &AnalysisConfig::default()).unwrap();

    assert!((report.summary.average - 101.4).abs() < 1e-12);

    let returns = report.summary.returns.values();
    assert_eq!(returns.len(), 4);
    assert!((returns[0] - 0.01).abs() < 1e-12);

    assert!(report.summary.volatility >= 0.0);
    assert_eq!(
        report.summary.annualized_volatility,
        report.summary.volatility * 252.0_f64.sqrt()
    );

    // Both series rise over the window, so the slope is positive
    assert!(report.regression.fit.slope > 0.0);
    assert_eq!(report.regression.fitted.len(), 5);
    assert!(report.regression.r_squared >= 0.0 && report.regression.r_squared <= 1.0);
    assert_eq!(report.source, DataSource::Static);
}

#[test]
fn report_text_has_labelled_lines() {
    let report = run_analysis(&five_day_provider(), &AnalysisConfig::default()).unwrap();
    let text = report.to_string();

    assert!(text.starts_with("Average Stock Value of JPM: 101.4\n"));
    assert!(text.contains("Daily Returns of JPM: 4 observations\n"));
    assert!(text.contains("  2015-04-02    0.010000\n"));
    assert!(text.contains("Stock Volatility of JPM: "));
    assert!(text.contains("Annualized Stock Volatility of JPM: "));
    assert!(text.contains("Coefficients: "));
    assert!(text.contains("Mean Squared Error: "));
    assert!(text.contains("Variance Score: "));

    for line in text.lines().filter(|l| !l.starts_with("  ")) {
        assert!(line.contains(": "), "unlabelled line: {line}");
    }
}

#[test]
fn report_serializes_to_json() {
    let report = run_analysis(&five_day_provider(), &AnalysisConfig::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["config"]["equity_symbol"], "JPM");
    assert_eq!(json["observations"]["x"].as_array().unwrap().len(), 5);
    assert!(json["regression"]["fit"]["slope"].as_f64().unwrap() > 0.0);
}

#[test]
fn prices_outside_window_are_ignored() {
    // Starts two weekdays before the window
    let first = date("2015-03-30");
    let provider = StaticProvider::new()
        .with_closes("JPM", first, &[1.0, 1.0, 100.0, 101.0, 102.0])
        .with_closes("^GSPC", first, &[1.0, 1.0, 2000.0, 2010.0, 2005.0]);

    let report = run_analysis(&provider, &AnalysisConfig::default()).unwrap();
    assert!((report.summary.average - 101.0).abs() < 1e-12);
    assert_eq!(report.observations.len(), 3);
}

#[test]
fn empty_equity_series_fails() {
    let provider = StaticProvider::new()
        .with_bars("JPM", vec![])
        .with_closes("^GSPC", date("2015-04-01"), &INDEX);

    let err = run_analysis(&provider, &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Data(DataError::EmptySeries { .. })
    ));
}

#[test]
fn missing_index_fails() {
    let provider = StaticProvider::new().with_closes("JPM", date("2015-04-01"), &EQUITY);

    let err = run_analysis(&provider, &AnalysisConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "symbol not found: ^GSPC");
}

#[test]
fn two_prices_are_too_few_for_volatility() {
    let provider = five_day_provider().with_closes("JPM", date("2015-04-01"), &[100.0, 101.0]);

    let err = run_analysis(&provider, &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::Stats(_)));
}

#[test]
fn flat_index_cannot_be_regressed() {
    let provider = five_day_provider().with_closes("^GSPC", date("2015-04-01"), &[2000.0; 5]);

    let err = run_analysis(&provider, &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::Regression(_)));
}

#[test]
fn missing_adjusted_close_uses_raw_close() {
    let bars: Vec<RawBar> = ["2015-04-01", "2015-04-02", "2015-04-03"]
        .iter()
        .zip([10.0, 11.0, 12.0])
        .map(|(d, close)| RawBar {
            date: date(d),
            close: Some(close),
            adj_close: None,
        })
        .collect();
    let provider = five_day_provider().with_bars("JPM", bars);

    let report = run_analysis(&provider, &AnalysisConfig::default()).unwrap();
    assert!((report.summary.average - 11.0).abs() < 1e-12);
    assert_eq!(report.observations.len(), 3);
}
