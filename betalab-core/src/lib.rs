//! BetaLab Core — equity-vs-index analysis pipeline.
//!
//! This crate contains everything except the terminal figure:
//! - Data acquisition (Yahoo Finance, CSV import) behind the `DataProvider` trait
//! - Canonicalization and date alignment of price series
//! - Return statistics (mean, daily returns, volatility, annualized volatility)
//! - Single-feature OLS regression with MSE and R² diagnostics
//! - The labelled text report and its serializable snapshot

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod regression;
pub mod report;
pub mod series;
pub mod stats;

pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use pipeline::run_analysis;
pub use report::AnalysisReport;
