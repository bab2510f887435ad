//! BetaLab CLI — one-shot equity-vs-index analysis.
//!
//! Fetches JPM and the S&P 500 (`^GSPC`) for 2015-04-01 to 2015-06-25, prints
//! the equity's average, daily returns, and volatility, regresses JPM on the
//! index, prints the fit diagnostics, and shows the scatter/fit figure.
//!
//! Exit code 0 on success, 1 on any failure.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use betalab_core::data::{CsvProvider, DataProvider, YahooProvider};
use betalab_core::{run_analysis, AnalysisConfig};
use betalab_plot::show_fit_plot;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "betalab",
    about = "BetaLab — JPM vs S&P 500 statistics and linear regression"
)]
struct Cli {
    /// Read the equity from a Yahoo-format CSV file instead of downloading it.
    #[arg(long, requires = "index_csv")]
    equity_csv: Option<PathBuf>,

    /// Read the index from a Yahoo-format CSV file instead of downloading it.
    #[arg(long, requires = "equity_csv")]
    index_csv: Option<PathBuf>,

    /// Skip the interactive figure.
    #[arg(long, default_value_t = false)]
    no_plot: bool,

    /// Also print the full report as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("Application Started");
    let code = match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("\n{e:#}");
            ExitCode::from(1)
        }
    };
    log::info!("Application Ended");
    code
}

fn run(cli: &Cli) -> Result<()> {
    let config = AnalysisConfig::default();
    let provider = build_provider(cli, &config)?;

    let report = run_analysis(provider.as_ref(), &config)?;
    print!("{report}");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if !cli.no_plot {
        show_fit_plot(&report)?;
    }
    println!();

    Ok(())
}

fn build_provider(cli: &Cli, config: &AnalysisConfig) -> Result<Box<dyn DataProvider>> {
    match (&cli.equity_csv, &cli.index_csv) {
        (Some(equity), Some(index)) => Ok(Box::new(
            CsvProvider::new()
                .with_file(config.equity_symbol.as_str(), equity.clone())
                .with_file(config.index_symbol.as_str(), index.clone()),
        )),
        _ => Ok(Box::new(YahooProvider::new()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_the_default_run() {
        let cli = Cli::try_parse_from(["betalab"]).unwrap();
        assert!(cli.equity_csv.is_none());
        assert!(!cli.no_plot);
        assert!(!cli.json);
    }

    #[test]
    fn csv_inputs_come_in_pairs() {
        assert!(Cli::try_parse_from(["betalab", "--equity-csv", "jpm.csv"]).is_err());
        assert!(Cli::try_parse_from([
            "betalab",
            "--equity-csv",
            "jpm.csv",
            "--index-csv",
            "gspc.csv"
        ])
        .is_ok());
    }
}
