//! Command-line arguments for the stock dashboard.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use stock_common::params::{FORECAST_HORIZON, HISTORY_DAYS, SIMULATED_LATENCY_MS};
use stock_common::range::TimeRange;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Search the popular symbols by ticker or company name and exit.
    #[clap(long)]
    pub query: Option<String>,

    /// Ticker symbol to display.
    #[clap(long, default_value = "AAPL")]
    pub symbol: String,

    /// Display name of the symbol; looked up among popular symbols when omitted.
    #[clap(long)]
    pub name: Option<String>,

    /// Visible history window.
    #[clap(long, value_enum, ignore_case = true, default_value_t = TimeRange::OneMonth)]
    pub range: TimeRange,

    /// Days of generated history before today.
    #[clap(long, default_value_t = HISTORY_DAYS)]
    pub days: i64,

    /// Days to forecast.
    #[clap(long, default_value_t = FORECAST_HORIZON)]
    pub horizon: usize,

    /// Seed for a reproducible run.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Simulated data source latency in milliseconds.
    #[clap(long, default_value_t = SIMULATED_LATENCY_MS)]
    pub latency_ms: u64,

    /// Print the snapshot as JSON instead of the text report.
    #[clap(long)]
    pub json: bool,
}
