//! Stock Dashboard — a terminal front end for the synthetic stock engine.
//! It looks up popular symbols, selects one, waits for the simulated data
//! source to answer and prints the quote statistics, the price history of the
//! chosen range and the forecast summary.
//!
//! Usage example (CLI):
//! ```bash
//! stock_dashboard --query inc
//! stock_dashboard --symbol TSLA --range 3M --seed 42
//! stock_dashboard --symbol MSFT --json
//! ```
//!
//! Logging goes to stderr and defaults to `info`; override it with `RUST_LOG`.
#![warn(missing_docs)]
mod args;
mod render;

use crate::args::Args;
use crate::render::render_report;
use chrono::Utc;
use clap::Parser;
use log::{error, info};
use stock_common::Result;
use stock_common::StockError;
use stock_common::tickers::{Ticker, lookup_symbols};
use stock_engine::model::view::history_in_range;
use stock_engine::{DashboardSession, SnapshotLoader, SnapshotSettings};
use std::time::Duration;

/// Extra time granted to a worker beyond the simulated latency.
const LOAD_GRACE: Duration = Duration::from_secs(30);

fn main() -> Result<(), StockError> {
    init_logger();
    let args = Args::parse();

    if let Some(query) = &args.query {
        let listings = lookup_symbols(query.trim());
        info!("{} symbols match {:?}", listings.len(), query);
        for listing in listings {
            println!("{:<6} {}", listing.symbol, listing.name);
        }
        return Ok(());
    }

    let name = resolve_name(&args.symbol, args.name.as_deref());
    let today = Utc::now().date_naive();
    let latency = Duration::from_millis(args.latency_ms);
    let settings = SnapshotSettings {
        history_days: args.days,
        horizon: args.horizon,
    };
    let loader = SnapshotLoader::new(latency, settings).with_today(today);
    let mut session = DashboardSession::new();

    let mut request = session.select_symbol(&args.symbol, &name)?;
    if let Some(seed) = args.seed {
        request = request.with_seed(seed);
    }
    let _worker = loader.load(request);

    while session.is_loading() {
        let outcome = loader.next_outcome(latency + LOAD_GRACE)?;
        session.accept(outcome);
    }

    if let Some(message) = session.last_error() {
        error!("{}", message);
        return Err(StockError::Load(String::from(message)));
    }

    let Some(snapshot) = session.selected() else {
        return Err(StockError::Load(String::from("no data selected")));
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
    } else {
        let view = history_in_range(&snapshot.history, args.range, today);
        print!("{}", render_report(snapshot, args.range, view));
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Picks the display name: explicit flag, popular symbol name, or the symbol itself.
fn resolve_name(symbol: &str, name: Option<&str>) -> String {
    if let Some(name) = name {
        return String::from(name);
    }
    symbol
        .trim()
        .parse::<Ticker>()
        .map(|t| String::from(t.name()))
        .unwrap_or_else(|_| symbol.trim().to_uppercase())
}
