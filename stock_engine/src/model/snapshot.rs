//! Full data set of one symbol selection: quote, history and forecast.

use chrono::NaiveDate;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use stock_common::params::{FORECAST_HORIZON, HISTORY_DAYS};
use stock_common::{Result, StockError};

use crate::model::forecast::synthesize_forecast;
use crate::model::history::synthesize_history;
use crate::model::quote::Quote;
use crate::model::series::{ForecastSeries, HistorySeries};

/// Sizes of the generated series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotSettings {
    /// Days of history before today.
    pub history_days: i64,
    /// Days projected after the last history point.
    pub horizon: usize,
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        SnapshotSettings {
            history_days: HISTORY_DAYS,
            horizon: FORECAST_HORIZON,
        }
    }
}

/// Everything the dashboard shows for a symbol, held immutable for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    /// Current quote derived from the history tail.
    pub quote: Quote,
    /// Daily history ending at the generation date.
    pub history: HistorySeries,
    /// Forecast continuing the history.
    pub forecast: ForecastSeries,
}

/// Generates history, quote and forecast for `symbol` in one pass.
///
/// The symbol is trimmed and upper-cased; an empty symbol is rejected.
pub fn generate_snapshot<R: Rng + ?Sized>(
    rng: &mut R,
    symbol: &str,
    name: &str,
    today: NaiveDate,
    settings: SnapshotSettings,
) -> Result<StockSnapshot> {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(StockError::EmptySymbol);
    }

    let history = synthesize_history(rng, settings.history_days, today);
    let quote = Quote::assemble(rng, &symbol, name, &history);
    let forecast = synthesize_forecast(rng, &history, settings.horizon)?;

    info!(
        "Generated {} snapshot: {} history points, {} forecast days, price {:.2}",
        symbol,
        history.len(),
        forecast.len(),
        quote.price
    );
    Ok(StockSnapshot {
        quote,
        history,
        forecast,
    })
}
