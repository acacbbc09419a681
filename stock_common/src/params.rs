//! Tunable constants of the synthesis and forecasting pipeline.

/// Days of history generated for every symbol selection (plus today).
pub const HISTORY_DAYS: i64 = 365;
/// Default number of forecast days.
pub const FORECAST_HORIZON: usize = 30;
/// Trailing points averaged to decide the trend sign.
pub const TREND_WINDOW: usize = 7;
/// Trailing points used for the volatility estimate.
pub const VOLATILITY_WINDOW: usize = 30;
/// Volatility reported when fewer than two prices are available.
pub const FALLBACK_VOLATILITY: f64 = 0.01;

/// Lower bound of the initial history price.
pub const INITIAL_PRICE_MIN: f64 = 100.0;
/// Width of the initial history price range, giving `[100, 250)`.
pub const INITIAL_PRICE_SPAN: f64 = 150.0;
/// Magnitude of a single history step in currency units.
pub const HISTORY_STEP_SCALE: f64 = 5.0;
/// Centre subtracted from a `[0, 1)` draw; 0.48 gives a +0.02 upward bias.
pub const HISTORY_STEP_CENTER: f64 = 0.48;
/// History prices never fall below this value.
pub const HISTORY_PRICE_FLOOR: f64 = 10.0;

/// Daily directional drift of the forecast, as a fraction of the price.
pub const FORECAST_DRIFT: f64 = 0.001;
/// Scale of the daily forecast noise, as a fraction of the price.
pub const FORECAST_NOISE_SCALE: f64 = 0.01;
/// Forecast prices never fall below this value.
pub const FORECAST_PRICE_FLOOR: f64 = 1.0;

/// Artificial delay before a requested snapshot is generated.
pub const SIMULATED_LATENCY_MS: u64 = 800;
/// Longest history accepted; larger requests are clamped to it.
pub const MAX_HISTORY_DAYS: i64 = 36_500;
/// Longest forecast accepted; larger horizons are rejected.
pub const MAX_FORECAST_HORIZON: usize = 3_650;
