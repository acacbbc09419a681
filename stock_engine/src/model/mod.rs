//! Domain models and the synthesis pipeline.
//!
//! - `series` — price point, history and forecast series types.
//! - `history` — random-walk history synthesis.
//! - `volatility` — volatility estimate over a price window.
//! - `forecast` — trend detection and forecast synthesis with a confidence band.
//! - `quote` — quote assembly from the history tail.
//! - `snapshot` — the whole pipeline for one symbol selection.
//! - `analysis` — prediction summary and outlook.
//! - `view` — time-range views over a history.

pub mod analysis;
pub mod forecast;
pub mod history;
pub mod quote;
pub mod series;
pub mod snapshot;
pub mod view;
pub mod volatility;

#[cfg(test)]
mod test_rng;
