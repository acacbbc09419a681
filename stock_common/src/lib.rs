//!
//! Common types and utilities shared by the stock engine and the dashboard.
//!
//! This crate aggregates:
//! - `error` — unified error type `StockError` used across the workspace.
//! - `result` — handy `Result<T, StockError>` alias.
//! - `params` — tunable constants of the synthesis and forecasting pipeline.
//! - `tickers` — popular ticker symbols and the symbol lookup.
//! - `range` — chart time ranges used to build history views.
//! - `request` — load requests exchanged between the session and the loader.
//! - `format` — currency and large-number display helpers.
#![warn(missing_docs)]
pub mod error;
pub mod format;
pub mod params;
pub mod range;
pub mod request;
pub mod result;
pub mod tickers;

pub use error::StockError;
pub use request::LoadRequest;
pub use result::Result;
