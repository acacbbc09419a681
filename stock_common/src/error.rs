//! Error types shared between the engine and the dashboard.
//!
//! The `StockError` enum unifies input validation failures, serialization
//! problems, and worker channel failures, allowing crates to propagate a
//! single error type.
use chrono::NaiveDate;
use thiserror::Error;

/// Unified error type shared by the engine and the dashboard.
#[derive(Error, Debug)]
pub enum StockError {
    /// A symbol selection was made with an empty (or blank) ticker.
    #[error("Symbol must not be empty")]
    EmptySymbol,

    /// The forecast horizon must cover at least one day.
    #[error("Invalid forecast horizon: {0} days")]
    InvalidHorizon(usize),

    /// A history series needs at least one point.
    #[error("History series is empty")]
    EmptyHistory,

    /// Two neighbouring history points are not exactly one calendar day apart.
    #[error("History dates are not consecutive: {previous} is followed by {next}")]
    NonConsecutiveDates {
        /// Date of the earlier point.
        previous: NaiveDate,
        /// Date of the point that follows it.
        next: NaiveDate,
    },

    /// A price is zero, negative, NaN or infinite.
    #[error("Invalid price {price} on {date}")]
    InvalidPrice {
        /// Date of the offending point.
        date: NaiveDate,
        /// The rejected value.
        price: f64,
    },

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Crossbeam/channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Crossbeam/channel receive failed (e.g., sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),

    /// Generation of a snapshot failed; the message is shown to the user as is.
    #[error("Error loading stock data: {0}")]
    Load(String),
}
