//! Load request exchanged between the dashboard session and the loader.
//!
//! Every symbol selection produces a `LoadRequest` stamped with a monotonic
//! sequence number. The loader echoes the number back with its outcome, so the
//! session can keep only the result of the latest request.
use serde::{Deserialize, Serialize};

/// Request to (re)generate the data of one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRequest {
    /// Monotonic sequence token, unique per session.
    pub seq: u64,
    /// Ticker symbol, already trimmed and upper-cased.
    pub symbol: String,
    /// Display name shown next to the symbol.
    pub name: String,
    /// Optional seed for a reproducible generation.
    pub seed: Option<u64>,
}

impl LoadRequest {
    /// Creates a new request with a fresh random source.
    pub fn new(seq: u64, symbol: &str, name: &str) -> Self {
        LoadRequest {
            seq,
            symbol: String::from(symbol),
            name: String::from(name),
            seed: None,
        }
    }

    /// Pins the random source of this request to `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
