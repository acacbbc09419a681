//! Dashboard session state.
//!
//! The session owns what the presentation layer shows: the selected snapshot,
//! a loading flag and the sequence number of the latest request. It exposes
//! three core operations:
//!
//! - `DashboardSession::select_symbol(symbol, name)` — start a new selection and
//!   return the `LoadRequest` to hand to the loader.
//! - `DashboardSession::accept(outcome)` — apply a loader outcome if it answers
//!   the latest request; older outcomes are discarded.
//! - `DashboardSession::selected()` — the snapshot currently on display.
//!
//! The session is not synchronized; if it is shared across threads, wrap it
//! with a synchronization primitive (e.g., `Mutex`).

use log::{error, info, warn};
use stock_common::{LoadRequest, Result, StockError};

use crate::loader::LoadOutcome;
use crate::model::snapshot::StockSnapshot;

/// Message surfaced to the user when a load fails.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading stock data. Please try again later.";

/// Presentation-side state of one dashboard.
#[derive(Debug, Default)]
pub struct DashboardSession {
    latest_seq: u64,
    loading: bool,
    selected: Option<StockSnapshot>,
    last_error: Option<String>,
}

impl DashboardSession {
    /// Create an empty session with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a load request for `symbol`, superseding any pending one.
    pub fn select_symbol(&mut self, symbol: &str, name: &str) -> Result<LoadRequest> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(StockError::EmptySymbol);
        }

        self.latest_seq += 1;
        self.loading = true;
        info!("Selecting {} ({}), request #{}", symbol, name, self.latest_seq);
        Ok(LoadRequest::new(self.latest_seq, &symbol, name))
    }

    /// Apply `outcome` if it answers the latest request.
    ///
    /// Returns `false` for a stale outcome, which leaves the session untouched.
    /// A failed load keeps the previous selection and records the user-facing
    /// error message.
    pub fn accept(&mut self, outcome: LoadOutcome) -> bool {
        if outcome.seq != self.latest_seq {
            warn!(
                "Discarding stale outcome #{} (latest is #{})",
                outcome.seq, self.latest_seq
            );
            return false;
        }

        self.loading = false;
        match outcome.result {
            Ok(snapshot) => {
                info!("Showing {}", snapshot.quote.symbol);
                self.selected = Some(snapshot);
                self.last_error = None;
            }
            Err(e) => {
                error!("Error loading stock data: {}", e);
                self.last_error = Some(String::from(LOAD_ERROR_MESSAGE));
            }
        }
        true
    }

    /// Snapshot currently on display.
    pub fn selected(&self) -> Option<&StockSnapshot> {
        self.selected.as_ref()
    }

    /// `true` while the latest request is unanswered.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-facing message of the last failed load, cleared by a successful one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Sequence number of the latest issued request.
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }
}
