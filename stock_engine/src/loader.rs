//! Background snapshot loader.
//!
//! The `SnapshotLoader` mimics a remote data source: every `LoadRequest` is
//! handled on its own worker thread, which waits for the configured latency,
//! generates the snapshot and sends a `LoadOutcome` tagged with the request's
//! sequence number over a `crossbeam_channel`. Outcomes may therefore arrive
//! out of order; `DashboardSession::accept` keeps only the latest one.

use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, unbounded};
use log::{debug, error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use stock_common::{LoadRequest, Result, StockError};

use crate::model::snapshot::{SnapshotSettings, StockSnapshot, generate_snapshot};

/// Result of one load request.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Sequence number of the request this outcome answers.
    pub seq: u64,
    /// Generated snapshot, or the reason generation failed.
    pub result: Result<StockSnapshot>,
}

/// Generates snapshots on worker threads after a simulated delay.
pub struct SnapshotLoader {
    latency: Duration,
    settings: SnapshotSettings,
    today: Option<NaiveDate>,
    outcome_tx: Sender<LoadOutcome>,
    outcome_rx: Receiver<LoadOutcome>,
}

impl SnapshotLoader {
    /// Create a loader answering every request after `latency`.
    pub fn new(latency: Duration, settings: SnapshotSettings) -> Self {
        let (outcome_tx, outcome_rx) = unbounded::<LoadOutcome>();
        Self {
            latency,
            settings,
            today: None,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Pin the generation date instead of using the current UTC date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Start generating the data for `request` in the background.
    ///
    /// The worker yields `StockError::ChannelSend` when the loader is gone
    /// before the outcome could be delivered.
    pub fn load(&self, request: LoadRequest) -> JoinHandle<Result<()>> {
        self.load_after(request, self.latency)
    }

    /// Like [`Self::load`] with an explicit delay for this request only.
    pub fn load_after(&self, request: LoadRequest, delay: Duration) -> JoinHandle<Result<()>> {
        let outcome_tx = self.outcome_tx.clone();
        let settings = self.settings;
        let today = self.today;

        thread::spawn(move || {
            thread::sleep(delay);
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            let mut rng = match request.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };

            debug!("Loading {} (request #{})", request.symbol, request.seq);
            let result = catch_generation(|| {
                generate_snapshot(&mut rng, &request.symbol, &request.name, today, settings)
            });
            outcome_tx
                .send(LoadOutcome {
                    seq: request.seq,
                    result,
                })
                .map_err(|e| {
                    error!("Failed to deliver outcome of request #{}: {}", request.seq, e);
                    StockError::ChannelSend(format!("outcome of request #{}: {}", request.seq, e))
                })
        })
    }

    /// Wait up to `timeout` for the next outcome.
    pub fn next_outcome(&self, timeout: Duration) -> Result<LoadOutcome> {
        self.outcome_rx.recv_timeout(timeout).map_err(|e| match e {
            RecvTimeoutError::Timeout => {
                StockError::ChannelRecv(format!("no outcome within {:?}", timeout))
            }
            RecvTimeoutError::Disconnected => StockError::ChannelRecv(e.to_string()),
        })
    }
}

/// Runs `generate`, turning a panic into a load error so the session still
/// receives an outcome.
fn catch_generation<F>(generate: F) -> Result<StockSnapshot>
where
    F: FnOnce() -> Result<StockSnapshot>,
{
    panic::catch_unwind(AssertUnwindSafe(generate)).unwrap_or_else(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| String::from("snapshot generation panicked"));
        error!("Snapshot generation panicked: {}", reason);
        Err(StockError::Load(reason))
    })
}
