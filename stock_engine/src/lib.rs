//! Stock data engine: synthetic price history, forecasting and session state.
//!
//! The crate is organised in three layers:
//!
//! - `model` — the synthesis pipeline. `history` builds a biased random-walk
//!   price series, `volatility` measures the spread of its daily returns and
//!   `forecast` continues it with a trend drift and a widening confidence
//!   band. `quote`, `snapshot`, `analysis` and `view` derive what the
//!   dashboard displays.
//! - `loader` — runs the pipeline on worker threads after a simulated network
//!   delay and reports tagged outcomes over a `crossbeam_channel`.
//! - `session` — explicit dashboard state that applies only the outcome of the
//!   latest request.
//!
//! Every generator takes its random source as an argument, so a seeded
//! `StdRng` reproduces any run exactly.
#![warn(missing_docs)]
pub mod loader;
pub mod model;
pub mod session;

pub use loader::{LoadOutcome, SnapshotLoader};
pub use model::snapshot::{SnapshotSettings, StockSnapshot, generate_snapshot};
pub use session::DashboardSession;
