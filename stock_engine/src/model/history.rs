//! History synthesis.
//!
//! Produces a daily price series ending today with a biased random walk: every
//! step moves the price by `(u - 0.48) * 5` for a uniform `u` in `[0, 1)`,
//! which drifts slightly upwards. The running price is clamped to a floor of
//! 10 and rounded to cents after every step, so a fixed random source always
//! reproduces the same sequence.

use chrono::{Days, NaiveDate, Utc};
use log::debug;
use rand::Rng;
use stock_common::params::{
    HISTORY_PRICE_FLOOR, HISTORY_STEP_CENTER, HISTORY_STEP_SCALE, INITIAL_PRICE_MIN,
    INITIAL_PRICE_SPAN, MAX_HISTORY_DAYS,
};

use crate::model::series::{HistorySeries, PricePoint, round2};

/// Synthesizes `days + 1` daily points ending at `today`, oldest first.
///
/// Non-positive `days` yields a single point for `today`; values above
/// `MAX_HISTORY_DAYS` are clamped.
pub fn synthesize_history<R: Rng + ?Sized>(
    rng: &mut R,
    days: i64,
    today: NaiveDate,
) -> HistorySeries {
    let days = days.clamp(0, MAX_HISTORY_DAYS) as u64;
    let start = today - Days::new(days);

    let mut price = round2(INITIAL_PRICE_MIN + rng.random::<f64>() * INITIAL_PRICE_SPAN);
    let mut points = Vec::with_capacity(days as usize + 1);
    points.push(PricePoint::new(start, price));

    for offset in 1..=days {
        price = next_price(rng, price);
        points.push(PricePoint::new(start + Days::new(offset), price));
    }

    debug!(
        "Synthesized {} history points from {} (first {:.2}, last {:.2})",
        points.len(),
        start,
        points[0].price,
        price
    );
    HistorySeries::from_generated(points)
}

/// Same as [`synthesize_history`] with the current UTC date as `today`.
pub fn synthesize_history_until_now<R: Rng + ?Sized>(rng: &mut R, days: i64) -> HistorySeries {
    synthesize_history(rng, days, Utc::now().date_naive())
}

/// One random-walk step from `price`, floored and rounded to cents.
fn next_price<R: Rng + ?Sized>(rng: &mut R, price: f64) -> f64 {
    let change = (rng.random::<f64>() - HISTORY_STEP_CENTER) * HISTORY_STEP_SCALE;
    round2((price + change).max(HISTORY_PRICE_FLOOR))
}
