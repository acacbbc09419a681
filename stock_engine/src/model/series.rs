//! Price series exchanged between the synthesizers and the presentation layer.
//!
//! A `HistorySeries` is built once per symbol selection and is read-only
//! afterwards. Its constructor enforces the invariants every consumer relies
//! on: at least one point, finite positive prices and dates advancing by
//! exactly one calendar day. A `ForecastSeries` stores four parallel vectors
//! of equal length, one entry per forecast day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stock_common::{Result, StockError};

/// Price of a symbol on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Closing price, always positive.
    pub price: f64,
}

impl PricePoint {
    /// Creates a point for `date` at `price`.
    pub fn new(date: NaiveDate, price: f64) -> Self {
        PricePoint { date, price }
    }
}

/// Daily price history, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct HistorySeries {
    points: Vec<PricePoint>,
}

impl HistorySeries {
    /// Validates `points` and wraps them into a series.
    pub fn new(points: Vec<PricePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(StockError::EmptyHistory);
        }
        for point in &points {
            if !point.price.is_finite() || point.price <= 0.0 {
                return Err(StockError::InvalidPrice {
                    date: point.date,
                    price: point.price,
                });
            }
        }
        for pair in points.windows(2) {
            if pair[0].date.succ_opt() != Some(pair[1].date) {
                return Err(StockError::NonConsecutiveDates {
                    previous: pair[0].date,
                    next: pair[1].date,
                });
            }
        }
        Ok(HistorySeries { points })
    }

    /// Wraps points produced by the synthesizer, which upholds the invariants itself.
    pub(crate) fn from_generated(points: Vec<PricePoint>) -> Self {
        debug_assert!(HistorySeries::new(points.clone()).is_ok());
        HistorySeries { points }
    }

    /// All points, oldest first.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of points, never zero.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent point.
    pub fn last(&self) -> &PricePoint {
        &self.points[self.points.len() - 1]
    }

    /// The point before the most recent one, if any.
    pub fn previous(&self) -> Option<&PricePoint> {
        self.points.len().checked_sub(2).map(|i| &self.points[i])
    }

    /// Prices of the last `n` points, or of all points when fewer exist.
    pub fn tail_prices(&self, n: usize) -> Vec<f64> {
        let start = self.points.len().saturating_sub(n);
        self.points[start..].iter().map(|p| p.price).collect()
    }
}

impl TryFrom<Vec<PricePoint>> for HistorySeries {
    type Error = StockError;

    fn try_from(points: Vec<PricePoint>) -> Result<Self> {
        HistorySeries::new(points)
    }
}

impl From<HistorySeries> for Vec<PricePoint> {
    fn from(series: HistorySeries) -> Self {
        series.points
    }
}

/// Projected prices with their confidence band, one entry per future day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSeries {
    /// Forecast days, starting the day after the last history date.
    pub dates: Vec<NaiveDate>,
    /// Point estimates.
    pub prices: Vec<f64>,
    /// Upper edge of the confidence band.
    pub upper_bound: Vec<f64>,
    /// Lower edge of the confidence band.
    pub lower_bound: Vec<f64>,
}

impl ForecastSeries {
    /// Creates an empty series with room for `horizon` days.
    pub fn with_capacity(horizon: usize) -> Self {
        ForecastSeries {
            dates: Vec::with_capacity(horizon),
            prices: Vec::with_capacity(horizon),
            upper_bound: Vec::with_capacity(horizon),
            lower_bound: Vec::with_capacity(horizon),
        }
    }

    /// Number of forecast days.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// `true` when no day has been projected.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Appends one projected day.
    pub(crate) fn push(&mut self, date: NaiveDate, price: f64, upper: f64, lower: f64) {
        self.dates.push(date);
        self.prices.push(price);
        self.upper_bound.push(upper);
        self.lower_bound.push(lower);
    }
}

/// Rounds `value` to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
