//! Read-only views over a history series.

use chrono::NaiveDate;
use stock_common::range::TimeRange;

use crate::model::series::{HistorySeries, PricePoint};

/// Points of `history` dated on or after the start of `range`.
pub fn history_in_range(
    history: &HistorySeries,
    range: TimeRange,
    today: NaiveDate,
) -> &[PricePoint] {
    let points = history.points();
    match range.start_date(today) {
        Some(start) => &points[points.partition_point(|p| p.date < start)..],
        None => points,
    }
}
