//! Text report of a snapshot.

use std::fmt::Write;

use stock_common::format::{format_currency, format_large_number};
use stock_common::range::TimeRange;
use stock_engine::StockSnapshot;
use stock_engine::model::analysis::PredictionSummary;
use stock_engine::model::series::PricePoint;

/// Renders quote statistics, the visible history and the prediction summary.
pub fn render_report(snapshot: &StockSnapshot, range: TimeRange, view: &[PricePoint]) -> String {
    let quote = &snapshot.quote;
    let mut out = String::new();

    let sign = if quote.is_up() { "+" } else { "" };
    let _ = writeln!(out, "{} ({})", quote.name, quote.symbol);
    let _ = writeln!(
        out,
        "{}  {}{:.2} ({}{:.2}%)",
        format_currency(quote.price),
        sign,
        quote.change,
        sign,
        quote.change_percent
    );
    let _ = writeln!(out);

    let stats = [
        ("Open", format_currency(quote.open)),
        ("High", format_currency(quote.high)),
        ("Low", format_currency(quote.low)),
        ("Market Cap", format_large_number(quote.market_cap as f64)),
        ("Previous Close", format_currency(quote.previous_close)),
        ("Volume", format_large_number(quote.volume as f64)),
        ("Avg. Volume", format_large_number(quote.avg_volume as f64)),
    ];
    for (label, value) in stats {
        let _ = writeln!(out, "{:<16}{}", label, value);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "History ({}, {} days)", range, view.len());
    for point in view {
        let _ = writeln!(out, "  {}  {:>12}", point.date, format_currency(point.price));
    }
    let _ = writeln!(out);

    if let Some(summary) = PredictionSummary::new(quote.price, &snapshot.forecast) {
        render_prediction(&mut out, &summary);
    }
    out
}

fn render_prediction(out: &mut String, summary: &PredictionSummary) {
    let sign = if summary.is_positive() { "+" } else { "" };
    let _ = writeln!(out, "{}-Day Price Prediction", summary.horizon_days);
    let _ = writeln!(out, "{:<16}{}", "Current Price", format_currency(summary.current_price));
    let _ = writeln!(
        out,
        "{:<16}{} ({}{:.2}% in {} days)",
        "Projected Price",
        format_currency(summary.projected_price),
        sign,
        summary.projected_return,
        summary.horizon_days
    );
    let _ = writeln!(out, "{:<16}{}", "Potential High", format_currency(summary.projected_high));
    let _ = writeln!(out, "{:<16}{}", "Potential Low", format_currency(summary.projected_low));
    let _ = writeln!(out, "{:<16}{}", "Analysis", summary.outlook);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use stock_engine::model::view::history_in_range;
    use stock_engine::{SnapshotSettings, generate_snapshot};

    #[test]
    fn report_lists_stats_history_and_prediction() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        let snapshot = generate_snapshot(
            &mut StdRng::seed_from_u64(77),
            "AAPL",
            "Apple Inc.",
            today,
            SnapshotSettings::default(),
        )
        .unwrap();
        let view = history_in_range(&snapshot.history, TimeRange::OneWeek, today);
        let report = render_report(&snapshot, TimeRange::OneWeek, view);

        assert!(report.starts_with("Apple Inc. (AAPL)\n"));
        assert!(report.contains("Market Cap"));
        assert!(report.contains("History (1W, 8 days)"));
        assert!(report.contains("2024-10-01"));
        assert!(report.contains("30-Day Price Prediction"));
        let summary = PredictionSummary::new(snapshot.quote.price, &snapshot.forecast).unwrap();
        assert!(report.contains(&summary.outlook.to_string()));
    }
}
