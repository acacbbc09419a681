//! Quote assembly.
//!
//! A `Quote` summarizes the tail of a history series: the last price, its
//! change against the day before and a set of synthetic session statistics
//! (open/high/low, volumes, market capitalization) scaled off the price.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::series::{HistorySeries, round2};

/// Market quote for a single symbol, derived once at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Last price.
    pub price: f64,
    /// Difference between the last and the previous price.
    pub change: f64,
    /// `change` relative to the previous price, in percent.
    pub change_percent: f64,
    /// Synthetic opening price.
    pub open: f64,
    /// Synthetic session high.
    pub high: f64,
    /// Synthetic session low.
    pub low: f64,
    /// Price of the day before.
    pub previous_close: f64,
    /// Synthetic traded volume.
    pub volume: u64,
    /// Synthetic average volume.
    pub avg_volume: u64,
    /// Synthetic market capitalization.
    pub market_cap: u64,
}

impl Quote {
    /// Builds the quote of `symbol` from the last two points of `history`.
    ///
    /// With a single point the previous close equals the last price.
    pub fn assemble<R: Rng + ?Sized>(
        rng: &mut R,
        symbol: &str,
        name: &str,
        history: &HistorySeries,
    ) -> Quote {
        let price = history.last().price;
        let previous_close = history.previous().map_or(price, |p| p.price);
        let change = price - previous_close;

        let market_cap = (price * (1e9 + rng.random::<f64>() * 2e9)).round() as u64;
        let volume = synthetic_volume(rng);
        let avg_volume = synthetic_volume(rng);
        let high = round2(price * (1.0 + rng.random::<f64>() * 0.05));
        let low = round2(price * (1.0 - rng.random::<f64>() * 0.05));
        let open = round2(previous_close * (1.0 + (rng.random::<f64>() - 0.5) * 0.02));

        Quote {
            symbol: String::from(symbol),
            name: String::from(name),
            price,
            change,
            change_percent: change / previous_close * 100.0,
            open,
            high,
            low,
            previous_close,
            volume,
            avg_volume,
            market_cap,
        }
    }

    /// `true` when the last price did not fall against the previous close.
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}

fn synthetic_volume<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    (1e6 + rng.random::<f64>() * 1e7).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::series::PricePoint;
    use crate::model::test_rng::ZeroRng;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn history(prices: &[f64]) -> HistorySeries {
        let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| PricePoint::new(start + chrono::Days::new(i as u64), p))
            .collect();
        HistorySeries::new(points).unwrap()
    }

    #[test]
    fn change_comes_from_last_two_points() {
        let series = history(&[90.0, 100.0, 110.0]);
        let quote = Quote::assemble(&mut ZeroRng, "AAPL", "Apple Inc.", &series);
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.name, "Apple Inc.");
        assert_eq!(quote.price, 110.0);
        assert_eq!(quote.previous_close, 100.0);
        assert_relative_eq!(quote.change, 10.0);
        assert_relative_eq!(quote.change_percent, 10.0);
        assert!(quote.is_up());
    }

    #[test]
    fn zero_draws_hit_lower_ends_of_ranges() {
        let quote = Quote::assemble(&mut ZeroRng, "V", "Visa Inc.", &history(&[200.0, 150.0]));
        assert_eq!(quote.market_cap, 150_000_000_000);
        assert_eq!(quote.volume, 1_000_000);
        assert_eq!(quote.avg_volume, 1_000_000);
        assert_eq!(quote.high, 150.0);
        assert_eq!(quote.low, 150.0);
        assert_eq!(quote.open, 198.0);
        assert!(!quote.is_up());
    }

    #[test]
    fn statistics_stay_in_their_bands() {
        let series = history(&[120.0, 125.5]);
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let quote = Quote::assemble(&mut rng, "MSFT", "Microsoft", &series);
            assert!(quote.high >= quote.price && quote.high <= round2(125.5 * 1.05));
            assert!(quote.low <= quote.price && quote.low >= round2(125.5 * 0.95));
            assert!(quote.open >= round2(120.0 * 0.99) && quote.open <= round2(120.0 * 1.01));
            assert!((1_000_000..=11_000_000).contains(&quote.volume));
            assert!((1_000_000..=11_000_000).contains(&quote.avg_volume));
            assert!(quote.market_cap >= 125_500_000_000);
        }
    }

    #[test]
    fn single_point_has_no_change() {
        let quote = Quote::assemble(&mut ZeroRng, "JNJ", "Johnson & Johnson", &history(&[64.0]));
        assert_eq!(quote.previous_close, 64.0);
        assert_eq!(quote.change, 0.0);
        assert_eq!(quote.change_percent, 0.0);
    }
}
