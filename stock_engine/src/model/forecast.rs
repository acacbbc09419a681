//! Forecast synthesis.
//!
//! The forecast continues the last history price with a daily step made of a
//! deterministic drift of 0.1% in the trend direction plus uniform noise of up
//! to ±0.5%. The trend is up only when the last price is strictly above the
//! mean of the trailing week; ties count as down. The confidence band around
//! each projected price has a relative half-width of `volatility * sqrt(day)`,
//! where the volatility comes from the trailing 30 prices.

use chrono::Days;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use stock_common::params::{
    FORECAST_DRIFT, FORECAST_NOISE_SCALE, FORECAST_PRICE_FLOOR, MAX_FORECAST_HORIZON, TREND_WINDOW,
    VOLATILITY_WINDOW,
};
use stock_common::{Result, StockError};
use strum_macros::Display;

use crate::model::series::{ForecastSeries, HistorySeries, round2};
use crate::model::volatility::estimate_volatility;

/// Direction of the deterministic forecast drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum TrendDirection {
    /// Last price above the weekly mean.
    Up,
    /// Last price at or below the weekly mean.
    Down,
}

impl TrendDirection {
    /// `+1.0` for `Up`, `-1.0` for `Down`.
    pub fn sign(&self) -> f64 {
        match self {
            TrendDirection::Up => 1.0,
            TrendDirection::Down => -1.0,
        }
    }
}

/// Compares the last price with the mean of the trailing `TREND_WINDOW` prices.
pub fn detect_trend(history: &HistorySeries) -> TrendDirection {
    let window = history.tail_prices(TREND_WINDOW);
    let average = window.iter().sum::<f64>() / window.len() as f64;
    if history.last().price > average {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    }
}

/// Relative half-width of the confidence band `day` days ahead.
pub fn confidence_width(volatility: f64, day: usize) -> f64 {
    volatility * (day as f64).sqrt()
}

/// Projects `horizon` days past the end of `history`.
///
/// Fails for a zero horizon, one above `MAX_FORECAST_HORIZON`, or one that
/// runs past the calendar.
pub fn synthesize_forecast<R: Rng + ?Sized>(
    rng: &mut R,
    history: &HistorySeries,
    horizon: usize,
) -> Result<ForecastSeries> {
    if horizon == 0 || horizon > MAX_FORECAST_HORIZON {
        return Err(StockError::InvalidHorizon(horizon));
    }

    let last = history.last();
    let trend = detect_trend(history);
    let volatility = estimate_volatility(&history.tail_prices(VOLATILITY_WINDOW));
    debug!(
        "Forecasting {} days from {} at {:.2}: trend {}, volatility {:.5}",
        horizon, last.date, last.price, trend, volatility
    );

    let mut forecast = ForecastSeries::with_capacity(horizon);
    let mut current = last.price;

    for day in 1..=horizon {
        let date = last
            .date
            .checked_add_days(Days::new(day as u64))
            .ok_or(StockError::InvalidHorizon(horizon))?;

        let drift = trend.sign() * FORECAST_DRIFT * current;
        let noise = (rng.random::<f64>() - 0.5) * FORECAST_NOISE_SCALE * current;
        current = round2((current + drift + noise).max(FORECAST_PRICE_FLOOR));

        let width = confidence_width(volatility, day);
        forecast.push(
            date,
            current,
            round2(current * (1.0 + width)),
            round2(current * (1.0 - width)),
        );
    }

    Ok(forecast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::series::PricePoint;
    use crate::model::test_rng::ZeroRng;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn series(prices: &[f64]) -> HistorySeries {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| PricePoint::new(start + Days::new(i as u64), p))
            .collect();
        HistorySeries::new(points).unwrap()
    }

    #[test]
    fn rising_week_trends_up() {
        let history = series(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0, 107.0]);
        assert_eq!(detect_trend(&history), TrendDirection::Up);
    }

    #[test]
    fn tie_with_average_trends_down() {
        let history = series(&[90.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0]);
        assert_eq!(detect_trend(&history), TrendDirection::Down);
        assert_eq!(detect_trend(&series(&[42.0])), TrendDirection::Down);
    }

    #[test]
    fn only_last_week_counts() {
        // Old prices far below would pull a longer average down.
        let history = series(&[1.0, 1.0, 1.0, 200.0, 200.0, 200.0, 200.0, 200.0, 200.0, 150.0]);
        assert_eq!(detect_trend(&history), TrendDirection::Down);
    }

    #[test]
    fn zero_horizon_is_rejected() {
        let result = synthesize_forecast(&mut ZeroRng, &series(&[100.0]), 0);
        assert!(matches!(result, Err(StockError::InvalidHorizon(0))));
    }

    #[test]
    fn dates_follow_last_history_day() {
        let history = series(&[100.0, 101.0, 102.0]);
        let forecast = synthesize_forecast(&mut StdRng::seed_from_u64(5), &history, 30).unwrap();

        assert_eq!(forecast.len(), 30);
        assert_eq!(forecast.prices.len(), 30);
        assert_eq!(forecast.upper_bound.len(), 30);
        assert_eq!(forecast.lower_bound.len(), 30);
        for (i, date) in forecast.dates.iter().enumerate() {
            assert_eq!(*date, history.last().date + Days::new(i as u64 + 1));
        }
    }

    #[test]
    fn bounds_enclose_price_and_widen() {
        let history = series(&[100.0, 104.0, 97.0, 103.0, 99.0, 106.0, 98.0, 105.0]);
        let forecast = synthesize_forecast(&mut StdRng::seed_from_u64(11), &history, 60).unwrap();

        let lowest = forecast.prices.iter().cloned().fold(f64::INFINITY, f64::min);
        // Each bound is rounded to cents, which blurs the relative width slightly.
        let tolerance = 0.02 / lowest;

        let mut previous_width = 0.0;
        for i in 0..forecast.len() {
            let (price, upper, lower) =
                (forecast.prices[i], forecast.upper_bound[i], forecast.lower_bound[i]);
            assert!(lower <= price && price <= upper, "day {}: {lower} {price} {upper}", i + 1);

            let width = (upper - lower) / price;
            assert!(
                width + tolerance >= previous_width,
                "day {}: band narrowed from {previous_width} to {width}",
                i + 1
            );
            previous_width = width;
        }
        assert!(previous_width > 0.0);
    }

    #[test]
    fn oversized_horizon_is_rejected_before_allocating() {
        let history = series(&[100.0]);
        for horizon in [MAX_FORECAST_HORIZON + 1, usize::MAX] {
            let result = synthesize_forecast(&mut StdRng::seed_from_u64(1), &history, horizon);
            assert!(matches!(result, Err(StockError::InvalidHorizon(h)) if h == horizon));
        }
    }

    #[test]
    fn longest_horizon_is_accepted() {
        let forecast =
            synthesize_forecast(&mut ZeroRng, &series(&[100.0]), MAX_FORECAST_HORIZON).unwrap();
        assert_eq!(forecast.len(), MAX_FORECAST_HORIZON);
    }

    #[test]
    fn fixed_source_follows_drift_and_noise() {
        // Zero draws give noise of -0.5% on top of the +0.1% upward drift.
        let history = series(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0, 107.0]);
        let forecast = synthesize_forecast(&mut ZeroRng, &history, 2).unwrap();

        let first = round2(107.0 + 0.001 * 107.0 - 0.005 * 107.0);
        let second = round2(first + 0.001 * first - 0.005 * first);
        assert_eq!(forecast.prices, vec![first, second]);
    }

    #[test]
    fn price_never_drops_below_floor() {
        let history = series(&[2.0, 1.5, 1.2, 1.01]);
        let forecast = synthesize_forecast(&mut ZeroRng, &history, 200).unwrap();
        assert!(forecast.prices.iter().all(|&p| p >= 1.0));
        assert_eq!(*forecast.prices.last().unwrap(), 1.0);
    }

    #[test]
    fn short_history_does_not_fail() {
        for len in 1..7 {
            let prices: Vec<f64> = (0..len).map(|i| 50.0 + i as f64).collect();
            let forecast =
                synthesize_forecast(&mut StdRng::seed_from_u64(len as u64), &series(&prices), 10)
                    .unwrap();
            assert_eq!(forecast.len(), 10);
        }
    }

    #[test]
    fn single_point_uses_fallback_band() {
        let forecast = synthesize_forecast(&mut ZeroRng, &series(&[200.0]), 1).unwrap();
        let price = forecast.prices[0];
        assert_eq!(forecast.upper_bound[0], round2(price * 1.01));
        assert_eq!(forecast.lower_bound[0], round2(price * 0.99));
    }

    #[test]
    fn confidence_width_grows_with_sqrt_of_day() {
        assert_eq!(confidence_width(0.02, 1), 0.02);
        assert_eq!(confidence_width(0.02, 4), 0.04);
        assert_eq!(confidence_width(0.0, 9), 0.0);
    }
}
