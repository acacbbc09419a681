//! Volatility estimation from a price window.

use stock_common::params::FALLBACK_VOLATILITY;

/// Simple day-over-day returns `(p[i] - p[i-1]) / p[i-1]`.
pub fn daily_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
}

/// Population standard deviation of the daily returns of `prices`.
///
/// Fewer than two prices carry no return at all; `FALLBACK_VOLATILITY` is
/// reported instead.
pub fn estimate_volatility(prices: &[f64]) -> f64 {
    if prices.len() < 2 {
        return FALLBACK_VOLATILITY;
    }

    let returns = daily_returns(prices);
    let count = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / count;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / count;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn short_input_falls_back() {
        assert_eq!(estimate_volatility(&[]), 0.01);
        assert_eq!(estimate_volatility(&[123.45]), 0.01);
    }

    #[test]
    fn constant_prices_have_zero_volatility() {
        assert_eq!(estimate_volatility(&[50.0, 50.0, 50.0, 50.0]), 0.0);
    }

    #[test]
    fn uses_population_denominator() {
        // Returns +10% and -10%: mean 0, variance (0.01 + 0.01) / 2.
        assert_relative_eq!(estimate_volatility(&[100.0, 110.0, 99.0]), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn two_prices_give_zero_spread() {
        assert_eq!(estimate_volatility(&[100.0, 120.0]), 0.0);
    }

    #[test]
    fn repeated_calls_agree() {
        let prices = [101.2, 99.8, 103.4, 102.9, 98.7, 100.1];
        let first = estimate_volatility(&prices);
        assert!(first > 0.0);
        assert_eq!(first, estimate_volatility(&prices));
    }

    #[test]
    fn returns_are_relative_to_previous_price() {
        let returns = daily_returns(&[100.0, 105.0, 84.0]);
        assert_relative_eq!(returns[0], 0.05);
        assert_relative_eq!(returns[1], -0.2);
    }
}
