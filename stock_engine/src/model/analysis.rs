//! Descriptive analytics over a forecast.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::model::series::ForecastSeries;

/// Qualitative reading of the projected return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Outlook {
    /// Projected return above 15%.
    #[strum(to_string = "Strong bullish trend expected for this stock.")]
    StrongBullish,
    /// Projected return above 5%.
    #[strum(to_string = "The stock shows promising upward momentum.")]
    Bullish,
    /// Projected return of 0% to 5%.
    #[strum(to_string = "Moderate upward potential.")]
    ModerateUpside,
    /// Projected return between -5% and 0%.
    #[strum(to_string = "The stock may experience slight downward pressure.")]
    SlightDownside,
    /// Projected return of -5% or worse.
    #[strum(to_string = "Bearish outlook in the short term.")]
    Bearish,
}

impl Outlook {
    /// Classifies a projected return given in percent.
    pub fn from_return(projected_return: f64) -> Self {
        if projected_return > 15.0 {
            Outlook::StrongBullish
        } else if projected_return > 5.0 {
            Outlook::Bullish
        } else if projected_return >= 0.0 {
            Outlook::ModerateUpside
        } else if projected_return > -5.0 {
            Outlook::SlightDownside
        } else {
            Outlook::Bearish
        }
    }
}

/// Headline numbers of a forecast, read at its last day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    /// Price the projection starts from.
    pub current_price: f64,
    /// Point estimate on the last forecast day.
    pub projected_price: f64,
    /// Upper band on the last forecast day.
    pub projected_high: f64,
    /// Lower band on the last forecast day.
    pub projected_low: f64,
    /// Change from `current_price` to `projected_price`, in percent.
    pub projected_return: f64,
    /// Number of forecast days.
    pub horizon_days: usize,
    /// Classification of `projected_return`.
    pub outlook: Outlook,
}

impl PredictionSummary {
    /// Summarizes `forecast` against `current_price`; `None` for an empty forecast.
    pub fn new(current_price: f64, forecast: &ForecastSeries) -> Option<Self> {
        let projected_price = *forecast.prices.last()?;
        let projected_high = *forecast.upper_bound.last()?;
        let projected_low = *forecast.lower_bound.last()?;
        let projected_return = (projected_price - current_price) / current_price * 100.0;

        Some(PredictionSummary {
            current_price,
            projected_price,
            projected_high,
            projected_low,
            projected_return,
            horizon_days: forecast.len(),
            outlook: Outlook::from_return(projected_return),
        })
    }

    /// `true` when the projection does not lose value.
    pub fn is_positive(&self) -> bool {
        self.projected_return >= 0.0
    }
}
