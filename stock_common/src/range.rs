//! Chart time ranges.
//!
//! A `TimeRange` selects how much of the held history is shown. Filtering
//! produces a view over the history, the series itself is never modified.

use chrono::{Days, Months, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Visible window of the price history.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum TimeRange {
    /// Last 7 days.
    #[value(name = "1W")]
    #[strum(serialize = "1W")]
    OneWeek,
    /// Last calendar month.
    #[default]
    #[value(name = "1M")]
    #[strum(serialize = "1M")]
    OneMonth,
    /// Last 3 calendar months.
    #[value(name = "3M")]
    #[strum(serialize = "3M")]
    ThreeMonths,
    /// Last 6 calendar months.
    #[value(name = "6M")]
    #[strum(serialize = "6M")]
    SixMonths,
    /// Last calendar year.
    #[value(name = "1Y")]
    #[strum(serialize = "1Y")]
    OneYear,
    /// Whole history.
    #[value(name = "ALL")]
    #[strum(serialize = "ALL")]
    All,
}

impl TimeRange {
    /// Inclusive first date shown for this range, counted back from `today`.
    ///
    /// Returns `None` when the range is unbounded.
    pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            TimeRange::OneWeek => today.checked_sub_days(Days::new(7)),
            TimeRange::OneMonth => today.checked_sub_months(Months::new(1)),
            TimeRange::ThreeMonths => today.checked_sub_months(Months::new(3)),
            TimeRange::SixMonths => today.checked_sub_months(Months::new(6)),
            TimeRange::OneYear => today.checked_sub_months(Months::new(12)),
            TimeRange::All => None,
        }
    }
}
