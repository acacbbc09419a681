//! Popular ticker symbols and the symbol lookup used by the search box.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Set of popular ticker symbols offered by the search, in display order.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Ticker {
    AAPL,
    MSFT,
    GOOGL,
    AMZN,
    META,
    TSLA,
    NVDA,
    JPM,
    V,
    JNJ,
}

impl Ticker {
    /// Company name displayed next to the symbol.
    pub fn name(&self) -> &'static str {
        match self {
            Ticker::AAPL => "Apple Inc.",
            Ticker::MSFT => "Microsoft Corporation",
            Ticker::GOOGL => "Alphabet Inc.",
            Ticker::AMZN => "Amazon.com, Inc.",
            Ticker::META => "Meta Platforms, Inc.",
            Ticker::TSLA => "Tesla, Inc.",
            Ticker::NVDA => "NVIDIA Corporation",
            Ticker::JPM => "JPMorgan Chase & Co.",
            Ticker::V => "Visa Inc.",
            Ticker::JNJ => "Johnson & Johnson",
        }
    }

    /// Symbol/name pair for this ticker.
    pub fn listing(&self) -> Listing {
        Listing {
            symbol: self.to_string(),
            name: String::from(self.name()),
        }
    }
}

/// A symbol together with its display name, as returned by the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Ticker symbol (e.g., `AAPL`).
    pub symbol: String,
    /// Company name (e.g., `Apple Inc.`).
    pub name: String,
}

/// Returns the full static list of popular listings.
pub fn popular_listings() -> Vec<Listing> {
    Ticker::iter().map(|t| t.listing()).collect()
}

/// Case-insensitive substring search over symbols and names.
///
/// An empty query returns every popular listing. Matches keep the order of the
/// static list.
pub fn lookup_symbols(query: &str) -> Vec<Listing> {
    if query.is_empty() {
        return popular_listings();
    }

    let needle = query.to_lowercase();
    Ticker::iter()
        .filter(|t| {
            t.to_string().to_lowercase().contains(&needle)
                || t.name().to_lowercase().contains(&needle)
        })
        .map(|t| t.listing())
        .collect()
}
