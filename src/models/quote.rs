use {
    crate::domain::CurrencyPair,
    chrono::{DateTime, Local},
    std::fmt,
};

/// Where a rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSource {
    /// Live rate API response
    Remote,
    /// Static crypto price table
    Simulated,
}

/// Latest resolved unit rate for a pair: `1 pair.from = rate pair.to`.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub pair: CurrencyPair,
    pub rate: f64,
    pub source: QuoteSource,
    pub resolved_at: DateTime<Local>,
}

impl RateQuote {
    pub fn new(pair: CurrencyPair, rate: f64, source: QuoteSource) -> Self {
        Self {
            pair,
            rate,
            source,
            resolved_at: Local::now(),
        }
    }
}

impl fmt::Display for RateQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:.6} ({:?})", self.pair, self.rate, self.source)
    }
}
