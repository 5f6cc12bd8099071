use crate::{data::RateError, domain::CurrencyPair, models::RateQuote};

/// A request to resolve one pair. `seq` orders tickets; only the newest one may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveTicket {
    pub seq: u64,
    pub pair: CurrencyPair,
}

/// The result returned by the background task
#[derive(Debug, Clone)]
pub struct ResolveOutcome {
    pub seq: u64,
    pub pair: CurrencyPair,
    pub result: Result<RateQuote, RateError>,
}
