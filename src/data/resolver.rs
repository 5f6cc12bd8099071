use std::sync::Arc;

use crate::{
    data::{CryptoRateTable, FiatRateProvider, RateError},
    domain::{Currency, CurrencyPair},
    models::{QuoteSource, RateQuote},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Turns a currency pair into a unit rate. Crypto legs come from the simulation
/// table; fiat/fiat goes to the remote provider.
#[derive(Clone)]
pub struct RateResolver {
    crypto: Arc<dyn CryptoRateTable>,
    fiat: Arc<dyn FiatRateProvider>,
}

impl RateResolver {
    pub fn new(crypto: Arc<dyn CryptoRateTable>, fiat: Arc<dyn FiatRateProvider>) -> Self {
        Self { crypto, fiat }
    }

    pub async fn resolve(&self, pair: CurrencyPair) -> Result<RateQuote, RateError> {
        let quote = match self.resolve_simulated(pair) {
            Some(rate) => RateQuote::new(pair, rate?, QuoteSource::Simulated),
            None => {
                let rate = self.fiat.latest_rate(pair.from, pair.to).await?;
                RateQuote::new(pair, rate, QuoteSource::Remote)
            }
        };

        #[cfg(debug_assertions)]
        if DF.log_resolve_cycle {
            log::info!("Resolved {}", quote);
        }

        Ok(quote)
    }

    /// Table lookup for any pair with a crypto leg. `None` means fiat/fiat: ask the remote provider.
    ///
    /// A fiat leg opposite a crypto one is read as USD.
    pub fn resolve_simulated(&self, pair: CurrencyPair) -> Option<Result<f64, RateError>> {
        match (pair.from.is_crypto(), pair.to.is_crypto()) {
            (true, true) => Some(self.usd_price(pair.from).and_then(|from| {
                self.usd_price(pair.to).map(|to| from / to)
            })),
            (true, false) => Some(self.usd_price(pair.from)),
            (false, true) => Some(self.usd_price(pair.to).map(|to| 1.0 / to)),
            (false, false) => None,
        }
    }

    fn usd_price(&self, code: Currency) -> Result<f64, RateError> {
        self.crypto
            .usd_price(code)
            .filter(|p| p.is_finite() && *p > 0.0)
            .ok_or(RateError::RateUnavailable { code })
    }
}
