use crate::{config::CRYPTO_TABLE, domain::Currency};

/// Source of USD-denominated crypto prices. Swap in a real feed by implementing this.
pub trait CryptoRateTable: Send + Sync {
    /// Price of one unit in USD, `None` if the ticker is unknown to this table.
    fn usd_price(&self, currency: Currency) -> Option<f64>;
}

/// Fixed price table, never updated at runtime.
#[derive(Debug, Clone, Default)]
pub struct SimulatedCryptoTable;

impl CryptoRateTable for SimulatedCryptoTable {
    fn usd_price(&self, currency: Currency) -> Option<f64> {
        CRYPTO_TABLE
            .usd_prices
            .iter()
            .find(|(c, _)| *c == currency)
            .map(|(_, price)| *price)
    }
}
