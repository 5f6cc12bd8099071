//! Simulated market data: the crypto price table and the history generator settings.

use crate::domain::{Currency, TimeRange};

pub struct CryptoTableConfig {
    /// USD-denominated price per ticker. Static, never refreshed at runtime.
    pub usd_prices: &'static [(Currency, f64)],
}

pub const CRYPTO_TABLE: CryptoTableConfig = CryptoTableConfig {
    usd_prices: &[
        (Currency::Btc, 45_000.0),
        (Currency::Eth, 3_000.0),
        (Currency::Usdt, 1.0),
        (Currency::Bnb, 300.0),
        (Currency::Xrp, 0.5),
        (Currency::Ada, 0.5),
        (Currency::Sol, 100.0),
        (Currency::Doge, 0.08),
    ],
};

pub struct SimulationConfig {
    /// Max fractional deviation from the base rate when either leg is crypto
    pub crypto_volatility: f64,
    /// Max fractional deviation for fiat/fiat pairs
    pub fiat_volatility: f64,
    pub default_range: TimeRange,
}

pub const SIMULATION: SimulationConfig = SimulationConfig {
    crypto_volatility: 0.15,
    fiat_volatility: 0.05,
    default_range: TimeRange::OneWeek,
};
