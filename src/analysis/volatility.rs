use crate::{config::SIMULATION, domain::CurrencyPair};

/// How far a simulated daily rate may stray from the base, as a fraction.
pub trait VolatilityModel {
    fn volatility(&self, pair: CurrencyPair) -> f64;
}

/// Two buckets: anything touching crypto swings harder than fiat/fiat.
#[derive(Debug, Clone, Copy)]
pub struct FixedVolatility {
    pub crypto: f64,
    pub fiat: f64,
}

impl Default for FixedVolatility {
    fn default() -> Self {
        Self {
            crypto: SIMULATION.crypto_volatility,
            fiat: SIMULATION.fiat_volatility,
        }
    }
}

impl VolatilityModel for FixedVolatility {
    fn volatility(&self, pair: CurrencyPair) -> f64 {
        if pair.involves_crypto() {
            self.crypto
        } else {
            self.fiat
        }
    }
}
