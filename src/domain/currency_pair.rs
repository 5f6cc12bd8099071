use crate::domain::Currency;

/// Ordered pair: `1 from = rate to`. `from == to` is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub from: Currency,
    pub to: Currency,
}

impl CurrencyPair {
    pub fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }

    /// Both new values come from this one snapshot.
    pub fn swapped(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    pub fn involves_crypto(&self) -> bool {
        self.from.is_crypto() || self.to.is_crypto()
    }
}

impl Default for CurrencyPair {
    fn default() -> Self {
        Self::new(Currency::Usd, Currency::Eur)
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}
