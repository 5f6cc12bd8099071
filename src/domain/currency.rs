use strum_macros::{Display, EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetClass {
    Fiat,
    Crypto,
}

/// Every symbol the converter knows about. Fiat codes are ISO 4217, crypto are exchange tickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    // Fiat
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
    Chf,
    Cny,
    Inr,
    // Crypto
    Btc,
    Eth,
    Usdt,
    Bnb,
    Xrp,
    Ada,
    Sol,
    Doge,
}

impl Currency {
    /// Code as used by the rate API and in display strings (e.g. `USD`, `BTC`).
    pub fn code(self) -> &'static str {
        self.into()
    }

    pub fn asset_class(self) -> AssetClass {
        match self {
            Self::Usd
            | Self::Eur
            | Self::Gbp
            | Self::Jpy
            | Self::Aud
            | Self::Cad
            | Self::Chf
            | Self::Cny
            | Self::Inr => AssetClass::Fiat,
            Self::Btc
            | Self::Eth
            | Self::Usdt
            | Self::Bnb
            | Self::Xrp
            | Self::Ada
            | Self::Sol
            | Self::Doge => AssetClass::Crypto,
        }
    }

    pub fn is_crypto(self) -> bool {
        self.asset_class() == AssetClass::Crypto
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Usd => "US Dollar",
            Self::Eur => "Euro",
            Self::Gbp => "British Pound",
            Self::Jpy => "Japanese Yen",
            Self::Aud => "Australian Dollar",
            Self::Cad => "Canadian Dollar",
            Self::Chf => "Swiss Franc",
            Self::Cny => "Chinese Yuan",
            Self::Inr => "Indian Rupee",
            Self::Btc => "Bitcoin",
            Self::Eth => "Ethereum",
            Self::Usdt => "Tether",
            Self::Bnb => "BNB",
            Self::Xrp => "XRP",
            Self::Ada => "Cardano",
            Self::Sol => "Solana",
            Self::Doge => "Dogecoin",
        }
    }
}
