// Domain types and value objects
mod currency;
mod currency_pair;
mod time_range;

pub use currency::{AssetClass, Currency};
pub use currency_pair::CurrencyPair;
pub use time_range::TimeRange;
