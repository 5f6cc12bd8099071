mod crypto_table;
mod dispatcher;
mod error;
mod messages;
mod provider;
mod resolver;

pub use {
    crypto_table::{CryptoRateTable, SimulatedCryptoTable},
    dispatcher::ResolveDispatcher,
    error::RateError,
    messages::{ResolveOutcome, ResolveTicket},
    provider::{ExchangeRateApi, FiatRateProvider, LatestRatesResponse},
    resolver::RateResolver,
};
