//! Configuration module for the converter.

mod api;
mod debug;
mod simulation;

pub use api::{RATE_API, RateApiConfig};
pub use debug::DF;
pub use simulation::{CRYPTO_TABLE, CryptoTableConfig, SIMULATION, SimulationConfig};
