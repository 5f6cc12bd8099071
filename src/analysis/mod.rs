// Simulated rate history
mod history_simulator;
mod history_summary;
mod volatility;

pub use {
    history_simulator::HistorySimulator,
    history_summary::summarize,
    volatility::{FixedVolatility, VolatilityModel},
};
