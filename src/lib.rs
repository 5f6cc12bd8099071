#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::{App, Converter};
pub use data::{RateError, RateResolver};
pub use domain::{Currency, CurrencyPair, TimeRange};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Host of the exchange-rate API (scheme + host, no path)
    #[arg(long, default_value = config::RATE_API.base_url)]
    pub api_base_url: String,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            api_base_url: config::RATE_API.base_url.to_string(),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
