// src/app/state.rs

use crate::{
    domain::{Currency, TimeRange},
    models::RateQuote,
};

/// Where the resolve cycle stands. Only the newest ticket's outcome can move it out of `Resolving`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResolvePhase {
    #[default]
    Idle,
    Resolving {
        seq: u64,
    },
    Ready(RateQuote),
    /// User-facing banner text
    Failed(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiSettings {
    pub dark_mode: bool,
}

/// Everything the UI can ask the converter to do, besides editing text fields in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterAction {
    SetFrom(Currency),
    SetTo(Currency),
    Swap,
    SetRange(TimeRange),
    Refresh,
    ToggleDarkMode,
}
