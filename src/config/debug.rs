//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Every resolve ticket issued and every outcome applied.
    pub log_resolve_cycle: bool,

    /// Outcomes dropped because a newer ticket superseded them.
    pub log_stale_outcomes: bool,

    /// Outbound HTTP requests to the rate API.
    pub log_rate_api: bool,

    pub log_history: bool,

    /// Button clicks, selector changes, keyboard shortcuts
    pub log_ui_actions: bool,
}

pub const DF: LogFlags = LogFlags {
    log_resolve_cycle: true,
    log_stale_outcomes: true,

    log_rate_api: false,
    log_history: false,
    log_ui_actions: false,
};
