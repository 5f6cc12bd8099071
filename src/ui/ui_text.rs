use std::sync::LazyLock;

pub const ICON_SWAP: &str = "⇄";
pub const ICON_REFRESH: &str = "🔄";
pub const ICON_MOON: &str = "🌙";
pub const ICON_SUN: &str = "☀";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_CHART: &str = "📈";

pub struct UiText {
    pub app_title: String,

    // --- Converter card ---
    pub label_amount: String,
    pub hint_amount: String,
    pub label_from: String,
    pub label_to: String,
    pub label_fiat_group: String,
    pub label_crypto_group: String,
    pub btn_swap: String,
    pub tip_swap: String,
    pub label_use_custom_rate: String,
    pub hint_custom_rate: String,

    // --- Result ---
    pub enter_valid_amount: String,
    pub invalid_custom_rate: String,
    pub loading_rate: String,
    pub rate_unavailable: String,
    pub label_custom_badge: String,
    pub label_source_live: String,
    pub label_source_simulated: String,
    pub label_updated: String,

    // --- Toolbar ---
    pub btn_refresh: String,
    pub tip_refresh: String,
    pub btn_dark: String,
    pub btn_light: String,

    // --- Chart ---
    pub chart_heading: String,
    pub chart_simulated_note: String,
    pub plot_x_axis: String,
    pub plot_y_axis: String,
    pub chart_empty: String,
    pub label_min: String,
    pub label_max: String,
    pub label_avg: String,
    pub label_change: String,

    // --- Status bar ---
    pub sb_fetching: String,
    pub sb_ready: String,
    pub sb_idle: String,
    pub sb_failed: String,
    pub sb_shortcuts: String,

    // --- ERRORS ---
    pub error_fetch_failed: String,
    pub label_warning: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Currency Converter".to_string(),

    label_amount: "Amount".to_string(),
    hint_amount: "Enter amount".to_string(),
    label_from: "From".to_string(),
    label_to: "To".to_string(),
    label_fiat_group: "Fiat".to_string(),
    label_crypto_group: "Crypto".to_string(),
    btn_swap: ICON_SWAP.to_string(),
    tip_swap: "Swap currencies (S)".to_string(),
    label_use_custom_rate: "Use custom rate".to_string(),
    hint_custom_rate: "Custom exchange rate".to_string(),

    enter_valid_amount: "Please enter a valid amount".to_string(),
    invalid_custom_rate: "Invalid custom rate".to_string(),
    loading_rate: "Fetching rate...".to_string(),
    rate_unavailable: "Rate unavailable".to_string(),
    label_custom_badge: "CUSTOM RATE".to_string(),
    label_source_live: "Live rate".to_string(),
    label_source_simulated: "Simulated rate".to_string(),
    label_updated: "updated".to_string(),

    btn_refresh: format!("{} Refresh", ICON_REFRESH),
    tip_refresh: "Fetch the rate again (R)".to_string(),
    btn_dark: format!("{} Dark", ICON_MOON),
    btn_light: format!("{} Light", ICON_SUN),

    chart_heading: format!("{} Historical Rates", ICON_CHART),
    chart_simulated_note: "Simulated data, for illustration only".to_string(),
    plot_x_axis: "Date".to_string(),
    plot_y_axis: "Rate".to_string(),
    chart_empty: "No rate history yet.".to_string(),
    label_min: "Low".to_string(),
    label_max: "High".to_string(),
    label_avg: "Avg".to_string(),
    label_change: "Change".to_string(),

    sb_fetching: "Fetching".to_string(),
    sb_ready: "Ready".to_string(),
    sb_idle: "Idle".to_string(),
    sb_failed: "Failed".to_string(),
    sb_shortcuts: "R refresh · S swap · D theme".to_string(),

    error_fetch_failed: "Failed to fetch exchange rate. Please try again later.".to_string(),
    label_warning: ICON_WARNING.to_string(),
});
