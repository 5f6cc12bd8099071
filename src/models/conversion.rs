use crate::domain::CurrencyPair;

/// What the user typed plus the selected pair. The amount stays raw until display time.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: String,
    pub pair: CurrencyPair,
}

impl Default for ConversionRequest {
    fn default() -> Self {
        Self {
            amount: "1".to_string(),
            pair: CurrencyPair::default(),
        }
    }
}

impl ConversionRequest {
    pub fn parsed_amount(&self) -> Option<f64> {
        parse_amount(&self.amount)
    }
}

/// Manually entered rate that replaces the resolved quote while enabled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomRateOverride {
    pub value: String,
    pub enabled: bool,
}

impl CustomRateOverride {
    /// `None` when disabled. `Some(NaN)` when enabled but unparsable, so callers can't miss it.
    pub fn parsed(&self) -> Option<f64> {
        if !self.enabled {
            return None;
        }
        Some(self.value.trim().parse::<f64>().unwrap_or(f64::NAN))
    }
}

/// The rate actually used for display and conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectiveRate {
    /// No quote resolved yet
    Pending,
    Quoted(f64),
    Custom(f64),
    /// Override enabled but its text isn't a finite number
    InvalidCustom,
}

impl EffectiveRate {
    pub fn select(custom: &CustomRateOverride, quoted: Option<f64>) -> Self {
        match custom.parsed() {
            Some(rate) if rate.is_finite() => Self::Custom(rate),
            Some(_) => Self::InvalidCustom,
            None => quoted.map_or(Self::Pending, Self::Quoted),
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Quoted(rate) | Self::Custom(rate) => Some(rate),
            Self::Pending | Self::InvalidCustom => None,
        }
    }
}

/// Finite number or nothing. Empty input counts as invalid.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `"100 USD = 90.00 EUR"`
pub fn format_conversion(amount_text: &str, amount: f64, pair: CurrencyPair, rate: f64) -> String {
    format!(
        "{} {} = {:.2} {}",
        amount_text.trim(),
        pair.from,
        amount * rate,
        pair.to
    )
}

/// `"1 USD = 0.9000 EUR"`
pub fn format_unit_rate(pair: CurrencyPair, rate: f64) -> String {
    format!("1 {} = {:.4} {}", pair.from, rate, pair.to)
}
