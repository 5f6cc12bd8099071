mod conversion;
mod historical;
mod quote;

pub use {
    conversion::{
        ConversionRequest, CustomRateOverride, EffectiveRate, format_conversion, format_unit_rate,
        parse_amount,
    },
    historical::{HistoricalPoint, HistorySummary},
    quote::{QuoteSource, RateQuote},
};
