use {crate::utils::TimeUtils, chrono::NaiveDate};

/// One simulated day on the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub rate: f64,
}

impl HistoricalPoint {
    /// `yyyy-MM-dd`
    pub fn date_label(&self) -> String {
        self.date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
    }
}

/// Headline numbers shown under the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistorySummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// First to last point, as a fraction (0.01 = +1%)
    pub change_pct: f64,
}
