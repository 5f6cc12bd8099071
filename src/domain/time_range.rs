use {
    chrono::{Days, Months, NaiveDate},
    strum_macros::{Display, EnumIter},
};

/// Window of simulated history shown on the chart, always ending today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Default)]
pub enum TimeRange {
    #[default]
    #[strum(to_string = "1W")]
    OneWeek,
    #[strum(to_string = "1M")]
    OneMonth,
    #[strum(to_string = "3M")]
    ThreeMonths,
    #[strum(to_string = "1Y")]
    OneYear,
}

impl TimeRange {
    /// First day of the window. Month arithmetic clamps to the end of shorter months.
    pub fn start_date(self, today: NaiveDate) -> NaiveDate {
        let start = match self {
            Self::OneWeek => today.checked_sub_days(Days::new(7)),
            Self::OneMonth => today.checked_sub_months(Months::new(1)),
            Self::ThreeMonths => today.checked_sub_months(Months::new(3)),
            Self::OneYear => today.checked_sub_months(Months::new(12)),
        };
        // Only fails at the edge of chrono's representable range
        start.unwrap_or(today)
    }

    /// Number of calendar days from start to today, both ends included.
    pub fn day_count(self, today: NaiveDate) -> usize {
        let days = (today - self.start_date(today)).num_days();
        days.max(0) as usize + 1
    }
}
