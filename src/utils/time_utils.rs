use chrono::{DateTime, Local, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const CLOCK_FORMAT: &str = "%H:%M:%S";
}

/// Calendar day in the user's local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Used for display purposes
pub fn format_clock(at: &DateTime<Local>) -> String {
    at.format(TimeUtils::CLOCK_FORMAT).to_string()
}

/// Short axis label: `Mar 05`
pub fn short_date_label(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}
