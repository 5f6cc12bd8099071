mod maths_utils;
mod time_utils;

pub use time_utils::{TimeUtils, format_clock, local_today, short_date_label};

pub(crate) use maths_utils::{min_max_mean, pct_change};
