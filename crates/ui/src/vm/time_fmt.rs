use chrono::{DateTime, Utc};

use drill_core::format_clock;

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[must_use]
pub fn format_countdown(seconds: u32) -> String {
    format_clock(seconds)
}
