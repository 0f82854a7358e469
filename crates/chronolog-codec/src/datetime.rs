//! `YYYYMMDDThhmmss` timestamps, used as note identifiers and creation times.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// `chrono` format string for note timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Format a point in time as `YYYYMMDDThhmmss` in its own time zone.
pub fn format_timestamp<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// The current local time as a timestamp.
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Parse a `YYYYMMDDThhmmss` timestamp.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if value.len() != 15 {
        return None;
    }
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

pub fn is_timestamp(value: &str) -> bool {
    parse_timestamp(value).is_some()
}
