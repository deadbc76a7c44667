//! Report line formatting.
use std::fmt::Display;
use chrono::{DateTime, Local, TimeZone};

/// strftime pattern of the report timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format an instant as `YYYY-MM-DD HH:MM:SS` in its own time zone.
pub fn timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local wall-clock time, formatted.
pub fn local_timestamp() -> String {
    timestamp(&Local::now())
}

/// Build the hello world line for one rank.
pub fn format_report(timestamp: &str, host_name: &str, rank: i32, size: i32) -> String {
    format!(
        "{}: Hello world from processor {}, rank {} out of {} processors",
        timestamp, host_name, rank, size,
    )
}
