//! Publication date display.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

use super::article::parse_timestamp;

const DAY_NAMES: [&str; 7] = ["Min", "Sen", "Sel", "Rab", "Kam", "Jum", "Sab"];

const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Format a `publishedAt` value as `"Sen, 01 Januari 10.30"` in local time.
///
/// Input that does not parse is returned unchanged.
pub fn format_published(timestamp: &str) -> String {
    format_published_in(timestamp, &Local)
}

pub fn format_published_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> String {
    match parse_timestamp(timestamp) {
        Some(instant) => format_instant(&instant.with_timezone(tz)),
        None => timestamp.to_string(),
    }
}

fn format_instant<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    format!(
        "{}, {:02} {} {:02}.{:02}",
        DAY_NAMES[dt.weekday().num_days_from_sunday() as usize],
        dt.day(),
        MONTH_NAMES[dt.month0() as usize],
        dt.hour(),
        dt.minute()
    )
}
