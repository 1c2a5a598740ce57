use chrono::{DateTime, Utc};
use chrono_tz::Tz;

const TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";
const TIMESTAMP_LONG_FORMAT: &str = "%a, %b %-d, %Y, %-I:%M %p";
const LOG_FORMAT: &str = "%m/%d/%Y %I:%M:%S%p %Z";

/// Looks up an IANA zone name, falling back to UTC when it can't be resolved.
pub fn resolve_zone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or(Tz::UTC)
}

pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

fn in_zone(epoch: i64, zone: Tz) -> Option<DateTime<Tz>> {
    DateTime::<Utc>::from_timestamp(epoch, 0).map(|t| t.with_timezone(&zone))
}

/// `Jan 2, 2006, 3:04 PM`
pub fn format_timestamp(epoch: i64, zone: Tz) -> String {
    in_zone(epoch, zone)
        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| epoch.to_string())
}

/// `Mon, Jan 2, 2006, 3:04 PM`
pub fn format_timestamp_long(epoch: i64, zone: Tz) -> String {
    in_zone(epoch, zone)
        .map(|t| t.format(TIMESTAMP_LONG_FORMAT).to_string())
        .unwrap_or_else(|| epoch.to_string())
}

pub fn log_prefix(zone: Tz) -> String {
    Utc::now().with_timezone(&zone).format(LOG_FORMAT).to_string()
}
