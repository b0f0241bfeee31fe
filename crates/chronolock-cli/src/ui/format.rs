//! String formatting utilities for UI rendering.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

/// Format a remaining duration as `DDd HHh MMm SSs`.
///
/// Partial seconds round up, so a gate that is still closed never displays
/// as zero. Negative durations clamp to zero.
pub fn format_remaining(remaining: Duration) -> String {
    let millis = remaining.num_milliseconds().max(0);
    let total_secs = (millis + 999) / 1000;

    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    format!("{:02}d {:02}h {:02}m {:02}s", days, hours, minutes, seconds)
}

/// Format an instant for display in the reference time zone.
pub fn format_datetime(dt: &DateTime<Utc>, timezone: Tz) -> String {
    dt.with_timezone(&timezone)
        .format("%Y-%m-%d %H:%M %Z")
        .to_string()
}
