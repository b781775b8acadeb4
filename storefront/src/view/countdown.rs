//! # Time-Remaining Labels
//!
//! Parsing of listing end timestamps and the human countdown labels derived
//! from them. Pure functions; the repeating tick that applies them lives in
//! the countdown task.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Label shown once the deadline has passed.
pub const ENDED_LABEL: &str = "Auction Ended";

/// Parse a listing end timestamp. The backend sends ISO-8601, sometimes
/// without an offset; offset-less timestamps are taken as UTC.
pub fn parse_end_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Human time-remaining label from `now` to `end`.
pub fn time_remaining_label(now: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let remaining = end - now;
    if remaining <= Duration::zero() {
        return ENDED_LABEL.to_string();
    }
    format_remaining(remaining)
}

/// Day/hour/minute/second breakpoints: the two most significant non-zero
/// units are shown.
fn format_remaining(remaining: Duration) -> String {
    let seconds = remaining.num_seconds();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: i64) -> (DateTime<Utc>, DateTime<Utc>) {
        let now = DateTime::parse_from_rfc3339("2025-10-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        (now, now + Duration::milliseconds(millis))
    }

    #[test]
    fn test_minute_second_breakpoint() {
        let (now, end) = at(90_000);
        assert_eq!(time_remaining_label(now, end), "1m 30s");
    }

    #[test]
    fn test_day_hour_breakpoint() {
        let (now, end) = at(90_000_000);
        assert_eq!(time_remaining_label(now, end), "1d 1h");
    }

    #[test]
    fn test_seconds_only() {
        let (now, end) = at(42_000);
        assert_eq!(time_remaining_label(now, end), "42s");
    }

    #[test]
    fn test_hours_and_minutes() {
        let (now, end) = at(3 * 3_600_000 + 5 * 60_000);
        assert_eq!(time_remaining_label(now, end), "3h 5m");
    }

    #[test]
    fn test_past_deadline() {
        let (now, end) = at(-1);
        assert_eq!(time_remaining_label(now, end), ENDED_LABEL);
        assert_eq!(time_remaining_label(now, now), ENDED_LABEL);
    }

    #[test]
    fn test_parse_end_time_formats() {
        assert!(parse_end_time("2025-10-01T15:30:00Z").is_some());
        assert!(parse_end_time("2025-10-01T15:30:00+02:00").is_some());
        assert!(parse_end_time("2025-10-01T15:30:00").is_some());
        assert!(parse_end_time("not a timestamp").is_none());
    }
}
