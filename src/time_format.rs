//! Time Formatting
//!
//! Relative ("3 hours ago") and absolute timestamps for the metadata line.

use chrono::{DateTime, Local};

const MINUTE: i64 = 60_000;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

struct Unit {
    /// Exclusive upper bound of |diff| for this unit
    max: i64,
    value: i64,
    name: &'static str,
    past: &'static str,
    future: &'static str,
}

const UNITS: [Unit; 6] = [
    Unit { max: 46 * MINUTE, value: MINUTE, name: "minute", past: "a minute ago", future: "in a minute" },
    Unit { max: 20 * HOUR, value: HOUR, name: "hour", past: "an hour ago", future: "in an hour" },
    Unit { max: 6 * DAY, value: DAY, name: "day", past: "yesterday", future: "tomorrow" },
    Unit { max: 28 * DAY, value: WEEK, name: "week", past: "last week", future: "in a week" },
    Unit { max: 11 * MONTH, value: MONTH, name: "month", past: "last month", future: "in a month" },
    Unit { max: i64::MAX, value: YEAR, name: "year", past: "last year", future: "in a year" },
];

/// Human relative time of `then_ms` as seen at `now_ms`
pub fn time_ago(then_ms: i64, now_ms: i64) -> String {
    let diff = now_ms - then_ms;
    let abs = diff.abs();
    if abs < MINUTE {
        return "just now".to_string();
    }

    let unit = UNITS.iter().find(|u| abs < u.max).unwrap_or(&UNITS[UNITS.len() - 1]);
    // Round half up, like Math.round on the absolute value
    let val = (abs + unit.value / 2) / unit.value;

    if diff < 0 {
        if val <= 1 {
            unit.future.to_string()
        } else {
            format!("in {} {}s", val, unit.name)
        }
    } else if val <= 1 {
        unit.past.to_string()
    } else {
        format!("{} {}s ago", val, unit.name)
    }
}

/// Local date and time, e.g. `2024/03/05 14:07:09`
pub fn format_absolute(ms: i64) -> String {
    match DateTime::from_timestamp_millis(ms) {
        Some(utc) => utc.with_timezone(&Local).format("%Y/%m/%d %H:%M:%S").to_string(),
        None => String::from("Invalid date"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_just_now() {
        assert_eq!(time_ago(NOW, NOW), "just now");
        assert_eq!(time_ago(NOW - 59_000, NOW), "just now");
        assert_eq!(time_ago(NOW + 30_000, NOW), "just now");
    }

    #[test]
    fn test_minutes_and_hours() {
        assert_eq!(time_ago(NOW - 60_000, NOW), "a minute ago");
        assert_eq!(time_ago(NOW - 5 * MINUTE, NOW), "5 minutes ago");
        assert_eq!(time_ago(NOW - 45 * MINUTE, NOW), "45 minutes ago");
        assert_eq!(time_ago(NOW - 46 * MINUTE, NOW), "an hour ago");
        assert_eq!(time_ago(NOW - 3 * HOUR, NOW), "3 hours ago");
    }

    #[test]
    fn test_days_weeks_months_years() {
        assert_eq!(time_ago(NOW - 20 * HOUR, NOW), "yesterday");
        assert_eq!(time_ago(NOW - 3 * DAY, NOW), "3 days ago");
        assert_eq!(time_ago(NOW - 6 * DAY, NOW), "last week");
        assert_eq!(time_ago(NOW - 14 * DAY, NOW), "2 weeks ago");
        assert_eq!(time_ago(NOW - 60 * DAY, NOW), "2 months ago");
        assert_eq!(time_ago(NOW - 400 * DAY, NOW), "last year");
        assert_eq!(time_ago(NOW - 3 * YEAR, NOW), "3 years ago");
    }

    #[test]
    fn test_future() {
        assert_eq!(time_ago(NOW + 2 * MINUTE, NOW), "in 2 minutes");
        assert_eq!(time_ago(NOW + HOUR, NOW), "in an hour");
        assert_eq!(time_ago(NOW + DAY, NOW), "tomorrow");
    }

    #[test]
    fn test_format_absolute_shape() {
        let text = format_absolute(NOW);
        // Local timezone varies; check the layout only
        assert_eq!(text.len(), "2023/11/14 22:13:20".len());
        assert_eq!(&text[4..5], "/");
        assert_eq!(&text[13..14], ":");
    }
}
