//! Time utilities: parsing HH:MM, duration computations, formatting minutes, etc.

use chrono::{DateTime, Local, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Minutes from `start` to `end` on the same day.
///
/// No day-boundary correction: the result is negative when `end` precedes
/// `start` (e.g. a shift crossing midnight).
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// String flavour of [`minutes_between`]; `None` when either side is not `HH:MM`.
pub fn minutes_between_str(start: &str, end: &str) -> Option<i64> {
    Some(minutes_between(parse_time(start)?, parse_time(end)?))
}

/// Hours as a decimal string with two places (`90` → `"1.50"`).
pub fn hours_decimal(mins: i64) -> String {
    format!("{:.2}", mins as f64 / 60.0)
}

/// Local wall-clock `HH:MM` of an instant.
pub fn clock_string(instant: &DateTime<Local>) -> String {
    instant.format("%H:%M").to_string()
}

/// Elapsed seconds rendered as `HH:MM:SS` for the live timer display.
pub fn format_elapsed(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn minutes_between_same_day() {
        assert_eq!(minutes_between_str("09:00", "17:00"), Some(480));
        assert_eq!(minutes_between_str("12:00", "12:30"), Some(30));
        assert_eq!(minutes_between_str("08:15", "08:15"), Some(0));
    }

    #[test]
    fn minutes_between_is_negative_across_midnight() {
        assert_eq!(minutes_between_str("22:00", "02:00"), Some(-1200));
    }

    #[test]
    fn malformed_times_give_none() {
        assert_eq!(minutes_between_str("9h", "17:00"), None);
        assert_eq!(minutes_between_str("09:00", ""), None);
        assert_eq!(minutes_between_str("25:00", "26:00"), None);
    }

    #[test]
    fn minutes_between_matches_minute_arithmetic() {
        for (sh, sm, eh, em) in [(0, 0, 23, 59), (7, 45, 16, 5), (13, 30, 13, 31)] {
            let start = format!("{sh:02}:{sm:02}");
            let end = format!("{eh:02}:{em:02}");
            let expected = (eh * 60 + em) - (sh * 60 + sm);
            assert_eq!(minutes_between_str(&start, &end), Some(expected));
        }
    }

    #[test]
    fn hours_decimal_has_two_places() {
        assert_eq!(hours_decimal(480), "8.00");
        assert_eq!(hours_decimal(30), "0.50");
        assert_eq!(hours_decimal(-90), "-1.50");
        assert_eq!(hours_decimal(20), "0.33");
    }

    #[test]
    fn formats() {
        assert_eq!(format_elapsed(3725), "01:02:05");

        let t = Local.with_ymd_and_hms(2025, 3, 4, 9, 7, 59).unwrap();
        assert_eq!(clock_string(&t), "09:07");
    }
}
