//! Calendar-week math and display formatting for the home page.

use std::ops::RangeInclusive;

use time::{Date, Duration, Time};

/// The Monday–Sunday window containing `date` (Monday is the start of the
/// week).
pub fn week_bounds(date: Date) -> RangeInclusive<Date> {
    let monday = date - Duration::days(date.weekday().number_days_from_monday() as i64);

    monday..=monday + Duration::days(6)
}

/// Format a date as `MM/DD`, e.g. "08/04".
pub fn format_month_day(date: Date) -> String {
    format!("{:02}/{:02}", u8::from(date.month()), date.day())
}

/// Format a time of day on a 12-hour clock, e.g. "1:05 PM".
pub fn format_clock(time: Time) -> String {
    let hour = time.hour();
    let (hour, period) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!("{}:{:02} {}", hour, time.minute(), period)
}

#[cfg(test)]
mod week_bounds_tests {
    use time::macros::date;

    use super::week_bounds;

    #[test]
    fn midweek_date_maps_to_surrounding_week() {
        let bounds = week_bounds(date!(2025 - 08 - 06));

        assert_eq!(bounds, date!(2025 - 08 - 04)..=date!(2025 - 08 - 10));
    }

    #[test]
    fn monday_starts_its_own_week() {
        let bounds = week_bounds(date!(2025 - 08 - 04));

        assert_eq!(*bounds.start(), date!(2025 - 08 - 04));
    }

    #[test]
    fn sunday_ends_its_own_week() {
        let bounds = week_bounds(date!(2025 - 08 - 10));

        assert_eq!(bounds, date!(2025 - 08 - 04)..=date!(2025 - 08 - 10));
    }

    #[test]
    fn week_spans_a_year_boundary() {
        let bounds = week_bounds(date!(2025 - 12 - 31));

        assert_eq!(bounds, date!(2025 - 12 - 29)..=date!(2026 - 01 - 04));
    }

    #[test]
    fn week_spans_a_leap_february_boundary() {
        let bounds = week_bounds(date!(2024 - 02 - 28));

        assert_eq!(bounds, date!(2024 - 02 - 26)..=date!(2024 - 03 - 03));
    }
}
