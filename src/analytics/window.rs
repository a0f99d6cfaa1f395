//! The rolling date window used for the tracked card's bill total.

use std::ops::RangeInclusive;

use time::{Date, Duration};

/// How far the rolling window extends either side of its center.
const HALF_SPAN_DAYS: i64 = 6;

/// The 13-day window centered on `center`: `[center - 6d, center + 6d]`.
///
/// Unlike the weekly summary, this window is relative to the current moment
/// rather than aligned to calendar weeks.
pub fn rolling_window(center: Date) -> RangeInclusive<Date> {
    center - Duration::days(HALF_SPAN_DAYS)..=center + Duration::days(HALF_SPAN_DAYS)
}

#[cfg(test)]
mod rolling_window_tests {
    use time::{Duration, macros::date};

    use super::rolling_window;

    #[test]
    fn window_is_thirteen_days_wide() {
        let window = rolling_window(date!(2025 - 08 - 07));

        assert_eq!(*window.end() - *window.start(), Duration::days(12));
        assert_eq!(window, date!(2025 - 08 - 01)..=date!(2025 - 08 - 13));
    }

    #[test]
    fn window_spans_a_month_boundary() {
        let window = rolling_window(date!(2025 - 08 - 02));

        assert_eq!(window, date!(2025 - 07 - 27)..=date!(2025 - 08 - 08));
    }
}
