//! Resolves the configured timezone so "now" means the user's local time.

use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// Get the UTC offset for a canonical timezone name, e.g. "Pacific/Auckland".
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// The current date-time in the timezone `canonical_timezone`.
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if `canonical_timezone` is not a
/// valid, canonical timezone name.
pub fn now_local(canonical_timezone: &str) -> Result<OffsetDateTime, Error> {
    let Some(local_offset) = get_local_offset(canonical_timezone) else {
        tracing::error!("Invalid timezone {}", canonical_timezone);
        return Err(Error::InvalidTimezoneError(canonical_timezone.to_owned()));
    };

    Ok(OffsetDateTime::now_utc().to_offset(local_offset))
}

#[cfg(test)]
mod timezone_tests {
    use crate::Error;

    use super::{get_local_offset, now_local};

    #[test]
    fn resolves_utc() {
        let offset = get_local_offset("Etc/UTC").expect("Etc/UTC should resolve");

        assert!(offset.is_utc());
    }

    #[test]
    fn rejects_invalid_timezone_name() {
        assert!(get_local_offset("Not/AZone").is_none());

        assert_eq!(
            now_local("Not/AZone"),
            Err(Error::InvalidTimezoneError("Not/AZone".to_owned()))
        );
    }
}
