//! IANA time zone lookup.

use chrono_tz::Tz;

use crate::errors::DateError;

/// Parse an IANA identifier such as `"Europe/Zurich"`.
///
/// Unknown or empty identifiers are a [`DateError::InvalidTimeZone`]; there
/// is no fallback zone.
pub fn parse_time_zone(name: &str) -> Result<Tz, DateError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DateError::InvalidTimeZone(name.to_string()));
    }
    trimmed.parse::<Tz>().map_err(|_| DateError::InvalidTimeZone(name.to_string()))
}
