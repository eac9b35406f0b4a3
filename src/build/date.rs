//! `publicReleaseDate` normalization.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};

use crate::error::ConvertError;

/// Normalize a release date to an ISO 8601 UTC date-time string with
/// millisecond precision, e.g. `2023-01-15T00:00:00.000Z`.
///
/// Accepts RFC 3339 date-times, naive date-times, and bare dates; a bare
/// date is interpreted as midnight UTC. Anything else is fatal.
pub fn normalize_release_date(raw: &str) -> Result<String, ConvertError> {
    let utc = parse_as_utc(raw).ok_or_else(|| ConvertError::InvalidDate {
        value: raw.to_string(),
    })?;
    Ok(utc.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn parse_as_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = raw.parse::<NaiveDateTime>() {
        return Some(ndt.and_utc());
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    None
}
