//! Time utilities for observer epochs and pass timestamps

use chrono::{DateTime, DurationRound, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::error::{Result, TrackerError};

/// Naive layouts accepted for an observer epoch, interpreted as UTC
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp into `DateTime<Utc>`
///
/// Accepts RFC 3339 with an explicit offset (converted to UTC), naive
/// date-times with `T` or space separators (taken as UTC), and bare dates
/// (midnight UTC).
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TrackerError::config(format!("unparsable time '{text}'")))
}

/// Render a timestamp as ISO-8601 UTC with whole seconds, e.g. `2016-06-23T10:00:00Z`
#[inline]
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Round to the nearest whole second, keeping the input if rounding is not representable
#[inline]
pub fn round_to_second(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.duration_round(chrono::Duration::seconds(1)).unwrap_or(dt)
}

/// Greenwich mean sidereal time in radians, wrapped to [0, 2π)
#[inline]
pub fn greenwich_sidereal_time(dt: &DateTime<Utc>) -> f64 {
    sgp4::iau_epoch_to_sidereal_time(sgp4::julian_years_since_j2000(&dt.naive_utc()))
        .rem_euclid(std::f64::consts::TAU)
}
