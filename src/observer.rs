//! Observer location and reference epoch

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Result, TrackerError};
use crate::utils::time_utils::parse_timestamp;

/// Where and when the sky is evaluated. Built once per run and shared by every record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObserverContext {
    /// East-positive longitude in degrees
    pub longitude_deg: f64,
    /// North-positive latitude in degrees
    pub latitude_deg: f64,
    /// Height above the WGS84 ellipsoid in meters
    pub elevation_m: i32,
    pub timestamp: DateTime<Utc>,
}

impl ObserverContext {
    /// Build a context from already-parsed values, validating geographic ranges
    pub fn new(
        longitude_deg: f64,
        latitude_deg: f64,
        elevation_m: i32,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(TrackerError::config(format!(
                "longitude {longitude_deg} is outside [-180, 180]"
            )));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(TrackerError::config(format!(
                "latitude {latitude_deg} is outside [-90, 90]"
            )));
        }
        Ok(ObserverContext {
            longitude_deg,
            latitude_deg,
            elevation_m,
            timestamp,
        })
    }

    /// Build a context from a `"<lon>,<lat>"` pair and an ISO-8601 time string
    pub fn parse(coordinates: &str, elevation_m: i32, time: &str) -> Result<Self> {
        let (longitude_deg, latitude_deg) = parse_coordinates(coordinates)?;
        Self::new(longitude_deg, latitude_deg, elevation_m, parse_timestamp(time)?)
    }
}

/// Split `"<lon>,<lat>"` and parse both angles
pub fn parse_coordinates(text: &str) -> Result<(f64, f64)> {
    let mut parts = text.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(lon), Some(lat), None) => Ok((parse_angle(lon)?, parse_angle(lat)?)),
        _ => Err(TrackerError::config(format!(
            "coordinates '{text}' must be '<longitude>,<latitude>'"
        ))),
    }
}

/// Parse an angle in degrees: signed decimal (`-14.22`) or sexagesimal (`-14:13:16.2`)
pub fn parse_angle(text: &str) -> Result<f64> {
    let text = text.trim();
    let invalid = || TrackerError::config(format!("unparsable angle '{text}'"));

    if !text.contains(':') {
        return text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(invalid);
    }

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let fields = unsigned
        .split(':')
        .map(|field| field.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0))
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(invalid)?;

    let (degrees, minutes, seconds) = match fields.as_slice() {
        [d, m] => (*d, *m, 0.0),
        [d, m, s] => (*d, *m, *s),
        _ => return Err(invalid()),
    };
    if minutes >= 60.0 || seconds >= 60.0 {
        return Err(invalid());
    }

    let magnitude = degrees + minutes / 60.0 + seconds / 3600.0;
    Ok(if negative { -magnitude } else { magnitude })
}
