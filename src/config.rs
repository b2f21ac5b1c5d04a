//! Validated run configuration

use chrono::Utc;

use crate::error::Result;
use crate::observer::ObserverContext;
use crate::pipeline::ReportFormat;
use crate::utils::time_utils::parse_timestamp;

/// Behaviour switches for a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Only report satellites above the horizon
    pub apparent_only: bool,
    /// Add rise/set lines to text output
    pub verbose: bool,
    pub format: ReportFormat,
}

/// Everything a run needs, resolved before the feed is touched
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub observer: ObserverContext,
    /// URL or path of the TLE feed
    pub location: String,
    pub options: RunOptions,
}

impl TrackerConfig {
    /// Resolve raw option values. A missing time means "now".
    pub fn from_values(
        coordinates: &str,
        elevation_m: i32,
        time: Option<&str>,
        location: &str,
        options: RunOptions,
    ) -> Result<Self> {
        let timestamp = match time {
            Some(text) => parse_timestamp(text)?,
            None => Utc::now(),
        };
        let (longitude_deg, latitude_deg) = crate::observer::parse_coordinates(coordinates)?;
        let observer = ObserverContext::new(longitude_deg, latitude_deg, elevation_m, timestamp)?;

        Ok(TrackerConfig {
            observer,
            location: location.trim().to_string(),
            options,
        })
    }
}
