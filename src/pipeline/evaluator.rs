use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ephemeris::Propagator;
use crate::error::Result;
use crate::observer::ObserverContext;
use crate::tle::TleRecord;
use crate::utils::config::DEGREES_PER_RADIAN;

/// Display-ready state of one satellite for the run's observer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedSatellite {
    pub name: String,
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
    pub next_rise: DateTime<Utc>,
    pub next_set: DateTime<Utc>,
}

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * DEGREES_PER_RADIAN
}

/// Propagate one record (exactly one call, no caching) and convert its angles to degrees
pub fn evaluate<P: Propagator + ?Sized>(
    propagator: &P,
    record: &TleRecord,
    observer: &ObserverContext,
) -> Result<EvaluatedSatellite> {
    let propagation = propagator.evaluate(record, observer)?;
    Ok(EvaluatedSatellite {
        name: record.name.clone(),
        altitude_deg: radians_to_degrees(propagation.altitude_rad),
        azimuth_deg: radians_to_degrees(propagation.azimuth_rad),
        next_rise: propagation.next_rise,
        next_set: propagation.next_set,
    })
}
