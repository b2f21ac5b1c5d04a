//! Orbit propagation capability consumed by the tracking pipeline

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::ephemeris::passes::PassSearch;
use crate::ephemeris::tle_ephemeris::TleEphemeris;
use crate::ephemeris::topocentric::GroundStation;
use crate::error::{Result, TrackerError};
use crate::observer::ObserverContext;
use crate::tle::TleRecord;

/// Raw propagation output for one satellite and one observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Propagation {
    pub altitude_rad: f64,
    pub azimuth_rad: f64,
    pub next_rise: DateTime<Utc>,
    pub next_set: DateTime<Utc>,
}

/// Turns a TLE record plus an observer into look angles and the next pass
///
/// Implementations must be pure functions of their inputs.
pub trait Propagator {
    fn evaluate(&self, tle: &TleRecord, observer: &ObserverContext) -> Result<Propagation>;
}

impl<P: Propagator + ?Sized> Propagator for &P {
    fn evaluate(&self, tle: &TleRecord, observer: &ObserverContext) -> Result<Propagation> {
        (**self).evaluate(tle, observer)
    }
}

/// SGP4/SDP4 propagation with a geometric (unrefracted) horizon
#[derive(Debug, Clone, Default)]
pub struct Sgp4Propagator {
    search: PassSearch,
}

impl Sgp4Propagator {
    pub fn new(search: PassSearch) -> Self {
        Sgp4Propagator { search }
    }
}

impl Propagator for Sgp4Propagator {
    fn evaluate(&self, tle: &TleRecord, observer: &ObserverContext) -> Result<Propagation> {
        let ephemeris = TleEphemeris::from_record(tle)?;
        let station = GroundStation::from(observer);
        let altitude = |t: DateTime<Utc>| ephemeris.look_angles(&station, &t).map(|a| a.altitude);

        let now = ephemeris.look_angles(&station, &observer.timestamp)?;

        let no_crossing = |what: &str| {
            TrackerError::propagation(
                ephemeris.name(),
                format!(
                    "no {what} within {} hours of {}",
                    self.search.horizon.num_hours(),
                    observer.timestamp
                ),
            )
        };
        let next_rise = self
            .search
            .next_rise(observer.timestamp, altitude)?
            .ok_or_else(|| no_crossing("rise"))?;
        // Independent of the rise: a satellite that is up now sets before it rises again
        let next_set = self
            .search
            .next_set(observer.timestamp, altitude)?
            .ok_or_else(|| no_crossing("set"))?;

        debug!(
            satellite = ephemeris.name(),
            altitude_rad = now.altitude,
            azimuth_rad = now.azimuth,
            range_km = now.range_km,
            %next_rise,
            %next_set,
            "Propagated satellite"
        );

        Ok(Propagation {
            altitude_rad: now.altitude,
            azimuth_rad: now.azimuth,
            next_rise,
            next_set,
        })
    }
}
