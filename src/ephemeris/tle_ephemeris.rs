use chrono::{DateTime, Utc};
use sgp4::{Constants, Elements};

use crate::ephemeris::topocentric::{look_angles, GroundStation, LookAngles};
use crate::error::{Result, TrackerError};
use crate::tle::TleRecord;

/// SGP4 state for one TLE record, reusable across many evaluation times
pub struct TleEphemeris {
    name: String,
    elements: Elements,
    constants: Constants,
}

impl TleEphemeris {
    /// Parse the element lines and initialise the SGP4 constants
    pub fn from_record(record: &TleRecord) -> Result<Self> {
        let elements = Elements::from_tle(
            Some(record.name.clone()),
            record.line1.as_bytes(),
            record.line2.as_bytes(),
        )
        .map_err(|e| TrackerError::MalformedRecord {
            name: record.name.clone(),
            message: format!("TLE parse error: {e:?}"),
        })?;

        let constants = Constants::from_elements(&elements).map_err(|e| {
            TrackerError::MalformedRecord {
                name: record.name.clone(),
                message: format!("SGP4 constants error: {e:?}"),
            }
        })?;

        Ok(TleEphemeris {
            name: record.name.clone(),
            elements,
            constants,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// propagate_to_teme(at) -> [x, y, z]
    ///
    /// Propagates the satellite to `at` and returns its TEME position in km.
    pub fn propagate_to_teme(&self, at: &DateTime<Utc>) -> Result<[f64; 3]> {
        let minutes_since_epoch = self
            .elements
            .datetime_to_minutes_since_epoch(&at.naive_utc())
            .map_err(|e| {
                TrackerError::propagation(
                    &self.name,
                    format!("Failed to calculate minutes since epoch for {at}: {e:?}"),
                )
            })?;

        let prediction = self
            .constants
            .propagate(minutes_since_epoch)
            .map_err(|e| TrackerError::propagation(&self.name, format!("Propagation error: {e:?}")))?;

        Ok(prediction.position)
    }

    /// Look angles from `station` at `at`
    pub fn look_angles(&self, station: &GroundStation, at: &DateTime<Utc>) -> Result<LookAngles> {
        let position = self.propagate_to_teme(at)?;
        Ok(look_angles(station, &position, at))
    }
}
