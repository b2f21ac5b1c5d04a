//! Topocentric look angles from TEME positions
//!
//! The observer's WGS84 position is rotated into the TEME frame by local
//! sidereal time (polar motion and the equation of the equinoxes are ignored),
//! and the line of sight is projected onto the south/east/zenith frame.

use std::f64::consts::TAU;

use chrono::{DateTime, Utc};

use crate::observer::ObserverContext;
use crate::utils::config::{KM_PER_M, WGS84_FLATTENING};
use crate::utils::time_utils::greenwich_sidereal_time;
use crate::utils::vector_math::{rotate_z, subtract, vector_magnitude};

/// Observer position in geodetic radians/kilometres
#[derive(Debug, Clone, Copy)]
pub struct GroundStation {
    pub latitude_rad: f64,
    pub longitude_rad: f64,
    pub height_km: f64,
}

impl From<&ObserverContext> for GroundStation {
    fn from(observer: &ObserverContext) -> Self {
        GroundStation {
            latitude_rad: observer.latitude_deg.to_radians(),
            longitude_rad: observer.longitude_deg.to_radians(),
            height_km: f64::from(observer.elevation_m) * KM_PER_M,
        }
    }
}

impl GroundStation {
    /// Earth-fixed Cartesian position in km
    pub fn ecef_position(&self) -> [f64; 3] {
        let ae = sgp4::WGS84.ae;
        let e2 = WGS84_FLATTENING * (2.0 - WGS84_FLATTENING);
        let (sin_lat, cos_lat) = self.latitude_rad.sin_cos();
        let (sin_lon, cos_lon) = self.longitude_rad.sin_cos();

        // Prime vertical radius of curvature
        let n = ae / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        [
            (n + self.height_km) * cos_lat * cos_lon,
            (n + self.height_km) * cos_lat * sin_lon,
            (n * (1.0 - e2) + self.height_km) * sin_lat,
        ]
    }

    /// Position in the TEME frame at `at`, in km
    pub fn teme_position(&self, at: &DateTime<Utc>) -> [f64; 3] {
        rotate_z(&self.ecef_position(), greenwich_sidereal_time(at))
    }
}

/// Altitude/azimuth of a target as seen by a ground station
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAngles {
    /// Elevation above the geometric horizon, radians in [-π/2, π/2]
    pub altitude: f64,
    /// Bearing from north through east, radians in [0, 2π)
    pub azimuth: f64,
    pub range_km: f64,
}

/// Look angles from `station` to a target at `target_teme` (km) at time `at`
pub fn look_angles(station: &GroundStation, target_teme: &[f64; 3], at: &DateTime<Utc>) -> LookAngles {
    let observer = station.teme_position(at);
    let range = subtract(target_teme, &observer);
    let range_km = vector_magnitude(&range);

    let theta = greenwich_sidereal_time(at) + station.longitude_rad;
    let (sin_lat, cos_lat) = station.latitude_rad.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();

    let south = sin_lat * cos_theta * range[0] + sin_lat * sin_theta * range[1] - cos_lat * range[2];
    let east = -sin_theta * range[0] + cos_theta * range[1];
    let zenith = cos_lat * cos_theta * range[0] + cos_lat * sin_theta * range[1] + sin_lat * range[2];

    LookAngles {
        altitude: zenith.atan2(south.hypot(east)),
        azimuth: east.atan2(-south).rem_euclid(TAU),
        range_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::f64::consts::FRAC_PI_2;

    fn equator_station() -> GroundStation {
        GroundStation {
            latitude_rad: 0.0,
            longitude_rad: 0.0,
            height_km: 0.0,
        }
    }

    #[test]
    fn equatorial_station_sits_on_x_axis() {
        let p = equator_station().ecef_position();
        assert!((p[0] - sgp4::WGS84.ae).abs() < 1e-9);
        assert!(p[1].abs() < 1e-9 && p[2].abs() < 1e-9);
    }

    #[test]
    fn target_straight_up_is_at_zenith() {
        let at = Utc.with_ymd_and_hms(2016, 6, 23, 10, 0, 0).unwrap();
        let station = equator_station();
        let up = station.teme_position(&at);
        let target = [up[0] * 4.0, up[1] * 4.0, up[2] * 4.0];

        let angles = look_angles(&station, &target, &at);
        assert!((angles.altitude - FRAC_PI_2).abs() < 1e-9);
        assert!((angles.range_km - 3.0 * sgp4::WGS84.ae).abs() < 1e-6);
    }

    #[test]
    fn target_due_north_has_zero_azimuth() {
        let at = Utc.with_ymd_and_hms(2016, 6, 23, 10, 0, 0).unwrap();
        let station = equator_station();
        let up = station.teme_position(&at);
        // Far along +z from an equatorial station: north, slightly above the horizon
        let target = [up[0], up[1], 50_000.0];

        let angles = look_angles(&station, &target, &at);
        assert!(angles.azimuth < 1e-9 || (TAU - angles.azimuth) < 1e-9);
        assert!(angles.altitude.abs() < 1e-9);
    }

    #[test]
    fn target_due_east_has_quarter_azimuth() {
        let at = Utc.with_ymd_and_hms(2016, 6, 23, 10, 0, 0).unwrap();
        let station = equator_station();
        let up = station.teme_position(&at);
        let east = rotate_z(&[0.0, 1.0, 0.0], greenwich_sidereal_time(&at));
        let target = [
            up[0] + 10_000.0 * east[0],
            up[1] + 10_000.0 * east[1],
            up[2] + 10_000.0 * east[2],
        ];

        let angles = look_angles(&station, &target, &at);
        assert!((angles.azimuth - FRAC_PI_2).abs() < 1e-9);
    }
}
