//! Configuration constants for galileo_tracker

use std::time::Duration;

// Observer defaults (Traun, Austria)
pub const DEFAULT_COORDINATES: &str = "14.221162,48.223560";
pub const DEFAULT_ELEVATION_M: i32 = 273;

// TLE feed
pub const DEFAULT_TLE_URL: &str = "https://celestrak.org/NORAD/elements/gp.php?GROUP=galileo&FORMAT=tle";
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// First character of element line 2; closes a three-line TLE group
pub const ELEMENT_LINE_2_MARKER: char = '2';

// Environment variables read by the CLI (also loadable from a .env file)
pub const ENV_COORDINATES: &str = "GALILEO_TRACKER_COORDINATES";
pub const ENV_ELEVATION: &str = "GALILEO_TRACKER_ELEVATION";
pub const ENV_TIME: &str = "GALILEO_TRACKER_TIME";
pub const ENV_URL: &str = "GALILEO_TRACKER_URL";

// Unit conversions
pub const DEGREES_PER_RADIAN: f64 = 180.0 / std::f64::consts::PI;
pub const KM_PER_M: f64 = 1.0e-3;

// WGS84 ellipsoid flattening (equatorial radius comes from sgp4::WGS84.ae)
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257223563;

// Horizon-crossing search
pub const PASS_SCAN_STEP_SECONDS: i64 = 60;
pub const PASS_PRECISION_MILLIS: i64 = 100;
pub const PASS_SEARCH_HORIZON_DAYS: i64 = 7;
