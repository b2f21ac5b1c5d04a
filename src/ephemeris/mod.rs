//! Orbit propagation: SGP4 state, observer geometry and pass search

pub mod passes;
pub mod propagator;
pub mod tle_ephemeris;
pub mod topocentric;

pub use passes::PassSearch;
pub use propagator::{Propagation, Propagator, Sgp4Propagator};
pub use tle_ephemeris::TleEphemeris;
pub use topocentric::{GroundStation, LookAngles};
