//! Galileo TLE tracker
//!
//! Reads a stream of three-line element sets, propagates each satellite to a
//! fixed observer and instant, and reports its altitude, azimuth and next
//! rise/set times.

// Module declarations
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod observer;
pub mod pipeline;
pub mod source;
pub mod tle;
pub mod tracker;
pub mod utils;

// Re-export public API
pub use config::{RunOptions, TrackerConfig};
pub use ephemeris::{PassSearch, Propagation, Propagator, Sgp4Propagator};
pub use error::{Result, TrackerError};
pub use observer::ObserverContext;
pub use pipeline::{EvaluatedSatellite, ReportFormat};
pub use source::{source_from_location, FileSource, HttpSource, TleSource};
pub use tle::{TleRecord, TleStream};
pub use tracker::{RunSummary, Tracker};
