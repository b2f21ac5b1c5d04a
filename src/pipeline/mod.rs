//! Per-record stages: evaluate, filter, report

pub mod evaluator;
pub mod filter;
pub mod report;

pub use evaluator::{evaluate, radians_to_degrees, EvaluatedSatellite};
pub use filter::accept;
pub use report::{format_primary, write_report, ReportFormat};
