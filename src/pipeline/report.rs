//! Report lines for accepted satellites

use std::io::{self, Write};

use crate::pipeline::evaluator::EvaluatedSatellite;
use crate::utils::time_utils::format_timestamp;

/// Output encoding for accepted satellites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// `"<name>, altitude <alt> deg, azimuth <az> deg"`, plus rise/set lines when verbose
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

pub fn format_primary(sat: &EvaluatedSatellite) -> String {
    format!(
        "{}, altitude {:4.1} deg, azimuth {:5.1} deg",
        sat.name, sat.altitude_deg, sat.azimuth_deg
    )
}

/// Write one satellite and flush, so output keeps pace with the input stream
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    sat: &EvaluatedSatellite,
    format: ReportFormat,
    verbose: bool,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => {
            writeln!(out, "{}", format_primary(sat))?;
            if verbose {
                writeln!(out, "Rise time: {}", format_timestamp(&sat.next_rise))?;
                writeln!(out, " Set time: {}", format_timestamp(&sat.next_set))?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer(&mut *out, sat)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
