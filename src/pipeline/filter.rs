use crate::pipeline::evaluator::EvaluatedSatellite;

/// Whether a satellite is reported: always, or only while above the horizon
#[inline]
pub fn accept(sat: &EvaluatedSatellite, apparent_only: bool) -> bool {
    !apparent_only || sat.altitude_deg > 0.0
}
