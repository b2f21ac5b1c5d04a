//! Horizon-crossing search
//!
//! Crossings are bracketed by scanning forward in fixed steps, then narrowed by
//! bisection. A step longer than the shortest pass can skip it entirely, so the
//! default step is well under the few minutes a low pass lasts.

use chrono::{DateTime, Duration, Utc};

use crate::error::Result;
use crate::utils::config::{PASS_PRECISION_MILLIS, PASS_SCAN_STEP_SECONDS, PASS_SEARCH_HORIZON_DAYS};
use crate::utils::time_utils::round_to_second;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crossing {
    Rise,
    Set,
}

impl Crossing {
    fn matches(self, before: f64, after: f64) -> bool {
        match self {
            Crossing::Rise => before <= 0.0 && after > 0.0,
            Crossing::Set => before > 0.0 && after <= 0.0,
        }
    }
}

/// Scan/bisection parameters for finding rise and set instants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSearch {
    pub scan_step: Duration,
    pub precision: Duration,
    /// How far past the start instant to look before giving up
    pub horizon: Duration,
}

impl Default for PassSearch {
    fn default() -> Self {
        PassSearch {
            scan_step: Duration::seconds(PASS_SCAN_STEP_SECONDS),
            precision: Duration::milliseconds(PASS_PRECISION_MILLIS),
            horizon: Duration::days(PASS_SEARCH_HORIZON_DAYS),
        }
    }
}

impl PassSearch {
    /// First instant after `after` where the altitude goes from ≤ 0 to > 0
    pub fn next_rise<F>(&self, after: DateTime<Utc>, altitude: F) -> Result<Option<DateTime<Utc>>>
    where
        F: Fn(DateTime<Utc>) -> Result<f64>,
    {
        self.next_crossing(after, Crossing::Rise, altitude)
    }

    /// First instant after `after` where the altitude goes from > 0 to ≤ 0
    pub fn next_set<F>(&self, after: DateTime<Utc>, altitude: F) -> Result<Option<DateTime<Utc>>>
    where
        F: Fn(DateTime<Utc>) -> Result<f64>,
    {
        self.next_crossing(after, Crossing::Set, altitude)
    }

    fn next_crossing<F>(
        &self,
        after: DateTime<Utc>,
        crossing: Crossing,
        altitude: F,
    ) -> Result<Option<DateTime<Utc>>>
    where
        F: Fn(DateTime<Utc>) -> Result<f64>,
    {
        let limit = after + self.horizon;
        let mut lo = after;
        let mut lo_alt = altitude(lo)?;

        while lo < limit {
            let hi = (lo + self.scan_step).min(limit);
            let hi_alt = altitude(hi)?;
            if crossing.matches(lo_alt, hi_alt) {
                let instant = self.bisect(lo, hi, crossing, &altitude)?;
                let rounded = round_to_second(instant);
                return Ok(Some(if rounded > after { rounded } else { instant }));
            }
            lo = hi;
            lo_alt = hi_alt;
        }
        Ok(None)
    }

    /// Narrow a bracket whose ends straddle the crossing; returns the far side
    fn bisect<F>(
        &self,
        mut lo: DateTime<Utc>,
        mut hi: DateTime<Utc>,
        crossing: Crossing,
        altitude: &F,
    ) -> Result<DateTime<Utc>>
    where
        F: Fn(DateTime<Utc>) -> Result<f64>,
    {
        let is_past = |alt: f64| match crossing {
            Crossing::Rise => alt > 0.0,
            Crossing::Set => alt <= 0.0,
        };

        while hi - lo > self.precision {
            let mid = lo + (hi - lo) / 2;
            if is_past(altitude(mid)?) {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        Ok(hi)
    }
}
