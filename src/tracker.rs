//! Single-pass tracking run: parse, evaluate, filter, report
//!
//! Records are processed strictly in input order and each accepted satellite
//! is written and flushed before the next record is read. The first error of
//! any kind ends the run; whatever was already written stays written.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::RunOptions;
use crate::ephemeris::Propagator;
use crate::error::Result;
use crate::observer::ObserverContext;
use crate::pipeline::{accept, evaluate, write_report};
use crate::source::TleSource;
use crate::tle::TleStream;

/// Counts from a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Complete records parsed and evaluated
    pub records: usize,
    /// Records that passed the filter and were written
    pub reported: usize,
}

pub struct Tracker<P> {
    observer: ObserverContext,
    propagator: P,
    options: RunOptions,
}

impl<P: Propagator> Tracker<P> {
    pub fn new(observer: ObserverContext, propagator: P, options: RunOptions) -> Self {
        Tracker {
            observer,
            propagator,
            options,
        }
    }

    /// Track every record in `reader`, writing reports to `out`
    pub fn run<R: BufRead, W: Write + ?Sized>(&self, reader: R, out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for record in TleStream::from_reader(reader) {
            let record = record?;
            summary.records += 1;

            let sat = evaluate(&self.propagator, &record, &self.observer)?;
            if !accept(&sat, self.options.apparent_only) {
                debug!(
                    name = %sat.name,
                    altitude_deg = sat.altitude_deg,
                    "Below horizon, skipped"
                );
                continue;
            }

            write_report(out, &sat, self.options.format, self.options.verbose)?;
            summary.reported += 1;
        }

        info!(
            records = summary.records,
            reported = summary.reported,
            "Tracking run complete"
        );
        Ok(summary)
    }

    /// Open `source` and track its records
    pub fn run_source<W: Write + ?Sized>(&self, source: &dyn TleSource, out: &mut W) -> Result<RunSummary> {
        let reader = source.open()?;
        info!(source = %source.describe(), "TLE feed opened");
        self.run(reader, out)
    }
}
