//! Streaming three-line TLE framing
//!
//! A feed is a run of `name`, `element line 1`, `element line 2` groups. The
//! stream buffers lines until it sees one starting with the element line 2
//! marker, then emits the group as a [`TleRecord`]. Lines are only trimmed,
//! never skipped, so a stray blank line shifts the buffer and the next marker
//! line fails with [`TrackerError::MalformedFraming`].

use std::io::{self, BufRead};
use std::iter::FusedIterator;

use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::utils::config::ELEMENT_LINE_2_MARKER;

/// One satellite's elements at one epoch, exactly as framed in the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TleRecord {
    pub name: String,
    pub line1: String,
    pub line2: String,
}

impl TleRecord {
    pub fn new(name: impl Into<String>, line1: impl Into<String>, line2: impl Into<String>) -> Self {
        TleRecord {
            name: name.into(),
            line1: line1.into(),
            line2: line2.into(),
        }
    }
}

/// Lazy iterator of TLE records over a line source
///
/// Stops for good after the first error; a trailing incomplete group is dropped.
pub struct TleStream<I> {
    lines: I,
    buffer: Vec<String>,
    line_number: usize,
    finished: bool,
}

impl<I> TleStream<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(lines: I) -> Self {
        TleStream {
            lines,
            buffer: Vec::with_capacity(2),
            line_number: 0,
            finished: false,
        }
    }
}

impl<R: BufRead> TleStream<io::Lines<R>> {
    pub fn from_reader(reader: R) -> Self {
        TleStream::new(reader.lines())
    }
}

impl<I> TleStream<I> {
    fn complete_record(&mut self, line2: &str) -> Result<TleRecord> {
        let buffered = std::mem::take(&mut self.buffer);
        match <[String; 2]>::try_from(buffered) {
            Ok([name, line1]) => Ok(TleRecord {
                name,
                line1,
                line2: line2.to_string(),
            }),
            Err(buffered) => Err(TrackerError::MalformedFraming {
                line: self.line_number,
                buffered: buffered.len(),
            }),
        }
    }
}

impl<I> Iterator for TleStream<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<TleRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let raw = match self.lines.next() {
                Some(Ok(raw)) => raw,
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(TrackerError::acquisition("input stream", e)));
                }
                None => {
                    self.finished = true;
                    if !self.buffer.is_empty() {
                        debug!(
                            dropped = self.buffer.len(),
                            "Discarding incomplete trailing TLE group"
                        );
                        self.buffer.clear();
                    }
                    return None;
                }
            };
            self.line_number += 1;

            let line = raw.trim();
            if line.starts_with(ELEMENT_LINE_2_MARKER) {
                let record = self.complete_record(line);
                if record.is_err() {
                    self.finished = true;
                }
                return Some(record);
            }
            self.buffer.push(line.to_string());
        }
    }
}

impl<I> FusedIterator for TleStream<I> where I: Iterator<Item = io::Result<String>> {}
