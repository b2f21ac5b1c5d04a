//! Error type shared by every stage of a tracking run
//!
//! Each variant maps to one failure class. Configuration errors are raised
//! before any processing starts. Acquisition errors abort the run before or
//! while the feed is read. Framing, record and propagation errors stop the
//! stream at the offending record. None of them is recovered from.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// Unparsable or out-of-range coordinates, elevation, time or source location
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The TLE feed could not be opened or read
    #[error("failed to acquire TLE feed from {source_name}: {message}")]
    Acquisition {
        source_name: String,
        message: String,
    },

    /// An element line 2 arrived without exactly two buffered lines before it
    #[error(
        "malformed TLE framing at line {line}: element line 2 follows {buffered} buffered line(s), expected 2"
    )]
    MalformedFraming { line: usize, buffered: usize },

    /// The propagation model rejected the element lines
    #[error("malformed TLE record '{name}': {message}")]
    MalformedRecord { name: String, message: String },

    /// Propagation or horizon-crossing search failed for a well-formed record
    #[error("propagation failed for '{name}': {message}")]
    Propagation { name: String, message: String },

    /// Writing the report failed
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        TrackerError::Config(message.into())
    }

    pub(crate) fn acquisition(source_name: impl Into<String>, message: impl ToString) -> Self {
        TrackerError::Acquisition {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn propagation(name: &str, message: impl Into<String>) -> Self {
        TrackerError::Propagation {
            name: name.to_string(),
            message: message.into(),
        }
    }
}
