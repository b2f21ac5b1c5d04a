//! TLE feed acquisition
//!
//! A [`TleSource`] hands the tracker a line-oriented reader. The HTTP source
//! downloads the whole body before parsing starts, so a transfer failure
//! aborts the run before any satellite is reported.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;
use url::Url;

use crate::error::{Result, TrackerError};
use crate::utils::config::HTTP_TIMEOUT;

pub trait TleSource {
    /// Open the feed for a single pass
    fn open(&self) -> Result<Box<dyn BufRead>>;

    /// Human-readable origin for logs and errors
    fn describe(&self) -> String;
}

/// Feed served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        HttpSource {
            url: url.into(),
            timeout: HTTP_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl TleSource for HttpSource {
    fn open(&self) -> Result<Box<dyn BufRead>> {
        info!(url = %self.url, "Fetching TLE feed");

        let config = ureq::Agent::config_builder()
            .timeout_global(Some(self.timeout))
            .http_status_as_error(false)
            .build();
        let agent = ureq::Agent::new_with_config(config);

        let mut response = agent
            .get(&self.url)
            .call()
            .map_err(|e| TrackerError::acquisition(&self.url, e))?;
        if !response.status().is_success() {
            return Err(TrackerError::acquisition(
                &self.url,
                format!("HTTP status {}", response.status()),
            ));
        }

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TrackerError::acquisition(&self.url, format!("Failed to read response body: {e}")))?;
        Ok(Box::new(Cursor::new(body.into_bytes())))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Feed stored in a local file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TleSource for FileSource {
    fn open(&self) -> Result<Box<dyn BufRead>> {
        info!(path = %self.path.display(), "Reading TLE feed");
        let file = File::open(&self.path)
            .map_err(|e| TrackerError::acquisition(self.path.display().to_string(), e))?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source for a `--url` value
///
/// `http`/`https` URLs are fetched, `file` URLs and anything that does not
/// parse as a URL are read from disk. Other schemes are rejected.
pub fn source_from_location(location: &str) -> Result<Box<dyn TleSource>> {
    let location = location.trim();
    match Url::parse(location) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(Box::new(HttpSource::new(url.as_str()))),
            "file" => {
                let path = url.to_file_path().map_err(|_| {
                    TrackerError::config(format!("file URL '{location}' has no local path"))
                })?;
                Ok(Box::new(FileSource::new(path)))
            }
            // Windows drive letters parse as one-letter schemes
            scheme if scheme.len() == 1 => Ok(Box::new(FileSource::new(location))),
            scheme => Err(TrackerError::config(format!(
                "unsupported TLE source scheme '{scheme}' in '{location}'"
            ))),
        },
        Err(_) => Ok(Box::new(FileSource::new(location))),
    }
}
