//! Describes a single file to fetch.
//!
//! # Examples
//!
//! ```rust
//! use resumedl::download::DownloadRequest;
//!
//! # fn main() -> Result<(), resumedl::Error> {
//! let request = DownloadRequest::try_new(
//!     "https://example.com/releases/en_en.tar.bz2",
//!     "data/en_en.tar.bz2",
//! )?
//! .with_sha256("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
//! .with_max_retries(5);
//!
//! assert_eq!(request.max_retries, 5);
//! # Ok(())
//! # }
//! ```

use super::hash::is_sha256_hex;
use crate::error::{Error, Result};

use percent_encoding::percent_decode_str;
use reqwest::Url;
use std::path::{Path, PathBuf};

/// Number of attempts a request gets unless told otherwise.
pub const DEFAULT_MAX_RETRIES: u32 = 10;

/// User agent sent when the caller does not provide one.
pub const DEFAULT_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

/// Represents a file to be downloaded to a fixed destination.
///
/// A request is borrowed by the downloader for the whole attempt sequence and
/// is never modified by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// URL of the file to download.
    pub url: Url,
    /// Where the file is written.
    pub destination: PathBuf,
    /// Expected SHA-256 of the file as hex. Empty skips verification.
    pub sha256: String,
    /// Total number of attempts allowed for the sequence.
    pub max_retries: u32,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl DownloadRequest {
    /// Creates a new [`DownloadRequest`] with the default retry budget and user agent.
    pub fn new(url: &Url, destination: impl Into<PathBuf>) -> Self {
        Self {
            url: url.clone(),
            destination: destination.into(),
            sha256: String::new(),
            max_retries: DEFAULT_MAX_RETRIES,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }

    /// Parses `url` and creates a new [`DownloadRequest`].
    pub fn try_new(url: &str, destination: impl Into<PathBuf>) -> Result<Self> {
        let url = parse_url(url)?;
        Ok(Self::new(&url, destination))
    }

    /// Creates a request that saves the file into `directory`.
    ///
    /// The file name is the last segment of the URL path, percent-decoded.
    pub fn into_dir(url: &Url, directory: &Path) -> Result<Self> {
        let filename = filename_from_url(url)?;
        Ok(Self::new(url, directory.join(filename)))
    }

    /// Sets the expected SHA-256 hex digest.
    pub fn with_sha256(mut self, sha256: impl Into<String>) -> Self {
        self.sha256 = sha256.into();
        self
    }

    /// Sets the retry budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the `User-Agent` header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Whether the download must be checked against a digest.
    pub fn requires_verification(&self) -> bool {
        !self.sha256.is_empty()
    }

    /// Name of the destination file, for status messages.
    pub fn file_name(&self) -> String {
        self.destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.url.to_string())
    }

    /// Checks the request before any I/O happens.
    pub fn validate(&self) -> Result<()> {
        if self.requires_verification() && !is_sha256_hex(&self.sha256) {
            return Err(Error::InvalidDigest(self.sha256.clone()));
        }
        Ok(())
    }
}

fn parse_url(value: &str) -> Result<Url> {
    Url::parse(value)
        .map_err(|e| Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", value, e)))
}

fn filename_from_url(url: &Url) -> Result<String> {
    let segment = url
        .path_segments()
        .ok_or_else(|| {
            Error::InvalidUrl(format!("The url \"{}\" does not contain a valid path", url))
        })?
        .next_back()
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| {
            Error::InvalidUrl(format!("The url \"{}\" does not contain a filename", url))
        })?;

    Ok(percent_decode_str(segment).decode_utf8_lossy().into_owned())
}
