//! Download module containing the data handled by the downloader.
//!
//! # Overview
//!
//! - [`request`] - [`DownloadRequest`], the immutable description of one file
//! - [`outcome`] - [`Outcome`], [`FailureReason`] and per-attempt [`DownloadProgress`]
//! - [`hash`] - SHA-256 verification of files on disk
//! - [`manifest`] - JSON checksum manifests mapping file names to digests
//!
//! # Examples
//!
//! ```rust
//! use resumedl::download::{DownloadRequest, Outcome};
//!
//! # fn main() -> Result<(), resumedl::Error> {
//! let request = DownloadRequest::try_new("https://example.com/file.zip", "file.zip")?;
//! assert!(!request.requires_verification());
//! # Ok(())
//! # }
//! ```

pub mod hash;
pub mod manifest;
pub mod outcome;
pub mod request;

pub use hash::{is_sha256_hex, sha256_file, sha256_hex, verify_sha256};
pub use manifest::ChecksumManifest;
pub use outcome::{DownloadProgress, FailureReason, Outcome};
pub use request::{DownloadRequest, DEFAULT_MAX_RETRIES, DEFAULT_USER_AGENT};
