//! resumedl fetches a remote file to a local path, resuming interrupted
//! transfers with byte-range requests and checking the result against a
//! SHA-256 digest, all within a bounded retry budget.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resumedl::{DownloadRequest, DownloaderBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let request = DownloadRequest::try_new(
//!     "https://example.com/releases/en_en.tar.bz2",
//!     "data/en_en.tar.bz2",
//! )?
//! .with_sha256("9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08");
//!
//! let downloader = DownloaderBuilder::new().build();
//! let bytes = downloader.download(&request).await?.into_result()?;
//! println!("{} bytes", bytes);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`download`] - `DownloadRequest`, outcomes, SHA-256 hashing and checksum manifests
//! - [`downloader`] - the `Downloader`, its builder and the attempt loop
//! - [`blocking`] - a synchronous wrapper around the downloader
//! - [`archive`] - `.tar.bz2` extraction for downloaded data archives
//! - [`error`] - centralized error handling with the `Error` enum
//! - [`http`] - HTTP client construction
//! - [`progress`] - the progress notifier sink
//! - [`utils`] - header parsing helpers

pub mod archive;
pub mod blocking;
pub mod download;
pub mod downloader;
pub mod error;
pub mod http;
pub mod progress;
pub mod utils;

pub use download::{
    sha256_file, verify_sha256, ChecksumManifest, DownloadProgress, DownloadRequest,
    FailureReason, Outcome,
};
pub use downloader::{Downloader, DownloaderBuilder, RetryBackoff};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use progress::{Notifier, ProgressBarNotifier, ProgressBarOpts};
pub use utils::{declared_content_length, parse_content_range_total};
