//! Synchronous entry point.
//!
//! For callers without an async runtime, such as a background job in a
//! desktop application. The calling thread is blocked until the download
//! succeeds or fails for good.
//!
//! ```rust,no_run
//! use resumedl::{blocking, DownloadRequest};
//!
//! # fn main() -> Result<(), resumedl::Error> {
//! let request = DownloadRequest::try_new("https://example.com/en_en.tar.bz2", "en_en.tar.bz2")?;
//! let bytes = blocking::download(&request)?.into_result()?;
//! println!("saved {} bytes", bytes);
//! # Ok(())
//! # }
//! ```

use crate::download::{DownloadRequest, Outcome};
use crate::downloader::Downloader;
use crate::error::Result;

/// Downloads `request` with the default [`Downloader`] settings.
///
/// Must not be called from within an async context.
pub fn download(request: &DownloadRequest) -> Result<Outcome> {
    Downloader::default().download_blocking(request)
}
