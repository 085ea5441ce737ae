//! Archive extraction functionality.
//!
//! Used by [`Downloader::download_and_extract`](crate::Downloader::download_and_extract)
//! to unpack data archives once they are downloaded and verified.

pub mod tar_bz2;

pub use tar_bz2::extract_tar_bz2;
