//! Downloader module containing core downloader functionality, builder pattern, and configuration.
//!
//! # Overview
//!
//! - `downloader` - the [`Downloader`] and its bounded attempt loop
//! - `builder` - [`DownloaderBuilder`] for configuration
//! - `config` - [`DownloaderConfig`] and [`RetryBackoff`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use resumedl::downloader::DownloaderBuilder;
//! use resumedl::download::DownloadRequest;
//!
//! # async fn example() -> Result<(), resumedl::Error> {
//! let downloader = DownloaderBuilder::new()
//!     .notifier(|progress: f64, message: &str| println!("{:.2} {}", progress, message))
//!     .build();
//!
//! let request = DownloadRequest::try_new("https://example.com/file.zip", "file.zip")?;
//! let outcome = downloader.download(&request).await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod downloader;

pub use builder::DownloaderBuilder;
pub use config::{DownloaderConfig, RetryBackoff};
pub use downloader::Downloader;
