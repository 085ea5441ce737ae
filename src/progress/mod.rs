//! Progress module containing the status sink the downloader reports to.
//!
//! # Overview
//!
//! - `notifier` - the [`Notifier`] trait, implemented for plain closures
//! - `display` - [`ProgressBarNotifier`], an indicatif progress bar sink
//! - `style` - [`ProgressBarOpts`] styling for that bar
//!
//! # Examples
//!
//! ```rust
//! use resumedl::DownloaderBuilder;
//!
//! let downloader = DownloaderBuilder::new()
//!     .notifier(|progress: f64, message: &str| {
//!         eprintln!("{:.0}% {}", progress * 100.0, message);
//!     })
//!     .build();
//! ```

pub(crate) mod display;
pub(crate) mod notifier;
pub(crate) mod style;

pub use display::ProgressBarNotifier;
pub use notifier::Notifier;
pub use style::ProgressBarOpts;
