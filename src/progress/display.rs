//! Terminal progress bar implementation of [`Notifier`].
//!
//! ```rust
//! use resumedl::progress::{ProgressBarNotifier, ProgressBarOpts};
//! use resumedl::DownloaderBuilder;
//!
//! let downloader = DownloaderBuilder::new()
//!     .notifier(ProgressBarNotifier::new(ProgressBarOpts::default()))
//!     .build();
//! ```

use super::{Notifier, ProgressBarOpts};
use indicatif::ProgressBar;

/// Resolution of the bar: progress is drawn in thousandths.
const BAR_LENGTH: u64 = 1000;

/// Draws download progress on the terminal with indicatif.
pub struct ProgressBarNotifier {
    bar: ProgressBar,
    clear: bool,
}

impl ProgressBarNotifier {
    /// Create a notifier drawing a bar with the given options.
    pub fn new(opts: ProgressBarOpts) -> Self {
        let clear = opts.clear;
        Self {
            bar: opts.to_progress_bar(BAR_LENGTH),
            clear,
        }
    }

    /// Get the underlying progress bar.
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}

impl Notifier for ProgressBarNotifier {
    fn notify(&self, progress: f64, message: &str) {
        let position = (progress.clamp(0.0, 1.0) * BAR_LENGTH as f64).round() as u64;
        self.bar.set_position(position);
        self.bar.set_message(message.to_string());
    }

    fn finish(&self) {
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish();
        }
    }
}
