//! Status sink fed by the downloader.
//!
//! The downloader pushes `(progress, message)` pairs while it works. The sink
//! is purely advisory: it cannot slow the download down or stop it.
//!
//! ```rust
//! use resumedl::progress::Notifier;
//!
//! let print = |progress: f64, message: &str| {
//!     println!("{:>5.1}% {}", progress * 100.0, message);
//! };
//! print.notify(0.5, "Downloading en_en.tar.bz2");
//! ```

/// Receives progress updates from a download sequence.
pub trait Notifier: Send + Sync {
    /// Reports overall progress in `[0, 1]` along with a status message.
    fn notify(&self, progress: f64, message: &str);

    /// Called once when the sequence reaches a terminal state.
    fn finish(&self) {}
}

impl<F> Notifier for F
where
    F: Fn(f64, &str) + Send + Sync,
{
    fn notify(&self, progress: f64, message: &str) {
        self(progress, message)
    }
}
