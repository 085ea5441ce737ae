//! Results of a download sequence.
//!
//! [`DownloadProgress`] describes what a single attempt left on disk, and
//! [`Outcome`] is the terminal result of the whole sequence.
//!
//! ```rust
//! use resumedl::download::{FailureReason, Outcome};
//!
//! let outcome = Outcome::Failed(FailureReason::DigestMismatch {
//!     expected: "aa".into(),
//!     actual: "bb".into(),
//! });
//! assert!(!outcome.is_success());
//! assert!(outcome.into_result().is_err());
//! ```

use crate::error::{Error, Result};
use thiserror::Error;

/// Why a download sequence gave up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The last attempt received fewer bytes than the server advertised.
    #[error("short transfer: received {received} of {expected} bytes")]
    ShortTransfer { received: u64, expected: u64 },
    /// The last complete file did not hash to the expected digest.
    #[error("digest mismatch: expected {expected}, got {actual}")]
    DigestMismatch { expected: String, actual: String },
    /// The retry budget was zero, so nothing was attempted.
    #[error("retry budget exhausted")]
    RetriesExhausted,
    /// The caller's abort flag was raised between attempts.
    #[error("download cancelled")]
    Cancelled,
}

/// Terminal result of a download sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The destination holds the complete, verified file.
    Success {
        /// Size of the destination file.
        bytes: u64,
        /// Number of HTTP attempts used.
        attempts: u32,
    },
    /// The sequence gave up and the destination was removed.
    Failed(FailureReason),
}

impl Outcome {
    /// Whether the download succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// The failure reason, if any.
    pub fn failure(&self) -> Option<&FailureReason> {
        match self {
            Outcome::Failed(reason) => Some(reason),
            Outcome::Success { .. } => None,
        }
    }

    /// Converts a failed outcome into [`Error::Failed`].
    ///
    /// Returns the number of bytes on disk on success.
    pub fn into_result(self) -> Result<u64> {
        match self {
            Outcome::Success { bytes, .. } => Ok(bytes),
            Outcome::Failed(reason) => Err(Error::Failed(reason)),
        }
    }
}

/// What one attempt left at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadProgress {
    /// Bytes persisted at the destination.
    pub saved: u64,
    /// Resume offset plus the declared content length, when the server sent one.
    pub total: Option<u64>,
    /// The response body broke off before the server finished sending it.
    pub interrupted: bool,
}

impl DownloadProgress {
    /// A progress snapshot for an attempt that ended cleanly.
    pub fn new(saved: u64, total: Option<u64>) -> Self {
        Self {
            saved,
            total,
            interrupted: false,
        }
    }

    /// Whether fewer bytes were saved than expected.
    ///
    /// Without a declared length, a clean end of stream counts as complete.
    pub fn is_short(&self) -> bool {
        self.interrupted || self.total.is_some_and(|total| self.saved < total)
    }

    /// Bytes the attempt was expected to end with.
    pub fn expected(&self) -> u64 {
        self.total.unwrap_or(self.saved)
    }

    /// Completion ratio in `[0, 1]`, or 0 when the total is unknown.
    pub fn fraction(&self) -> f64 {
        match self.total {
            Some(0) => 1.0,
            Some(total) => (self.saved as f64 / total as f64).min(1.0),
            None => 0.0,
        }
    }
}
