//! Error handling for resumedl.
//!
//! Retryable problems (short transfers, digest mismatches) are handled inside
//! the downloader and reported through [`Outcome`](crate::download::Outcome).
//! Everything in this module is what escapes that loop: invalid input, I/O
//! failures, and transport errors, which are propagated as-is so the caller
//! can decide whether to retry at a higher level.

use crate::download::FailureReason;
use std::io;
use thiserror::Error;

/// Errors that can happen when using resumedl.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// Typically a background task that panicked or was cancelled.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The expected digest is neither empty nor a SHA-256 hex string.
    #[error("Invalid SHA-256 digest: {0:?}")]
    InvalidDigest(String),

    /// I/O Error.
    ///
    /// Raised while creating, writing, hashing or removing the destination file.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// HTTP error statuses end up here through `error_for_status`.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised while sending a request through the middleware stack.
    #[error("Transport error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// A checksum manifest could not be decoded.
    #[error("Invalid checksum manifest")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// A download sequence ended in a terminal failure.
    ///
    /// Only produced by [`Outcome::into_result`](crate::download::Outcome::into_result).
    #[error(transparent)]
    Failed(#[from] FailureReason),
}

impl Error {
    /// Whether the error came from the network rather than from local state.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Reqwest { .. } | Error::Middleware { .. })
    }
}

/// Result type alias for operations that can fail with a resumedl error.
pub type Result<T> = std::result::Result<T, Error>;
