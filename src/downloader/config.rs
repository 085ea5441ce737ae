//! Configuration structures and defaults for the downloader.
//!
//! The defaults reproduce the plain behavior: no backoff between attempts,
//! no transport-level retries, no timeouts beyond the platform's, and every
//! sequence starts from an empty destination file.
//!
//! ```rust
//! use resumedl::downloader::RetryBackoff;
//! use std::time::Duration;
//!
//! let backoff = RetryBackoff::new(Duration::from_millis(250), Duration::from_secs(4));
//! assert_eq!(backoff.delay(1), Duration::from_millis(250));
//! assert_eq!(backoff.delay(3), Duration::from_secs(1));
//! assert_eq!(backoff.delay(10), Duration::from_secs(4));
//! ```

use crate::http::HttpClientConfig;
use crate::progress::Notifier;

use reqwest::header::HeaderMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// Capped exponential delay applied before each retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBackoff {
    /// Delay before the first retry.
    pub initial: Duration,
    /// Upper bound for any delay.
    pub max: Duration,
}

impl RetryBackoff {
    /// Create a new [`RetryBackoff`].
    pub fn new(initial: Duration, max: Duration) -> Self {
        Self { initial, max }
    }

    /// Delay before retry number `retry` (1-based).
    pub fn delay(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(31);
        self.initial
            .checked_mul(1u32 << exponent)
            .unwrap_or(self.max)
            .min(self.max)
    }
}

impl Default for RetryBackoff {
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(500),
            max: Duration::from_secs(30),
        }
    }
}

/// Configuration structure for the downloader
#[derive(Clone, Default)]
pub struct DownloaderConfig {
    /// Retries for transient transport failures, handled by the HTTP middleware.
    pub transport_retries: u32,
    /// Explicit proxy, replacing the system configuration.
    pub proxy: Option<reqwest::Proxy>,
    /// Bypass all proxies.
    pub no_proxy: bool,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Maximum time to establish a connection.
    pub connect_timeout: Option<Duration>,
    /// Maximum idle time between two reads of a response.
    pub read_timeout: Option<Duration>,
    /// Delay between attempts of one sequence.
    pub backoff: Option<RetryBackoff>,
    /// Resume from an existing destination file on the first attempt.
    pub resume_existing: bool,
    /// Sink for progress updates.
    pub notifier: Option<Arc<dyn Notifier>>,
    /// Caller abort flag, checked before each attempt.
    pub abort: Option<Arc<AtomicBool>>,
}

impl DownloaderConfig {
    /// HTTP client settings derived from this configuration.
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            retries: self.transport_retries,
            proxy: self.proxy.clone(),
            no_proxy: self.no_proxy,
            headers: self.headers.clone(),
            connect_timeout: self.connect_timeout,
            read_timeout: self.read_timeout,
        }
    }
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("transport_retries", &self.transport_retries)
            .field("proxy", &self.proxy)
            .field("no_proxy", &self.no_proxy)
            .field("headers", &self.headers)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("backoff", &self.backoff)
            .field("resume_existing", &self.resume_existing)
            .field("notifier", &self.notifier.is_some())
            .field("abort", &self.abort)
            .finish()
    }
}
