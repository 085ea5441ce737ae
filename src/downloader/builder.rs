//! Builder pattern implementation for creating Downloader instances.
//!
//! ```rust
//! use resumedl::downloader::{DownloaderBuilder, RetryBackoff};
//! use std::time::Duration;
//!
//! let downloader = DownloaderBuilder::new()
//!     .backoff(RetryBackoff::default())
//!     .connect_timeout(Duration::from_secs(10))
//!     .resume_existing(true)
//!     .build();
//! assert!(downloader.resume_existing());
//! ```

use super::{
    config::{DownloaderConfig, RetryBackoff},
    downloader::Downloader,
};
use crate::progress::Notifier;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// A builder used to create a [`Downloader`].
///
/// ```rust
/// # fn main()  {
/// use resumedl::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().transport_retries(2).build();
/// # }
/// ```
#[derive(Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Retry transient transport failures inside the HTTP client.
    ///
    /// These retries are separate from the request's retry budget. With the
    /// default of 0, network errors are returned to the caller immediately.
    pub fn transport_retries(mut self, retries: u32) -> Self {
        self.config.transport_retries = retries;
        self
    }

    /// Use an explicit proxy instead of the system configuration.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Connect directly, ignoring the system proxy configuration.
    pub fn no_proxy(mut self) -> Self {
        self.config.no_proxy = true;
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    /// Set the read timeout.
    ///
    /// A body read that stalls past it ends the attempt as a short transfer.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = Some(timeout);
        self
    }

    /// Wait between attempts of a sequence.
    pub fn backoff(mut self, backoff: RetryBackoff) -> Self {
        self.config.backoff = Some(backoff);
        self
    }

    /// Resume from a destination file left over by an earlier run.
    pub fn resume_existing(mut self, resume: bool) -> Self {
        self.config.resume_existing = resume;
        self
    }

    /// Send progress updates to `notifier`.
    pub fn notifier<N>(mut self, notifier: N) -> Self
    where
        N: Notifier + 'static,
    {
        self.config.notifier = Some(Arc::new(notifier));
        self
    }

    /// Stop before the next attempt once `flag` is set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resumedl::downloader::DownloaderBuilder;
    /// use std::sync::{atomic::AtomicBool, Arc};
    ///
    /// let abort = Arc::new(AtomicBool::new(false));
    /// let downloader = DownloaderBuilder::new().abort_flag(abort.clone()).build();
    /// ```
    pub fn abort_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.config.abort = Some(flag);
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one. A request's own user agent always wins over
    /// a `User-Agent` set here.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add the http header
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue};
    /// use resumedl::downloader::DownloaderBuilder;
    ///
    /// let auth = HeaderValue::from_str("Basic aGk6MTIzNDU2Cg==").expect("Invalid auth");
    ///
    /// let builder = DownloaderBuilder::new()
    ///     .header(header::AUTHORIZATION, auth)
    ///     .build();
    /// ```
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Downloader`] with the specified options.
    pub fn build(self) -> Downloader {
        Downloader::new(self.config)
    }
}
