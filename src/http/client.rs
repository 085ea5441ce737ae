//! HTTP client setup and middleware configuration.
//!
//! The client honors the system proxy configuration (`HTTP_PROXY`,
//! `HTTPS_PROXY`, `NO_PROXY` and the platform settings) unless an explicit
//! proxy is given.
//!
//! # Features
//!
//! - **Tracing**: every request is wrapped in a `tracing` span
//! - **Transport retries**: optional exponential backoff for transient
//!   transport failures, off by default so that network errors reach the caller
//! - **Proxy**: system configuration, an explicit proxy, or none at all
//! - **Timeouts**: optional connect and read timeouts
//! - **Custom Headers**: default headers applied to all requests
//!
//! # Examples
//!
//! ```rust
//! use resumedl::http::{create_http_client, HttpClientConfig};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig {
//!     connect_timeout: Some(Duration::from_secs(10)),
//!     ..HttpClientConfig::default()
//! };
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

use reqwest::{header::HeaderMap, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;
use std::time::Duration;

/// Configuration for HTTP client setup.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Number of retries for transient transport failures.
    pub retries: u32,
    /// Explicit proxy, replacing the system configuration.
    pub proxy: Option<Proxy>,
    /// Ignore every proxy, including the system configuration.
    pub no_proxy: bool,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
    /// Maximum time to establish a connection.
    pub connect_timeout: Option<Duration>,
    /// Maximum idle time between two reads of a response.
    pub read_timeout: Option<Duration>,
}

/// Creates an HTTP client with middleware configuration.
///
/// This function sets up a reqwest client with:
/// - Tracing middleware for request/response logging
/// - Retry middleware with exponential backoff, when `retries > 0`
/// - Optional proxy, default headers and timeouts
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let mut inner_client_builder = reqwest::Client::builder();

    if config.no_proxy {
        inner_client_builder = inner_client_builder.no_proxy();
    } else if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    if let Some(timeout) = config.connect_timeout {
        inner_client_builder = inner_client_builder.connect_timeout(timeout);
    }

    if let Some(timeout) = config.read_timeout {
        inner_client_builder = inner_client_builder.read_timeout(timeout);
    }

    let inner_client = inner_client_builder.build()?;

    let mut builder = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default());

    if config.retries > 0 {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.retries);
        builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
    }

    Ok(builder.build())
}
