//! Example downloading a single file with a progress bar.
//!
//! ```text
//! cargo run --example fetch -- <url> [sha256]
//! ```

use color_eyre::{eyre::eyre, Result};
use resumedl::download::DownloadRequest;
use resumedl::downloader::{DownloaderBuilder, RetryBackoff};
use resumedl::progress::{ProgressBarNotifier, ProgressBarOpts};
use reqwest::Url;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let url = args
        .next()
        .ok_or_else(|| eyre!("usage: fetch <url> [sha256]"))?;
    let sha256 = args.next().unwrap_or_default();

    let url = Url::parse(&url)?;
    let request = DownloadRequest::into_dir(&url, Path::new("downloads"))?.with_sha256(sha256);

    let downloader = DownloaderBuilder::new()
        .backoff(RetryBackoff::default())
        .resume_existing(true)
        .notifier(ProgressBarNotifier::new(ProgressBarOpts::default()))
        .build();

    let bytes = downloader.download(&request).await?.into_result()?;
    println!("Saved {:?} ({} bytes)", request.destination, bytes);

    Ok(())
}
