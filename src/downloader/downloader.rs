//! Core downloader implementation with fetch logic.
//!
//! A download is a bounded sequence of attempts sharing one retry budget:
//!
//! ```text
//! Start -> Fetching -> { ShortTransferRetry -> Fetching | VerifyDigest }
//! VerifyDigest -> { Success | DigestRetryFromZero -> Fetching | Failed }
//! ```
//!
//! A short transfer resumes from the bytes already saved with a ranged
//! request. A digest mismatch throws the file away and starts over from byte
//! 0, since the resumed bytes may be the corrupt ones. Transport errors are
//! not retried here; they are returned as [`Error`] and the destination is
//! removed.
//!
//! # Examples
//!
//! ```rust,no_run
//! use resumedl::{DownloadRequest, DownloaderBuilder, Outcome};
//!
//! # async fn example() -> Result<(), resumedl::Error> {
//! let request = DownloadRequest::try_new("https://example.com/en_en.tar.bz2", "en_en.tar.bz2")?
//!     .with_sha256("9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08");
//!
//! match DownloaderBuilder::new().build().download(&request).await? {
//!     Outcome::Success { bytes, .. } => println!("saved {} bytes", bytes),
//!     Outcome::Failed(reason) => eprintln!("giving up: {}", reason),
//! }
//! # Ok(())
//! # }
//! ```

use super::config::DownloaderConfig;
use crate::archive::extract_tar_bz2;
use crate::download::{
    hash::sha256_file, ChecksumManifest, DownloadProgress, DownloadRequest, FailureReason,
    Outcome,
};
use crate::error::{Error, Result};
use crate::http::create_http_client;
use crate::utils::{content_range_total, declared_content_length};

use futures::StreamExt;
use reqwest::{
    header::{RANGE, USER_AGENT},
    Response, StatusCode, Url,
};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::atomic::Ordering;
use tokio::{fs, fs::OpenOptions, io::AsyncWriteExt};
use tracing::{debug, info, warn};

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use resumedl::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// # }
/// ```
#[derive(Clone, Default)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl fmt::Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Gets the configuration.
    pub fn config(&self) -> &DownloaderConfig {
        &self.config
    }

    /// Gets the number of transport-level retries.
    pub fn transport_retries(&self) -> u32 {
        self.config.transport_retries
    }

    /// Gets whether existing destination files are resumed.
    pub fn resume_existing(&self) -> bool {
        self.config.resume_existing
    }

    /// Downloads `request.url` to `request.destination`.
    ///
    /// Returns `Ok(Outcome::Failed(_))` once the retry budget is spent on
    /// short transfers or digest mismatches, and `Err` for invalid requests,
    /// local I/O failures and transport errors.
    pub async fn download(&self, request: &DownloadRequest) -> Result<Outcome> {
        request.validate()?;
        let client = create_http_client(self.config.http_config())?;
        self.download_with(&client, request).await
    }

    /// Same as [`Downloader::download`], but blocks the calling thread.
    ///
    /// Runs the download on a private current-thread runtime, so it must not
    /// be called from within an async context.
    pub fn download_blocking(&self, request: &DownloadRequest) -> Result<Outcome> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.download(request))
    }

    /// Downloads a `.tar.bz2` archive and unpacks it next to its destination.
    ///
    /// The archive itself is removed once extracted. Failed outcomes are
    /// returned untouched and nothing is extracted.
    pub async fn download_and_extract(&self, request: &DownloadRequest) -> Result<Outcome> {
        let outcome = self.download(request).await?;
        if !outcome.is_success() {
            return Ok(outcome);
        }

        let archive = request.destination.clone();
        let into = archive
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();
        self.notify(1.0, &format!("Extracting {}", request.file_name()));
        tokio::task::spawn_blocking(move || extract_tar_bz2(&archive, &into))
            .await
            .map_err(|e| Error::Internal(format!("Extraction task failed: {}", e)))??;

        fs::remove_file(&request.destination).await?;
        info!("Extracted {:?}", request.destination);
        Ok(outcome)
    }

    /// Fetches a JSON checksum manifest.
    pub async fn fetch_manifest(&self, url: &Url, user_agent: &str) -> Result<ChecksumManifest> {
        let client = create_http_client(self.config.http_config())?;
        debug!("Fetching checksum manifest {}", url);
        let res = client
            .get(url.clone())
            .header(USER_AGENT, user_agent)
            .send()
            .await?
            .error_for_status()?;
        let body = res.bytes().await?;
        ChecksumManifest::from_json(&body)
    }

    async fn download_with(
        &self,
        client: &ClientWithMiddleware,
        request: &DownloadRequest,
    ) -> Result<Outcome> {
        let result = self.run_attempts(client, request).await;
        match &result {
            Ok(Outcome::Success { .. }) => {}
            Ok(Outcome::Failed(_)) => discard(&request.destination).await?,
            Err(_) => {
                if let Err(e) = discard(&request.destination).await {
                    warn!("Could not remove {:?}: {}", request.destination, e);
                }
            }
        }
        if let Some(notifier) = &self.config.notifier {
            notifier.finish();
        }
        result
    }

    /// The attempt loop. Leaves cleanup of failed sequences to the caller.
    async fn run_attempts(
        &self,
        client: &ClientWithMiddleware,
        request: &DownloadRequest,
    ) -> Result<Outcome> {
        let name = request.file_name();
        let mut remaining = request.max_retries;
        if remaining == 0 {
            return Ok(Outcome::Failed(FailureReason::RetriesExhausted));
        }

        let mut offset = if self.config.resume_existing {
            existing_len(&request.destination).await?
        } else {
            0
        };
        let mut attempts: u32 = 0;

        loop {
            if self.is_aborted() {
                warn!("Download of {} aborted after {} attempts", name, attempts);
                return Ok(Outcome::Failed(FailureReason::Cancelled));
            }
            if attempts > 0 {
                if let Some(backoff) = self.config.backoff {
                    let delay = backoff.delay(attempts);
                    debug!("Waiting {:?} before retrying {}", delay, name);
                    tokio::time::sleep(delay).await;
                }
            }
            attempts += 1;
            remaining -= 1;

            let progress = self.fetch(client, request, offset).await?;

            if progress.is_short() {
                if remaining == 0 {
                    warn!(
                        "Short transfer for {}: {} of {} bytes, no retries left",
                        name,
                        progress.saved,
                        progress.expected()
                    );
                    return Ok(Outcome::Failed(FailureReason::ShortTransfer {
                        received: progress.saved,
                        expected: progress.expected(),
                    }));
                }
                warn!(
                    "Short transfer for {}: {} of {} bytes, resuming ({} retries left)",
                    name,
                    progress.saved,
                    progress.expected(),
                    remaining
                );
                offset = progress.saved;
                continue;
            }

            if request.requires_verification() {
                self.notify(1.0, &format!("Verifying {}", name));
                let actual = sha256_file(&request.destination).await?;
                if !actual.eq_ignore_ascii_case(&request.sha256) {
                    discard(&request.destination).await?;
                    if remaining == 0 {
                        warn!("Digest mismatch for {}, no retries left", name);
                        return Ok(Outcome::Failed(FailureReason::DigestMismatch {
                            expected: request.sha256.to_lowercase(),
                            actual,
                        }));
                    }
                    warn!(
                        "Digest mismatch for {}, restarting from zero ({} retries left)",
                        name, remaining
                    );
                    offset = 0;
                    continue;
                }
            }

            info!("Downloaded {} ({} bytes, {} attempts)", name, progress.saved, attempts);
            self.notify(1.0, &format!("Downloaded {}", name));
            return Ok(Outcome::Success {
                bytes: progress.saved,
                attempts,
            });
        }
    }

    /// Runs one attempt and reports what it left on disk.
    async fn fetch(
        &self,
        client: &ClientWithMiddleware,
        request: &DownloadRequest,
        mut offset: u64,
    ) -> Result<DownloadProgress> {
        let mut res = self.send(client, request, offset).await?;

        if offset > 0 && res.status() == StatusCode::RANGE_NOT_SATISFIABLE {
            if content_range_total(res.headers()) == Some(offset) {
                debug!("{:?} is already complete", request.destination);
                return Ok(DownloadProgress::new(offset, Some(offset)));
            }
            debug!("Range rejected for {:?}, starting over", request.destination);
            offset = 0;
            res = self.send(client, request, offset).await?;
        }

        let res = res.error_for_status()?;

        if offset > 0 && res.status() != StatusCode::PARTIAL_CONTENT {
            debug!("Server ignored the range request, starting over");
            offset = 0;
        }

        let total = declared_content_length(res.headers()).map(|len| offset + len);
        self.stream_to_file(res, request, offset, total).await
    }

    async fn send(
        &self,
        client: &ClientWithMiddleware,
        request: &DownloadRequest,
        offset: u64,
    ) -> Result<Response> {
        debug!("Fetching {} from byte {}", request.url, offset);
        let mut req = client
            .get(request.url.clone())
            .header(USER_AGENT, request.user_agent.as_str());
        if offset > 0 {
            req = req.header(RANGE, format!("bytes={}-", offset));
        }
        Ok(req.send().await?)
    }

    async fn stream_to_file(
        &self,
        res: Response,
        request: &DownloadRequest,
        offset: u64,
        total: Option<u64>,
    ) -> Result<DownloadProgress> {
        let output = &request.destination;
        if let Some(output_dir) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            debug!("Creating destination directory {:?}", output_dir);
            fs::create_dir_all(output_dir).await?;
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if offset > 0 {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        debug!("Opening destination file {:?}", output);
        let mut file = options.open(output).await?;

        let name = request.file_name();
        let status = if offset > 0 {
            format!("Resuming {} from byte {}", name, offset)
        } else {
            format!("Downloading {}", name)
        };

        let mut progress = DownloadProgress::new(offset, total);
        self.notify(progress.fraction(), &status);

        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let chunk = match item {
                Ok(chunk) => chunk,
                Err(e) if e.is_body() || e.is_decode() || e.is_timeout() => {
                    warn!("Response body for {} broke off: {}", name, e);
                    progress.interrupted = true;
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            let room = match total {
                Some(total) => total.saturating_sub(progress.saved),
                None => u64::MAX,
            };
            let take = chunk.len().min(usize::try_from(room).unwrap_or(usize::MAX));
            file.write_all(&chunk[..take]).await?;
            progress.saved += take as u64;
            self.notify(progress.fraction(), &status);

            if take < chunk.len() {
                warn!("Server sent more than it declared for {}, truncating", name);
                break;
            }
        }

        file.flush().await?;
        progress.saved = file.metadata().await?.len();
        Ok(progress)
    }

    fn notify(&self, progress: f64, message: &str) {
        if let Some(notifier) = &self.config.notifier {
            notifier.notify(progress, message);
        }
    }

    fn is_aborted(&self) -> bool {
        self.config
            .abort
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}

/// Size of the file at `path`, or 0 if there is none.
async fn existing_len(path: &Path) -> Result<u64> {
    match fs::metadata(path).await {
        Ok(metadata) => Ok(metadata.len()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
        Err(e) => Err(e.into()),
    }
}

/// Removes the file at `path` if it exists.
async fn discard(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => {
            debug!("Removed {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
