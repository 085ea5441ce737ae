//! SHA-256 verification of downloaded files.
//!
//! Digests are compared as lowercase hex, so expected values may be given in
//! either case.
//!
//! ```rust,no_run
//! use resumedl::download::hash::verify_sha256;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), resumedl::Error> {
//! let ok = verify_sha256(
//!     Path::new("en_en.tar.bz2"),
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
//! )
//! .await?;
//! println!("verified: {}", ok);
//! # Ok(())
//! # }
//! ```

use crate::error::Result;

use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::{fs::File, io::AsyncReadExt};

/// Length of a SHA-256 digest in hex characters.
pub const SHA256_HEX_LEN: usize = 64;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Whether `hash` looks like a SHA-256 hex digest.
pub fn is_sha256_hex(hash: &str) -> bool {
    hash.len() == SHA256_HEX_LEN && hash.chars().all(|c| c.is_ascii_hexdigit())
}

/// Hex SHA-256 of the bytes in memory.
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Hex SHA-256 of the whole file at `path`.
pub async fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).await?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    loop {
        let read = file.read(&mut buffer).await?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// Compares the file at `path` against `expected`.
///
/// Returns true if they match or if `expected` is empty.
pub async fn verify_sha256(path: &Path, expected: &str) -> Result<bool> {
    if expected.is_empty() {
        return Ok(true);
    }
    let actual = sha256_file(path).await?;
    Ok(actual.eq_ignore_ascii_case(expected))
}
