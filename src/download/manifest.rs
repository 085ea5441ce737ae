//! Checksum manifests published next to release assets.
//!
//! A manifest is a JSON object mapping file names to SHA-256 hex digests:
//!
//! ```json
//! { "en_en.tar.bz2": "9f86d0...", "de_en.tar.bz2": "2c26b4..." }
//! ```
//!
//! Names missing from the manifest map to an empty digest, which makes the
//! downloader skip verification for that file.

use crate::error::Result;

use serde::Deserialize;
use std::collections::HashMap;

/// File name to SHA-256 digest table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ChecksumManifest {
    digests: HashMap<String, String>,
}

impl ChecksumManifest {
    /// Decodes a manifest from its JSON representation.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Digest for `filename`, or `""` when the manifest has no entry.
    pub fn digest_for(&self, filename: &str) -> &str {
        self.digests.get(filename).map(String::as_str).unwrap_or("")
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    /// Whether the manifest has no entries.
    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }
}
