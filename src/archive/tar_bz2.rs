//! Extraction of `.tar.bz2` data archives.
//!
//! Language data releases are published as bzip2-compressed tarballs. They
//! are unpacked next to where they were downloaded.

use crate::error::Result;

use bzip2::read::BzDecoder;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tar::Archive;
use tracing::debug;

/// Unpacks the `.tar.bz2` archive at `archive` into `into`.
///
/// `into` is created if it does not exist. Entries that would escape `into`
/// (absolute paths, `..` components) are skipped by `tar`.
pub fn extract_tar_bz2(archive: &Path, into: &Path) -> Result<()> {
    debug!("Extracting {:?} into {:?}", archive, into);
    fs::create_dir_all(into)?;
    let file = File::open(archive)?;
    let mut tarball = Archive::new(BzDecoder::new(BufReader::new(file)));
    tarball.unpack(into)?;
    Ok(())
}
