//! Staged APK archives.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::Result;
use crate::SweepError;
use crate::package::PackageId;

/// A staged application archive, opened and ready for inspection.
///
/// APKs are ZIP containers; only the central directory is read. Entry names
/// are captured eagerly so inspectors work over an immutable snapshot and
/// the file handle is released before inspection begins.
#[derive(Debug)]
pub struct Apk {
    package: PackageId,
    split_index: usize,
    entries: Vec<String>,
}

impl Apk {
    /// Opens a staged archive file and reads its entry names.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::CorruptArchive`] if the file cannot be opened
    /// or is not a valid ZIP container. This is never a verdict about the
    /// package; the pipeline skips the part and moves on.
    pub fn open(path: &Path, package: PackageId, split_index: usize) -> Result<Self> {
        let file = File::open(path).map_err(|err| SweepError::CorruptArchive {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })?;
        let archive =
            zip::ZipArchive::new(BufReader::new(file)).map_err(|err| SweepError::CorruptArchive {
                path: path.to_path_buf(),
                detail: err.to_string(),
            })?;
        let entries = archive.file_names().map(ToOwned::to_owned).collect();

        Ok(Self {
            package,
            split_index,
            entries,
        })
    }

    /// The package this archive belongs to.
    #[must_use]
    pub fn package(&self) -> &PackageId {
        &self.package
    }

    /// Zero-based index of this part within the package's split install.
    #[must_use]
    pub fn split_index(&self) -> usize {
        self.split_index
    }

    /// Iterates over entry names in archive order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of entries in the archive.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` for an archive with no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_entries(package: &str, split_index: usize, entries: &[&str]) -> Self {
        Self {
            package: PackageId::new(package),
            split_index,
            entries: entries.iter().map(ToString::to_string).collect(),
        }
    }
}
