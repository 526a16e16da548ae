//! Local staging of remote archives.

use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::package::PackageId;
use crate::transport::DeviceTransport;

/// Pulls remote archives into a local directory at most once per run.
///
/// Local names are deterministic per (package, split index) key:
/// `{pkg}.apk` for the base part and `{pkg}-{index}.apk` for further
/// splits. The key set lives for one run only; a second `stage` call for a
/// key already pulled this run returns the same local path without another
/// transfer. Directory setup and teardown belong to the caller.
#[derive(Debug)]
pub struct StagingArea {
    root: PathBuf,
    staged: HashSet<(PackageId, usize)>,
}

impl StagingArea {
    /// Creates a staging area rooted at an existing local directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            staged: HashSet::new(),
        }
    }

    /// The staging directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Deterministic local file name for one split part.
    #[must_use]
    pub fn local_name(package: &PackageId, split_index: usize) -> String {
        if split_index == 0 {
            format!("{package}.apk")
        } else {
            format!("{package}-{split_index}.apk")
        }
    }

    /// Ensures one split part is present locally and returns its path.
    ///
    /// Pulls over the transport only if this (package, split index) key has
    /// not been staged this run.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::SweepError::Retrieval`] from the transport; the
    /// key is not marked staged on failure, so a later attempt may retry.
    pub fn stage(
        &mut self,
        transport: &dyn DeviceTransport,
        package: &PackageId,
        split_index: usize,
        remote: &str,
    ) -> Result<PathBuf> {
        let local = self.root.join(Self::local_name(package, split_index));
        let key = (package.clone(), split_index);
        if !self.staged.contains(&key) {
            transport.pull(remote, &local)?;
            self.staged.insert(key);
        }
        Ok(local)
    }

    /// Number of parts staged so far this run.
    #[must_use]
    pub fn staged_count(&self) -> usize {
        self.staged.len()
    }
}
