//! User-maintained exclusion list ("gracelist").

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::Result;
use crate::package::PackageId;

/// Set of package identifiers exempt from removal regardless of verdict.
///
/// Loaded once per run and read-only for the pipeline's lifetime. The file
/// format is one package identifier per line; surrounding whitespace is
/// stripped and blank lines are ignored. No other validation happens —
/// a typo simply fails to protect anything.
#[derive(Debug, Default, Clone)]
pub struct ExclusionList {
    packages: HashSet<PackageId>,
}

impl ExclusionList {
    /// An empty list; nothing is protected.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads an exclusion list from an optional file path.
    ///
    /// `None` means no gracelist was configured and yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a configured path cannot be read.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::empty());
        };
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    fn parse(contents: &str) -> Self {
        let packages = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PackageId::from)
            .collect();
        Self { packages }
    }

    /// Returns `true` if the package must never be removed.
    #[must_use]
    pub fn contains(&self, package: &PackageId) -> bool {
        self.packages.contains(package)
    }

    /// Number of protected packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns `true` if nothing is protected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl FromIterator<PackageId> for ExclusionList {
    fn from_iter<I: IntoIterator<Item = PackageId>>(iter: I) -> Self {
        Self {
            packages: iter.into_iter().collect(),
        }
    }
}
