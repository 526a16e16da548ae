//! Sweep run reporting.

use std::fmt;
use std::time::Duration;

use crate::package::PackageId;

/// Final outcome category for one package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageOutcome {
    /// No reachable archive part could be resolved; never conflated with
    /// a clean verdict.
    Skipped,
    /// At least one part was inspected and no inspector matched.
    Safe,
    /// No part was inspected because every reachable part failed to stage
    /// or to open as a valid container.
    StagingFailed,
    /// Judged dangerous and uninstalled from the device.
    DangerousRemoved,
    /// Judged dangerous but present in the exclusion list; not removed.
    DangerousProtected,
    /// Judged dangerous in analyze-only mode; removal not attempted.
    DangerousReportedOnly,
    /// Judged dangerous but the device rejected the uninstall.
    DangerousRemovalFailed,
}

impl PackageOutcome {
    /// Stable kebab-case name of the category.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::Safe => "safe",
            Self::StagingFailed => "staging-failed",
            Self::DangerousRemoved => "dangerous-removed",
            Self::DangerousProtected => "dangerous-protected",
            Self::DangerousReportedOnly => "dangerous-reported-only",
            Self::DangerousRemovalFailed => "dangerous-removal-failed",
        }
    }

    /// Returns `true` for any dangerous verdict, handled or not.
    #[must_use]
    pub fn is_dangerous(self) -> bool {
        matches!(
            self,
            Self::DangerousRemoved
                | Self::DangerousProtected
                | Self::DangerousReportedOnly
                | Self::DangerousRemovalFailed
        )
    }
}

impl fmt::Display for PackageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-package report entry.
#[derive(Debug, Clone)]
pub struct PackageEntry {
    /// The package this entry describes.
    pub package: PackageId,
    /// Final outcome category.
    pub outcome: PackageOutcome,
    /// Tag of the inspector that produced the dangerous verdict, if any.
    pub inspector: Option<&'static str>,
}

impl PackageEntry {
    /// Creates an entry without a verdict.
    #[must_use]
    pub fn clean(package: &PackageId, outcome: PackageOutcome) -> Self {
        Self {
            package: package.clone(),
            outcome,
            inspector: None,
        }
    }

    /// Creates an entry for a dangerous verdict with its triggering tag.
    #[must_use]
    pub fn dangerous(package: &PackageId, outcome: PackageOutcome, inspector: &'static str) -> Self {
        Self {
            package: package.clone(),
            outcome,
            inspector: Some(inspector),
        }
    }
}

/// Report of one sweep run.
///
/// Accumulated by the pipeline; per-package failures become warnings here
/// rather than errors.
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    /// Per-package entries in processing order.
    pub packages: Vec<PackageEntry>,

    /// Warnings generated during the run.
    pub warnings: Vec<String>,

    /// Duration of the run.
    pub duration: Duration,
}

impl SweepReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Number of packages processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.packages.len()
    }

    /// Number of packages with the given outcome.
    #[must_use]
    pub fn count(&self, outcome: PackageOutcome) -> usize {
        self.packages
            .iter()
            .filter(|entry| entry.outcome == outcome)
            .count()
    }

    /// Number of packages with any dangerous verdict.
    #[must_use]
    pub fn dangerous(&self) -> usize {
        self.packages
            .iter()
            .filter(|entry| entry.outcome.is_dangerous())
            .count()
    }

    /// Number of packages actually removed.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.count(PackageOutcome::DangerousRemoved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_names_are_stable() {
        assert_eq!(PackageOutcome::Skipped.name(), "skipped");
        assert_eq!(
            PackageOutcome::DangerousReportedOnly.name(),
            "dangerous-reported-only"
        );
    }

    #[test]
    fn test_counters() {
        let mut report = SweepReport::new();
        let safe = PackageId::new("com.ok.app");
        let bad = PackageId::new("com.bad.app");
        let shielded = PackageId::new("com.bank.app");

        report
            .packages
            .push(PackageEntry::clean(&safe, PackageOutcome::Safe));
        report.packages.push(PackageEntry::dangerous(
            &bad,
            PackageOutcome::DangerousRemoved,
            "jsfile",
        ));
        report.packages.push(PackageEntry::dangerous(
            &shielded,
            PackageOutcome::DangerousProtected,
            "react",
        ));

        assert_eq!(report.total(), 3);
        assert_eq!(report.dangerous(), 2);
        assert_eq!(report.removed(), 1);
        assert_eq!(report.count(PackageOutcome::Safe), 1);
        assert!(!report.has_warnings());
    }
}
