//! The scan-analyze-quarantine pipeline.
//!
//! Packages and their split parts are processed strictly one at a time, in
//! input order. The bottleneck is the ADB transport, not inspection, so
//! there is nothing to win by parallelizing; sequential execution also
//! keeps the staging key set and the accumulating report free of locks.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::Result;
use crate::SweepError;
use crate::apk::Apk;
use crate::exclusion::ExclusionList;
use crate::inspect::Inspector;
use crate::observer::SweepObserver;
use crate::package::PackageId;
use crate::report::PackageEntry;
use crate::report::PackageOutcome;
use crate::report::SweepReport;
use crate::staging::StagingArea;
use crate::transport::DeviceTransport;

/// Remote prefix under which APKs can be pulled without elevated
/// privileges. Some apps keep split code under `/mnt/asec`, which is not
/// reachable over plain ADB.
pub const DEFAULT_ACCESSIBLE_PREFIX: &str = "/data/app";

/// Pipeline behavior switches.
///
/// Constructed once from parsed arguments and handed to the pipeline by
/// value; there is no ambient mutable configuration.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Report dangerous packages without uninstalling anything.
    pub analyze_only: bool,

    /// Accessible-storage root; archive paths outside this prefix are
    /// categorically unreachable and skipped, never retried.
    pub accessible_prefix: String,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            analyze_only: false,
            accessible_prefix: DEFAULT_ACCESSIBLE_PREFIX.to_string(),
        }
    }
}

/// Per-run sweep orchestrator.
///
/// Owns the staging key index and the accumulating report for exactly one
/// run; create a fresh pipeline per run. Every expected per-package failure
/// (unresolvable paths, failed pulls, corrupt archives, rejected
/// uninstalls) is recovered by skipping the smallest possible unit of work
/// and recording a warning. Only an empty package list aborts the run.
pub struct Pipeline<'a> {
    transport: &'a dyn DeviceTransport,
    chain: Vec<Arc<dyn Inspector>>,
    exclusions: ExclusionList,
    staging: StagingArea,
    config: SweepConfig,
    cancel: Arc<AtomicBool>,
}

impl<'a> Pipeline<'a> {
    /// Creates a pipeline for one run.
    ///
    /// `chain` comes from [`crate::InspectorRegistry::resolve`]; its order
    /// decides which inspector's tag is reported when several would match.
    #[must_use]
    pub fn new(
        transport: &'a dyn DeviceTransport,
        chain: Vec<Arc<dyn Inspector>>,
        exclusions: ExclusionList,
        staging: StagingArea,
        config: SweepConfig,
    ) -> Self {
        Self {
            transport,
            chain,
            exclusions,
            staging,
            config,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shared flag that cancels the run between packages when set.
    ///
    /// A cancelled run still returns its partial report.
    #[must_use]
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Runs the pipeline over `packages` in input order.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::NoPackages`] for an empty package list and
    /// [`SweepError::Config`] for an empty inspector chain. Everything
    /// else is recorded in the report.
    pub fn run(
        &mut self,
        packages: &[PackageId],
        observer: &mut dyn SweepObserver,
    ) -> Result<SweepReport> {
        if packages.is_empty() {
            return Err(SweepError::NoPackages);
        }
        if self.chain.is_empty() {
            return Err(SweepError::Config {
                reason: "inspector chain is empty".to_string(),
            });
        }

        let start = Instant::now();
        let mut report = SweepReport::new();
        let total = packages.len();

        for (index, package) in packages.iter().enumerate() {
            if self.cancel.load(Ordering::Relaxed) {
                note(
                    &mut report,
                    observer,
                    format!("run cancelled after {index} of {total} packages"),
                );
                break;
            }
            observer.on_package_start(package, index + 1, total);
            let entry = self.process_package(package, &mut report, observer);
            observer.on_package_done(&entry);
            report.packages.push(entry);
        }

        report.duration = start.elapsed();
        Ok(report)
    }

    /// Processes one package: resolve parts, stage, inspect, quarantine.
    fn process_package(
        &mut self,
        package: &PackageId,
        report: &mut SweepReport,
        observer: &mut dyn SweepObserver,
    ) -> PackageEntry {
        let paths = match self.transport.archive_paths(package) {
            Ok(paths) => paths,
            Err(err) => {
                note(
                    report,
                    observer,
                    format!("skipping {package}: could not resolve archive paths: {err}"),
                );
                return PackageEntry::clean(package, PackageOutcome::Skipped);
            }
        };

        let transport = self.transport;
        let mut inspected_any = false;
        let mut staging_failed = false;

        for (split_index, remote) in paths.iter().enumerate() {
            if !remote.starts_with(&self.config.accessible_prefix) {
                note(
                    report,
                    observer,
                    format!(
                        "{package} part {split_index}: {remote} is outside {}, skipping",
                        self.config.accessible_prefix
                    ),
                );
                continue;
            }

            let local = match self.staging.stage(transport, package, split_index, remote) {
                Ok(local) => local,
                Err(err) => {
                    staging_failed = true;
                    note(report, observer, format!("{package} part {split_index}: {err}"));
                    continue;
                }
            };
            observer.on_part_staged(package, split_index);

            let apk = match Apk::open(&local, package.clone(), split_index) {
                Ok(apk) => apk,
                Err(err) => {
                    staging_failed = true;
                    note(report, observer, format!("{package} part {split_index}: {err}"));
                    continue;
                }
            };
            inspected_any = true;

            if let Some(tag) = self.first_match(&apk) {
                observer.on_verdict(package, tag);
                // Verdict handled: remaining split parts are never staged
                // or inspected, in analyze-only mode too. This can
                // under-report dangerous content in later parts; it is the
                // observed contract.
                return self.handle_verdict(package, tag, report, observer);
            }
        }

        if inspected_any {
            PackageEntry::clean(package, PackageOutcome::Safe)
        } else if staging_failed {
            PackageEntry::clean(package, PackageOutcome::StagingFailed)
        } else {
            PackageEntry::clean(package, PackageOutcome::Skipped)
        }
    }

    /// First chain-order inspector that matches wins.
    fn first_match(&self, apk: &Apk) -> Option<&'static str> {
        self.chain
            .iter()
            .find(|inspector| inspector.inspect(apk))
            .map(|inspector| inspector.tag())
    }

    fn handle_verdict(
        &self,
        package: &PackageId,
        tag: &'static str,
        report: &mut SweepReport,
        observer: &mut dyn SweepObserver,
    ) -> PackageEntry {
        if self.config.analyze_only {
            return PackageEntry::dangerous(package, PackageOutcome::DangerousReportedOnly, tag);
        }
        if self.exclusions.contains(package) {
            return PackageEntry::dangerous(package, PackageOutcome::DangerousProtected, tag);
        }
        match self.transport.uninstall(package) {
            Ok(()) => PackageEntry::dangerous(package, PackageOutcome::DangerousRemoved, tag),
            Err(err) => {
                note(report, observer, err.to_string());
                PackageEntry::dangerous(package, PackageOutcome::DangerousRemovalFailed, tag)
            }
        }
    }
}

fn note(report: &mut SweepReport, observer: &mut dyn SweepObserver, message: String) {
    observer.on_warning(&message);
    report.add_warning(message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SweepConfig::default();
        assert!(!config.analyze_only);
        assert_eq!(config.accessible_prefix, "/data/app");
    }
}
