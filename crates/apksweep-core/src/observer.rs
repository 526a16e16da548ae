//! Observer callbacks for sweep progress.

use crate::package::PackageId;
use crate::report::PackageEntry;

/// Callback trait for progress reporting during a sweep run.
///
/// Implement this to surface per-package progress in a UI; every method has
/// an empty default body so implementations pick only what they need. The
/// pipeline also records every warning in the report, so observers may
/// ignore `on_warning` without losing information.
pub trait SweepObserver {
    /// Called when a package starts processing.
    ///
    /// `current` is 1-indexed; `total` is the run's package count.
    fn on_package_start(&mut self, package: &PackageId, current: usize, total: usize) {
        let _ = (package, current, total);
    }

    /// Called after one split part has been staged locally.
    fn on_part_staged(&mut self, package: &PackageId, split_index: usize) {
        let _ = (package, split_index);
    }

    /// Called when an inspector produces a dangerous verdict.
    fn on_verdict(&mut self, package: &PackageId, tag: &str) {
        let _ = (package, tag);
    }

    /// Called once per package with its final report entry.
    fn on_package_done(&mut self, entry: &PackageEntry) {
        let _ = entry;
    }

    /// Called for every non-fatal failure the pipeline recovers from.
    fn on_warning(&mut self, message: &str) {
        let _ = message;
    }
}

/// Observer that ignores all events.
pub struct NoopObserver;

impl SweepObserver for NoopObserver {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_observer_accepts_all_events() {
        let mut observer = NoopObserver;
        let pkg = PackageId::new("com.example.app");
        observer.on_package_start(&pkg, 1, 1);
        observer.on_part_staged(&pkg, 0);
        observer.on_verdict(&pkg, "jsfile");
        observer.on_warning("nothing to see");
    }
}
