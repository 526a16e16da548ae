//! Progress bar implementation for the sweep run.

use apksweep_core::PackageEntry;
use apksweep_core::PackageId;
use apksweep_core::SweepObserver;
use console::Term;
use console::style;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;

/// CLI progress bar wrapper implementing `SweepObserver`.
///
/// Displays one bar over the package list and prints verdicts and warnings
/// above it. Automatically cleans up on drop.
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Creates a progress bar over `total` packages.
    #[must_use]
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg:30!} [{bar:40.cyan/blue}] {pos}/{len} packages")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        Self { bar }
    }

    /// Whether a progress bar makes sense (TTY, not quiet, not JSON).
    #[must_use]
    pub fn should_show(quiet: bool, json: bool) -> bool {
        !quiet && !json && Term::stdout().is_term()
    }

    /// Finishes and clears the bar.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl SweepObserver for SweepProgress {
    fn on_package_start(&mut self, package: &PackageId, _current: usize, _total: usize) {
        self.bar.set_message(package.to_string());
    }

    fn on_verdict(&mut self, package: &PackageId, tag: &str) {
        self.bar.println(format!(
            "{} {package} flagged by inspector `{tag}`",
            style("✗").red().bold()
        ));
    }

    fn on_package_done(&mut self, _entry: &PackageEntry) {
        self.bar.inc(1);
    }

    fn on_warning(&mut self, message: &str) {
        self.bar
            .println(format!("{} {message}", style("!").yellow().bold()));
    }
}
