//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use apksweep_core::PackageOutcome;
use apksweep_core::SweepReport;
use console::Term;
use console::style;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn count_line(&self, label: &str, count: usize) {
        if count > 0 || self.verbose {
            let _ = self.term.write_line(&format!("  {label}: {count}"));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_sweep_report(&self, report: &SweepReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} Sweep complete", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line("Sweep complete");
        }

        let _ = self
            .term
            .write_line(&format!("  Packages processed: {}", report.total()));
        self.count_line("Dangerous", report.dangerous());
        self.count_line("Removed", report.removed());
        self.count_line("Protected", report.count(PackageOutcome::DangerousProtected));
        self.count_line(
            "Reported only",
            report.count(PackageOutcome::DangerousReportedOnly),
        );
        self.count_line(
            "Removal failed",
            report.count(PackageOutcome::DangerousRemovalFailed),
        );
        self.count_line("Safe", report.count(PackageOutcome::Safe));
        self.count_line("Skipped", report.count(PackageOutcome::Skipped));
        self.count_line("Staging failed", report.count(PackageOutcome::StagingFailed));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
            for entry in &report.packages {
                let tag = entry
                    .inspector
                    .map(|tag| format!(" [{tag}]"))
                    .unwrap_or_default();
                let _ = self
                    .term
                    .write_line(&format!("  {} {}{tag}", entry.package, entry.outcome));
            }
        }

        for entry in &report.packages {
            if entry.outcome == PackageOutcome::DangerousProtected && !self.verbose {
                let _ = self.term.write_line(&format!(
                    "  {} is on the gracelist and was not uninstalled",
                    entry.package
                ));
            }
        }

        for warning in &report.warnings {
            self.format_warning(warning);
        }

        Ok(())
    }

    fn format_device_list(&self, devices: &[String]) -> Result<()> {
        if devices.is_empty() {
            let _ = self.term.write_line("No devices connected");
            return Ok(());
        }
        for serial in devices {
            let _ = self.term.write_line(serial);
        }
        Ok(())
    }

    fn format_inspector_list(&self, inspectors: &[(&'static str, &'static str)]) -> Result<()> {
        let width = inspectors
            .iter()
            .map(|(tag, _)| tag.len())
            .max()
            .unwrap_or(0);
        for (tag, description) in inspectors {
            let padded = format!("{tag:width$}");
            if self.use_colors {
                let _ = self
                    .term
                    .write_line(&format!("{}  {description}", style(padded).cyan()));
            } else {
                let _ = self.term.write_line(&format!("{padded}  {description}"));
            }
        }
        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("!").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("warning: {message}"));
        }
    }
}
