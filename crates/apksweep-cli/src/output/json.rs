//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use apksweep_core::PackageOutcome;
use apksweep_core::SweepReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_sweep_report(&self, report: &SweepReport) -> Result<()> {
        #[derive(Serialize)]
        struct PackageOutput {
            package: String,
            outcome: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            inspector: Option<&'static str>,
        }

        #[derive(Serialize)]
        struct SweepOutput {
            total: usize,
            dangerous: usize,
            removed: usize,
            protected: usize,
            reported_only: usize,
            removal_failed: usize,
            safe: usize,
            skipped: usize,
            staging_failed: usize,
            duration_ms: u128,
            packages: Vec<PackageOutput>,
            warnings: Vec<String>,
        }

        let data = SweepOutput {
            total: report.total(),
            dangerous: report.dangerous(),
            removed: report.removed(),
            protected: report.count(PackageOutcome::DangerousProtected),
            reported_only: report.count(PackageOutcome::DangerousReportedOnly),
            removal_failed: report.count(PackageOutcome::DangerousRemovalFailed),
            safe: report.count(PackageOutcome::Safe),
            skipped: report.count(PackageOutcome::Skipped),
            staging_failed: report.count(PackageOutcome::StagingFailed),
            duration_ms: report.duration.as_millis(),
            packages: report
                .packages
                .iter()
                .map(|entry| PackageOutput {
                    package: entry.package.to_string(),
                    outcome: entry.outcome.name(),
                    inspector: entry.inspector,
                })
                .collect(),
            warnings: report.warnings.clone(),
        };

        let output = JsonOutput::success("sweep", data);
        Self::output(&output)
    }

    fn format_device_list(&self, devices: &[String]) -> Result<()> {
        #[derive(Serialize)]
        struct DeviceOutput {
            devices: Vec<String>,
        }

        let output = JsonOutput::success(
            "devices",
            DeviceOutput {
                devices: devices.to_vec(),
            },
        );
        Self::output(&output)
    }

    fn format_inspector_list(&self, inspectors: &[(&'static str, &'static str)]) -> Result<()> {
        #[derive(Serialize)]
        struct InspectorOutput {
            tag: &'static str,
            description: &'static str,
        }

        #[derive(Serialize)]
        struct InspectorListOutput {
            inspectors: Vec<InspectorOutput>,
        }

        let output = JsonOutput::success(
            "inspectors",
            InspectorListOutput {
                inspectors: inspectors
                    .iter()
                    .copied()
                    .map(|(tag, description)| InspectorOutput { tag, description })
                    .collect(),
            },
        );
        Self::output(&output)
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use apksweep_core::PackageEntry;
    use apksweep_core::PackageId;

    #[test]
    fn test_sweep_output_serializes() {
        let mut report = SweepReport::new();
        report.packages.push(PackageEntry::dangerous(
            &PackageId::new("com.bad.app"),
            PackageOutcome::DangerousRemoved,
            "jsfile",
        ));
        report.add_warning("something non-fatal".to_string());

        // Serialization itself must not fail.
        JsonFormatter.format_sweep_report(&report).unwrap();
    }
}
