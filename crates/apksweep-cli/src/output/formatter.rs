//! Output formatter trait for CLI results.

use anyhow::Result;
use apksweep_core::SweepReport;
use serde::Serialize;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the report of a sweep run
    fn format_sweep_report(&self, report: &SweepReport) -> Result<()>;

    /// Format the list of connected device serials
    fn format_device_list(&self, devices: &[String]) -> Result<()>;

    /// Format the list of registered inspectors
    fn format_inspector_list(&self, inspectors: &[(&'static str, &'static str)]) -> Result<()>;

    /// Format a warning message
    #[allow(dead_code)]
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    #[allow(dead_code)]
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}
