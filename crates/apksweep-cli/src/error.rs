//! Error conversion utilities for CLI.
//!
//! Converts apksweep-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use apksweep_core::SweepError;

/// Converts `SweepError` to a user-friendly anyhow error with context
pub fn convert_sweep_error(err: SweepError) -> anyhow::Error {
    match err {
        SweepError::UnknownInspector { tag } => {
            anyhow!(
                "Unknown inspector tag: {tag:?}\n\
                 HINT: Run `apksweep inspectors` to list available tags, and join them with `|`."
            )
        }
        SweepError::DuplicateInspector { tag } => {
            anyhow!("Two inspectors are registered under the tag {tag:?}; tags must be unique.")
        }
        SweepError::NoPackages => {
            anyhow!(
                "The device reported no third-party packages.\n\
                 HINT: Check that the device is authorized (`adb devices`) and unlocked."
            )
        }
        SweepError::DeviceCommand { command, detail } => {
            anyhow!(
                "Device command `{command}` failed: {detail}\n\
                 HINT: Check the --adb-path value and that the device is connected and authorized."
            )
        }
        _ => anyhow::Error::from(err),
    }
}

/// Adds sweep context to a core result
pub fn add_sweep_context<T>(result: Result<T, SweepError>) -> Result<T> {
    result.map_err(convert_sweep_error)
}
