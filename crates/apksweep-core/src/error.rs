//! Error types for sweep operations.
//!
//! Only two conditions are fatal to a whole run: a configuration problem
//! (unknown or duplicate inspector tag) and a device that reports no
//! packages at all. Everything else is recovered by skipping the smallest
//! unit of work — one split part or one package — and recording a warning
//! in the report.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `SweepError`.
pub type Result<T> = std::result::Result<T, SweepError>;

/// Errors that can occur while scanning and quarantining packages.
#[derive(Error, Debug)]
pub enum SweepError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {reason}")]
    Config {
        /// Description of the problem.
        reason: String,
    },

    /// Inspector selector referenced a tag no registered inspector carries.
    #[error("unknown inspector tag: {tag:?}")]
    UnknownInspector {
        /// The unresolvable selector token.
        tag: String,
    },

    /// Two inspectors were registered under the same tag.
    #[error("duplicate inspector tag: {tag:?}")]
    DuplicateInspector {
        /// The colliding tag.
        tag: &'static str,
    },

    /// A device command failed or its output could not be read.
    #[error("device command `{command}` failed: {detail}")]
    DeviceCommand {
        /// The command that failed, without the executable path.
        command: String,
        /// Exit status and captured stderr.
        detail: String,
    },

    /// An archive could not be pulled from the device.
    #[error("could not retrieve {remote}: {detail}")]
    Retrieval {
        /// Remote path of the archive part.
        remote: String,
        /// Transport failure description.
        detail: String,
    },

    /// A staged file could not be opened as a valid ZIP container.
    ///
    /// Never conflated with a dangerous verdict; the part is skipped.
    #[error("corrupt archive {}: {detail}", .path.display())]
    CorruptArchive {
        /// Local path of the staged file.
        path: PathBuf,
        /// Parser failure description.
        detail: String,
    },

    /// The device rejected an uninstall request.
    #[error("could not uninstall {package}: {detail}")]
    Removal {
        /// The package that survived removal.
        package: String,
        /// Transport failure description.
        detail: String,
    },

    /// The device reported no installed packages.
    #[error("no packages found on the device")]
    NoPackages,
}

impl SweepError {
    /// Returns `true` if this error aborts a whole run.
    ///
    /// Everything else is local to one package or one split part and is
    /// handled by the pipeline itself.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Config { .. }
                | Self::UnknownInspector { .. }
                | Self::DuplicateInspector { .. }
                | Self::NoPackages
        )
    }
}
