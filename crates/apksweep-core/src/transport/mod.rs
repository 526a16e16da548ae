//! Remote-device transport.

pub mod adb;

pub use adb::AdbTransport;

use std::path::Path;

use crate::Result;
use crate::package::PackageId;

/// Contract the pipeline consumes for all device interaction.
///
/// All calls are synchronous and blocking from the pipeline's perspective;
/// timeouts, if any, are the implementation's responsibility. The shipped
/// implementation is [`AdbTransport`]; tests substitute their own.
pub trait DeviceTransport {
    /// Lists installed packages in device order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SweepError::DeviceCommand`] on transport failure.
    fn list_packages(&self) -> Result<Vec<PackageId>>;

    /// Resolves the ordered list of remote APK paths backing a package.
    ///
    /// More than one path means a split install; order assigns split
    /// indices but carries no other meaning.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SweepError::DeviceCommand`] on transport failure.
    fn archive_paths(&self, package: &PackageId) -> Result<Vec<String>>;

    /// Downloads a remote file to a local destination.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SweepError::Retrieval`] on failure.
    fn pull(&self, remote: &str, local: &Path) -> Result<()>;

    /// Uninstalls a package from the device.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SweepError::Removal`] on failure.
    fn uninstall(&self, package: &PackageId) -> Result<()>;
}
