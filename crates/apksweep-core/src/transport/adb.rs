//! ADB-backed device transport.
//!
//! Shells out to the Android Debug Bridge executable. Only unprivileged
//! commands are used: `pm list packages -3` restricts the sweep to
//! third-party packages, which are the only ones an unrooted device lets
//! us uninstall anyway.

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use crate::Result;
use crate::SweepError;
use crate::package::PackageId;

use super::DeviceTransport;

/// `pm` prefixes every package line with this.
const PACKAGE_PREFIX: &str = "package:";

/// Device transport over the `adb` executable.
///
/// # Examples
///
/// ```no_run
/// use apksweep_core::AdbTransport;
/// use apksweep_core::transport::DeviceTransport;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut adb = AdbTransport::new("adb");
/// adb.probe()?;
/// if let [serial] = adb.devices()?.as_slice() {
///     adb.set_serial(serial.clone());
/// }
/// let packages = adb.list_packages()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AdbTransport {
    adb_path: PathBuf,
    serial: Option<String>,
}

impl AdbTransport {
    /// Creates a transport around an ADB executable path.
    #[must_use]
    pub fn new(adb_path: impl Into<PathBuf>) -> Self {
        Self {
            adb_path: adb_path.into(),
            serial: None,
        }
    }

    /// Targets a specific device serial (`adb -s <serial>`).
    pub fn set_serial(&mut self, serial: impl Into<String>) {
        self.serial = Some(serial.into());
    }

    /// The targeted device serial, if any.
    #[must_use]
    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    /// Checks that the ADB executable is present and answers.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::DeviceCommand`] if `adb version` cannot be
    /// run or exits nonzero.
    pub fn probe(&self) -> Result<()> {
        self.run(&["version"]).map(drop)
    }

    /// Lists connected device serials (`adb devices`).
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::DeviceCommand`] on transport failure.
    pub fn devices(&self) -> Result<Vec<String>> {
        let output = self.run(&["devices"])?;
        Ok(parse_devices(&output))
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let mut command = Command::new(&self.adb_path);
        if let Some(serial) = &self.serial {
            command.arg("-s").arg(serial);
        }
        command.args(args);

        let describe = || args.join(" ");
        let output: Output = command.output().map_err(|err| SweepError::DeviceCommand {
            command: describe(),
            detail: format!("could not run {}: {err}", self.adb_path.display()),
        })?;

        if !output.status.success() {
            return Err(SweepError::DeviceCommand {
                command: describe(),
                detail: format!(
                    "exit status {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl DeviceTransport for AdbTransport {
    fn list_packages(&self) -> Result<Vec<PackageId>> {
        let output = self.run(&["shell", "pm", "list", "packages", "-3"])?;
        Ok(parse_package_list(&output))
    }

    fn archive_paths(&self, package: &PackageId) -> Result<Vec<String>> {
        let output = self.run(&["shell", "pm", "path", package.as_str()])?;
        Ok(parse_package_paths(&output))
    }

    fn pull(&self, remote: &str, local: &Path) -> Result<()> {
        let local = local.to_string_lossy();
        self.run(&["pull", remote, &local])
            .map(drop)
            .map_err(|err| SweepError::Retrieval {
                remote: remote.to_string(),
                detail: err.to_string(),
            })
    }

    fn uninstall(&self, package: &PackageId) -> Result<()> {
        self.run(&["uninstall", package.as_str()])
            .map(drop)
            .map_err(|err| SweepError::Removal {
                package: package.to_string(),
                detail: err.to_string(),
            })
    }
}

/// Parses `adb devices` output into serials.
///
/// The first line is the `List of devices attached` header; each following
/// nonblank line is `<serial>\t<state>`.
fn parse_devices(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .map(ToString::to_string)
        .collect()
}

/// Parses `pm list packages` output, stripping the `package:` prefix.
fn parse_package_list(output: &str) -> Vec<PackageId> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_package_prefix)
        .map(PackageId::from)
        .collect()
}

/// Parses `pm path` output into remote APK paths, split order preserved.
fn parse_package_paths(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_package_prefix)
        .map(ToString::to_string)
        .collect()
}

fn strip_package_prefix(line: &str) -> &str {
    line.strip_prefix(PACKAGE_PREFIX).unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_devices_skips_header_and_blank_lines() {
        let output = "List of devices attached\nemulator-5554\tdevice\n\nRF8M123ABC\tunauthorized\n";
        assert_eq!(
            parse_devices(output),
            vec!["emulator-5554".to_string(), "RF8M123ABC".to_string()]
        );
    }

    #[test]
    fn test_parse_devices_empty() {
        assert!(parse_devices("List of devices attached\n\n").is_empty());
    }

    #[test]
    fn test_parse_package_list_strips_prefix() {
        let output = "package:com.example.app\npackage:com.other.app\n";
        let packages = parse_package_list(output);
        assert_eq!(
            packages,
            vec![
                PackageId::new("com.example.app"),
                PackageId::new("com.other.app")
            ]
        );
    }

    #[test]
    fn test_parse_package_paths_preserves_split_order() {
        let output = "package:/data/app/~~x/com.example.app-1/base.apk\n\
                      package:/data/app/~~x/com.example.app-1/split_config.arm64_v8a.apk\n";
        let paths = parse_package_paths(output);
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("base.apk"));
        assert!(paths[1].ends_with("split_config.arm64_v8a.apk"));
    }

    #[test]
    fn test_missing_executable_is_a_device_command_error() {
        let adb = AdbTransport::new("/nonexistent/adb");
        let err = adb.probe().unwrap_err();
        assert!(matches!(err, SweepError::DeviceCommand { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_serial_targeting() {
        let mut adb = AdbTransport::new("adb");
        assert!(adb.serial().is_none());
        adb.set_serial("emulator-5554");
        assert_eq!(adb.serial(), Some("emulator-5554"));
    }
}
