//! Scan-analyze-quarantine engine for removing unwanted Android packages.
//!
//! `apksweep-core` stages each installed package's APK file(s) from a
//! connected device, runs an ordered chain of pluggable content inspectors
//! against the staged archives, and uninstalls matches — honoring a
//! user-maintained exclusion list and tolerating partial failures (corrupt
//! downloads, unreachable storage paths, removal failures) without aborting
//! the run.
//!
//! Inspection is inert: inspectors only examine ZIP entry names, never
//! extract or execute archive contents.
//!
//! # Examples
//!
//! ```no_run
//! use apksweep_core::AdbTransport;
//! use apksweep_core::ExclusionList;
//! use apksweep_core::InspectorRegistry;
//! use apksweep_core::NoopObserver;
//! use apksweep_core::Pipeline;
//! use apksweep_core::StagingArea;
//! use apksweep_core::SweepConfig;
//! use apksweep_core::transport::DeviceTransport;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = AdbTransport::new("adb");
//! let chain = InspectorRegistry::with_builtins().resolve("react|jsfile")?;
//! let exclusions = ExclusionList::empty();
//! let staging = StagingArea::new("/tmp/apksweep");
//!
//! let packages = transport.list_packages()?;
//! let mut pipeline = Pipeline::new(
//!     &transport,
//!     chain,
//!     exclusions,
//!     staging,
//!     SweepConfig::default(),
//! );
//! let report = pipeline.run(&packages, &mut NoopObserver)?;
//! println!("removed {} packages", report.removed());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod apk;
pub mod error;
pub mod exclusion;
pub mod inspect;
pub mod observer;
pub mod package;
pub mod pipeline;
pub mod report;
pub mod staging;
pub mod test_utils;
pub mod transport;

// Re-export main API types
pub use apk::Apk;
pub use error::Result;
pub use error::SweepError;
pub use exclusion::ExclusionList;
pub use inspect::Inspector;
pub use inspect::NativeLibInspector;
pub use inspect::SuffixInspector;
pub use inspect::registry::InspectorRegistry;
pub use observer::NoopObserver;
pub use observer::SweepObserver;
pub use package::PackageId;
pub use pipeline::Pipeline;
pub use pipeline::SweepConfig;
pub use report::PackageEntry;
pub use report::PackageOutcome;
pub use report::SweepReport;
pub use staging::StagingArea;
pub use transport::adb::AdbTransport;
