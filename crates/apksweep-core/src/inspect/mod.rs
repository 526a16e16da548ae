//! Content inspectors and their registry.
//!
//! An inspector is a side-effect-free predicate over one staged archive's
//! entry names, identified by a stable tag. The pipeline holds an ordered
//! chain of `dyn Inspector` and never looks at concrete types; new
//! inspectors plug in through [`registry::InspectorRegistry`] without
//! touching the pipeline.

pub mod native_lib;
pub mod registry;
pub mod suffix;

pub use native_lib::NativeLibInspector;
pub use suffix::SuffixInspector;

use crate::apk::Apk;

/// A pluggable content inspector.
///
/// Implementations must be pure: `inspect` may not mutate the archive or
/// have side effects, and must tolerate any well-formed archive, including
/// empty ones (which are never dangerous). Corrupt containers are filtered
/// out by the pipeline before inspection; an inspector only ever sees a
/// successfully opened archive.
pub trait Inspector {
    /// Stable tag identifying this inspector.
    ///
    /// Used as the registry key and as the CLI-facing selector token;
    /// constant per implementation.
    fn tag(&self) -> &'static str;

    /// One-line description of what this inspector flags.
    fn description(&self) -> &'static str;

    /// Returns `true` iff the archive is judged dangerous by this
    /// inspector's policy.
    fn inspect(&self, apk: &Apk) -> bool;
}
