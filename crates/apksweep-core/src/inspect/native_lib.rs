//! Native-library name inspector.

use crate::apk::Apk;

use super::Inspector;

/// Flags archives whose native-library directory contains a file name
/// matching one of a set of case-insensitive substrings.
///
/// The built-in `react` instance looks under `lib/` for base names
/// containing `react_native` or `reactnative`, which catches the React
/// Native runtime (`libreactnativejni.so`, `libreact_native_jni.so` and
/// friends) across ABI subdirectories.
#[derive(Debug, Clone)]
pub struct NativeLibInspector {
    tag: &'static str,
    description: &'static str,
    dir_prefix: String,
    needles: Vec<String>,
}

impl NativeLibInspector {
    /// Creates a native-library inspector.
    ///
    /// `needles` are lowercased once here; matching compares against the
    /// lowercased base file name of each entry under `dir_prefix`.
    #[must_use]
    pub fn new(
        tag: &'static str,
        description: &'static str,
        dir_prefix: impl Into<String>,
        needles: &[&str],
    ) -> Self {
        Self {
            tag,
            description,
            dir_prefix: dir_prefix.into(),
            needles: needles.iter().map(|n| n.to_ascii_lowercase()).collect(),
        }
    }

    /// The built-in `react` inspector.
    #[must_use]
    pub fn react_native() -> Self {
        Self::new(
            "react",
            "native-library directory contains a React Native runtime",
            "lib/",
            &["react_native", "reactnative"],
        )
    }

    fn base_name(entry: &str) -> &str {
        entry.rsplit('/').next().unwrap_or(entry)
    }
}

impl Inspector for NativeLibInspector {
    fn tag(&self) -> &'static str {
        self.tag
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn inspect(&self, apk: &Apk) -> bool {
        apk.entry_names()
            .filter(|name| name.starts_with(&self.dir_prefix))
            .any(|name| {
                let base = Self::base_name(name).to_ascii_lowercase();
                self.needles.iter().any(|needle| base.contains(needle))
            })
    }
}
