//! Entry-name suffix inspector.

use crate::apk::Apk;

use super::Inspector;

/// Flags archives containing any entry whose name ends with a configured
/// suffix.
///
/// The built-in `jsfile` instance matches bundled JavaScript sources. More
/// of a reference implementation than a sharp filter — there are legitimate
/// reasons to ship `.js` files in an APK (webview extensions, for one) —
/// but it is the simplest possible inspector.
#[derive(Debug, Clone)]
pub struct SuffixInspector {
    tag: &'static str,
    description: &'static str,
    suffix: String,
}

impl SuffixInspector {
    /// Creates a suffix inspector with a custom tag and suffix.
    #[must_use]
    pub fn new(tag: &'static str, description: &'static str, suffix: impl Into<String>) -> Self {
        Self {
            tag,
            description,
            suffix: suffix.into(),
        }
    }

    /// The built-in `jsfile` inspector: any entry ending in `.js`.
    #[must_use]
    pub fn js() -> Self {
        Self::new(
            "jsfile",
            "archive contains a bundled JavaScript source file (*.js)",
            ".js",
        )
    }
}

impl Inspector for SuffixInspector {
    fn tag(&self) -> &'static str {
        self.tag
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn inspect(&self, apk: &Apk) -> bool {
        apk.entry_names().any(|name| name.ends_with(&self.suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_suffix_anywhere_in_tree() {
        let apk = Apk::from_entries(
            "com.example.app",
            0,
            &["classes.dex", "assets/bundle/index.android.js"],
        );
        assert!(SuffixInspector::js().inspect(&apk));
    }

    #[test]
    fn test_suffix_is_not_a_substring_match() {
        let apk = Apk::from_entries("com.example.app", 0, &["assets/index.js.map", "res/a.json"]);
        assert!(!SuffixInspector::js().inspect(&apk));
    }

    #[test]
    fn test_empty_archive_is_safe() {
        let apk = Apk::from_entries("com.example.empty", 0, &[]);
        assert!(!SuffixInspector::js().inspect(&apk));
    }

    #[test]
    fn test_custom_suffix() {
        let inspector = SuffixInspector::new("luafile", "bundled lua", ".lua");
        let apk = Apk::from_entries("com.example.app", 0, &["scripts/main.lua"]);
        assert_eq!(inspector.tag(), "luafile");
        assert!(inspector.inspect(&apk));
    }
}
