//! Property-based tests for inspectors, selector resolution, and staging
//! names.

#![allow(clippy::unwrap_used)]

use apksweep_core::Apk;
use apksweep_core::Inspector;
use apksweep_core::InspectorRegistry;
use apksweep_core::NativeLibInspector;
use apksweep_core::PackageId;
use apksweep_core::StagingArea;
use apksweep_core::SuffixInspector;
use apksweep_core::test_utils::write_test_apk;
use proptest::prelude::*;

fn entry_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,8}(/[a-z][a-z0-9_]{0,8}){0,2}(\\.(js|so|dex|xml|json))?")
        .unwrap()
}

fn open_fixture(entries: &[String]) -> Apk {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("fixture.apk");
    let owned: Vec<(&str, &[u8])> = entries
        .iter()
        .map(|name| (name.as_str(), b"x" as &[u8]))
        .collect();
    write_test_apk(&path, &owned);
    Apk::open(&path, PackageId::new("com.example.fixture"), 0).unwrap()
}

proptest! {
    /// The suffix inspector agrees with a direct `ends_with` scan.
    #[test]
    fn suffix_verdict_matches_reference(entries in proptest::collection::vec(entry_name(), 0..12)) {
        // ZIP entry names must be unique.
        let mut entries = entries;
        entries.sort();
        entries.dedup();

        let apk = open_fixture(&entries);
        let expected = entries.iter().any(|name| name.ends_with(".js"));
        prop_assert_eq!(SuffixInspector::js().inspect(&apk), expected);
    }

    /// Case changes in a native-library file name never change the verdict.
    #[test]
    fn native_lib_matching_is_case_insensitive(upper in proptest::collection::vec(any::<bool>(), 14)) {
        let base: String = "libreactnative"
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect();
        let entry = format!("lib/arm64-v8a/{base}jni.so");

        let apk = open_fixture(&[entry]);
        prop_assert!(NativeLibInspector::react_native().inspect(&apk));
    }

    /// Resolution preserves selector token order for any chain built from
    /// registered tags.
    #[test]
    fn selector_resolution_preserves_order(tokens in proptest::collection::vec(
        prop_oneof![Just("jsfile"), Just("react")],
        1..6,
    )) {
        let registry = InspectorRegistry::with_builtins();
        let selector = tokens.join("|");
        let chain = registry.resolve(&selector).unwrap();
        let resolved: Vec<&str> = chain.iter().map(|inspector| inspector.tag()).collect();
        prop_assert_eq!(resolved, tokens);
    }

    /// Staging names are unique per (package, split index) key for valid
    /// Android package identifiers (which cannot contain `-`).
    #[test]
    fn staging_names_are_injective(
        a in "[a-z][a-z0-9_.]{0,20}",
        b in "[a-z][a-z0-9_.]{0,20}",
        i in 0usize..4,
        j in 0usize..4,
    ) {
        let name_a = StagingArea::local_name(&PackageId::new(&a), i);
        let name_b = StagingArea::local_name(&PackageId::new(&b), j);
        if (a, i) != (b, j) {
            prop_assert_ne!(name_a, name_b);
        } else {
            prop_assert_eq!(name_a, name_b);
        }
    }
}
