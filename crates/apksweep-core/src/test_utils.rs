//! Test utilities for building APK fixtures.
//!
//! APKs are plain ZIP containers as far as the sweep engine is concerned,
//! so fixtures are small stored-entry ZIP files.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;
use std::path::Path;

/// Creates an in-memory APK (ZIP) from a list of entries.
///
/// Each entry is a tuple of (path, content). Entries are stored
/// uncompressed; inspectors only ever look at names.
///
/// # Examples
///
/// ```
/// use apksweep_core::test_utils::create_test_apk;
///
/// let apk = create_test_apk(&[("classes.dex", b"dex"), ("assets/index.android.js", b"js")]);
/// ```
#[must_use]
pub fn create_test_apk(entries: &[(&str, &[u8])]) -> Vec<u8> {
    use zip::CompressionMethod;
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (path, data) in entries {
        writer.start_file(*path, options).unwrap();
        writer.write_all(data).unwrap();
    }

    writer.finish().unwrap().into_inner()
}

/// Writes an APK fixture to `path`.
pub fn write_test_apk(path: &Path, entries: &[(&str, &[u8])]) {
    std::fs::write(path, create_test_apk(entries)).unwrap();
}
