// Sentinel - core/archive.rs
//
// Zip archive enumeration: the intake step of an audit.
//
// Operates on in-memory bytes only. Reading the archive file from disk and
// enforcing the on-disk size cap is owned by the app layer (app::audit);
// this module owns decoding and the entry-count cap.

use crate::util::error::ArchiveError;
use std::io::Cursor;

/// Enumerate the file entries of a zip archive.
///
/// Returns one name per non-directory entry, in archive order.  Directory
/// placeholders are excluded, and each returned name is the final path
/// segment of the entry (both `/` and `\` are treated as separators), so
/// `src/main.rs` is recorded as `main.rs`.
///
/// # Errors
/// Fails if the central directory cannot be decoded, if any entry's
/// metadata is unreadable, or if the archive holds more than `max_entries`
/// entries (counting directories).  There are no partial results: a report
/// either covers the whole archive or is not produced.
pub fn enumerate_entries(bytes: &[u8], max_entries: usize) -> Result<Vec<String>, ArchiveError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|source| ArchiveError::Decode { source })?;

    let count = archive.len();
    if count > max_entries {
        return Err(ArchiveError::TooManyEntries {
            count,
            max: max_entries,
        });
    }

    tracing::debug!(entries = count, "Archive decoded");

    let mut names = Vec::new();
    for index in 0..count {
        let entry = archive
            .by_index(index)
            .map_err(|source| ArchiveError::Entry { index, source })?;
        if entry.is_dir() {
            tracing::trace!(name = entry.name(), "Skipping directory entry");
            continue;
        }
        names.push(base_name(entry.name()));
    }

    Ok(names)
}

/// Final path segment of an archive entry name.
fn base_name(entry_name: &str) -> String {
    entry_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(entry_name)
        .to_string()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;

    /// Build an in-memory zip from (name, is_dir) pairs.
    fn make_zip(entries: &[(&str, bool)]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            let options = FileOptions::default().compression_method(zip::CompressionMethod::Stored);
            for (name, is_dir) in entries {
                if *is_dir {
                    writer.add_directory(*name, options).expect("add dir");
                } else {
                    writer.start_file(*name, options).expect("start file");
                    writer.write_all(b"content").expect("write entry");
                }
            }
            writer.finish().expect("finish zip");
        }
        cursor.into_inner()
    }

    #[test]
    fn test_enumerates_files_excluding_directories() {
        let bytes = make_zip(&[("a.txt", false), ("b", true), ("b/c.txt", false)]);
        let names = enumerate_entries(&bytes, 100).unwrap();
        assert_eq!(names, vec!["a.txt".to_string(), "c.txt".to_string()]);
    }

    #[test]
    fn test_nested_path_records_final_segment() {
        let bytes = make_zip(&[("src/core/model.rs", false)]);
        let names = enumerate_entries(&bytes, 100).unwrap();
        assert_eq!(names, vec!["model.rs".to_string()]);
    }

    #[test]
    fn test_backslash_separator_records_final_segment() {
        let bytes = make_zip(&[("dir\\win.txt", false)]);
        let names = enumerate_entries(&bytes, 100).unwrap();
        assert_eq!(names, vec!["win.txt".to_string()]);
    }

    #[test]
    fn test_empty_archive_yields_no_names() {
        let bytes = make_zip(&[]);
        let names = enumerate_entries(&bytes, 100).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_duplicate_basenames_are_kept() {
        // Two entries in different directories sharing a filename both appear.
        let bytes = make_zip(&[("a/mod.rs", false), ("b/mod.rs", false)]);
        let names = enumerate_entries(&bytes, 100).unwrap();
        assert_eq!(names, vec!["mod.rs".to_string(), "mod.rs".to_string()]);
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let result = enumerate_entries(b"definitely not a zip archive", 100);
        assert!(matches!(result, Err(ArchiveError::Decode { .. })));
    }

    #[test]
    fn test_truncated_archive_fails_to_decode() {
        let bytes = make_zip(&[("a.txt", false)]);
        let result = enumerate_entries(&bytes[..bytes.len() / 2], 100);
        assert!(matches!(result, Err(ArchiveError::Decode { .. })));
    }

    #[test]
    fn test_entry_cap_counts_directories() {
        let bytes = make_zip(&[("a.txt", false), ("b", true), ("b/c.txt", false)]);
        let result = enumerate_entries(&bytes, 2);
        assert!(matches!(
            result,
            Err(ArchiveError::TooManyEntries { count: 3, max: 2 })
        ));
    }
}
