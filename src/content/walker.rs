//! Content file discovery.

use crate::log;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Junk files that never count as content.
pub const IGNORED_FILE_NAMES: &[&str] = &[".DS_Store"];

/// Recursively collect every content file under `dir`.
///
/// A file is eligible iff its extension matches `extension`; everything
/// else (sidecar assets, directories, junk files) is ignored. A missing
/// directory is "zero documents", not an error, so listings degrade to
/// empty instead of failing the caller.
///
/// Ordering of the result is not significant; sorting happens downstream.
pub fn collect_content_files(dir: &Path, extension: &str) -> Vec<PathBuf> {
    if !dir.is_dir() {
        log!("walker"; "content directory not found: {}", dir.display());
        return Vec::new();
    }

    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext == extension)
        })
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !IGNORED_FILE_NAMES.contains(&name))
        })
        .map(|entry| entry.into_path())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collects_matching_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("2024/q1")).unwrap();
        fs::write(dir.path().join("a.mdx"), "").unwrap();
        fs::write(dir.path().join("2024/b.mdx"), "").unwrap();
        fs::write(dir.path().join("2024/q1/c.mdx"), "").unwrap();

        let mut files = collect_content_files(dir.path(), "mdx");
        files.sort();

        assert_eq!(files.len(), 3);
        assert!(files[0].ends_with("2024/b.mdx"));
        assert!(files[1].ends_with("2024/q1/c.mdx"));
        assert!(files[2].ends_with("a.mdx"));
    }

    #[test]
    fn test_ignores_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.mdx"), "").unwrap();
        fs::write(dir.path().join("b.md"), "").unwrap();
        fs::write(dir.path().join("c.png"), "").unwrap();
        fs::write(dir.path().join("noext"), "").unwrap();

        let files = collect_content_files(dir.path(), "mdx");
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.mdx"));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let files = collect_content_files(&dir.path().join("does-not-exist"), "mdx");
        assert!(files.is_empty());
    }

    #[test]
    fn test_empty_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let files = collect_content_files(dir.path(), "mdx");
        assert!(files.is_empty());
    }
}
