//! Content pipeline error types.
//!
//! Every failure that kills a single document's parse is typed here and
//! names the offending file, so batch callers can log it and move on.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn one content file into a document.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("no frontmatter block in `{0}`")]
    MissingFrontmatter(PathBuf),

    #[error("unclosed frontmatter block in `{0}`")]
    UnclosedFrontmatter(PathBuf),

    #[error("invalid frontmatter YAML in `{0}`")]
    Frontmatter(PathBuf, #[source] serde_yaml::Error),

    #[error("invalid metadata in `{0}`: {1}")]
    Metadata(PathBuf, MetadataError),
}

/// Frontmatter field violation, found by the metadata validator.
///
/// Carries the first violation only: required fields are checked in a fixed
/// order and validation stops at the first offender.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetadataError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid date `{0}` (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("`tags` must be a list")]
    InvalidTags,

    #[error("field `{field}` must be {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_names_path() {
        let err = ContentError::Metadata(
            PathBuf::from("content/blog/broken.mdx"),
            MetadataError::MissingField("title"),
        );
        let display = format!("{err}");
        assert!(display.contains("content/blog/broken.mdx"));
        assert!(display.contains("`title`"));
    }

    #[test]
    fn test_metadata_error_display() {
        let err = MetadataError::InvalidDate("2024-13-01".into());
        assert!(format!("{err}").contains("2024-13-01"));

        let err = MetadataError::TypeMismatch {
            field: "featured",
            expected: "a boolean",
        };
        let display = format!("{err}");
        assert!(display.contains("featured"));
        assert!(display.contains("a boolean"));
    }
}
