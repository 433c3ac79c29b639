//! Single-document parsing.

use crate::content::error::ContentError;
use crate::content::frontmatter::{self, Metadata, SplitError};
use crate::content::markdown::render_markdown;
use crate::utils::slug::slug_from_path;
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// One parsed content file: typed metadata plus the rendered body.
///
/// Constructed once per file read and immutable afterwards; every pipeline
/// invocation re-reads from disk.
#[derive(Debug, Clone, Serialize)]
pub struct ContentDocument {
    pub meta: Metadata,
    /// Render-ready HTML body.
    pub html: String,
    /// Resolved slug: explicit `slug` field if set, else the file name stem.
    pub slug: String,
    /// Source file the document was read from.
    pub source: PathBuf,
}

/// Parse one content file into a [`ContentDocument`].
///
/// This is the direct entry point: failures propagate typed and naming the
/// file. Batch callers go through the collection assembler instead, which
/// catches per file.
pub fn parse_document(path: &Path) -> Result<ContentDocument, ContentError> {
    let raw = fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;

    let (block, body) = frontmatter::split(&raw).map_err(|err| match err {
        SplitError::Missing => ContentError::MissingFrontmatter(path.to_path_buf()),
        SplitError::Unclosed => ContentError::UnclosedFrontmatter(path.to_path_buf()),
    })?;

    let value: serde_yaml::Value = serde_yaml::from_str(block)
        .map_err(|err| ContentError::Frontmatter(path.to_path_buf(), err))?;
    let meta = Metadata::from_yaml(&value)
        .map_err(|err| ContentError::Metadata(path.to_path_buf(), err))?;

    let html = render_markdown(body);
    let slug = meta
        .slug
        .clone()
        .unwrap_or_else(|| slug_from_path(path));

    Ok(ContentDocument {
        meta,
        html,
        slug,
        source: path.to_path_buf(),
    })
}

// ============================================================================
// Tests
// ============================================================================
