//! Read-only queries over assembled collections.
//!
//! Each helper is independently re-entrant and performs its own fresh scan
//! per call; there is no cache to invalidate and no state shared between
//! calls. All of them degrade to empty results rather than propagating
//! lower-level failures.

use crate::config::SiteConfig;
use crate::content::collection::collect_documents;
use crate::content::document::ContentDocument;
use crate::content::frontmatter;
use crate::content::walker::collect_content_files;
use rayon::prelude::*;
use serde::Serialize;
use serde_yaml::Value;
use std::{fs, path::Path};

/// Look up one document by slug.
///
/// Absence is an expected outcome, not a failure: `None` means the slug
/// matched nothing in an otherwise successfully scanned collection.
pub fn find_by_slug(
    config: &SiteConfig,
    content_type: &str,
    slug: &str,
) -> Option<ContentDocument> {
    collect_documents(config, content_type)
        .into_iter()
        .find(|document| document.slug == slug)
}

/// First `limit` featured documents, in collection (date-descending) order.
pub fn featured(config: &SiteConfig, content_type: &str, limit: usize) -> Vec<ContentDocument> {
    collect_documents(config, content_type)
        .into_iter()
        .filter(|document| document.meta.featured)
        .take(limit)
        .collect()
}

/// Documents sharing at least one tag with `tags`, in collection order,
/// capped at `limit`.
pub fn with_tags(
    config: &SiteConfig,
    content_type: &str,
    tags: &[String],
    limit: usize,
) -> Vec<ContentDocument> {
    collect_documents(config, content_type)
        .into_iter()
        .filter(|document| document.meta.tags.iter().any(|tag| tags.contains(tag)))
        .take(limit)
        .collect()
}

/// Aggregate counts for one content type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentStats {
    /// Every discovered content file, parseable or not.
    pub total: usize,
    /// Files whose frontmatter parsed and did not set `draft: true`.
    pub published: usize,
    /// Files whose frontmatter parsed with `draft: true`.
    pub drafts: usize,
    /// Files whose frontmatter parsed with `featured: true`.
    pub featured: usize,
}

/// Count documents from raw frontmatter only.
///
/// Deliberately cheaper than assembling the collection: bodies are never
/// rendered and metadata is not validated, so a file that would fail the
/// full parse can still be counted here. Callers wanting exact listing
/// counts should measure the assembled collection instead. Files whose
/// frontmatter does not even split or parse contribute to `total` only.
pub fn content_stats(config: &SiteConfig, content_type: &str) -> ContentStats {
    let dir = config.type_dir(content_type);
    let files = collect_content_files(&dir, &config.content.extension);

    let flags: Vec<(bool, bool)> = files.par_iter().filter_map(|path| raw_flags(path)).collect();

    let mut stats = ContentStats {
        total: files.len(),
        ..ContentStats::default()
    };
    for (draft, featured) in flags {
        if draft {
            stats.drafts += 1;
        } else {
            stats.published += 1;
        }
        if featured {
            stats.featured += 1;
        }
    }

    stats
}

/// Read just the draft/featured flags out of a file's frontmatter.
fn raw_flags(path: &Path) -> Option<(bool, bool)> {
    let raw = fs::read_to_string(path).ok()?;
    let (block, _) = frontmatter::split(&raw).ok()?;
    let value: Value = serde_yaml::from_str(block).ok()?;

    let flag = |field: &str| value.get(field).and_then(Value::as_bool).unwrap_or(false);
    Some((flag("draft"), flag("featured")))
}

// ============================================================================
// Tests
// ============================================================================
