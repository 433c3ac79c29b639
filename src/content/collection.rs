//! Collection assembly: the published, date-sorted view of one content type.

use crate::config::SiteConfig;
use crate::content::document::{ContentDocument, parse_document};
use crate::content::walker::collect_content_files;
use crate::log;
use rayon::prelude::*;
use std::cmp::Reverse;

/// Assemble the published collection for a content type.
///
/// Candidate files are parsed in parallel; each parse failure is contained
/// to its own file, logged with the path, and the document dropped. Partial
/// success is the contract: one malformed file never takes a listing down,
/// and the batch itself always succeeds (possibly empty).
///
/// Drafts are excluded, the rest sorted by publication date descending.
/// The sort is stable, so same-date documents keep their discovery order.
pub fn collect_documents(config: &SiteConfig, content_type: &str) -> Vec<ContentDocument> {
    let dir = config.type_dir(content_type);
    let files = collect_content_files(&dir, &config.content.extension);

    let mut documents: Vec<ContentDocument> = files
        .par_iter()
        .filter_map(|path| match parse_document(path) {
            Ok(document) => Some(document),
            Err(err) => {
                log!("content"; "skipped: {err}");
                None
            }
        })
        .filter(|document| !document.meta.draft)
        .collect();

    documents.sort_by_key(|document| Reverse(document.meta.date));
    documents
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn test_config(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.content.root = root.to_path_buf();
        config
    }

    fn write_post(dir: &Path, name: &str, date: &str, extra: &str) {
        let content = format!(
            "---\ntitle: {name}\ndate: {date}\nauthor: A\nexcerpt: E\ntags: [policy]\n{extra}---\nbody"
        );
        fs::write(dir.join(format!("{name}.mdx")), content).unwrap();
    }

    #[test]
    fn test_drafts_excluded_and_sorted_descending() {
        let dir = tempfile::tempdir().unwrap();
        let blog = dir.path().join("blog");
        fs::create_dir_all(&blog).unwrap();

        write_post(&blog, "first", "2024-01-01", "");
        write_post(&blog, "second", "2024-01-02", "draft: true\n");
        write_post(&blog, "third", "2024-01-03", "");

        let documents = collect_documents(&test_config(dir.path()), "blog");

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].slug, "third");
        assert_eq!(documents[0].meta.date.to_string(), "2024-01-03");
        assert_eq!(documents[1].slug, "first");
        assert_eq!(documents[1].meta.date.to_string(), "2024-01-01");
    }

    #[test]
    fn test_one_malformed_file_does_not_poison_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let blog = dir.path().join("blog");
        fs::create_dir_all(&blog).unwrap();

        for i in 1..=9 {
            write_post(&blog, &format!("post-{i}"), &format!("2024-01-{i:02}"), "");
        }
        fs::write(blog.join("broken.mdx"), "---\ntitle: only a title\n---\nbody").unwrap();

        let documents = collect_documents(&test_config(dir.path()), "blog");

        assert_eq!(documents.len(), 9);
        assert!(documents.iter().all(|d| d.slug.starts_with("post-")));
    }

    #[test]
    fn test_missing_content_type_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let documents = collect_documents(&test_config(dir.path()), "no-such-type");
        assert!(documents.is_empty());
    }

    #[test]
    fn test_nested_directories_are_included() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("blog").join("2024");
        fs::create_dir_all(&nested).unwrap();

        write_post(&dir.path().join("blog"), "top", "2024-01-01", "");
        write_post(&nested, "deep", "2024-02-01", "");

        let documents = collect_documents(&test_config(dir.path()), "blog");

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].slug, "deep");
        assert_eq!(documents[1].slug, "top");
    }
}
