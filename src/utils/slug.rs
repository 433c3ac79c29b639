//! Slug resolution and heading-anchor slugification.

use std::path::Path;

/// Default slug for a content file: the file name without its extension.
pub fn slug_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// URL-safe id for a heading text.
///
/// Lowercased, ASCII-transliterated, hyphen-separated. Headings that
/// slugify to nothing (all symbols) fall back to "section" so anchors
/// always have a target.
pub fn slugify_heading(text: &str) -> String {
    let slug = slug::slugify(text);
    if slug.is_empty() { "section".into() } else { slug }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_path_simple() {
        assert_eq!(slug_from_path(Path::new("blog/my-article.mdx")), "my-article");
    }

    #[test]
    fn test_slug_from_path_nested() {
        assert_eq!(
            slug_from_path(Path::new("/content/blog/2024/entering-china.mdx")),
            "entering-china"
        );
    }

    #[test]
    fn test_slug_from_path_no_extension() {
        assert_eq!(slug_from_path(Path::new("notes/readme")), "readme");
    }

    #[test]
    fn test_slugify_heading_basic() {
        assert_eq!(slugify_heading("Market Entry"), "market-entry");
    }

    #[test]
    fn test_slugify_heading_punctuation() {
        assert_eq!(slugify_heading("Tax & Compliance (2024)"), "tax-compliance-2024");
    }

    #[test]
    fn test_slugify_heading_empty_fallback() {
        assert_eq!(slugify_heading("!!!"), "section");
    }
}
