//! Frontmatter splitting and metadata validation.
//!
//! Content files open with a `---`-delimited YAML block ahead of the
//! markdown body. The block is parsed into an untyped mapping first;
//! [`Metadata::from_yaml`] is the only way to get a typed record out of it,
//! so unvalidated values never cross the parser boundary.

use crate::content::error::MetadataError;
use crate::utils::date::PubDate;
use serde::Serialize;
use serde_yaml::Value;

/// Marker opening and closing the frontmatter block.
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Why a raw file could not be split into frontmatter and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// File does not open with a delimiter line.
    Missing,
    /// Opening delimiter without a closing one.
    Unclosed,
}

/// Split a raw file into its frontmatter block and markdown body.
///
/// The block is returned without delimiters; the body starts after the
/// closing delimiter line.
pub fn split(raw: &str) -> Result<(&str, &str), SplitError> {
    let trimmed = raw.trim_start();
    let Some(rest) = trimmed.strip_prefix(FRONTMATTER_DELIMITER) else {
        return Err(SplitError::Missing);
    };

    let Some(end) = rest.find("\n---") else {
        return Err(SplitError::Unclosed);
    };

    let block = rest[..end].trim();
    let body = rest[end + 4..].trim_start_matches('\n');
    Ok((block, body))
}

/// Typed frontmatter record.
///
/// Serialized field names match the frontmatter keys (camelCase for the
/// multi-word optional fields).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    pub date: PubDate,
    pub author: String,
    pub excerpt: String,
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub featured: bool,
    pub draft: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
}

impl Metadata {
    /// Validate an untyped frontmatter mapping and build the typed record.
    ///
    /// Required fields are checked in a fixed order (title, date, author,
    /// excerpt, tags) so the first violation is the one reported. The date
    /// must be a real `YYYY-MM-DD` calendar date and tags must be a list.
    pub fn from_yaml(raw: &Value) -> Result<Self, MetadataError> {
        let title = require_str(raw, "title")?;

        let date = require_str(raw, "date")?;
        let date = PubDate::parse(&date).ok_or(MetadataError::InvalidDate(date))?;

        let author = require_str(raw, "author")?;
        let excerpt = require_str(raw, "excerpt")?;
        let tags = require_tags(raw)?;

        Ok(Self {
            title,
            date,
            author,
            excerpt,
            tags,
            slug: optional_str(raw, "slug")?,
            category: optional_str(raw, "category")?,
            featured: optional_bool(raw, "featured")?,
            draft: optional_bool(raw, "draft")?,
            language: optional_str(raw, "language")?,
            reading_time: optional_number(raw, "readingTime")?,
            cover_image: optional_str(raw, "coverImage")?,
            seo_title: optional_str(raw, "seoTitle")?,
            seo_description: optional_str(raw, "seoDescription")?,
        })
    }
}

fn require_str(raw: &Value, field: &'static str) -> Result<String, MetadataError> {
    match raw.get(field) {
        None | Some(Value::Null) => Err(MetadataError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(MetadataError::TypeMismatch {
            field,
            expected: "a string",
        }),
    }
}

fn require_tags(raw: &Value) -> Result<Vec<String>, MetadataError> {
    match raw.get("tags") {
        None | Some(Value::Null) => Err(MetadataError::MissingField("tags")),
        Some(Value::Sequence(seq)) => seq
            .iter()
            .map(|item| match item.as_str() {
                Some(tag) => Ok(tag.to_owned()),
                None => Err(MetadataError::InvalidTags),
            })
            .collect(),
        Some(_) => Err(MetadataError::InvalidTags),
    }
}

fn optional_str(raw: &Value, field: &'static str) -> Result<Option<String>, MetadataError> {
    match raw.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(MetadataError::TypeMismatch {
            field,
            expected: "a string",
        }),
    }
}

fn optional_bool(raw: &Value, field: &'static str) -> Result<bool, MetadataError> {
    match raw.get(field) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(MetadataError::TypeMismatch {
            field,
            expected: "a boolean",
        }),
    }
}

fn optional_number(raw: &Value, field: &'static str) -> Result<Option<f64>, MetadataError> {
    match raw.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(_) => Err(MetadataError::TypeMismatch {
            field,
            expected: "a number",
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================
