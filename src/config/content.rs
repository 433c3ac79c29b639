//! `[content]` section configuration.
//!
//! Controls where content files live and which extension marks a document.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section in loam.toml - content discovery settings.
///
/// # Example
/// ```toml
/// [content]
/// root = "content"
/// extension = "mdx"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Root directory holding one subdirectory per content type
    /// (e.g. `content/blog`, `content/case-studies`).
    #[serde(default = "defaults::content::root")]
    #[educe(Default = defaults::content::root())]
    pub root: PathBuf,

    /// File extension of content documents, without the leading dot.
    #[serde(default = "defaults::content::extension")]
    #[educe(Default = defaults::content::extension())]
    pub extension: String,
}
