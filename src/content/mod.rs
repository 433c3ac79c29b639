//! The content ingestion pipeline.
//!
//! Turns a directory of frontmatter-plus-markdown files into typed,
//! render-ready documents and answers queries over them.
//!
//! ```text
//! walker ──► document parser ──► collection assembler ──► queries
//!                │
//!                ├─ frontmatter (split + validate)
//!                └─ markdown (render)
//! ```
//!
//! Entry points: [`parse_document`] for one file (failures propagate,
//! typed and naming the file), [`collect_documents`] for a whole content
//! type (failures contained per file), and the helpers in [`query`] for
//! slug lookup, featured/tag subsets and aggregate counts.

pub mod collection;
pub mod document;
pub mod error;
pub mod frontmatter;
pub mod markdown;
pub mod query;
pub mod walker;

pub use collection::collect_documents;
pub use document::{ContentDocument, parse_document};
pub use query::{ContentStats, content_stats, featured, find_by_slug, with_tags};
