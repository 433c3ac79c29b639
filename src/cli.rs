//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap. Each subcommand
//! maps to one pipeline operation; output shaping stays in `main`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Loam content pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: loam.toml)
    #[arg(short = 'C', long, default_value = "loam.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the published documents of a content type, newest first
    List {
        /// Content type (subdirectory of the content root)
        content_type: String,
    },

    /// Parse a single content file and print the full document
    Parse {
        /// Path to the content file
        path: PathBuf,
    },

    /// Look up one document by slug
    Show {
        /// Content type (subdirectory of the content root)
        content_type: String,

        /// Document slug
        slug: String,
    },

    /// List featured documents, newest first
    Featured {
        /// Content type (subdirectory of the content root)
        content_type: String,

        /// Maximum number of documents to return
        #[arg(short = 'n', long, default_value_t = 3)]
        limit: usize,
    },

    /// List documents sharing at least one of the given tags
    Tags {
        /// Content type (subdirectory of the content root)
        content_type: String,

        /// Comma-separated tags to match against
        #[arg(value_delimiter = ',', required = true)]
        tags: Vec<String>,

        /// Maximum number of documents to return
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Print aggregate counts for a content type
    Stats {
        /// Content type (subdirectory of the content root)
        content_type: String,
    },
}
