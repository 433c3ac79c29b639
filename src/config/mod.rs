//! Site configuration management for `loam.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[content]` | Content root directory and document extension  |
//!
//! # Example
//!
//! ```toml
//! [content]
//! root = "content"
//! extension = "mdx"
//! ```

mod content;
pub mod defaults;
mod error;

pub use content::ContentConfig;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use error::ConfigError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing loam.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Content discovery settings
    #[serde(default)]
    pub content: ContentConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Directory holding one content type's documents.
    pub fn type_dir(&self, content_type: &str) -> PathBuf {
        self.content.root.join(content_type)
    }

    /// Update configuration with CLI arguments and normalize paths
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if let Some(content) = &cli.content {
            self.content.root = content.clone();
        }

        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let root = Self::normalize_path(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.content.root = Self::normalize_path(&root.join(&self.content.root));
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.content.extension.is_empty() {
            bail!(ConfigError::Validation(
                "[content.extension] must not be empty".into()
            ));
        }

        if self.content.extension.starts_with('.') {
            bail!(ConfigError::Validation(
                "[content.extension] must not include the leading dot".into()
            ));
        }

        Ok(())
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
