//! Loam - a markdown content ingestion pipeline.

mod cli;
mod config;
mod content;
mod logger;
mod utils;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use content::{
    ContentDocument, collect_documents, content_stats, featured, find_by_slug, parse_document,
    with_tags,
};
use serde::Serialize;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::List { content_type } => {
            print_summaries(&collect_documents(config, content_type))
        }
        Commands::Parse { path } => print_json(&parse_document(path)?),
        Commands::Show { content_type, slug } => match find_by_slug(config, content_type, slug) {
            Some(document) => print_json(&document),
            None => bail!("no document with slug `{slug}` under `{content_type}`"),
        },
        Commands::Featured {
            content_type,
            limit,
        } => print_summaries(&featured(config, content_type, *limit)),
        Commands::Tags {
            content_type,
            tags,
            limit,
        } => print_summaries(&with_tags(config, content_type, tags, *limit)),
        Commands::Stats { content_type } => print_json(&content_stats(config, content_type)),
    }
}

/// Load configuration, falling back to defaults when no config file exists.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Listing view of a document: everything but the rendered body.
#[derive(Serialize)]
struct DocumentSummary<'a> {
    slug: &'a str,
    title: &'a str,
    date: String,
    author: &'a str,
    excerpt: &'a str,
    tags: &'a [String],
    featured: bool,
}

impl<'a> From<&'a ContentDocument> for DocumentSummary<'a> {
    fn from(document: &'a ContentDocument) -> Self {
        Self {
            slug: &document.slug,
            title: &document.meta.title,
            date: document.meta.date.to_string(),
            author: &document.meta.author,
            excerpt: &document.meta.excerpt,
            tags: &document.meta.tags,
            featured: document.meta.featured,
        }
    }
}

fn print_summaries(documents: &[ContentDocument]) -> Result<()> {
    let summaries: Vec<DocumentSummary> = documents.iter().map(Into::into).collect();
    print_json(&summaries)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
