//! inkpress: a content-collection toolkit for Markdown/MDX blogs
//!
//! This crate loads a directory of frontmatter-bearing post files,
//! validates each entry against a fixed schema (title, slug, pubDate),
//! and exposes the validated collection together with the site's build
//! configuration (redirects, plugins, deploy adapter, theme tokens).
//! Rendering, routing and deployment belong to external tooling.

pub mod commands;
pub mod config;
pub mod content;

use anyhow::Result;
use std::path::Path;

/// The main site handle
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding the posts collection
    pub content_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site handle from a base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.collection.base);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Load and validate the posts collection
    pub fn load_collection(&self) -> Result<content::Collection> {
        let loader = content::CollectionLoader::new(self)?;
        loader.load()
    }

    /// Resolve a request path through the redirect table
    pub fn resolve_redirect(&self, path: &str) -> Option<&str> {
        self.config.resolve_redirect(path)
    }
}
