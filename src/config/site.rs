//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::theme::ThemeConfig;

/// Main site configuration
///
/// One immutable descriptor assembled at startup: redirect rules, the
/// enabled build plugins, the deploy adapter, the posts collection
/// location, and the theme tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,

    // Routing
    /// Literal path -> destination pairs, applied before any route lookup.
    /// Destinations may be site-relative paths or absolute URLs.
    pub redirects: IndexMap<String, String>,

    // Build
    pub plugins: Vec<String>,
    pub devtools: bool,
    pub adapter: Adapter,

    // Content
    pub collection: CollectionConfig,

    // Theme
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let mut redirects = IndexMap::new();
        redirects.insert("/".to_string(), "/about".to_string());

        Self {
            title: "inkpress".to_string(),
            url: "http://example.com".to_string(),

            redirects,

            plugins: vec![
                "tailwind".to_string(),
                "mdx".to_string(),
                "sitemap".to_string(),
            ],
            devtools: false,
            adapter: Adapter::Static,

            collection: CollectionConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve a request path through the redirect table
    ///
    /// Lookup is exact after trailing-slash normalization; the root path
    /// is left untouched.
    pub fn resolve_redirect(&self, path: &str) -> Option<&str> {
        let normalized = normalize_path(path);
        self.redirects.get(normalized).map(|s| s.as_str())
    }
}

/// Strip a trailing slash, except on the root path
fn normalize_path(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// Deployment-target adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adapter {
    /// Plain static output, no runtime
    Static,
    /// Node server runtime
    Node,
    /// Serverless/edge runtime
    Serverless,
}

/// Posts collection location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Base directory, relative to the site base dir
    pub base: String,
    /// Glob pattern selecting collection members, relative to `base`
    pub pattern: String,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            base: "content/posts".to_string(),
            pattern: "**/*.{md,mdx}".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.adapter, Adapter::Static);
        assert!(!config.devtools);
        assert_eq!(config.collection.base, "content/posts");
        assert_eq!(config.plugins, vec!["tailwind", "mdx", "sitemap"]);
    }

    #[test]
    fn test_root_redirects_to_about() {
        let config = SiteConfig::default();
        assert_eq!(config.resolve_redirect("/"), Some("/about"));
        assert_eq!(config.resolve_redirect("/posts"), None);
    }

    #[test]
    fn test_redirect_trailing_slash() {
        let mut config = SiteConfig::default();
        config
            .redirects
            .insert("/old".to_string(), "https://example.org/new".to_string());
        assert_eq!(
            config.resolve_redirect("/old/"),
            Some("https://example.org/new")
        );
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
devtools: true
adapter: node
redirects:
  /: /blog
  /feed: /rss.xml
collection:
  base: posts
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert!(config.devtools);
        assert_eq!(config.adapter, Adapter::Node);
        assert_eq!(config.resolve_redirect("/"), Some("/blog"));
        assert_eq!(config.resolve_redirect("/feed"), Some("/rss.xml"));
        assert_eq!(config.collection.base, "posts");
        // Untouched fields keep their defaults
        assert_eq!(config.collection.pattern, "**/*.{md,mdx}");
    }
}
