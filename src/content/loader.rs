//! Collection loader - scans the content directory and validates entries

use anyhow::Result;
use glob::Pattern;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::frontmatter::{FrontMatter, FrontmatterError};
use super::schema::{self, SchemaError};
use super::Post;
use crate::Site;

/// `*` must not cross directory separators; `**` still does
const MATCH_OPTIONS: glob::MatchOptions = glob::MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Why a matched file produced no post
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Frontmatter(#[from] FrontmatterError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("duplicate entry id {0:?}, already taken by {1}")]
    DuplicateId(String, String),
}

/// A per-entry validation failure
#[derive(Debug)]
pub struct EntryFailure {
    pub source: PathBuf,
    pub error: EntryError,
}

/// The validated posts collection
///
/// Valid entries and per-entry failures are kept side by side; whether a
/// failure blocks the whole run is the caller's policy, not the loader's.
#[derive(Debug, Default)]
pub struct Collection {
    entries: IndexMap<String, Post>,
    failures: Vec<EntryFailure>,
}

impl Collection {
    /// Number of validated entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its identifier
    pub fn get(&self, id: &str) -> Option<&Post> {
        self.entries.get(id)
    }

    /// Iterate entries in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Post)> {
        self.entries.iter().map(|(id, post)| (id.as_str(), post))
    }

    /// Per-entry validation failures
    pub fn failures(&self) -> &[EntryFailure] {
        &self.failures
    }

    /// Posts sorted by publication date, newest first
    pub fn posts_by_date(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.entries.values().collect();
        posts.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then_with(|| a.id.cmp(&b.id)));
        posts
    }

    /// Resolve an entry-id collision
    ///
    /// The entry whose source path sorts first keeps the id; the other
    /// is recorded as a failure.
    fn reject_duplicate(&mut self, post: Post) {
        let rejected = match self.entries.get(&post.id) {
            Some(existing) if existing.source <= post.source => post,
            Some(_) => match self.entries.insert(post.id.clone(), post) {
                Some(displaced) => displaced,
                None => return,
            },
            None => {
                self.entries.insert(post.id.clone(), post);
                return;
            }
        };
        let winner = self
            .entries
            .get(&rejected.id)
            .map(|p| p.source.clone())
            .unwrap_or_default();
        tracing::warn!(
            "Entry id {:?} already taken by {}, rejecting {}",
            rejected.id,
            winner,
            rejected.source
        );
        self.failures.push(EntryFailure {
            source: rejected.full_source,
            error: EntryError::DuplicateId(rejected.id, winner),
        });
    }

    /// Treat any validation failure as fatal
    pub fn into_strict(self) -> Result<IndexMap<String, Post>> {
        if self.failures.is_empty() {
            return Ok(self.entries);
        }
        let details: Vec<String> = self
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.source.display(), f.error))
            .collect();
        anyhow::bail!(
            "{} collection entr{} failed validation:\n  {}",
            self.failures.len(),
            if self.failures.len() == 1 { "y" } else { "ies" },
            details.join("\n  ")
        )
    }
}

/// Loads the posts collection from the content directory
pub struct CollectionLoader<'a> {
    site: &'a Site,
    patterns: Vec<Pattern>,
}

impl<'a> CollectionLoader<'a> {
    /// Create a loader with the site's collection pattern compiled
    pub fn new(site: &'a Site) -> Result<Self> {
        let mut patterns = Vec::new();
        for raw in expand_braces(&site.config.collection.pattern) {
            patterns.push(Pattern::new(&raw)?);
            // A leading `**/` also covers files directly under the base
            if let Some(rest) = raw.strip_prefix("**/") {
                patterns.push(Pattern::new(rest)?);
            }
        }
        Ok(Self { site, patterns })
    }

    /// Scan the content directory and validate every matched file
    ///
    /// Entries come back keyed by identifier and sorted, so the result
    /// does not depend on filesystem iteration order.
    pub fn load(&self) -> Result<Collection> {
        let base = &self.site.content_dir;
        if !base.exists() {
            tracing::debug!("Content directory {:?} does not exist", base);
            return Ok(Collection::default());
        }

        let mut collection = Collection::default();
        let mut seen_slugs: HashMap<String, String> = HashMap::new();

        for entry in WalkDir::new(base)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_collection_file(path) {
                continue;
            }
            let rel = path.strip_prefix(base).unwrap_or(path);
            if !self
                .patterns
                .iter()
                .any(|p| p.matches_path_with(rel, MATCH_OPTIONS))
            {
                continue;
            }

            match self.load_entry(path, rel) {
                Ok(post) => {
                    // Two sources can share a stem (a.md and a.mdx); the
                    // lexicographically first source keeps the id so the
                    // outcome does not depend on walk order
                    if collection.entries.contains_key(&post.id) {
                        collection.reject_duplicate(post);
                        continue;
                    }

                    // Slug uniqueness is not part of the schema; at most
                    // surface collisions for the routing layer to decide on
                    if let Some(prev) = seen_slugs.insert(post.slug.clone(), post.id.clone()) {
                        tracing::warn!(
                            "Slug {:?} declared by both {} and {}",
                            post.slug,
                            prev,
                            post.id
                        );
                    }
                    collection.entries.insert(post.id.clone(), post);
                }
                Err(error) => {
                    tracing::warn!("Skipping {:?}: {}", path, error);
                    collection.failures.push(EntryFailure {
                        source: path.to_path_buf(),
                        error,
                    });
                }
            }
        }

        collection.entries.sort_keys();
        tracing::info!(
            "Loaded {} post(s), {} failure(s)",
            collection.entries.len(),
            collection.failures.len()
        );
        Ok(collection)
    }

    /// Load and validate a single entry
    fn load_entry(&self, path: &Path, rel: &Path) -> Result<Post, EntryError> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;
        let meta = schema::validate(&fm.fields)?;

        let source = rel.to_string_lossy().replace('\\', "/");
        Ok(Post::from_meta(
            entry_id(rel),
            meta,
            body,
            source,
            path.to_path_buf(),
        ))
    }
}

/// Check if a file carries one of the two collection extensions
fn is_collection_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "mdx")
        .unwrap_or(false)
}

/// Derive an entry identifier from the relative source path
fn entry_id(rel: &Path) -> String {
    rel.with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Expand `{a,b}` alternates into plain glob patterns
fn expand_braces(pattern: &str) -> Vec<String> {
    if let (Some(open), Some(close)) = (pattern.find('{'), pattern.find('}')) {
        if open < close {
            let prefix = &pattern[..open];
            let suffix = &pattern[close + 1..];
            return pattern[open + 1..close]
                .split(',')
                .flat_map(|alt| expand_braces(&format!("{}{}{}", prefix, alt, suffix)))
                .collect();
        }
    }
    vec![pattern.to_string()]
}
