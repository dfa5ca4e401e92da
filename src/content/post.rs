//! Post model

use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

use super::schema::PostMeta;

/// A validated blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Collection identifier (relative source path, extension stripped)
    pub id: String,

    /// Post title
    pub title: String,

    /// URL-safe name; uniqueness across posts is not checked here
    pub slug: String,

    /// Publication date
    pub pub_date: NaiveDate,

    /// Unvalidated document body after the front-matter block
    pub body: String,

    /// Source file path (relative to the collection base)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,
}

impl Post {
    /// Assemble a post from validated metadata and its body
    pub fn from_meta(
        id: String,
        meta: PostMeta,
        body: &str,
        source: String,
        full_source: PathBuf,
    ) -> Self {
        Self {
            id,
            title: meta.title,
            slug: meta.slug,
            pub_date: meta.pub_date,
            body: body.to_string(),
            source,
            full_source,
        }
    }
}
