//! Content module - the posts collection and its validation

mod frontmatter;
pub mod loader;
mod post;
pub mod schema;

pub use frontmatter::{FrontMatter, FrontmatterError};
pub use loader::{Collection, CollectionLoader, EntryError, EntryFailure};
pub use post::Post;
pub use schema::{FieldError, FieldErrorKind, PostMeta, SchemaError};
