//! Front-matter extraction
//!
//! A post file starts with a `---` delimited YAML block followed by
//! free-form body content. This module only splits and parses the block
//! into untyped fields; the fixed schema check lives in [`super::schema`].

use indexmap::IndexMap;
use thiserror::Error;

/// Failure to extract the front-matter block from a file
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("no front-matter block found")]
    Missing,
    #[error("front-matter block is never closed")]
    Unterminated,
    #[error("invalid YAML in front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Raw front-matter fields, untyped and in declaration order
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    pub fields: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split a file's content into front-matter and body
    ///
    /// Returns `(front_matter, body)`. An empty block yields empty
    /// fields; schema validation then reports every required field as
    /// missing.
    pub fn parse(content: &str) -> Result<(Self, &str), FrontmatterError> {
        let content = content.trim_start_matches('\u{feff}');

        let rest = content
            .strip_prefix("---")
            .ok_or(FrontmatterError::Missing)?;
        // The opening delimiter must be a whole line
        let rest = match rest.strip_prefix('\r').unwrap_or(rest).strip_prefix('\n') {
            Some(r) => r,
            None if rest.is_empty() => rest,
            None => return Err(FrontmatterError::Missing),
        };

        // The closing delimiter may open the very next line
        let end = if rest.starts_with("---") {
            0
        } else {
            rest.find("\n---").ok_or(FrontmatterError::Unterminated)? + 1
        };
        let block = &rest[..end];
        let body = rest[end + 3..].trim_start_matches(['\r', '\n']);

        if block.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fields: IndexMap<String, serde_yaml::Value> = serde_yaml::from_str(block)?;
        Ok((FrontMatter { fields }, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let content = "---\ntitle: Hello\nslug: hello\npubDate: 2024-01-01\n---\n\nBody text.\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(
            fm.fields.get("title"),
            Some(&serde_yaml::Value::String("Hello".to_string()))
        );
        assert_eq!(fm.fields.len(), 3);
        assert_eq!(body, "Body text.\n");
    }

    #[test]
    fn test_parse_crlf() {
        let content = "---\r\ntitle: Hello\r\n---\r\nBody";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(fm.fields.contains_key("title"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_missing_block() {
        let err = FrontMatter::parse("Just a document.\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Missing));
    }

    #[test]
    fn test_unterminated_block() {
        let err = FrontMatter::parse("---\ntitle: Hello\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Unterminated));
    }

    #[test]
    fn test_empty_block() {
        let (fm, body) = FrontMatter::parse("---\n---\nBody").unwrap();
        assert!(fm.fields.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_empty_block_at_eof() {
        let (fm, body) = FrontMatter::parse("---\n---").unwrap();
        assert!(fm.fields.is_empty());
        assert_eq!(body, "");
    }

    #[test]
    fn test_empty_block_crlf() {
        let (fm, body) = FrontMatter::parse("---\r\n---\r\nBody").unwrap();
        assert!(fm.fields.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_whitespace_only_block() {
        let (fm, body) = FrontMatter::parse("---\n   \n---\nBody").unwrap();
        assert!(fm.fields.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_invalid_yaml() {
        let err = FrontMatter::parse("---\ntitle: [unclosed\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Yaml(_)));
    }

    #[test]
    fn test_field_order_preserved() {
        let content = "---\nslug: hello\ntitle: Hello\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        let keys: Vec<_> = fm.fields.keys().cloned().collect();
        assert_eq!(keys, vec!["slug", "title"]);
    }
}
