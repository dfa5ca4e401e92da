//! The fixed posts schema
//!
//! Every collection entry must declare `title` (non-empty string),
//! `slug` (string) and `pubDate` (coercible to a calendar date). The
//! check is structural: untyped front-matter fields in, a typed
//! [`PostMeta`] out, or a [`SchemaError`] carrying one reason per
//! offending field.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde_yaml::Value;
use thiserror::Error;

/// A single violated field constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{field}` {kind}")]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

/// The constraint a field violated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error("is required but missing")]
    Missing,
    #[error("must be a string")]
    NotAString,
    #[error("must not be empty")]
    Empty,
    #[error("has no recognizable date: {0:?}")]
    InvalidDate(String),
}

/// Front-matter does not satisfy the posts schema
#[derive(Debug, Error)]
#[error("does not match the posts schema: {}", describe(.errors))]
pub struct SchemaError {
    pub errors: Vec<FieldError>,
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validated post metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMeta {
    pub title: String,
    pub slug: String,
    pub pub_date: NaiveDate,
}

/// Validate raw front-matter fields against the posts schema
///
/// All fields are checked before returning, so one bad file reports
/// every problem at once.
pub fn validate(fields: &IndexMap<String, Value>) -> Result<PostMeta, SchemaError> {
    let mut errors = Vec::new();

    let title = string_field(fields, "title", &mut errors).and_then(|s| {
        if s.trim().is_empty() {
            errors.push(FieldError {
                field: "title",
                kind: FieldErrorKind::Empty,
            });
            None
        } else {
            Some(s)
        }
    });

    let slug = string_field(fields, "slug", &mut errors);
    let pub_date = date_field(fields, "pubDate", &mut errors);

    match (title, slug, pub_date) {
        (Some(title), Some(slug), Some(pub_date)) => Ok(PostMeta {
            title,
            slug,
            pub_date,
        }),
        _ => Err(SchemaError { errors }),
    }
}

fn string_field(
    fields: &IndexMap<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match fields.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError {
                field,
                kind: FieldErrorKind::NotAString,
            });
            None
        }
        None => {
            errors.push(FieldError {
                field,
                kind: FieldErrorKind::Missing,
            });
            None
        }
    }
}

fn date_field(
    fields: &IndexMap<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    let value = match fields.get(field) {
        Some(v) => v,
        None => {
            errors.push(FieldError {
                field,
                kind: FieldErrorKind::Missing,
            });
            return None;
        }
    };

    let raw = match value {
        Value::String(s) => s.clone(),
        // YAML scalars that are not strings (numbers, booleans) are
        // reported with their serialized form
        other => serde_yaml::to_string(other)
            .unwrap_or_default()
            .trim()
            .to_string(),
    };

    match coerce_date(&raw) {
        Some(date) => Some(date),
        None => {
            errors.push(FieldError {
                field,
                kind: FieldErrorKind::InvalidDate(raw),
            });
            None
        }
    }
}

/// Coerce a date-like string into a calendar date
pub fn coerce_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%b %d %Y", "%B %d, %Y"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> IndexMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    #[test]
    fn test_valid_frontmatter() {
        let meta = validate(&fields(&[
            ("title", "Hello"),
            ("slug", "hello"),
            ("pubDate", "2024-01-01"),
        ]))
        .unwrap();
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.slug, "hello");
        assert_eq!(meta.pub_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_missing_slug() {
        let err = validate(&fields(&[("title", "Hello"), ("pubDate", "2024-01-01")])).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "slug");
        assert_eq!(err.errors[0].kind, FieldErrorKind::Missing);
    }

    #[test]
    fn test_all_fields_missing() {
        let err = validate(&IndexMap::new()).unwrap_err();
        let fields: Vec<_> = err.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "slug", "pubDate"]);
    }

    #[test]
    fn test_empty_title() {
        let err = validate(&fields(&[
            ("title", "  "),
            ("slug", "x"),
            ("pubDate", "2024-01-01"),
        ]))
        .unwrap_err();
        assert_eq!(err.errors[0].field, "title");
        assert_eq!(err.errors[0].kind, FieldErrorKind::Empty);
    }

    #[test]
    fn test_unparseable_date() {
        let err = validate(&fields(&[
            ("title", "Hello"),
            ("slug", "hello"),
            ("pubDate", "next tuesday"),
        ]))
        .unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(
            err.errors[0].kind,
            FieldErrorKind::InvalidDate("next tuesday".to_string())
        );
    }

    #[test]
    fn test_non_string_title() {
        let mut f = fields(&[("slug", "x"), ("pubDate", "2024-01-01")]);
        f.insert("title".to_string(), Value::Number(42.into()));
        let err = validate(&f).unwrap_err();
        assert_eq!(err.errors[0].field, "title");
        assert_eq!(err.errors[0].kind, FieldErrorKind::NotAString);
    }

    #[test]
    fn test_error_lists_every_field() {
        let err = validate(&fields(&[("pubDate", "not a date")])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("`title` is required"));
        assert!(message.contains("`slug` is required"));
        assert!(message.contains("not a date"));
    }

    #[test]
    fn test_coerce_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        for s in [
            "2024-03-09",
            "2024/03/09",
            "2024-03-09 10:30:00",
            "2024-03-09T10:30:00",
            "2024-03-09T10:30:00+02:00",
            "Mar 09 2024",
            "March 09, 2024",
        ] {
            assert_eq!(coerce_date(s), Some(expected), "format: {}", s);
        }
        assert_eq!(coerce_date("yesterday"), None);
        assert_eq!(coerce_date("2024-13-40"), None);
    }
}
