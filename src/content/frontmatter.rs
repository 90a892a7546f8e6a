//! Front-matter parsing

use chrono::{NaiveDate, NaiveDateTime};
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;

/// Front-matter data from a content file
///
/// The header is read as a plain mapping and each field is classified on its
/// own, so one badly typed field never discards its siblings. `tags` stays a
/// raw value; [`super::TagList`] classifies it later.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub tags: Option<Value>,
    pub draft: bool,
    /// Items are published unless stated otherwise
    pub published: bool,
    pub summary: Option<String>,
    pub layout: Option<String>,

    /// Additional custom fields
    pub extra: HashMap<String, Value>,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            date: None,
            tags: None,
            draft: false,
            published: true,
            summary: None,
            layout: None,
            extra: HashMap::new(),
        }
    }
}

impl FrontMatter {
    /// Split a document into its front-matter and body
    ///
    /// Documents without a recognizable header yield the default front-matter
    /// and the full text as body. A header that cannot be read at all is
    /// logged and the item is withheld as a draft.
    pub fn parse(content: &str) -> (Self, &str) {
        let content = content.trim_start();

        if let Some(rest) = content.strip_prefix("---") {
            return Self::parse_yaml(content, rest);
        }

        if let Some(rest) = content.strip_prefix(";;;") {
            return Self::parse_json(content, rest);
        }

        (FrontMatter::default(), content)
    }

    fn parse_yaml<'a>(content: &'a str, rest: &'a str) -> (Self, &'a str) {
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            return (FrontMatter::default(), content);
        };

        let header = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if header.trim().is_empty() {
            return (FrontMatter::default(), body);
        }

        // A leading `---` may just be a thematic break in the markup
        if !looks_like_yaml(header) {
            return (FrontMatter::default(), content);
        }

        match serde_yaml::from_str::<Mapping>(header) {
            Ok(map) => (Self::from_mapping(map), body),
            Err(e) => {
                tracing::warn!("Unreadable YAML front-matter, withholding item: {}", e);
                (Self::withheld(), body)
            }
        }
    }

    fn parse_json<'a>(content: &'a str, rest: &'a str) -> (Self, &'a str) {
        let Some(end_pos) = rest.find(";;;") else {
            return (FrontMatter::default(), content);
        };

        let header = &rest[..end_pos];
        let body = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);

        // `;;;` wraps the members of an object without its braces
        let header = format!("{{{}}}", header.trim());
        match serde_json::from_str::<Mapping>(&header) {
            Ok(map) => (Self::from_mapping(map), body),
            Err(e) => {
                tracing::warn!("Unreadable JSON front-matter, withholding item: {}", e);
                (Self::withheld(), body)
            }
        }
    }

    /// Front-matter for a header that could not be read
    fn withheld() -> Self {
        Self {
            draft: true,
            ..Default::default()
        }
    }

    /// Classify the known fields of a header, keeping the rest in `extra`
    ///
    /// An unreadable `draft` or `published` flag withholds the item.
    pub fn from_mapping(mut map: Mapping) -> Self {
        let mut fm = FrontMatter {
            title: take_text(&mut map, "title"),
            date: take_text(&mut map, "date"),
            tags: map.remove("tags"),
            summary: take_text(&mut map, "summary"),
            layout: take_text(&mut map, "layout"),
            ..Default::default()
        };
        fm.draft = take_flag(&mut map, "draft", false, true);
        fm.published = take_flag(&mut map, "published", true, false);

        fm.extra = map
            .into_iter()
            .filter_map(|(key, value)| match key {
                Value::String(key) => Some((key, value)),
                _ => None,
            })
            .collect();
        fm
    }

    /// Parse the date string into a calendar date
    pub fn parse_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date_string)
    }
}

/// A textual field; numbers are accepted as their literal text
fn take_text(map: &mut Mapping, key: &str) -> Option<String> {
    match map.remove(key)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => None,
        other => {
            tracing::warn!("Ignoring front-matter field '{}': not text ({:?})", key, other);
            None
        }
    }
}

/// A boolean flag
///
/// Absent or null gives `default`. YAML 1.1 spellings (`yes`, `off`, quoted
/// `"true"`) are read as booleans; anything else gives `unreadable`.
fn take_flag(map: &mut Mapping, key: &str, default: bool, unreadable: bool) -> bool {
    let value = match map.remove(key) {
        None | Some(Value::Null) => return default,
        Some(value) => value,
    };

    let flag = match &value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "on" => Some(true),
            "false" | "no" | "n" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    };

    flag.unwrap_or_else(|| {
        tracing::warn!(
            "Front-matter field '{}' is not a boolean ({:?}), using {}",
            key,
            value,
            unreadable
        );
        unreadable
    })
}

/// At least one line must look like `key: value` with a plain identifier key
fn looks_like_yaml(header: &str) -> bool {
    header.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            return false;
        };

        let plain_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !matches!(key, "http" | "https" | "ftp");

        plain_key && (value.is_empty() || value.starts_with(' '))
    })
}

/// Parse a date string in the formats blog front-matter tends to use
fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2024-01-15
tags:
  - Rust
  - DevOps
draft: true
layout: PostSimple
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert!(fm.draft);
        assert!(fm.published);
        assert_eq!(fm.layout.as_deref(), Some("PostSimple"));
        let tags = fm.tags.unwrap();
        assert_eq!(tags.as_sequence().map(|s| s.len()), Some(2));
        assert!(body.starts_with("This is the content."));
    }

    #[test]
    fn test_parse_json_frontmatter() {
        let content = r#";;;
"title": "Test Post",
"tags": ["a", "b"],
"published": false
;;;
This is content.
"#;

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, Some("Test Post".to_string()));
        assert!(!fm.published);
        assert!(fm.tags.unwrap().is_sequence());
        assert!(body.contains("This is content."));
    }

    #[test]
    fn test_odd_tag_shape_does_not_break_header() {
        let content = "---\ntitle: Odd\ntags: 42\n---\nbody\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Odd"));
        assert!(fm.tags.unwrap().is_number());
        assert_eq!(body, "body\n");
    }

    #[test]
    fn test_yaml_11_draft_flag() {
        let (fm, _) = FrontMatter::parse("---\ntitle: Secret\ntags: [private]\ndraft: yes\n---\n");
        assert!(fm.draft);
        assert_eq!(fm.title.as_deref(), Some("Secret"));
    }

    #[test]
    fn test_quoted_flag_keeps_sibling_tags() {
        let content = "---\ntags: [rust, go]\npublished: \"true\"\n---\nbody\n";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.published);
        assert!(!fm.draft);
        assert_eq!(fm.tags.unwrap().as_sequence().map(|s| s.len()), Some(2));
        assert_eq!(body, "body\n");
    }

    #[test]
    fn test_unreadable_flags_withhold_item() {
        let (fm, _) = FrontMatter::parse("---\ndraft: maybe\ntags: [a]\n---\n");
        assert!(fm.draft);
        assert!(fm.tags.is_some());

        let (fm, _) = FrontMatter::parse("---\npublished: [1]\n---\n");
        assert!(!fm.published);

        let (fm, _) = FrontMatter::parse(";;;\n\"draft\": 3\n;;;\n");
        assert!(fm.draft);
    }

    #[test]
    fn test_mistyped_title_keeps_other_fields() {
        let (fm, _) = FrontMatter::parse("---\ntitle: [a, b]\ndate: 2024-01-15\ntags: go\n---\n");
        assert_eq!(fm.title, None);
        assert_eq!(fm.parse_date(), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert!(fm.tags.unwrap().is_string());
    }

    #[test]
    fn test_unreadable_header_is_withheld() {
        let (fm, body) = FrontMatter::parse("---\ntitle: [unclosed\ntags: [go]\n---\nbody\n");
        assert!(fm.draft);
        assert!(fm.tags.is_none());
        assert_eq!(body, "body\n");
    }

    #[test]
    fn test_unknown_fields_kept_as_extra() {
        let (fm, _) = FrontMatter::parse("---\ntitle: T\nimages: [a.png]\n---\n");
        assert!(fm.extra.contains_key("images"));
        assert!(!fm.extra.contains_key("title"));
    }

    #[test]
    fn test_parse_dates() {
        let fm = FrontMatter {
            date: Some("2024-01-15 10:30:00".to_string()),
            ..Default::default()
        };
        assert_eq!(fm.parse_date(), NaiveDate::from_ymd_opt(2024, 1, 15));

        let fm = FrontMatter {
            date: Some("2023-05-30T08:00:00+02:00".to_string()),
            ..Default::default()
        };
        assert_eq!(fm.parse_date(), NaiveDate::from_ymd_opt(2023, 5, 30));

        let fm = FrontMatter {
            date: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert_eq!(fm.parse_date(), None);
    }

    #[test]
    fn test_markdown_separator_not_yaml() {
        let content = r#"
---

Check out https://example.com/path and http://test.com

---
More content.
"#;

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert!(body.contains("https://example.com"));
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, body) = FrontMatter::parse("# Just a heading\n");
        assert!(fm.tags.is_none());
        assert_eq!(body, "# Just a heading\n");
    }
}
