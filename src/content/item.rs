//! Content items and their tag lists

use chrono::NaiveDate;
use serde_yaml::Value;

use super::FrontMatter;
use crate::error::{Error, Result};
use crate::layout::Layout;

/// Raw tags of a content item as found in its front-matter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagList {
    Valid(Vec<String>),
    Malformed { reason: String },
}

impl Default for TagList {
    fn default() -> Self {
        TagList::Valid(Vec::new())
    }
}

impl TagList {
    /// Classify a front-matter `tags` value
    ///
    /// A single string is a one-element list and a missing value is an empty
    /// list, anything else that is not a list of strings is malformed.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => TagList::Valid(Vec::new()),
            Some(Value::String(tag)) => TagList::Valid(vec![tag.clone()]),
            Some(Value::Sequence(seq)) => {
                let mut tags = Vec::with_capacity(seq.len());
                for (i, entry) in seq.iter().enumerate() {
                    match entry {
                        Value::String(tag) => tags.push(tag.clone()),
                        other => {
                            return TagList::Malformed {
                                reason: format!("entry {} is {}", i, describe(other)),
                            }
                        }
                    }
                }
                TagList::Valid(tags)
            }
            Some(other) => TagList::Malformed {
                reason: format!(
                    "expected a string or a list of strings, found {}",
                    describe(other)
                ),
            },
        }
    }

    /// The raw tag strings, or [`Error::MalformedTagList`] naming `item`
    pub fn strings(&self, item: &str) -> Result<&[String]> {
        match self {
            TagList::Valid(tags) => Ok(tags),
            TagList::Malformed { reason } => Err(Error::MalformedTagList {
                item: item.to_string(),
                reason: reason.clone(),
            }),
        }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// One unit of publishable content, such as a blog post
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    /// Path below the category directory, without extension
    pub slug: String,
    /// Source file path relative to the content directory
    pub source: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub tags: TagList,
    pub draft: bool,
    pub published: bool,
    pub summary: Option<String>,
    pub layout: Layout,
    /// Raw markup body
    pub body: String,
}

impl ContentItem {
    /// Create a published item with no tags
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            title: slug.clone(),
            source: slug.clone(),
            slug,
            date: None,
            tags: TagList::default(),
            draft: false,
            published: true,
            summary: None,
            layout: Layout::default(),
            body: String::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = TagList::Valid(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn as_draft(mut self) -> Self {
        self.draft = true;
        self
    }

    /// Build an item from a file's text
    pub fn from_source(slug: &str, source: &str, text: &str) -> Self {
        let (fm, body) = FrontMatter::parse(text);

        let layout = match fm.layout.as_deref() {
            Some(name) => name.parse().unwrap_or_else(|e| {
                tracing::warn!("{}: {}, using {}", source, e, Layout::default());
                Layout::default()
            }),
            None => Layout::default(),
        };

        Self {
            slug: slug.to_string(),
            source: source.to_string(),
            title: fm.title.clone().unwrap_or_else(|| slug.to_string()),
            date: fm.parse_date(),
            tags: TagList::from_value(fm.tags.as_ref()),
            draft: fm.draft,
            published: fm.published,
            summary: fm.summary,
            layout,
            body: body.to_string(),
        }
    }

    /// Whether the item may appear in public listings
    pub fn is_eligible(&self) -> bool {
        !self.draft && self.published
    }
}
