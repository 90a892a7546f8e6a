//! Link list pages (presentations, slides) configured in `_config.yml`

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entry of a link list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub title: String,
    /// Entries without a URL are listed as upcoming
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl LinkEntry {
    fn new(title: &str, url: Option<&str>, note: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            url: url.map(str::to_string),
            note: note.map(str::to_string),
        }
    }
}

/// A page listing links under a heading
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkPage {
    pub title: String,
    pub subtitle: String,
    pub links: Vec<LinkEntry>,
}

/// Link pages keyed by the directory they are written to
pub fn default_link_pages() -> IndexMap<String, LinkPage> {
    IndexMap::from([
        (
            "presentations".to_string(),
            LinkPage {
                title: "Presentations".to_string(),
                subtitle: "Some of my presentations and talks".to_string(),
                links: vec![
                    LinkEntry::new("Clean Code", None, Some("Coming soon...")),
                    LinkEntry::new(
                        "Regular Expressions for data scientists",
                        None,
                        Some("Coming soon..."),
                    ),
                ],
            },
        ),
        (
            "slides".to_string(),
            LinkPage {
                title: "Slides".to_string(),
                subtitle: "Here are some useful talks and slides to help you learn and review with ease"
                    .to_string(),
                links: vec![
                    LinkEntry::new(
                        "My directory",
                        Some("https://directory.kiarashs.ir/"),
                        Some("Awesome links and files"),
                    ),
                    LinkEntry::new("AI in Medicine", Some("https://go.kiarashs.ir/ai-med"), None),
                    LinkEntry::new(
                        "Regular Expression (regex or regexp)",
                        Some("https://go.kiarashs.ir/regex"),
                        None,
                    ),
                    LinkEntry::new("Clean Code", Some("https://go.kiarashs.ir/cc"), None),
                ],
            },
        ),
    ])
}
