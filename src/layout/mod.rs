//! Page layouts
//!
//! Every layout a content item may request is a variant here. Names coming
//! from front-matter are parsed once, at load time, so rendering never has to
//! deal with an unknown layout.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    #[default]
    PostLayout,
    PostSimple,
    PostBanner,
    ListLayout,
    AuthorLayout,
}

impl Layout {
    pub const ALL: [Layout; 5] = [
        Layout::PostLayout,
        Layout::PostSimple,
        Layout::PostBanner,
        Layout::ListLayout,
        Layout::AuthorLayout,
    ];

    /// Name as written in front-matter
    pub fn name(&self) -> &'static str {
        match self {
            Layout::PostLayout => "PostLayout",
            Layout::PostSimple => "PostSimple",
            Layout::PostBanner => "PostBanner",
            Layout::ListLayout => "ListLayout",
            Layout::AuthorLayout => "AuthorLayout",
        }
    }

    /// Template used to render an item with this layout
    pub fn template(&self) -> &'static str {
        match self {
            Layout::PostLayout => "layouts/post.html",
            Layout::PostSimple => "layouts/post_simple.html",
            Layout::PostBanner => "layouts/post_banner.html",
            Layout::ListLayout => "layouts/list.html",
            Layout::AuthorLayout => "layouts/author.html",
        }
    }
}

impl FromStr for Layout {
    type Err = Error;

    /// Accepts `PostSimple`, `post-simple`, `post_simple` and `postsimple`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        Layout::ALL
            .into_iter()
            .find(|layout| layout.name().to_lowercase() == key)
            .ok_or_else(|| Error::UnknownLayout(s.to_string()))
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Layout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout_names() {
        assert_eq!("PostSimple".parse::<Layout>().unwrap(), Layout::PostSimple);
        assert_eq!("post-banner".parse::<Layout>().unwrap(), Layout::PostBanner);
        assert_eq!("list_layout".parse::<Layout>().unwrap(), Layout::ListLayout);
        assert_eq!(" AuthorLayout ".parse::<Layout>().unwrap(), Layout::AuthorLayout);
    }

    #[test]
    fn test_unknown_layout_is_rejected() {
        let err = "../../etc/passwd".parse::<Layout>().unwrap_err();
        assert!(matches!(err, Error::UnknownLayout(name) if name == "../../etc/passwd"));
    }

    #[test]
    fn test_round_trip_names() {
        for layout in Layout::ALL {
            assert_eq!(layout.name().parse::<Layout>().unwrap(), layout);
        }
    }

    #[test]
    fn test_templates_are_distinct() {
        let mut templates: Vec<_> = Layout::ALL.iter().map(|l| l.template()).collect();
        templates.sort();
        templates.dedup();
        assert_eq!(templates.len(), Layout::ALL.len());
    }
}
