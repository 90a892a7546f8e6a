//! Content module - content items, front-matter and markup rendering

mod frontmatter;
mod item;
pub mod loader;
mod markdown;

pub use frontmatter::FrontMatter;
pub use item::{ContentItem, TagList};
pub use loader::{ContentAccessor, FsContentStore, StaticCorpus};
pub use markdown::{Component, MarkdownRenderer};
