//! Content accessors - enumerate the items of a content category

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use super::ContentItem;
use crate::error::{Error, Result};

/// Yields the content items of a category
///
/// Implementations either return every item of the category or fail with
/// [`Error::CorpusUnavailable`]; they never return a partial listing.
pub trait ContentAccessor {
    fn items(&self, category: &str) -> Result<Vec<ContentItem>>;
}

/// Reads `<root>/<category>/**/*.{md,mdx,markdown}` from disk
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn category_dir(&self, category: &str) -> Result<PathBuf> {
        let relative = Path::new(category);
        let plain = !category.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        if !plain {
            return Err(unavailable(
                category,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("invalid category name {:?}", category),
                ),
            ));
        }

        let dir = self.root.join(relative);
        if !dir.is_dir() {
            return Err(unavailable(
                category,
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{:?} is not a directory", dir),
                ),
            ));
        }

        Ok(dir)
    }
}

impl ContentAccessor for FsContentStore {
    fn items(&self, category: &str) -> Result<Vec<ContentItem>> {
        let dir = self.category_dir(category)?;
        let mut items = Vec::new();

        for entry in WalkDir::new(&dir).follow_links(true) {
            let entry = entry.map_err(|e| unavailable(category, e.into()))?;
            let path = entry.path();
            if !entry.file_type().is_file() || !is_content_file(path) {
                continue;
            }

            let text = fs::read_to_string(path).map_err(|e| unavailable(category, e))?;
            let slug = slug_for(&dir, path);
            let source = path
                .strip_prefix(&self.root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");

            items.push(ContentItem::from_source(&slug, &source, &text));
        }

        items.sort_by(|a, b| a.source.cmp(&b.source));
        let items = drop_duplicate_slugs(items);
        tracing::debug!("Loaded {} items from {:?}", items.len(), dir);

        Ok(items)
    }
}

/// Items held in memory, keyed by category
#[derive(Debug, Clone, Default)]
pub struct StaticCorpus {
    categories: HashMap<String, Vec<ContentItem>>,
}

impl StaticCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: &str, items: Vec<ContentItem>) -> Self {
        self.categories.insert(category.to_string(), items);
        self
    }
}

impl ContentAccessor for StaticCorpus {
    fn items(&self, category: &str) -> Result<Vec<ContentItem>> {
        self.categories.get(category).cloned().ok_or_else(|| {
            unavailable(
                category,
                io::Error::new(io::ErrorKind::NotFound, "no such category"),
            )
        })
    }
}

fn unavailable(category: &str, source: io::Error) -> Error {
    Error::CorpusUnavailable {
        category: category.to_string(),
        source,
    }
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e, "md" | "mdx" | "markdown"))
        .unwrap_or(false)
}

/// Keep the first item per slug; `a.md` and `a.mdx` would share a page
fn drop_duplicate_slugs(items: Vec<ContentItem>) -> Vec<ContentItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            let fresh = seen.insert(item.slug.clone());
            if !fresh {
                tracing::warn!(
                    "{} has the same slug '{}' as an earlier file, skipped",
                    item.source,
                    item.slug
                );
            }
            fresh
        })
        .collect()
}

/// `dir/nested/post.mdx` -> `nested/post`
fn slug_for(dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(dir).unwrap_or(path);
    relative
        .with_extension("")
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect::<Vec<_>>()
        .join("/")
}
