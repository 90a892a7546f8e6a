//! Tag frequency index

use serde::Serialize;
use std::collections::HashMap;

use super::normalize;
use crate::content::ContentAccessor;
use crate::error::Result;

/// A canonical tag name and how many eligible items carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

/// Canonical tag name -> occurrence count, in no particular order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    counts: HashMap<String, usize>,
}

impl TagIndex {
    fn record(&mut self, name: String) {
        *self.counts.entry(name).or_insert(0) += 1;
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.counts.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Most used first, equal counts by name
    pub fn sorted_descending(&self) -> Vec<TagCount> {
        let mut sorted: Vec<TagCount> = self
            .counts
            .iter()
            .map(|(name, count)| TagCount {
                name: name.clone(),
                count: *count,
            })
            .collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        sorted
    }
}

/// Count the canonical tags of every eligible item in `category`
///
/// Fails only when the accessor fails. An item whose tag list is malformed is
/// reported and skipped; the rest of the category is still counted.
pub fn aggregate<A>(accessor: &A, category: &str) -> Result<TagIndex>
where
    A: ContentAccessor + ?Sized,
{
    let items = accessor.items(category)?;
    let mut index = TagIndex::default();
    let mut skipped = 0;

    for item in items.iter().filter(|item| item.is_eligible()) {
        let tags = match item.tags.strings(&item.source) {
            Ok(tags) => tags,
            Err(e) => {
                tracing::warn!("{}", e);
                skipped += 1;
                continue;
            }
        };

        for name in tags.iter().filter_map(|raw| normalize(raw)) {
            index.record(name);
        }
    }

    tracing::debug!(
        "Aggregated {} tags from {} items in '{}' ({} skipped)",
        index.len(),
        items.len(),
        category,
        skipped
    );

    Ok(index)
}
