//! Items behind a per-tag listing page

use std::cmp::Ordering;

use super::{normalize, slugify};
use crate::content::{ContentAccessor, ContentItem};
use crate::error::Result;

/// Eligible items of `category` carrying a tag whose slug is `slug`
///
/// Newest first; undated items go last, ordered by slug. Items with a
/// malformed tag list never match.
pub fn items_for_slug<A>(accessor: &A, category: &str, slug: &str) -> Result<Vec<ContentItem>>
where
    A: ContentAccessor + ?Sized,
{
    let mut items: Vec<ContentItem> = accessor
        .items(category)?
        .into_iter()
        .filter(|item| item.is_eligible() && has_tag_slug(item, slug))
        .collect();

    items.sort_by(newest_first);
    Ok(items)
}

fn has_tag_slug(item: &ContentItem, slug: &str) -> bool {
    let Ok(tags) = item.tags.strings(&item.source) else {
        return false;
    };
    tags.iter()
        .filter_map(|raw| normalize(raw))
        .any(|name| slugify(&name) == slug)
}

fn newest_first(a: &ContentItem, b: &ContentItem) -> Ordering {
    match (a.date, b.date) {
        (Some(x), Some(y)) => y.cmp(&x).then_with(|| a.slug.cmp(&b.slug)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.slug.cmp(&b.slug),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::StaticCorpus;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_items_for_slug() {
        let corpus = StaticCorpus::new().with_category(
            "blog",
            vec![
                ContentItem::new("old").with_tags(["Machine Learning"]).with_date(day(1)),
                ContentItem::new("new").with_tags(["machine  learning"]).with_date(day(9)),
                ContentItem::new("undated").with_tags(["machine learning"]),
                ContentItem::new("other").with_tags(["go"]).with_date(day(5)),
                ContentItem::new("hidden")
                    .with_tags(["machine learning"])
                    .with_date(day(7))
                    .as_draft(),
            ],
        );

        let slugs: Vec<_> = items_for_slug(&corpus, "blog", "machine-learning")
            .unwrap()
            .into_iter()
            .map(|i| i.slug)
            .collect();
        assert_eq!(slugs, vec!["new", "old", "undated"]);
    }

    #[test]
    fn test_unknown_slug_is_empty() {
        let corpus = StaticCorpus::new()
            .with_category("blog", vec![ContentItem::new("a").with_tags(["go"])]);
        assert!(items_for_slug(&corpus, "blog", "rust").unwrap().is_empty());
    }

    #[test]
    fn test_accessor_failure_propagates() {
        let corpus = StaticCorpus::new();
        assert!(items_for_slug(&corpus, "blog", "go").is_err());
    }
}
