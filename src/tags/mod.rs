//! Tag normalization, aggregation and lookup
//!
//! Tags are compared in their canonical form: trimmed, inner whitespace
//! collapsed to single spaces, and lowercased. The aggregate counts one
//! occurrence per (item, tag) pair over the items eligible for public
//! listing; drafts and unpublished items never contribute.

mod index;
mod listing;
mod normalize;

pub use index::{aggregate, TagCount, TagIndex};
pub use listing::items_for_slug;
pub use normalize::{normalize, slugify};
