//! List tags, tagged items and the work stack

use anyhow::Result;
use std::io::Write;

use crate::config::WORK_STACK;
use crate::content::ContentAccessor;
use crate::tags;

/// Print the tag index of `category`, most used first
pub fn tags<A, W>(accessor: &A, category: &str, json: bool, out: &mut W) -> Result<()>
where
    A: ContentAccessor + ?Sized,
    W: Write,
{
    let sorted = tags::aggregate(accessor, category)?.sorted_descending();

    if json {
        serde_json::to_writer_pretty(&mut *out, &sorted)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Tags ({}):", sorted.len())?;
    for tag in sorted {
        writeln!(out, "  {} ({})", tag.name, tag.count)?;
    }
    Ok(())
}

/// Print the items of `category` carrying the tag with `slug`
pub fn tag<A, W>(accessor: &A, category: &str, slug: &str, out: &mut W) -> Result<()>
where
    A: ContentAccessor + ?Sized,
    W: Write,
{
    let items = tags::items_for_slug(accessor, category, slug)?;

    writeln!(out, "Items tagged '{}' ({}):", slug, items.len())?;
    for item in items {
        let date = item
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "----------".to_string());
        writeln!(out, "  {} - {} [{}]", date, item.title, item.slug)?;
    }
    Ok(())
}

/// Print the work stack with brand colors
pub fn stack<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Stack ({}):", WORK_STACK.len())?;
    for entry in WORK_STACK {
        let info = entry.info();
        writeln!(out, "  {} {}", info.color, info.value)?;
    }
    Ok(())
}
