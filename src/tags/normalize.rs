//! Canonical tag names and URL slugs

/// Canonical form of a raw tag, `None` when nothing but whitespace remains
pub fn normalize(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.to_lowercase())
    }
}

/// URL-safe slug for a canonical tag name
///
/// Lowercase ASCII letters and digits separated by single hyphens, with no
/// leading or trailing hyphen. Empty input gives an empty slug.
pub fn slugify(name: &str) -> String {
    slug::slugify(name)
}
