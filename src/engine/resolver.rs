//! Fuzzy resolution of free-text item queries against owned items.

use crate::domain::OwnedItem;

/// Canonical form used for matching: lowercase, `[a-z0-9]` only.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Resolve `query` against `items` in three precedence tiers:
/// exact, prefix, then substring match on the normalized names.
///
/// Within a tier the first item in list order wins; callers control that
/// order (the stores return grant order). Returns `None` when every tier
/// comes up empty.
pub fn resolve<'a>(query: &str, items: &'a [OwnedItem]) -> Option<&'a OwnedItem> {
    let needle = normalize(query);
    if needle.is_empty() {
        return None;
    }

    items
        .iter()
        .find(|item| normalize(item.name()) == needle)
        .or_else(|| {
            items
                .iter()
                .find(|item| normalize(item.name()).starts_with(&needle))
        })
        .or_else(|| {
            items
                .iter()
                .find(|item| normalize(item.name()).contains(&needle))
        })
}
