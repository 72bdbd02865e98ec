//! Deterministic substring filter over snippet titles.
//!
//! No ranking or scoring: a title matches iff the lower-cased query is a
//! contiguous substring of the lower-cased title, and results preserve the
//! store's insertion order. Pure function of (store, query).

use crate::store::SnippetStore;

/// Titles to display for `query`, in the store's insertion order.
///
/// An empty query is the identity operation and returns every title.
pub fn filter(store: &SnippetStore, query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    store
        .titles_in_order()
        .filter(|title| title.to_lowercase().contains(&needle))
        .map(str::to_owned)
        .collect()
}
