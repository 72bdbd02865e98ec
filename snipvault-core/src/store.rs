//! SnippetStore - the authoritative snippet collection for a session.
//!
//! Built once at startup from an external source and read-only afterwards.
//! Insertion order is preserved and is the default display order.

use indexmap::IndexMap;

use crate::models::Snippet;

/// Insertion-ordered mapping from title to [`Snippet`].
///
/// Titles are unique within one store; inserting a snippet under an existing
/// title replaces the body but keeps the original position. Empty titles are
/// rejected at construction.
#[derive(Debug, Clone, Default)]
pub struct SnippetStore {
    snippets: IndexMap<String, Snippet>,
}

impl SnippetStore {
    /// Build a store from snippets in display order.
    ///
    /// Snippets with an empty title are dropped with a warning; the title is
    /// the entry's identity and an empty one can neither be listed nor
    /// chosen.
    pub fn from_snippets(snippets: impl IntoIterator<Item = Snippet>) -> Self {
        let mut map = IndexMap::new();
        for snippet in snippets {
            if snippet.title.is_empty() {
                tracing::warn!("dropping snippet with empty title");
                continue;
            }
            map.insert(snippet.title.clone(), snippet);
        }
        Self { snippets: map }
    }

    /// Look up a snippet by title.
    pub fn get(&self, title: &str) -> Option<&Snippet> {
        self.snippets.get(title)
    }

    /// All titles in insertion order.
    pub fn titles_in_order(&self) -> impl Iterator<Item = &str> {
        self.snippets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}
