//! SnipVault Core - session engine for the snippet browser
//!
//! This library implements the interactive session behind the SnipVault
//! terminal frontend: an immutable store of titled code snippets, a
//! deterministic substring filter over the titles, a selection state machine
//! that keeps the rendered preview consistent with the filter, and the
//! copy-to-clipboard action.
//!
//! # Architecture
//! - `models`: Data models (Snippet, Notice)
//! - `loader`: Snippet file decoding with degrade-to-empty semantics
//! - `store`: Insertion-ordered, read-only-after-load snippet store
//! - `filter`: Case-insensitive substring filter over titles
//! - `selection`: Empty/Active selection state machine
//! - `clipboard`: Clipboard boundary trait and the copy action
//! - `session`: Input event dispatch for frontends

pub mod clipboard;
pub mod demo_data;
pub mod filter;
pub mod loader;
pub mod models;
pub mod selection;
pub mod session;
pub mod store;

pub use clipboard::{copy_selection, ClipboardError, ClipboardWrite, CopyOutcome, MemoryClipboard};
pub use filter::filter;
pub use loader::{load_or_empty, LoadError};
pub use models::{Notice, Severity, Snippet};
pub use selection::{InvalidSelection, SelectionState};
pub use session::{InputEvent, Session, Update};
pub use store::SnippetStore;

/// Byte ranges of case-insensitive occurrences of `query` in `text`.
/// Returns `(start, len)` pairs, sorted by position, used by frontends to
/// emphasise the matched part of listed titles.
///
/// Matching walks `text` char by char, so every range starts and ends on a
/// char boundary of `text` and always covers whole characters; callers can
/// slice `text` with the ranges directly.
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();

    let mut ranges = Vec::new();
    for (start, _) in text.char_indices() {
        if ranges.len() >= 100 {
            break;
        }
        if let Some(len) = match_len_at(&text[start..], &query_lower) {
            ranges.push((start, len));
        }
    }
    ranges
}

/// Bytes of `tail` covered by a case-insensitive match of `query_lower` at
/// its start, or `None`. A match must consume whole characters of `tail`:
/// when the query ends inside one char's lowercase expansion (e.g. query
/// "i" against 'İ', which lowercases to "i\u{307}") there is no boundary to
/// cut at, so it does not count.
fn match_len_at(tail: &str, query_lower: &str) -> Option<usize> {
    let mut query_chars = query_lower.chars();
    let mut expected = query_chars.next();
    let mut consumed = 0;

    for ch in tail.chars() {
        if expected.is_none() {
            break;
        }
        for lowered in ch.to_lowercase() {
            match expected {
                Some(q) if q == lowered => expected = query_chars.next(),
                _ => return None,
            }
        }
        consumed += ch.len_utf8();
    }

    if expected.is_none() {
        Some(consumed)
    } else {
        None
    }
}
