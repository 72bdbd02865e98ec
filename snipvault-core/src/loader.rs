//! Snippet source boundary.
//!
//! The on-disk format is a JSON object mapping title to `{language, code}`:
//!
//! ```json
//! {
//!     "Git: Undo Last Commit": {
//!         "language": "bash",
//!         "code": "git reset --soft HEAD~1"
//!     }
//! }
//! ```
//!
//! Key order in the file is the display order. A missing or malformed file
//! degrades to an empty store; the session must still start and show "no
//! snippets" rather than abort.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Snippet;
use crate::store::SnippetStore;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read snippet file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse snippet file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Body of a snippet file entry; the title is the map key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetBody {
    pub language: String,
    pub code: String,
}

/// Read and decode a snippet file into a store.
pub fn read_snippet_file(path: &Path) -> Result<SnippetStore, LoadError> {
    let raw = fs::read_to_string(path)?;
    let entries: IndexMap<String, SnippetBody> = serde_json::from_str(&raw)?;
    Ok(SnippetStore::from_snippets(entries.into_iter().map(
        |(title, body)| Snippet {
            title,
            language: body.language,
            code: body.code,
        },
    )))
}

/// Load a snippet file, degrading any failure to an empty store.
pub fn load_or_empty(path: &Path) -> SnippetStore {
    match read_snippet_file(path) {
        Ok(store) => {
            tracing::info!(path = %path.display(), count = store.len(), "loaded snippets");
            store
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "starting with empty snippet store");
            SnippetStore::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_entries_in_file_order() {
        let file = write_temp(
            r#"{
                "Python: HTTP Server": {"language": "python", "code": "python -m http.server 8000"},
                "Git: Undo Last Commit": {"language": "bash", "code": "git reset --soft HEAD~1"}
            }"#,
        );
        let store = read_snippet_file(file.path()).unwrap();
        let titles: Vec<&str> = store.titles_in_order().collect();
        assert_eq!(titles, vec!["Python: HTTP Server", "Git: Undo Last Commit"]);
        assert_eq!(
            store.get("Git: Undo Last Commit").unwrap().code,
            "git reset --soft HEAD~1"
        );
    }

    #[test]
    fn missing_file_degrades_to_empty_store() {
        let store = load_or_empty(Path::new("/nonexistent/snippets.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_file_degrades_to_empty_store() {
        let file = write_temp("{ not json");
        let store = load_or_empty(file.path());
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_file_error_is_parse() {
        let file = write_temp("[1, 2, 3]");
        let err = read_snippet_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
