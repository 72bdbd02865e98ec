//! Clipboard boundary and the copy action.
//!
//! The core never talks to the OS clipboard directly; frontends supply a
//! [`ClipboardWrite`] implementation. The copy action makes exactly one
//! write attempt per invocation and never retries: clipboard failures are
//! environment issues (no display server, no clipboard utility) that a
//! retry would only mask.

use thiserror::Error;

use crate::selection::SelectionState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Outbound capability: `writeClipboard(text) -> ok|err`.
pub trait ClipboardWrite {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Outcome of a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The selection's code is now on the clipboard.
    Copied,
    /// Nothing is selected; no clipboard call was made.
    NothingSelected,
    /// The clipboard write failed; the session continues.
    Failed(ClipboardError),
}

/// Copy the current selection's code to the clipboard.
pub fn copy_selection(
    selection: &SelectionState,
    clipboard: &mut dyn ClipboardWrite,
) -> CopyOutcome {
    if selection.is_empty() {
        return CopyOutcome::NothingSelected;
    }
    match clipboard.write(selection.displayed_code()) {
        Ok(()) => CopyOutcome::Copied,
        Err(err) => CopyOutcome::Failed(err),
    }
}

/// In-memory [`ClipboardWrite`] implementation for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Vec<String>,
    fail_with: Option<ClipboardError>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `err`.
    pub fn failing(err: ClipboardError) -> Self {
        Self {
            writes: Vec::new(),
            fail_with: Some(err),
        }
    }

    /// Every text handed to `write`, oldest first.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// The most recent successful write, i.e. the clipboard content.
    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl ClipboardWrite for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.writes.push(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Snippet;
    use crate::store::SnippetStore;

    fn active_selection() -> SelectionState {
        let store = SnippetStore::from_snippets([Snippet::new(
            "Git: Undo",
            "bash",
            "git reset --soft HEAD~1",
        )]);
        let visible = vec!["Git: Undo".to_string()];
        let mut state = SelectionState::new();
        state.choose("Git: Undo", &visible, &store).unwrap();
        state
    }

    #[test]
    fn copy_with_empty_selection_skips_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        let outcome = copy_selection(&SelectionState::new(), &mut clipboard);
        assert_eq!(outcome, CopyOutcome::NothingSelected);
        assert!(clipboard.writes().is_empty());
    }

    #[test]
    fn copy_with_active_selection_writes_code_once() {
        let mut clipboard = MemoryClipboard::new();
        let selection = active_selection();
        let outcome = copy_selection(&selection, &mut clipboard);
        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(clipboard.writes(), ["git reset --soft HEAD~1"]);
    }

    #[test]
    fn repeated_copies_overwrite_with_same_content() {
        let mut clipboard = MemoryClipboard::new();
        let selection = active_selection();
        copy_selection(&selection, &mut clipboard);
        copy_selection(&selection, &mut clipboard);
        assert_eq!(clipboard.writes().len(), 2);
        assert_eq!(clipboard.contents(), Some("git reset --soft HEAD~1"));
    }

    #[test]
    fn write_failure_is_reported_not_retried() {
        let err = ClipboardError::Unavailable("no display server".into());
        let mut clipboard = MemoryClipboard::failing(err.clone());
        let outcome = copy_selection(&active_selection(), &mut clipboard);
        assert_eq!(outcome, CopyOutcome::Failed(err));
        assert!(clipboard.writes().is_empty());
    }
}
