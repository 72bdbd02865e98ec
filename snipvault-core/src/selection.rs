//! Selection state machine.
//!
//! Two states: `Empty` (no active title) and `Active(title)`. A title can
//! only become active while it is present in the latest filter result, and
//! the selection is invalidated as soon as a filter change hides it. The
//! displayed code/language pair always agrees with the active title, so the
//! preview and the copy action can never see stale content.

use thiserror::Error;

use crate::store::SnippetStore;

/// Attempt to activate a title that is not in the current filter result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("snippet {0:?} is not in the current filter result")]
pub struct InvalidSelection(pub String);

/// The single currently-active snippet, if any, plus the content rendered
/// for it. Empty strings are the sentinels for the `Empty` state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    active_title: Option<String>,
    displayed_code: String,
    displayed_language: String,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_title(&self) -> Option<&str> {
        self.active_title.as_deref()
    }

    pub fn displayed_code(&self) -> &str {
        &self.displayed_code
    }

    pub fn displayed_language(&self) -> &str {
        &self.displayed_language
    }

    /// Whether the machine is in the `Empty` state.
    pub fn is_empty(&self) -> bool {
        self.active_title.is_none()
    }

    /// Activate `title`, if it is present in `visible`.
    ///
    /// On success the displayed code/language are set from the store record.
    /// Choosing the already-active title succeeds and re-sets the same
    /// content. A title outside the current filter result is rejected and
    /// the state is left untouched.
    pub fn choose(
        &mut self,
        title: &str,
        visible: &[String],
        store: &SnippetStore,
    ) -> Result<(), InvalidSelection> {
        if !visible.iter().any(|t| t == title) {
            return Err(InvalidSelection(title.to_owned()));
        }
        // Visible titles are derived from the store, so the lookup only
        // fails if the caller passed a result list from a different store.
        let snippet = store
            .get(title)
            .ok_or_else(|| InvalidSelection(title.to_owned()))?;

        self.active_title = Some(snippet.title.clone());
        self.displayed_code = snippet.code.clone();
        self.displayed_language = snippet.language.clone();
        Ok(())
    }

    /// React to a new filter result. If the active title is no longer
    /// visible the selection is cleared; returns `true` in that case.
    pub fn filter_changed(&mut self, visible: &[String]) -> bool {
        match &self.active_title {
            Some(active) if !visible.iter().any(|t| t == active) => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    fn clear(&mut self) {
        self.active_title = None;
        self.displayed_code.clear();
        self.displayed_language.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Snippet;

    fn store() -> SnippetStore {
        SnippetStore::from_snippets([
            Snippet::new("Git: Undo", "bash", "git reset --soft HEAD~1"),
            Snippet::new("JS: Console", "javascript", "console.table(data);"),
        ])
    }

    fn visible(titles: &[&str]) -> Vec<String> {
        titles.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn starts_empty_with_sentinel_content() {
        let state = SelectionState::new();
        assert!(state.is_empty());
        assert_eq!(state.displayed_code(), "");
        assert_eq!(state.displayed_language(), "");
    }

    #[test]
    fn choose_visible_title_activates_and_sets_content() {
        let store = store();
        let mut state = SelectionState::new();
        state
            .choose("Git: Undo", &visible(&["Git: Undo", "JS: Console"]), &store)
            .unwrap();
        assert_eq!(state.active_title(), Some("Git: Undo"));
        assert_eq!(state.displayed_code(), "git reset --soft HEAD~1");
        assert_eq!(state.displayed_language(), "bash");
    }

    #[test]
    fn choose_hidden_title_is_rejected_and_state_unchanged() {
        let store = store();
        let mut state = SelectionState::new();
        let err = state
            .choose("JS: Console", &visible(&["Git: Undo"]), &store)
            .unwrap_err();
        assert_eq!(err, InvalidSelection("JS: Console".into()));
        assert!(state.is_empty());
    }

    #[test]
    fn choose_replaces_previous_active_title() {
        let store = store();
        let all = visible(&["Git: Undo", "JS: Console"]);
        let mut state = SelectionState::new();
        state.choose("Git: Undo", &all, &store).unwrap();
        state.choose("JS: Console", &all, &store).unwrap();
        assert_eq!(state.active_title(), Some("JS: Console"));
        assert_eq!(state.displayed_language(), "javascript");
    }

    #[test]
    fn rechoosing_active_title_is_a_noop_rerender() {
        let store = store();
        let all = visible(&["Git: Undo", "JS: Console"]);
        let mut state = SelectionState::new();
        state.choose("Git: Undo", &all, &store).unwrap();
        let before = state.clone();
        state.choose("Git: Undo", &all, &store).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn filter_change_hiding_active_title_clears_selection() {
        let store = store();
        let mut state = SelectionState::new();
        state
            .choose("Git: Undo", &visible(&["Git: Undo"]), &store)
            .unwrap();
        assert!(state.filter_changed(&visible(&["JS: Console"])));
        assert!(state.is_empty());
        assert_eq!(state.displayed_code(), "");
        assert_eq!(state.displayed_language(), "");
    }

    #[test]
    fn filter_change_keeping_active_title_preserves_selection() {
        let store = store();
        let mut state = SelectionState::new();
        state
            .choose("Git: Undo", &visible(&["Git: Undo", "JS: Console"]), &store)
            .unwrap();
        assert!(!state.filter_changed(&visible(&["Git: Undo"])));
        assert_eq!(state.active_title(), Some("Git: Undo"));
    }

    #[test]
    fn filter_change_while_empty_stays_empty() {
        let mut state = SelectionState::new();
        assert!(!state.filter_changed(&visible(&["Git: Undo"])));
        assert!(state.is_empty());
    }
}
