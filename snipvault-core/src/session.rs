//! Session dispatch - the single entry point for frontends.
//!
//! A session reacts to a strictly serialized stream of input events. Every
//! event is handled synchronously and completely before the next one, so
//! the filter result, the selection and the rendered preview always agree.
//! Frontends translate raw keystrokes into [`InputEvent`]s and apply the
//! returned [`Update`]s to their widgets.

use crate::clipboard::{copy_selection, ClipboardWrite, CopyOutcome};
use crate::filter::filter;
use crate::models::Notice;
use crate::selection::SelectionState;
use crate::store::SnippetStore;

/// The closed set of input events a session consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The search query was edited to this text.
    QueryChanged(String),
    /// A listed title was chosen (click or Enter).
    ItemChosen(String),
    /// The copy key was pressed.
    CopyRequested,
}

/// Render-boundary outputs emitted in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// The ordered list of titles to display changed.
    List(Vec<String>),
    /// Render this code with language-aware colouring.
    Preview { language: String, code: String },
    /// Nothing is selected; show the placeholder.
    ClearPreview,
    /// Show a transient user-facing notice.
    Notify(Notice),
}

/// One interactive browsing session over a loaded snippet store.
///
/// The store is read-only for the session's lifetime; the selection is the
/// only mutable state and is mutated exclusively through [`Session::handle`].
#[derive(Debug)]
pub struct Session {
    store: SnippetStore,
    query: String,
    visible: Vec<String>,
    selection: SelectionState,
}

impl Session {
    /// Start a session showing every snippet and nothing selected.
    pub fn new(store: SnippetStore) -> Self {
        let visible = filter(&store, "");
        Self {
            store,
            query: String::new(),
            visible,
            selection: SelectionState::new(),
        }
    }

    pub fn store(&self) -> &SnippetStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The latest filter result, in store order.
    pub fn visible(&self) -> &[String] {
        &self.visible
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Dispatch one input event.
    ///
    /// `clipboard` is only touched for [`InputEvent::CopyRequested`], and
    /// then for exactly one write attempt.
    pub fn handle(&mut self, event: InputEvent, clipboard: &mut dyn ClipboardWrite) -> Vec<Update> {
        match event {
            InputEvent::QueryChanged(query) => {
                self.query = query;
                self.visible = filter(&self.store, &self.query);
                let mut updates = vec![Update::List(self.visible.clone())];
                if self.selection.filter_changed(&self.visible) {
                    updates.push(Update::ClearPreview);
                }
                updates
            }
            InputEvent::ItemChosen(title) => {
                match self.selection.choose(&title, &self.visible, &self.store) {
                    Ok(()) => vec![Update::Preview {
                        language: self.selection.displayed_language().to_owned(),
                        code: self.selection.displayed_code().to_owned(),
                    }],
                    Err(err) => {
                        // Not user-visible: the frontend offered a title the
                        // filter no longer shows. Log and carry on.
                        tracing::debug!(%err, "ignoring selection of hidden title");
                        Vec::new()
                    }
                }
            }
            InputEvent::CopyRequested => {
                let notice = match copy_selection(&self.selection, clipboard) {
                    CopyOutcome::Copied => Notice::info("Copied to clipboard"),
                    CopyOutcome::NothingSelected => Notice::info("No snippet selected"),
                    CopyOutcome::Failed(err) => Notice::error(format!("Copy failed: {err}")),
                };
                vec![Update::Notify(notice)]
            }
        }
    }
}
