//! TUI application state and event loop.
//!
//! `App` wraps the core [`Session`] with the bits only a terminal needs:
//! the list cursor, the rendered preview lines, a transient status message
//! and quit handling. Keystrokes are translated into the core's input
//! events; the resulting updates are folded back into UI state.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::text::Line;
use ratatui::Terminal;
use snipvault_core::{ClipboardWrite, InputEvent, Notice, Session, Severity, Update};

use crate::highlight::SyntaxHighlighter;
use crate::ui;

const STATUS_INFO_DURATION: Duration = Duration::from_secs(3);
const STATUS_ERROR_DURATION: Duration = Duration::from_secs(5);
const POLL_INTERVAL: Duration = Duration::from_millis(150);

/// Transient status message with expiry.
pub struct StatusMessage {
    pub notice: Notice,
    expires_at: Instant,
}

/// Highlighted preview content for the active snippet.
pub struct Preview {
    pub language: String,
    pub lines: Vec<Line<'static>>,
}

pub struct App<C: ClipboardWrite> {
    session: Session,
    clipboard: C,
    highlighter: SyntaxHighlighter,
    cursor: usize,
    preview: Option<Preview>,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl<C: ClipboardWrite> App<C> {
    pub fn new(session: Session, clipboard: C) -> Self {
        Self {
            session,
            clipboard,
            highlighter: SyntaxHighlighter::new(),
            cursor: 0,
            preview: None,
            status: None,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Drive the terminal until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.expire_status();
            terminal.draw(|frame| ui::render(frame, self))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('y') if ctrl => self.dispatch(InputEvent::CopyRequested),
            KeyCode::Char('u') if ctrl => self.dispatch(InputEvent::QueryChanged(String::new())),
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                let last = self.session.visible().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last);
            }
            KeyCode::Enter => {
                if let Some(title) = self.session.visible().get(self.cursor).cloned() {
                    self.dispatch(InputEvent::ItemChosen(title));
                }
            }
            KeyCode::Backspace => {
                let mut query = self.session.query().to_owned();
                if query.pop().is_some() {
                    self.dispatch(InputEvent::QueryChanged(query));
                }
            }
            KeyCode::Char(c) if !ctrl => {
                let mut query = self.session.query().to_owned();
                query.push(c);
                self.dispatch(InputEvent::QueryChanged(query));
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, event: InputEvent) {
        let updates = self.session.handle(event, &mut self.clipboard);
        self.apply(updates);
    }

    fn apply(&mut self, updates: Vec<Update>) {
        for update in updates {
            match update {
                Update::List(titles) => {
                    self.cursor = if titles.is_empty() {
                        0
                    } else {
                        self.cursor.min(titles.len() - 1)
                    };
                }
                Update::Preview { language, code } => {
                    let lines = self.highlighter.highlight(&code, &language);
                    self.preview = Some(Preview { language, lines });
                }
                Update::ClearPreview => self.preview = None,
                Update::Notify(notice) => self.set_status(notice),
            }
        }
    }

    fn set_status(&mut self, notice: Notice) {
        let duration = match notice.severity {
            Severity::Info => STATUS_INFO_DURATION,
            Severity::Error => STATUS_ERROR_DURATION,
        };
        self.status = Some(StatusMessage {
            notice,
            expires_at: Instant::now() + duration,
        });
    }

    fn expire_status(&mut self) {
        if let Some(status) = &self.status {
            if Instant::now() >= status.expires_at {
                self.status = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipvault_core::{demo_data, MemoryClipboard};

    fn app() -> App<MemoryClipboard> {
        App::new(
            Session::new(demo_data::demo_store()),
            MemoryClipboard::new(),
        )
    }

    fn press(app: &mut App<MemoryClipboard>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn press_ctrl(app: &mut App<MemoryClipboard>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn typing_edits_the_query_and_narrows_the_list() {
        let mut app = app();
        for c in "git".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.session().query(), "git");
        assert_eq!(app.session().visible(), ["Git: Undo Last Commit"]);
    }

    #[test]
    fn backspace_widens_the_list_again() {
        let mut app = app();
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Char('z'));
        assert!(app.session().visible().is_empty());
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session().visible().len(), 5);
    }

    #[test]
    fn enter_chooses_the_title_under_the_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.session().selection().active_title(),
            Some("Git: Undo Last Commit")
        );
        assert!(app.preview().is_some());
    }

    #[test]
    fn cursor_is_clamped_when_the_list_shrinks() {
        let mut app = app();
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor(), 4);
        press(&mut app, KeyCode::Char('s'));
        assert!(app.cursor() < app.session().visible().len());
    }

    #[test]
    fn ctrl_y_copies_the_active_snippet() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press_ctrl(&mut app, 'y');
        assert_eq!(
            app.clipboard.contents(),
            Some("python -m http.server 8000\n# Serves the current directory on port 8000")
        );
        let status = app.status().unwrap();
        assert_eq!(status.notice.severity, Severity::Info);
    }

    #[test]
    fn narrowing_away_the_selection_clears_the_preview() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.preview().is_some());
        for c in "sql".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(app.preview().is_none());
    }

    #[test]
    fn esc_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
