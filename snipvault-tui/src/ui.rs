//! Widget layout and rendering.
//!
//! Layout follows the prototype this tool grew out of: search bar on top,
//! snippet list in a left sidebar (~30%), highlighted preview on the right,
//! key hints in a one-line footer that doubles as the notice area.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use snipvault_core::{highlight_ranges, ClipboardWrite, Severity};

use crate::app::App;

const ACCENT: Color = Color::Green;
const MATCH_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

pub fn render<C: ClipboardWrite>(frame: &mut Frame, app: &App<C>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_search(frame, app, rows[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[1]);

    render_list(frame, app, panes[0]);
    render_preview(frame, app, panes[1]);
    render_footer(frame, app, rows[2]);
}

fn render_search<C: ClipboardWrite>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let search = Paragraph::new(app.session().query())
        .block(Block::default().borders(Borders::ALL).title(" Search "));
    frame.render_widget(search, area);
}

fn render_list<C: ClipboardWrite>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let session = app.session();
    let active = session.selection().active_title();

    let items: Vec<ListItem> = session
        .visible()
        .iter()
        .map(|title| {
            let is_active = active == Some(title.as_str());
            ListItem::new(title_line(title, session.query(), is_active))
        })
        .collect();

    let title = format!(" Snippets {}/{} ", session.visible().len(), session.store().len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !session.visible().is_empty() {
        state.select(Some(app.cursor()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// A list row with the query match emphasised and the active row accented.
fn title_line(title: &str, query: &str, is_active: bool) -> Line<'static> {
    let base = if is_active {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };

    let ranges = highlight_ranges(title, query);
    if ranges.is_empty() {
        return Line::from(Span::styled(title.to_owned(), base));
    }

    let mut spans = Vec::new();
    let mut pos = 0;
    for (start, len) in ranges {
        if start < pos {
            continue; // overlapping occurrence, already covered
        }
        if start > pos {
            spans.push(Span::styled(title[pos..start].to_owned(), base));
        }
        spans.push(Span::styled(
            title[start..start + len].to_owned(),
            MATCH_STYLE,
        ));
        pos = start + len;
    }
    if pos < title.len() {
        spans.push(Span::styled(title[pos..].to_owned(), base));
    }
    Line::from(spans)
}

fn render_preview<C: ClipboardWrite>(frame: &mut Frame, app: &App<C>, area: Rect) {
    match app.preview() {
        Some(preview) => {
            let active = app.session().selection().active_title().unwrap_or_default();
            let title = format!(" {} [{}] ", active, preview.language);
            let block = Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(ACCENT));
            let body = Paragraph::new(numbered_lines(&preview.lines))
                .wrap(Wrap { trim: false })
                .block(block);
            frame.render_widget(body, area);
        }
        None => {
            let block = Block::default().borders(Borders::ALL).title(" Preview ");
            let hint = Paragraph::new("Select a snippet from the left to view code...")
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(hint, area);
        }
    }
}

/// Prefix each code line with a right-aligned line-number gutter.
fn numbered_lines(lines: &[Line<'static>]) -> Vec<Line<'static>> {
    let width = lines.len().to_string().len();
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let mut spans = vec![Span::styled(
                format!("{:>width$} │ ", i + 1),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(line.spans.iter().cloned());
            Line::from(spans)
        })
        .collect()
}

fn render_footer<C: ClipboardWrite>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let line = match app.status() {
        Some(status) => {
            let color = match status.notice.severity {
                Severity::Info => ACCENT,
                Severity::Error => Color::Red,
            };
            Line::from(Span::styled(
                status.notice.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => Line::from(Span::styled(
            "↑/↓ move   Enter select   Ctrl+Y copy   Ctrl+U clear   Esc quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
