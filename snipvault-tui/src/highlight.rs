//! Syntax highlighting for the preview pane.
//!
//! Maps a snippet's language tag onto syntect's default syntax set and
//! converts the highlighted regions into ratatui lines. Unrecognized tags
//! degrade to plain text.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

const THEME: &str = "base16-ocean.dark";

pub struct SyntaxHighlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults();
        let theme = themes.themes.remove(THEME).unwrap_or_default();
        Self { syntaxes, theme }
    }

    /// Highlight `code` for the grammar named by `language` (a short token
    /// like "bash" or "javascript", or a file extension).
    pub fn highlight(&self, code: &str, language: &str) -> Vec<Line<'static>> {
        let Some(syntax) = self.syntaxes.find_syntax_by_token(language) else {
            return plain_lines(code);
        };

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut lines = Vec::new();
        for raw_line in LinesWithEndings::from(code) {
            match highlighter.highlight_line(raw_line, &self.syntaxes) {
                Ok(regions) => {
                    let spans: Vec<Span<'static>> = regions
                        .into_iter()
                        .map(|(style, text)| {
                            let fg = style.foreground;
                            Span::styled(
                                text.trim_end_matches('\n').to_owned(),
                                Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)),
                            )
                        })
                        .collect();
                    lines.push(Line::from(spans));
                }
                Err(err) => {
                    tracing::debug!(%err, language, "highlight failed, falling back to plain");
                    lines.push(Line::from(raw_line.trim_end_matches('\n').to_owned()));
                }
            }
        }
        lines
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

fn plain_lines(code: &str) -> Vec<Line<'static>> {
    code.lines().map(|line| Line::from(line.to_owned())).collect()
}
