//! snipvault - browse, preview and copy code snippets from the terminal.

mod app;
mod clipboard;
mod highlight;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use snipvault_core::{demo_data, load_or_empty, Session, SnippetStore};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::clipboard::SystemClipboard;

#[derive(Parser)]
#[command(name = "snipvault", version, about = "Terminal snippet browser")]
struct Args {
    /// Snippet file: a JSON object mapping title to {language, code}
    #[arg(long, value_name = "PATH")]
    snippets: Option<PathBuf>,
    /// Browse the built-in demo snippets instead of a snippet file
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let store = load_store(&args);
    let session = Session::new(store);

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(session, SystemClipboard::new());
    let run_result = app.run(&mut terminal);

    // Always restore the terminal, even when the loop errored.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

fn load_store(args: &Args) -> SnippetStore {
    if args.demo {
        return demo_data::demo_store();
    }
    let path = args
        .snippets
        .clone()
        .unwrap_or_else(default_snippet_path);
    load_or_empty(&path)
}

/// `$XDG_CONFIG_HOME/snipvault/snippets.json`, falling back to the working
/// directory when no config dir exists.
fn default_snippet_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("snipvault").join("snippets.json"))
        .unwrap_or_else(|| PathBuf::from("snippets.json"))
}

/// Log to a file when `RUST_LOG` is set; stderr would corrupt the alternate
/// screen, and most runs don't need a log at all.
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let dir = dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("snipvault");
    fs::create_dir_all(&dir)?;
    let file = fs::File::create(dir.join("snipvault.log"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
