//! Built-in demo snippets for first runs and tests.

use crate::models::Snippet;
use crate::store::SnippetStore;

pub struct DemoSnippet {
    pub title: &'static str,
    pub language: &'static str,
    pub code: &'static str,
}

pub const DEMO_SNIPPETS: &[DemoSnippet] = &[
    DemoSnippet {
        title: "Python: HTTP Server",
        language: "python",
        code: "python -m http.server 8000\n# Serves the current directory on port 8000",
    },
    DemoSnippet {
        title: "Git: Undo Last Commit",
        language: "bash",
        code: "git reset --soft HEAD~1\n# Undoes the commit but keeps your changes staged",
    },
    DemoSnippet {
        title: "Docker: Remove All Containers",
        language: "bash",
        code: "docker rm $(docker ps -a -q)\n# Force remove all stopped containers",
    },
    DemoSnippet {
        title: "JS: Console Table",
        language: "javascript",
        code: "console.table(data);\n// Displays array of objects as a neat table",
    },
    DemoSnippet {
        title: "SQL: Select Unique",
        language: "sql",
        code: "SELECT DISTINCT column_name FROM table_name;",
    },
];

/// A store holding the demo snippets, in the order above.
pub fn demo_store() -> SnippetStore {
    SnippetStore::from_snippets(
        DEMO_SNIPPETS
            .iter()
            .map(|d| Snippet::new(d.title, d.language, d.code)),
    )
}
